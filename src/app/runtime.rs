use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::{
    form::{ControlEvent, HostForm, Snapshot, SubmitOutcome},
    presentation::{self, UiContext},
};

use super::{
    input::{HELP_TEXT, KeyCommand, classify},
    options::UiOptions,
    status::StatusLine,
    terminal::TerminalGuard,
};

pub(crate) struct App {
    form: HostForm,
    options: UiOptions,
    status: StatusLine,
    exit_armed: bool,
    should_quit: bool,
}

impl App {
    pub fn new(form: HostForm, options: UiOptions) -> Self {
        Self {
            form,
            options,
            status: StatusLine::new(),
            exit_armed: false,
            should_quit: false,
        }
    }

    /// Runs until the user quits; yields the last submitted snapshot.
    pub fn run(&mut self) -> Result<Snapshot> {
        let mut terminal = TerminalGuard::enter()?;
        while !self.should_quit {
            terminal.render(|frame| self.draw(frame))?;
            if !event::poll(self.options.tick_rate)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) => self.handle_key(key),
                Event::Resize(width, height) => terminal.resize(width, height)?,
                Event::Mouse(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_) => {}
            }
        }

        self.form
            .last_submitted()
            .cloned()
            .ok_or_else(|| anyhow!("user exited without submitting"))
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        presentation::draw(
            frame,
            UiContext {
                form: &self.form,
                status_message: self.status.message(),
                dirty: self.form.is_dirty(),
                error_count: self.form.error_count(),
                help: self.options.show_help.then_some(HELP_TEXT),
                show_snapshot: self.options.show_snapshot,
            },
        );
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match classify(&key) {
            KeyCommand::Submit => {
                self.exit_armed = false;
                self.on_submit();
            }
            KeyCommand::Quit => self.on_exit(),
            KeyCommand::Reset => {
                self.exit_armed = false;
                self.form.reset();
                self.status.form_reset();
            }
            KeyCommand::ToggleDisabled => self.toggle_disabled(),
            KeyCommand::NextField => self.form.focus_next(),
            KeyCommand::PrevField => self.form.focus_prev(),
            KeyCommand::ResetStatus => {
                self.exit_armed = false;
                self.status.ready();
            }
            KeyCommand::Edit(event) => self.handle_field_input(&event),
            KeyCommand::None => {}
        }
    }

    fn handle_field_input(&mut self, key: &KeyEvent) {
        let event = self.form.handle_key(key);
        let Some(field) = self.form.focused() else {
            return;
        };
        match event {
            ControlEvent::Edited => {
                self.exit_armed = false;
                let matches = field.control().filtered().count();
                self.status.filtering(field.label(), matches);
            }
            ControlEvent::Selection(change) => {
                self.exit_armed = false;
                if change.is_cleared() {
                    self.status.cleared(field.label());
                } else {
                    self.status
                        .selected(field.label(), &field.control().display_text());
                }
            }
            ControlEvent::Navigated | ControlEvent::Ignored => {}
        }
    }

    fn toggle_disabled(&mut self) {
        let Some(field) = self.form.focused() else {
            return;
        };
        let name = field.name().to_string();
        let label = field.label().to_string();
        let disabled = !field.is_disabled();
        if self.form.set_disabled(&name, disabled).is_ok() {
            self.status.disabled(&label, disabled);
        }
    }

    fn on_submit(&mut self) {
        match self.form.submit() {
            SubmitOutcome::Submitted(_) => self.status.submitted(),
            SubmitOutcome::Invalid { errors } => self.status.issues_remaining(errors.len()),
        }
    }

    fn on_exit(&mut self) {
        if self.options.confirm_exit && self.form.is_dirty() && !self.exit_armed {
            self.exit_armed = true;
            self.status.pending_exit();
            return;
        }
        self.should_quit = true;
    }
}
