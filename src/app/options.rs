use std::time::Duration;

/// Knobs for the interactive session. The form itself comes from [`HostForm`](crate::HostForm).
#[derive(Debug, Clone)]
pub struct UiOptions {
    /// How long to wait for input before redrawing.
    pub tick_rate: Duration,
    /// Ask twice before quitting a form with unsubmitted edits.
    pub confirm_exit: bool,
    pub show_help: bool,
    /// Show the last submitted values under the form.
    pub show_snapshot: bool,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(200),
            confirm_exit: true,
            show_help: true,
            show_snapshot: true,
        }
    }
}

impl UiOptions {
    pub fn with_tick_rate(self, tick_rate: Duration) -> Self {
        Self { tick_rate, ..self }
    }

    pub fn with_confirm_exit(self, confirm_exit: bool) -> Self {
        Self {
            confirm_exit,
            ..self
        }
    }

    pub fn with_help(self, show_help: bool) -> Self {
        Self { show_help, ..self }
    }

    pub fn with_snapshot(self, show_snapshot: bool) -> Self {
        Self {
            show_snapshot,
            ..self
        }
    }
}
