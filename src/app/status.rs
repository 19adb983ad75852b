#[derive(Debug, Clone)]
pub struct StatusLine {
    message: String,
}

const READY_STATUS: &str = "Ready. Press Ctrl+S to submit.";

impl Default for StatusLine {
    fn default() -> Self {
        Self {
            message: READY_STATUS.to_string(),
        }
    }
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ready(&mut self) {
        self.message = READY_STATUS.to_string();
    }

    pub fn filtering(&mut self, label: &str, matches: usize) {
        self.message = format!("Filtering {label}: {matches} match(es)");
    }

    pub fn selected(&mut self, label: &str, value: &str) {
        self.message = format!("{label} set to {value}");
    }

    pub fn cleared(&mut self, label: &str) {
        self.message = format!("{label} cleared");
    }

    pub fn disabled(&mut self, label: &str, disabled: bool) {
        let state = if disabled { "disabled" } else { "enabled" };
        self.message = format!("{label} {state}");
    }

    pub fn submitted(&mut self) {
        self.message = "Form submitted. Press Ctrl+Q to exit.".to_string();
    }

    pub fn issues_remaining(&mut self, count: usize) {
        self.message = format!("{count} field(s) need a value");
    }

    pub fn form_reset(&mut self) {
        self.message = "Form reset".to_string();
    }

    pub fn pending_exit(&mut self) {
        self.message = "Unsubmitted changes. Press Ctrl+Q again to quit.".to_string();
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
