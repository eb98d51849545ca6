//! Shared-password screen in front of the ticket form. Not a trust boundary.

pub const WRONG_PASSWORD_MESSAGE: &str = "Wrong password. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessGate {
    expected_password: String,
    password_input: String,
    authenticated: bool,
    error_message: String,
}

impl AccessGate {
    pub fn new(expected_password: impl Into<String>) -> Self {
        Self {
            expected_password: expected_password.into(),
            password_input: String::new(),
            authenticated: false,
            error_message: String::new(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    pub fn password_input(&self) -> &str {
        &self.password_input
    }

    pub fn password_input_mut(&mut self) -> &mut String {
        &mut self.password_input
    }

    /// Checks whatever is currently typed into the password field.
    pub fn submit_password(&mut self) -> bool {
        let entered = std::mem::take(&mut self.password_input);
        self.unlock(&entered)
    }

    pub fn unlock(&mut self, entered: &str) -> bool {
        if entered == self.expected_password {
            self.authenticated = true;
            self.error_message.clear();
            tracing::debug!("access gate unlocked");
        } else {
            self.error_message = WRONG_PASSWORD_MESSAGE.to_string();
            tracing::debug!("access gate rejected password");
        }
        self.authenticated
    }

    pub fn sign_out(&mut self) {
        self.authenticated = false;
        self.password_input.clear();
        self.error_message.clear();
    }
}
