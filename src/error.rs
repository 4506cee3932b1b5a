//! Application error type.
//!
//! Every failure that leaves the library carries the process exit code the
//! binary should use, so `main` never has to classify errors itself.
//!
//! Exit codes:
//! - `2`: invalid input (degrees of freedom, window, geometry, config file, export path)
//! - `3`: drawing / SVG output failure

/// Exit code for invalid user input or unreadable/unwritable side files.
pub const EXIT_INPUT: u8 = 2;

/// Exit code for drawing failures.
pub const EXIT_RENDER: u8 = 3;

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    /// Invalid parameter or configuration.
    pub fn input(message: impl Into<String>) -> Self {
        Self::new(EXIT_INPUT, message)
    }

    /// Failure while drawing or saving the SVG.
    pub fn render(message: impl Into<String>) -> Self {
        Self::new(EXIT_RENDER, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
