//! Process-level error type.
//!
//! Every fallible path in the crate returns `AppError`. The exit code tells the
//! shell which stage failed:
//!
//! - `2`: invalid configuration
//! - `3`: invalid sample table
//! - `4`: output rendering failure

/// Exit code for configuration errors.
pub const EXIT_CONFIG: u8 = 2;
/// Exit code for an unusable sample table.
pub const EXIT_SAMPLES: u8 = 3;
/// Exit code for output failures.
pub const EXIT_OUTPUT: u8 = 4;

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

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(EXIT_CONFIG, message)
    }

    pub fn samples(message: impl Into<String>) -> Self {
        Self::new(EXIT_SAMPLES, message)
    }

    pub fn output(message: impl Into<String>) -> Self {
        Self::new(EXIT_OUTPUT, message)
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
