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

    /// Input error: missing/unreadable file, missing required column,
    /// malformed CSV structure. Exit code 2.
    pub fn input(message: impl Into<String>) -> Self {
        Self::new(2, message)
    }

    /// Data error: unparseable date or number, no usable rows. Exit code 3.
    pub fn data(message: impl Into<String>) -> Self {
        Self::new(3, message)
    }

    /// Output error: export path cannot be created or written. Exit code 4.
    pub fn output(message: impl Into<String>) -> Self {
        Self::new(4, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
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
