use crate::Code;

/// Application error carrying a [`Code`] and a message
///
/// The message is rendered once at construction and never changes afterwards.
/// The error may be wrapped by any context mechanism that exposes it through
/// [`std::error::Error::source`]; [`crate::find`] recovers it from the chain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("error: code={code} message={message}")]
pub struct Error {
    code: Code,
    message: String,
}

impl Error {
    /// Create an error from a code and an already rendered message
    pub fn new(code: Code, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Semantic code of this error
    pub const fn code(&self) -> Code {
        self.code
    }

    /// Human-readable message, exactly as constructed
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Diagnostic form combining slug and message, for logs only
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

/// Build an [`Error`](crate::Error) with a [`format!`]-style message
///
/// ```
/// use errs_core::{Code, errorf};
///
/// let err = errorf!(Code::Invalid, "bad request: {}", "cheese is required");
/// assert_eq!(err.message(), "bad request: cheese is required");
/// ```
#[macro_export]
macro_rules! errorf {
    ($code:expr, $($arg:tt)+) => {
        $crate::Error::new($code, ::std::format!($($arg)+))
    };
}
