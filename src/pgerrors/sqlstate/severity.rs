use std::fmt;
use std::fmt::{Display, Formatter};

use strum::EnumString;


/// ErrorSeverity is the (non-localized) severity the server reports with an
/// error or notice, e.g. "ERROR" or "FATAL".
#[derive(EnumString, Clone, Copy, Eq, PartialEq, Debug)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[repr(u8)]
pub enum ErrorSeverity {
    Log,
    Info,
    Debug,
    Notice,
    Warning,
    Error,
    Panic,
    Fatal,
}

impl ErrorSeverity {
    pub fn as_str(&self) -> &'static str {
        match *self {
            ErrorSeverity::Fatal => "FATAL",
            ErrorSeverity::Panic => "PANIC",
            ErrorSeverity::Error => "ERROR",
            ErrorSeverity::Warning => "WARNING",
            ErrorSeverity::Notice => "NOTICE",
            ErrorSeverity::Debug => "DEBUG",
            ErrorSeverity::Info => "INFO",
            ErrorSeverity::Log => "LOG",
        }
    }

    /// True if the server aborted the statement (ERROR) or the session (FATAL, PANIC).
    pub fn is_error(&self) -> bool {
        matches!(*self, ErrorSeverity::Error | ErrorSeverity::Fatal | ErrorSeverity::Panic)
    }
}

impl Display for ErrorSeverity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for ErrorSeverity {
    fn default() -> Self {
        ErrorSeverity::Error
    }
}
