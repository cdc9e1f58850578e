use std::fmt::Display;
use std::{fmt, io, result};

use crate::pgerrors::sqlstate::{InitError, LookupError, NameError};


#[derive(Debug, PartialEq, Eq)]
pub struct Error {
    err: Box<ErrorKind>, // use a Box to keep the Result type smaller
}

#[derive(Debug)]
pub enum ErrorKind {
    StringError(String),
    IOError(io::Error),
    YAMLError(serde_yaml::Error),
    RegexError(regex::Error),
    NameError(NameError),
    InitError(InitError),
    LookupError(LookupError),
}

pub type Result<T> = result::Result<T, Error>;

impl Error {
    pub fn new<S: ToString>(s: S) -> Self {
        Error {
            err: Box::new(ErrorKind::StringError(s.to_string())),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.err
    }

    /// The registry initialization error, if that's what this is.
    pub fn init_error(&self) -> Option<&InitError> {
        match self.kind() {
            ErrorKind::InitError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<&str> for Error {
    fn from(err: &str) -> Self {
        Error {
            err: Box::new(ErrorKind::StringError(String::from(err))),
        }
    }
}

impl From<String> for Error {
    fn from(err: String) -> Self {
        Error {
            err: Box::new(ErrorKind::StringError(err)),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error {
            err: Box::new(ErrorKind::IOError(err)),
        }
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error {
            err: Box::new(ErrorKind::YAMLError(err)),
        }
    }
}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Error {
            err: Box::new(ErrorKind::RegexError(err)),
        }
    }
}

impl From<NameError> for Error {
    fn from(err: NameError) -> Self {
        Error {
            err: Box::new(ErrorKind::NameError(err)),
        }
    }
}

impl From<InitError> for Error {
    fn from(err: InitError) -> Self {
        Error {
            err: Box::new(ErrorKind::InitError(err)),
        }
    }
}

impl From<LookupError> for Error {
    fn from(err: LookupError) -> Self {
        Error {
            err: Box::new(ErrorKind::LookupError(err)),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        std::fmt::Display::fmt(&self.err, f)
    }
}

impl std::error::Error for Error {}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorKind::StringError(s) => f.write_str(&s),
            ErrorKind::IOError(e) => std::fmt::Display::fmt(&e, f),
            ErrorKind::YAMLError(e) => std::fmt::Display::fmt(&e, f),
            ErrorKind::RegexError(e) => std::fmt::Display::fmt(&e, f),
            ErrorKind::NameError(e) => std::fmt::Display::fmt(&e, f),
            ErrorKind::InitError(e) => std::fmt::Display::fmt(&e, f),
            ErrorKind::LookupError(e) => std::fmt::Display::fmt(&e, f),
        }
    }
}

impl PartialEq for ErrorKind {
    fn eq(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

impl Eq for ErrorKind {}
