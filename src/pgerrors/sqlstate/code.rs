use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

use thiserror::Error;


pub const SQLSTATE_LEN: usize = 5;
pub const CLASS_LEN: usize = 2;

// Printed in place of a code built with new_unchecked from bytes that aren't UTF-8
const INVALID_CODE: &str = "?????";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SqlStateError {
    #[error("sqlstate '{value}' must be {expected} characters")]
    InvalidLength { value: String, expected: usize },
    #[error("sqlstate '{value}' may only contain digits and uppercase letters")]
    InvalidChar { value: String },
}

/// Validates the characters of a SQLSTATE or class code.
fn check_chars(bytes: &[u8], expected: usize) -> Result<(), SqlStateError> {
    let value = || String::from_utf8_lossy(bytes).into_owned();
    if bytes.len() != expected {
        return Err(SqlStateError::InvalidLength { value: value(), expected });
    }
    if !bytes.iter().all(|b| b.is_ascii_digit() || b.is_ascii_uppercase()) {
        return Err(SqlStateError::InvalidChar { value: value() });
    }
    Ok(())
}

/// ErrorCode is a 5 character SQLSTATE as sent by the server in the 'C' field
/// of an ErrorResponse.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ErrorCode([u8; SQLSTATE_LEN]);

impl ErrorCode {
    /// Parse and validate a SQLSTATE.
    pub fn new(code: &str) -> Result<Self, SqlStateError> {
        check_chars(code.as_bytes(), SQLSTATE_LEN)?;
        Ok(Self::new_unchecked(code))
    }

    /// Build a code for a static table. Panics (at compile time when used in a
    /// const context) if code isn't exactly 5 bytes, but doesn't check the characters.
    pub const fn new_unchecked(code: &str) -> Self {
        let b = code.as_bytes();
        if b.len() != SQLSTATE_LEN {
            panic!("sqlstate must be exactly 5 characters");
        }
        ErrorCode([b[0], b[1], b[2], b[3], b[4]])
    }

    pub fn check(&self) -> Result<(), SqlStateError> {
        check_chars(&self.0, SQLSTATE_LEN)
    }

    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).unwrap_or(INVALID_CODE)
    }

    /// The class is the first two characters of the code.
    pub fn class(&self) -> ClassCode {
        ClassCode([self.0[0], self.0[1]])
    }

    /// True for classes 00 (successful completion), 01 (warning) and 02 (no data).
    pub fn is_warning(&self) -> bool {
        matches!(&self.0[..2], b"00" | b"01" | b"02")
    }
}

impl FromStr for ErrorCode {
    type Err = SqlStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorCode::new(s)
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Debug for ErrorCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("ErrorCode({})", self.as_str()))
    }
}

/// ClassCode is the two character class prefix of a SQLSTATE, e.g. "23" for
/// integrity constraint violations.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ClassCode([u8; CLASS_LEN]);

impl ClassCode {
    pub fn new(code: &str) -> Result<Self, SqlStateError> {
        check_chars(code.as_bytes(), CLASS_LEN)?;
        Ok(Self::new_unchecked(code))
    }

    pub const fn new_unchecked(code: &str) -> Self {
        let b = code.as_bytes();
        if b.len() != CLASS_LEN {
            panic!("sqlstate class must be exactly 2 characters");
        }
        ClassCode([b[0], b[1]])
    }

    pub fn check(&self) -> Result<(), SqlStateError> {
        check_chars(&self.0, CLASS_LEN)
    }

    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).unwrap_or(&INVALID_CODE[..CLASS_LEN])
    }
}

impl FromStr for ClassCode {
    type Err = SqlStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClassCode::new(s)
    }
}

impl Display for ClassCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Debug for ClassCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("ClassCode({})", self.as_str()))
    }
}
