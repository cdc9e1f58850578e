use std::fmt;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

use crate::pgerrors::sqlstate::{
    ErrorCategory, ErrorCode, ErrorSeverity, ErrorType, LookupError, Registry, Resolved,
};


/// DbError is an error reported by the server, typed by its SQLSTATE.
/// Callers branch on it with `is_a(ErrorCategory::IntegrityError)` or by
/// comparing `error_type()` against a type taken from the registry.
#[derive(Clone, Debug)]
pub struct DbError {
    code: ErrorCode,
    severity: ErrorSeverity,
    message: String,
    detail: Option<String>,
    hint: Option<String>,
    resolved: Resolved,
}

impl DbError {
    /// Types an error response from the server. Codes without a type of their own
    /// fall back to their class, and failing that to DatabaseError.
    pub fn new<S: Into<String>>(
        registry: &Registry,
        code: ErrorCode,
        severity: ErrorSeverity,
        message: S) -> Result<Self, LookupError>
    {
        Ok(DbError {
            code,
            severity,
            message: message.into(),
            detail: None,
            hint: None,
            resolved: registry.resolve(code)?,
        })
    }

    pub fn with_detail<S: Into<String>>(mut self, detail: S) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_hint<S: Into<String>>(mut self, hint: S) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn severity(&self) -> ErrorSeverity {
        self.severity
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    pub fn resolved(&self) -> &Resolved {
        &self.resolved
    }

    /// The registered type for the code, None if only the class (or nothing) is known.
    pub fn error_type(&self) -> Option<&Arc<ErrorType>> {
        self.resolved.error_type()
    }

    pub fn category(&self) -> ErrorCategory {
        self.resolved.category()
    }

    pub fn is_a(&self, category: ErrorCategory) -> bool {
        self.category().is_subclass_of(category)
    }
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({}, SQLSTATE {})", self.severity, self.message, self.resolved.name(), self.code)?;
        if let Some(detail) = &self.detail {
            write!(f, "\nDETAIL: {}", detail)?;
        }
        if let Some(hint) = &self.hint {
            write!(f, "\nHINT: {}", hint)?;
        }
        Ok(())
    }
}

impl std::error::Error for DbError {}
