use strum::{Display, EnumIter, EnumString, IntoStaticStr};


/// ErrorCategory is one of the base error types that every SQLSTATE error type
/// derives from. They form a tree rooted at Error, mirroring the DB-API exception
/// hierarchy:
///
/// ```text
/// Error
///  +-- InterfaceError
///  +-- DatabaseError
///       +-- DataError
///       +-- OperationalError
///       |    +-- QueryCanceledError
///       |    +-- TransactionRollbackError
///       +-- IntegrityError
///       +-- InternalError
///       +-- ProgrammingError
///       +-- NotSupportedError
/// ```
#[derive(Display, EnumString, EnumIter, IntoStaticStr, Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum ErrorCategory {
    Error,
    InterfaceError,
    DatabaseError,
    DataError,
    OperationalError,
    IntegrityError,
    InternalError,
    ProgrammingError,
    NotSupportedError,
    QueryCanceledError,
    TransactionRollbackError,
}

impl ErrorCategory {
    /// The category this one derives from, None for the root.
    pub fn parent(&self) -> Option<ErrorCategory> {
        use ErrorCategory::*;
        match *self {
            Error => None,
            InterfaceError | DatabaseError => Some(Error),
            DataError |
            OperationalError |
            IntegrityError |
            InternalError |
            ProgrammingError |
            NotSupportedError => Some(DatabaseError),
            QueryCanceledError | TransactionRollbackError => Some(OperationalError),
        }
    }

    /// Iterates over self and then each parent up to the root.
    pub fn ancestors(&self) -> impl Iterator<Item=ErrorCategory> {
        std::iter::successors(Some(*self), |c| c.parent())
    }

    /// True if self is other or derives from it, directly or indirectly.
    pub fn is_subclass_of(&self, other: ErrorCategory) -> bool {
        self.ancestors().any(|c| c == other)
    }

    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}

impl Default for ErrorCategory {
    fn default() -> Self {
        ErrorCategory::DatabaseError
    }
}
