mod code;
mod category;
mod table;
mod name;
mod error_type;
mod module;
mod registry;
mod severity;
mod db_error;

pub use self::code::{ErrorCode, ClassCode, SqlStateError, SQLSTATE_LEN, CLASS_LEN};
pub use self::category::ErrorCategory;
pub use self::table::{ErrorTypeEntry, ErrorClassEntry, ERROR_TABLE, ERROR_CLASSES};
pub use self::name::{NameBuilder, NameError, is_identifier};
pub use self::error_type::{ErrorType, ErrorClass, CodeMap, ErrorTypeMap, ErrorClassMap};
pub use self::module::{Module, Attribute, BY_SQLSTATE_ATTR, BY_CLASS_ATTR};
pub use self::registry::{Registry, InitError, InitState, LookupError, Resolved, registry};
pub use self::severity::ErrorSeverity;
pub use self::db_error::DbError;
