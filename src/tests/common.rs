use crate::pgerrors::sqlstate::{ErrorClassEntry, ErrorTypeEntry, Module, Registry, ERROR_CLASSES, ERROR_TABLE};
use crate::pgerrors::sqlstate::ErrorCategory::*;


pub const TEST_MODULE: &str = "test.errors";

pub static NO_CLASSES: &[ErrorClassEntry] = &[];

pub static LOCK_TABLE: &[ErrorTypeEntry] = &[
    ErrorTypeEntry::new("55P03", "LockNotAvailable", OperationalError),
];

pub static DUPLICATE_CODE_TABLE: &[ErrorTypeEntry] = &[
    ErrorTypeEntry::new("55P03", "LockNotAvailable", OperationalError),
    ErrorTypeEntry::new("23505", "UniqueViolation", IntegrityError),
    ErrorTypeEntry::new("55P03", "LockNotAvailableAgain", OperationalError),
];

pub static DUPLICATE_NAME_TABLE: &[ErrorTypeEntry] = &[
    ErrorTypeEntry::new("55P03", "LockNotAvailable", OperationalError),
    ErrorTypeEntry::new("55P04", "LockNotAvailable", OperationalError),
];

pub static INVALID_CODE_TABLE: &[ErrorTypeEntry] = &[
    ErrorTypeEntry::new("55P03", "LockNotAvailable", OperationalError),
    ErrorTypeEntry::new("55p04", "LowercaseCode", OperationalError),
];

// "test.errors." (12 bytes) + a 112 byte name is 124 bytes, more than the 120 allowed
pub static LONG_NAME_TABLE: &[ErrorTypeEntry] = &[
    ErrorTypeEntry::new("55P03", "LockNotAvailable", OperationalError),
    ErrorTypeEntry::new(
        "55P04",
        "AnErrorTypeNameSoExtraordinarilyLongThatItCannotPossiblyFitInsideTheQualifiedNameCapacityOfOneHundredTwentyBytes",
        OperationalError),
];

pub static CLASS_NAME_CLASH_TABLE: &[ErrorTypeEntry] = &[
    ErrorTypeEntry::new("23505", "ClassIntegrityConstraintViolation", IntegrityError),
];

pub static INTEGRITY_CLASS: &[ErrorClassEntry] = &[
    ErrorClassEntry::new("23", "ClassIntegrityConstraintViolation", IntegrityError),
];

/// A registry over the full error table, initialized into a fresh module.
pub fn full_registry() -> (Registry, Module) {
    ready_registry(ERROR_TABLE, ERROR_CLASSES)
}

pub fn ready_registry(entries: &'static [ErrorTypeEntry], classes: &'static [ErrorClassEntry]) -> (Registry, Module) {
    let registry = Registry::new(entries, classes);
    let module = Module::new(TEST_MODULE);
    registry.initialize(&module).expect("initialize failed");
    (registry, module)
}
