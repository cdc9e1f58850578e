use std::fmt;
use std::fmt::{Display, Formatter};
use std::hash::Hash;
use std::sync::Arc;

use fnv::FnvHashMap;

use crate::pgerrors::sqlstate::{ErrorCategory, ErrorCode, ClassCode};


/// ErrorType is the runtime type created for one SQLSTATE. There's exactly one
/// instance per code for the life of the process, shared by reference, so two
/// ErrorTypes are the same type iff they are the same allocation (see `same_as`).
#[derive(Debug)]
pub struct ErrorType {
    code: ErrorCode,
    name: &'static str,
    qualified_name: String,
    category: ErrorCategory,
    class: Option<Arc<ErrorClass>>,
}

impl ErrorType {
    pub(crate) fn new(
        code: ErrorCode,
        name: &'static str,
        qualified_name: String,
        category: ErrorCategory,
        class: Option<Arc<ErrorClass>>) -> Self
    {
        ErrorType {
            code,
            name,
            qualified_name,
            category,
            class,
        }
    }

    /// The SQLSTATE this type represents
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// The short name, e.g. "LockNotAvailable"
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The namespaced name, e.g. "pgerrors.errors.LockNotAvailable"
    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    /// The base category this type derives from
    pub fn category(&self) -> ErrorCategory {
        self.category
    }

    /// The SQLSTATE class type, if the class of this code is known
    pub fn class(&self) -> Option<&Arc<ErrorClass>> {
        self.class.as_ref()
    }

    /// True if this type derives from category (directly or through its parents)
    pub fn is_a(&self, category: ErrorCategory) -> bool {
        self.category.is_subclass_of(category)
    }

    pub fn same_as(self: &Arc<Self>, other: &Arc<ErrorType>) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl Display for ErrorType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.qualified_name)
    }
}

/// ErrorClass is the runtime type created for a SQLSTATE class, e.g.
/// ClassIntegrityConstraintViolation for "23".
#[derive(Debug)]
pub struct ErrorClass {
    code: ClassCode,
    name: &'static str,
    qualified_name: String,
    category: ErrorCategory,
}

impl ErrorClass {
    pub(crate) fn new(code: ClassCode, name: &'static str, qualified_name: String, category: ErrorCategory) -> Self {
        ErrorClass {
            code,
            name,
            qualified_name,
            category,
        }
    }

    pub fn code(&self) -> ClassCode {
        self.code
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    /// The category used for codes of this class that have no type of their own
    pub fn category(&self) -> ErrorCategory {
        self.category
    }
}

impl Display for ErrorClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.qualified_name)
    }
}

/// CodeMap indexes shared values by code, remembering insertion order for enumeration.
#[derive(Debug)]
pub struct CodeMap<K, V> {
    by_code: FnvHashMap<K, Arc<V>>,
    order: Vec<Arc<V>>,
}

pub type ErrorTypeMap = CodeMap<ErrorCode, ErrorType>;
pub type ErrorClassMap = CodeMap<ClassCode, ErrorClass>;

impl<K: Eq + Hash, V> CodeMap<K, V> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        CodeMap {
            by_code: FnvHashMap::with_capacity_and_hasher(capacity, Default::default()),
            order: Vec::with_capacity(capacity),
        }
    }

    /// Inserts value under code. If code is already present nothing changes and
    /// the value is handed back.
    pub(crate) fn insert(&mut self, code: K, value: Arc<V>) -> Result<(), Arc<V>> {
        if self.by_code.contains_key(&code) {
            return Err(value);
        }
        self.by_code.insert(code, value.clone());
        self.order.push(value);
        Ok(())
    }

    pub fn get(&self, code: &K) -> Option<&Arc<V>> {
        self.by_code.get(code)
    }

    pub fn contains(&self, code: &K) -> bool {
        self.by_code.contains_key(code)
    }

    /// Iterates over the values in the order they were inserted
    pub fn iter(&self) -> std::slice::Iter<'_, Arc<V>> {
        self.order.iter()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
