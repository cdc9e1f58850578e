use thiserror::Error;

use crate::pgerrors::config::MAX_QUALIFIED_NAME_LEN;


#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("qualified name for {name} would be {len} bytes, more than the capacity of {capacity}")]
    NameTooLong { name: String, len: usize, capacity: usize },
    #[error("'{name}' is not a valid identifier")]
    InvalidIdentifier { name: String },
    #[error("namespace prefix '{prefix}' leaves no room for a name within {capacity} bytes")]
    PrefixTooLong { prefix: String, capacity: usize },
}

/// Returns true if s is a non-empty ASCII identifier: [A-Za-z_][A-Za-z0-9_]*
pub fn is_identifier(s: &str) -> bool {
    let mut bytes = s.bytes();
    match bytes.next() {
        Some(b) if b.is_ascii_alphabetic() || b == b'_' => {},
        _ => return false,
    }
    bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

/// NameBuilder joins a fixed namespace prefix with short type names, refusing
/// to produce any name longer than its capacity.
#[derive(Clone, Debug)]
pub struct NameBuilder {
    prefix: String,
    capacity: usize,
}

impl NameBuilder {
    pub fn new<S: Into<String>>(prefix: S, capacity: usize) -> Result<Self, NameError> {
        let prefix = prefix.into();
        if prefix.len() >= capacity {
            return Err(NameError::PrefixTooLong { prefix, capacity });
        }
        Ok(NameBuilder { prefix, capacity })
    }

    /// Builder for types owned by the named module, e.g. "pgerrors.errors" gives
    /// names like "pgerrors.errors.LockNotAvailable".
    pub fn for_module(module_name: &str) -> Result<Self, NameError> {
        Self::new(format!("{}.", module_name), MAX_QUALIFIED_NAME_LEN)
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns prefix + name. The length is checked before anything is written,
    /// and the result is allocated at exactly that length.
    pub fn build(&self, name: &str) -> Result<String, NameError> {
        if !is_identifier(name) {
            return Err(NameError::InvalidIdentifier { name: name.to_string() });
        }
        let len = match self.prefix.len().checked_add(name.len()) {
            Some(len) if len <= self.capacity => len,
            Some(len) => return Err(self.too_long(name, len)),
            None => return Err(self.too_long(name, usize::MAX)),
        };

        let mut qualified = String::with_capacity(len);
        qualified.push_str(&self.prefix);
        qualified.push_str(name);
        debug_assert_eq!(qualified.len(), len);
        Ok(qualified)
    }

    fn too_long(&self, name: &str, len: usize) -> NameError {
        NameError::NameTooLong {
            name: name.to_string(),
            len,
            capacity: self.capacity,
        }
    }
}
