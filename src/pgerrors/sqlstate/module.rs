use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard, PoisonError};

use fnv::{FnvHashMap, FnvHashSet};
use tracing::debug;

use crate::pgerrors::sqlstate::{ErrorType, ErrorClass, ErrorTypeMap, ErrorClassMap};


/// Name of the module attribute exposing the sqlstate -> ErrorType mapping.
pub const BY_SQLSTATE_ATTR: &str = "_by_sqlstate";
/// Name of the module attribute exposing the class code -> ErrorClass mapping.
pub const BY_CLASS_ATTR: &str = "_by_class";

/// A value stored in a Module's namespace. Cloning only clones the Arc.
#[derive(Clone, Debug)]
pub enum Attribute {
    ErrorType(Arc<ErrorType>),
    ErrorClass(Arc<ErrorClass>),
    ErrorTypeMap(Arc<ErrorTypeMap>),
    ErrorClassMap(Arc<ErrorClassMap>),
}

/// Module is the named namespace the error types are published into. Callers
/// can reach a type by its short name (`module.error_type("UniqueViolation")`)
/// or enumerate the `_by_sqlstate` mapping.
#[derive(Debug)]
pub struct Module {
    name: String,
    attrs: RwLock<FnvHashMap<String, Attribute>>,
}

impl Module {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Module {
            name: name.into(),
            attrs: RwLock::new(FnvHashMap::default()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    // Attributes are only ever inserted whole, so a poisoned lock still guards a consistent map
    fn read(&self) -> RwLockReadGuard<'_, FnvHashMap<String, Attribute>> {
        self.attrs.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, FnvHashMap<String, Attribute>> {
        self.attrs.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get(&self, name: &str) -> Option<Attribute> {
        self.read().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.read().contains_key(name)
    }

    pub fn error_type(&self, name: &str) -> Option<Arc<ErrorType>> {
        match self.get(name)? {
            Attribute::ErrorType(ty) => Some(ty),
            _ => None,
        }
    }

    pub fn error_class(&self, name: &str) -> Option<Arc<ErrorClass>> {
        match self.get(name)? {
            Attribute::ErrorClass(class) => Some(class),
            _ => None,
        }
    }

    /// The `_by_sqlstate` attribute, once the registry has been published here.
    pub fn by_sqlstate(&self) -> Option<Arc<ErrorTypeMap>> {
        match self.get(BY_SQLSTATE_ATTR)? {
            Attribute::ErrorTypeMap(map) => Some(map),
            _ => None,
        }
    }

    pub fn by_class(&self) -> Option<Arc<ErrorClassMap>> {
        match self.get(BY_CLASS_ATTR)? {
            Attribute::ErrorClassMap(map) => Some(map),
            _ => None,
        }
    }

    /// Adds a single attribute. Existing attributes are never replaced: if name is
    /// taken the attribute is handed back unchanged.
    pub fn add_object<S: Into<String>>(&self, name: S, attr: Attribute) -> Result<(), (String, Attribute)> {
        let name = name.into();
        let mut attrs = self.write();
        if attrs.contains_key(&name) {
            return Err((name, attr));
        }
        attrs.insert(name, attr);
        Ok(())
    }

    /// Adds all the attributes or none of them. Fails with the first name that is
    /// already taken, or repeated within batch.
    pub fn add_all(&self, batch: Vec<(String, Attribute)>) -> Result<(), String> {
        let mut attrs = self.write();
        {
            let mut seen = FnvHashSet::with_capacity_and_hasher(batch.len(), Default::default());
            for (name, _) in batch.iter() {
                if attrs.contains_key(name) || !seen.insert(name.as_str()) {
                    return Err(name.clone());
                }
            }
        }
        debug!(module = %self.name, count = batch.len(), "adding module attributes");
        attrs.extend(batch);
        Ok(())
    }

    /// Sorted names of all attributes.
    pub fn attribute_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}
