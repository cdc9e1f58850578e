use std::sync::{Arc, OnceLock};
use std::sync::atomic::AtomicU8;
use std::sync::atomic::Ordering::{Acquire, Release, AcqRel};

use fnv::FnvHashMap;
use strum::Display;
use thiserror::Error;
use tracing::{debug, error, info, info_span};

use crate::pgerrors::sqlstate::{
    Attribute, ClassCode, ErrorCategory, ErrorClass, ErrorClassEntry, ErrorClassMap, ErrorCode,
    ErrorType, ErrorTypeEntry, ErrorTypeMap, Module, NameBuilder, NameError, SqlStateError,
    BY_CLASS_ATTR, BY_SQLSTATE_ATTR, ERROR_CLASSES, ERROR_TABLE,
};


#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InitError {
    #[error("error registry already initialized")]
    AlreadyInitialized,
    #[error("could not build error type name: {source}")]
    BuildFailed {
        #[from]
        source: NameError,
    },
    #[error("sqlstate {code} appears more than once in the error table")]
    DuplicateCode { code: String },
    #[error("name {name} appears more than once in the error table or module")]
    DuplicateName { name: String },
    #[error("invalid sqlstate in the error table: {source}")]
    InvalidCode {
        #[from]
        source: SqlStateError,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("no error type registered for sqlstate {code}")]
    NotFound { code: String },
    #[error("no error type named {name}")]
    UnknownName { name: String },
    #[error("error registry is not ready (state {state})")]
    NotReady { state: InitState },
}

/// InitState is the lifecycle of a Registry. The only transitions are
/// Uninitialized -> Initializing -> Ready | Failed.
#[derive(Display, Clone, Copy, Eq, PartialEq, Debug)]
#[repr(u8)]
pub enum InitState {
    Uninitialized = 0,
    Initializing = 1,
    Ready = 2,
    Failed = 3,
}

impl InitState {
    fn from_u8(state: u8) -> Self {
        match state {
            0 => InitState::Uninitialized,
            1 => InitState::Initializing,
            2 => InitState::Ready,
            _ => InitState::Failed,
        }
    }
}

/// Resolved is the outcome of mapping an arbitrary SQLSTATE to the type that
/// should represent it, falling back to the class when the code isn't in the table.
#[derive(Clone, Debug)]
pub enum Resolved {
    Type(Arc<ErrorType>),
    Class(Arc<ErrorClass>),
    Unknown,
}

impl Resolved {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Resolved::Type(ty) => ty.category(),
            Resolved::Class(class) => class.category(),
            Resolved::Unknown => ErrorCategory::DatabaseError,
        }
    }

    pub fn error_type(&self) -> Option<&Arc<ErrorType>> {
        match self {
            Resolved::Type(ty) => Some(ty),
            _ => None,
        }
    }

    /// The short name of the most specific known type
    pub fn name(&self) -> &'static str {
        match self {
            Resolved::Type(ty) => ty.name(),
            Resolved::Class(class) => class.name(),
            Resolved::Unknown => ErrorCategory::DatabaseError.as_str(),
        }
    }
}

// The indices, shared with the module the registry was published into
struct Published {
    by_code: Arc<ErrorTypeMap>,
    by_class: Arc<ErrorClassMap>,
    by_name: FnvHashMap<&'static str, Arc<ErrorType>>,
}

// Everything built by one initialization pass, not yet visible to anyone
struct Staged {
    published: Published,
    attrs: Vec<(String, Attribute)>,
}

/// Registry maps SQLSTATE codes to the ErrorTypes built from a static table.
/// It's populated exactly once by initialize, and read-only after that.
/// Lookups never take a lock, they only check the state with an acquire load.
pub struct Registry {
    entries: &'static [ErrorTypeEntry],
    classes: &'static [ErrorClassEntry],
    state: AtomicU8,
    published: OnceLock<Published>,
}

static REGISTRY: Registry = Registry::new(ERROR_TABLE, ERROR_CLASSES);

/// The process-wide registry of all known Postgres error codes.
pub fn registry() -> &'static Registry {
    &REGISTRY
}

impl Registry {
    pub const fn new(entries: &'static [ErrorTypeEntry], classes: &'static [ErrorClassEntry]) -> Self {
        Registry {
            entries,
            classes,
            state: AtomicU8::new(InitState::Uninitialized as u8),
            published: OnceLock::new(),
        }
    }

    pub fn state(&self) -> InitState {
        InitState::from_u8(self.state.load(Acquire))
    }

    pub fn is_ready(&self) -> bool {
        self.state() == InitState::Ready
    }

    /// Build every error type in the table and publish them, together with the
    /// `_by_sqlstate` and `_by_class` mappings, as attributes of module.
    ///
    /// This can be called once per Registry. Any later call fails with AlreadyInitialized,
    /// whether the first call succeeded or not. On failure nothing is published:
    /// the module is left untouched and lookups report NotReady.
    pub fn initialize(&self, module: &Module) -> Result<(), InitError> {
        let _span = info_span!("errors_init", module = module.name()).entered();

        if let Err(current) = self.state.compare_exchange(
            InitState::Uninitialized as u8, InitState::Initializing as u8, AcqRel, Acquire)
        {
            error!(state = %InitState::from_u8(current), "errors_init(): already called");
            return Err(InitError::AlreadyInitialized);
        }

        match self.build(module.name()).and_then(|staged| self.publish(module, staged)) {
            Ok(()) => {
                self.state.store(InitState::Ready as u8, Release);
                info!(types = self.entries.len(), classes = self.classes.len(), "error registry ready");
                Ok(())
            },
            Err(e) => {
                self.state.store(InitState::Failed as u8, Release);
                error!(%e, "error registry initialization failed");
                Err(e)
            }
        }
    }

    fn build(&self, module_name: &str) -> Result<Staged, InitError> {
        let names = NameBuilder::for_module(module_name)?;
        let mut attrs = Vec::with_capacity(self.classes.len() + self.entries.len() + 2);

        let mut by_class = ErrorClassMap::with_capacity(self.classes.len());
        for entry in self.classes {
            entry.code.check()?;
            let qualified_name = names.build(entry.name)?;
            let class = Arc::new(ErrorClass::new(entry.code, entry.name, qualified_name, entry.category));
            by_class.insert(entry.code, class.clone())
                .map_err(|_| InitError::DuplicateCode { code: entry.code.to_string() })?;
            attrs.push((entry.name.to_string(), Attribute::ErrorClass(class)));
        }

        let mut by_code = ErrorTypeMap::with_capacity(self.entries.len());
        let mut by_name = FnvHashMap::with_capacity_and_hasher(self.entries.len(), Default::default());
        for entry in self.entries {
            entry.code.check()?;
            let qualified_name = names.build(entry.name)?;
            let class = by_class.get(&entry.code.class()).cloned();
            let ty = Arc::new(ErrorType::new(entry.code, entry.name, qualified_name, entry.category, class));
            by_code.insert(entry.code, ty.clone())
                .map_err(|_| InitError::DuplicateCode { code: entry.code.to_string() })?;
            if by_name.insert(entry.name, ty.clone()).is_some() {
                return Err(InitError::DuplicateName { name: entry.name.to_string() });
            }
            debug!(code = %entry.code, name = entry.name, category = %entry.category, "created error type");
            attrs.push((entry.name.to_string(), Attribute::ErrorType(ty)));
        }

        let by_code = Arc::new(by_code);
        let by_class = Arc::new(by_class);
        attrs.push((BY_SQLSTATE_ATTR.to_string(), Attribute::ErrorTypeMap(by_code.clone())));
        attrs.push((BY_CLASS_ATTR.to_string(), Attribute::ErrorClassMap(by_class.clone())));

        Ok(Staged {
            published: Published { by_code, by_class, by_name },
            attrs,
        })
    }

    fn publish(&self, module: &Module, staged: Staged) -> Result<(), InitError> {
        // Only the thread that moved us to Initializing gets here, so this can't fail in practice
        self.published.set(staged.published).map_err(|_| InitError::AlreadyInitialized)?;
        module.add_all(staged.attrs).map_err(|name| InitError::DuplicateName { name })
    }

    #[inline]
    fn published(&self) -> Result<&Published, LookupError> {
        let state = self.state();
        if state != InitState::Ready {
            return Err(LookupError::NotReady { state });
        }
        self.published.get().ok_or(LookupError::NotReady { state })
    }

    /// Returns the ErrorType registered for code.
    pub fn lookup(&self, code: ErrorCode) -> Result<Arc<ErrorType>, LookupError> {
        self.published()?
            .by_code
            .get(&code)
            .cloned()
            .ok_or_else(|| LookupError::NotFound { code: code.to_string() })
    }

    /// Like lookup, but takes the code as sent by the server. A string that isn't
    /// a well-formed SQLSTATE is just another code with no registered type.
    pub fn lookup_str(&self, code: &str) -> Result<Arc<ErrorType>, LookupError> {
        let published = self.published()?;
        ErrorCode::new(code)
            .ok()
            .and_then(|code| published.by_code.get(&code).cloned())
            .ok_or_else(|| LookupError::NotFound { code: code.to_string() })
    }

    /// Looks up either a full SQLSTATE ("22012") or a class code ("22"), returning
    /// the type or the class registered for it. Never returns Resolved::Unknown.
    pub fn lookup_any(&self, code: &str) -> Result<Resolved, LookupError> {
        let published = self.published()?;
        let found = if let Ok(class) = ClassCode::new(code) {
            published.by_class.get(&class).cloned().map(Resolved::Class)
        } else {
            ErrorCode::new(code)
                .ok()
                .and_then(|code| published.by_code.get(&code).cloned())
                .map(Resolved::Type)
        };
        found.ok_or_else(|| LookupError::NotFound { code: code.to_string() })
    }

    /// Returns the ErrorClass registered for a two character class code.
    pub fn lookup_class(&self, class: ClassCode) -> Result<Arc<ErrorClass>, LookupError> {
        self.published()?
            .by_class
            .get(&class)
            .cloned()
            .ok_or_else(|| LookupError::NotFound { code: class.to_string() })
    }

    /// Returns the ErrorType with the given short name, e.g. "UniqueViolation".
    pub fn lookup_name(&self, name: &str) -> Result<Arc<ErrorType>, LookupError> {
        self.published()?
            .by_name
            .get(name)
            .cloned()
            .ok_or_else(|| LookupError::UnknownName { name: name.to_string() })
    }

    /// Returns the most specific type known for code: its own type if it has one,
    /// otherwise the type of its class. Only fails if the registry isn't ready.
    pub fn resolve(&self, code: ErrorCode) -> Result<Resolved, LookupError> {
        let published = self.published()?;
        if let Some(ty) = published.by_code.get(&code) {
            return Ok(Resolved::Type(ty.clone()));
        }
        Ok(match published.by_class.get(&code.class()) {
            Some(class) => Resolved::Class(class.clone()),
            None => Resolved::Unknown,
        })
    }

    /// The sqlstate -> ErrorType mapping, the same one published as `_by_sqlstate`.
    pub fn by_code(&self) -> Result<Arc<ErrorTypeMap>, LookupError> {
        Ok(self.published()?.by_code.clone())
    }

    pub fn by_class(&self) -> Result<Arc<ErrorClassMap>, LookupError> {
        Ok(self.published()?.by_class.clone())
    }

    /// Number of error types in the table this registry was created with.
    pub fn table_len(&self) -> usize {
        self.entries.len()
    }
}
