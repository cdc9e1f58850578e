use std::sync::Arc;

use crate::pgerrors::sqlstate::{
    Attribute, ClassCode, ErrorCategory, ErrorCode, InitError, InitState, LookupError, Module,
    Registry, Resolved, ERROR_CLASSES, ERROR_TABLE, BY_SQLSTATE_ATTR,
};
use crate::tests::common::*;


#[test_env_log::test]
fn test_lock_not_available() {
    let (registry, _module) = ready_registry(LOCK_TABLE, NO_CLASSES);
    assert_eq!(registry.state(), InitState::Ready);

    let ty = registry.lookup("55P03".parse().unwrap()).unwrap();
    assert_eq!(ty.name(), "LockNotAvailable");
    assert_eq!(ty.qualified_name(), "test.errors.LockNotAvailable");
    assert_eq!(ty.category(), ErrorCategory::OperationalError);
    assert_eq!(ty.code().as_str(), "55P03");
    assert!(ty.class().is_none());

    assert_eq!(
        registry.lookup("00000".parse().unwrap()).unwrap_err(),
        LookupError::NotFound { code: "00000".to_string() });
}

#[test_env_log::test]
fn test_every_entry_is_registered() {
    let (registry, module) = full_registry();
    let by_sqlstate = module.by_sqlstate().expect("no _by_sqlstate attribute");
    assert!(Arc::ptr_eq(&by_sqlstate, &registry.by_code().unwrap()));
    assert_eq!(by_sqlstate.len(), ERROR_TABLE.len());

    for entry in ERROR_TABLE {
        let ty = registry.lookup(entry.code).unwrap();
        assert_eq!(ty.code(), entry.code);
        assert_eq!(ty.name(), entry.name);
        assert_eq!(ty.category(), entry.category);
        assert_eq!(ty.qualified_name(), format!("{}.{}", TEST_MODULE, entry.name));

        // one instance, reachable from every index
        assert!(ty.same_as(by_sqlstate.get(&entry.code).unwrap()));
        assert!(ty.same_as(&module.error_type(entry.name).unwrap()));
        assert!(ty.same_as(&registry.lookup_name(entry.name).unwrap()));
        assert!(ty.same_as(&registry.lookup_str(entry.code.as_str()).unwrap()));
    }

    // enumeration keeps table order
    let codes: Vec<ErrorCode> = by_sqlstate.iter().map(|ty| ty.code()).collect();
    let expected: Vec<ErrorCode> = ERROR_TABLE.iter().map(|e| e.code).collect();
    assert_eq!(codes, expected);
}

#[test]
fn test_module_attributes() {
    let (_registry, module) = full_registry();
    // one attribute per type and class, plus _by_sqlstate and _by_class
    assert_eq!(module.len(), ERROR_TABLE.len() + ERROR_CLASSES.len() + 2);
    assert!(matches!(module.get(BY_SQLSTATE_ATTR), Some(Attribute::ErrorTypeMap(_))));
    assert!(matches!(module.get("UniqueViolation"), Some(Attribute::ErrorType(_))));
    assert!(matches!(module.get("ClassDataException"), Some(Attribute::ErrorClass(_))));
    assert_eq!(module.by_class().unwrap().len(), ERROR_CLASSES.len());
    assert!(module.get("NoSuchError").is_none());
}

#[test]
fn test_second_initialize_fails() {
    let (registry, module) = ready_registry(LOCK_TABLE, NO_CLASSES);
    let before = registry.lookup_str("55P03").unwrap();
    let attrs_before = module.attribute_names();

    assert_eq!(registry.initialize(&module), Err(InitError::AlreadyInitialized));
    let other = Module::new("other.errors");
    assert_eq!(registry.initialize(&other), Err(InitError::AlreadyInitialized));

    assert_eq!(registry.state(), InitState::Ready);
    assert!(before.same_as(&registry.lookup_str("55P03").unwrap()));
    assert_eq!(module.attribute_names(), attrs_before);
    assert!(other.is_empty());
}

#[test]
fn test_lookup_miss_has_no_side_effects() {
    let (registry, module) = ready_registry(LOCK_TABLE, NO_CLASSES);
    let attrs_before = module.len();

    for code in &["00000", "22012", "ZZZZZ"] {
        assert_eq!(
            registry.lookup_str(code).unwrap_err(),
            LookupError::NotFound { code: code.to_string() });
    }
    // not a sqlstate at all, still just not found
    assert_eq!(
        registry.lookup_str("nope").unwrap_err(),
        LookupError::NotFound { code: "nope".to_string() });
    assert_eq!(
        registry.lookup_name("UniqueViolation").unwrap_err(),
        LookupError::UnknownName { name: "UniqueViolation".to_string() });

    assert_eq!(registry.by_code().unwrap().len(), 1);
    assert_eq!(module.len(), attrs_before);
    assert!(registry.lookup_str("55P03").is_ok());
}

#[test]
fn test_lookup_before_initialize() {
    let registry = Registry::new(LOCK_TABLE, NO_CLASSES);
    assert_eq!(
        registry.lookup_str("55P03").unwrap_err(),
        LookupError::NotReady { state: InitState::Uninitialized });
    assert!(!registry.is_ready());
    assert_eq!(registry.table_len(), 1);
}

#[test]
fn test_classes() {
    let (registry, _module) = full_registry();
    let class = registry.lookup_class(ClassCode::new("23").unwrap()).unwrap();
    assert_eq!(class.name(), "ClassIntegrityConstraintViolation");
    assert_eq!(class.qualified_name(), "test.errors.ClassIntegrityConstraintViolation");
    assert_eq!(class.category(), ErrorCategory::IntegrityError);

    let ty = registry.lookup_str("23505").unwrap();
    assert_eq!(ty.name(), "UniqueViolation");
    assert!(Arc::ptr_eq(ty.class().unwrap(), &class));

    assert_eq!(
        registry.lookup_class(ClassCode::new("ZZ").unwrap()).unwrap_err(),
        LookupError::NotFound { code: "ZZ".to_string() });
}

#[test]
fn test_category_hierarchy() {
    let (registry, _module) = full_registry();
    let canceled = registry.lookup_str("57014").unwrap();
    assert_eq!(canceled.name(), "QueryCanceled");
    assert_eq!(canceled.category(), ErrorCategory::QueryCanceledError);
    assert!(canceled.is_a(ErrorCategory::OperationalError));
    assert!(canceled.is_a(ErrorCategory::DatabaseError));
    assert!(canceled.is_a(ErrorCategory::Error));
    assert!(!canceled.is_a(ErrorCategory::ProgrammingError));

    let deadlock = registry.lookup_str("40P01").unwrap();
    assert_eq!(deadlock.name(), "DeadlockDetected");
    assert!(deadlock.is_a(ErrorCategory::TransactionRollbackError));
    assert!(deadlock.is_a(ErrorCategory::OperationalError));
}

#[test]
fn test_resolve() {
    let (registry, _module) = full_registry();

    match registry.resolve(ErrorCode::new("23505").unwrap()).unwrap() {
        Resolved::Type(ty) => assert_eq!(ty.name(), "UniqueViolation"),
        r => panic!("expected a type, got {:?}", r),
    }

    // unmapped code in a known class falls back to the class
    let resolved = registry.resolve(ErrorCode::new("23999").unwrap()).unwrap();
    assert!(matches!(&resolved, Resolved::Class(class) if class.name() == "ClassIntegrityConstraintViolation"));
    assert_eq!(resolved.category(), ErrorCategory::IntegrityError);
    assert_eq!(resolved.name(), "ClassIntegrityConstraintViolation");

    let resolved = registry.resolve(ErrorCode::new("ZZ999").unwrap()).unwrap();
    assert!(matches!(resolved, Resolved::Unknown));
    assert_eq!(resolved.category(), ErrorCategory::DatabaseError);
}

#[test]
fn test_lookup_any() {
    let (registry, _module) = full_registry();

    let data = registry.lookup_any("22").unwrap();
    assert!(matches!(&data, Resolved::Class(class) if class.name() == "ClassDataException"));
    assert_eq!(data.category(), ErrorCategory::DataError);

    let fdw = registry.lookup_any("HV").unwrap();
    assert!(matches!(&fdw, Resolved::Class(class) if class.code().as_str() == "HV"));
    assert_eq!(fdw.name(), "ClassForeignDataWrapperError");

    // a full code still finds the type itself
    let lock = registry.lookup_any("55P03").unwrap();
    assert!(lock.error_type().unwrap().same_as(&registry.lookup_str("55P03").unwrap()));

    for code in &["ZZ", "ZZ999", "2", "22x", ""] {
        assert_eq!(
            registry.lookup_any(code).unwrap_err(),
            LookupError::NotFound { code: code.to_string() });
    }
    // the typed lookup only accepts full codes
    assert!(registry.lookup_str("22").is_err());
}
