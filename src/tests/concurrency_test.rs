use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Barrier;
use std::thread;

use crate::pgerrors::sqlstate::{
    ErrorType, InitError, InitState, LookupError, Module, Registry, ERROR_CLASSES, ERROR_TABLE,
};
use crate::tests::common::*;


const THREADS: usize = 8;

#[test]
fn test_concurrent_lookups_share_instances() {
    let (registry, _module) = full_registry();
    let expected = registry.lookup_str("55P03").unwrap();

    let found: Vec<Arc<ErrorType>> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS).map(|_| s.spawn(|| {
            let mut last = None;
            for _ in 0..100 {
                for entry in ERROR_TABLE {
                    assert_eq!(registry.lookup(entry.code).unwrap().code(), entry.code);
                }
                last = Some(registry.lookup_str("55P03").unwrap());
            }
            last.unwrap()
        })).collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for ty in found.iter() {
        assert!(ty.same_as(&expected));
    }
}

#[test_env_log::test]
fn test_racing_initialize() {
    let registry = Registry::new(ERROR_TABLE, ERROR_CLASSES);
    let module = Module::new(TEST_MODULE);
    let barrier = Barrier::new(THREADS);
    let succeeded = AtomicUsize::new(0);

    thread::scope(|s| {
        for _ in 0..THREADS {
            s.spawn(|| {
                barrier.wait();
                match registry.initialize(&module) {
                    Ok(()) => { succeeded.fetch_add(1, Ordering::Relaxed); },
                    Err(e) => assert_eq!(e, InitError::AlreadyInitialized),
                }
                // a loser may get here before the winner has published
                match registry.lookup_str("55P03") {
                    Ok(ty) => assert_eq!(ty.name(), "LockNotAvailable"),
                    Err(e) => assert!(matches!(e, LookupError::NotReady { state: InitState::Initializing })),
                }
            });
        }
    });

    assert_eq!(succeeded.load(Ordering::Relaxed), 1);
    assert_eq!(registry.state(), InitState::Ready);
    // published exactly once
    assert_eq!(module.len(), ERROR_TABLE.len() + ERROR_CLASSES.len() + 2);
}

#[test]
fn test_lookups_during_initialize() {
    let registry = Registry::new(ERROR_TABLE, ERROR_CLASSES);
    let module = Module::new(TEST_MODULE);

    thread::scope(|s| {
        let reader = s.spawn(|| {
            // every answer is either NotReady or the final, complete mapping
            loop {
                match registry.by_code() {
                    Ok(by_code) => {
                        assert_eq!(by_code.len(), ERROR_TABLE.len());
                        break;
                    },
                    Err(LookupError::NotReady { state }) => assert_ne!(state, InitState::Failed),
                    Err(e) => panic!("unexpected error {:?}", e),
                }
                thread::yield_now();
            }
        });
        registry.initialize(&module).unwrap();
        reader.join().unwrap();
    });
}
