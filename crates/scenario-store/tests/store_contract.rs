//! Contract tests run against every store implementation

use scenario_name::ScenarioName;
use scenario_store::prelude::*;
use std::sync::Barrier;
use std::thread;

fn record(canonical: &str) -> ScenarioRecord {
    let name: ScenarioName = canonical.parse().unwrap();
    let resource_ref = ResourceRef::new("/scenarios/objects", &name);
    ScenarioRecord::new(name, resource_ref)
}

fn lifecycle(store: &dyn ScenarioStore) {
    let name: ScenarioName = "localhost:scenario_0001".parse().unwrap();
    assert!(!store.exists(&name));
    assert!(store.is_empty());

    store.insert(record("localhost:scenario_0001")).unwrap();
    assert!(store.exists(&name));

    let dup = store.insert(record("localhost:scenario_0001")).unwrap_err();
    assert_eq!(dup, StoreError::AlreadyExists { name: name.clone() });
    assert!(dup.to_string().contains("already exists"));
    assert!(dup.to_string().contains("localhost:scenario_0001"));

    let removed = store.remove(&name).unwrap();
    assert_eq!(removed.name(), &name);
    assert!(!store.exists(&name));
    assert!(matches!(store.remove(&name), Err(StoreError::NotFound { .. })));

    // Absent again, so the name can be reused
    store.insert(record("localhost:scenario_0001")).unwrap();
    assert_eq!(store.len(), 1);
}

fn count_matches_inserts(store: &dyn ScenarioStore) {
    for i in 0..20 {
        store.insert(record(&format!("localhost:s_{i}"))).unwrap();
    }
    for i in (0..20).step_by(4) {
        store.remove(&format!("localhost:s_{i}").parse().unwrap()).unwrap();
    }

    let listed = store.list();
    assert_eq!(listed.len(), 15);
    assert_eq!(store.len(), 15);
    for rec in &listed {
        assert_eq!(store.get(rec.name()).as_ref(), Some(rec));
    }
}

fn same_host_different_local_and_vice_versa(store: &dyn ScenarioStore) {
    store.insert(record("a:x")).unwrap();
    store.insert(record("b:x")).unwrap();
    store.insert(record("a:y")).unwrap();
    assert_eq!(store.len(), 3);
}

fn concurrent_duplicate_insert(store: &dyn ScenarioStore) {
    const CALLERS: usize = 16;
    let barrier = Barrier::new(CALLERS);

    let results: Vec<Result<(), StoreError>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..CALLERS)
            .map(|_| {
                scope.spawn(|| {
                    barrier.wait();
                    store.insert(record("localhost:contended"))
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let successes = results.iter().filter(|r| r.is_ok()).count();
    let conflicts = results
        .iter()
        .filter(|r| matches!(r, Err(StoreError::AlreadyExists { .. })))
        .count();

    assert_eq!(successes, 1);
    assert_eq!(conflicts, CALLERS - 1);
    assert_eq!(store.len(), 1);
}

fn concurrent_distinct_inserts(store: &dyn ScenarioStore) {
    thread::scope(|scope| {
        for t in 0..8 {
            scope.spawn(move || {
                for i in 0..50 {
                    store.insert(record(&format!("host_{t}:s_{i}"))).unwrap();
                }
            });
        }
    });

    assert_eq!(store.list().len(), 400);
}

macro_rules! store_contract {
    ($module:ident, $ctor:expr) => {
        mod $module {
            use super::*;

            #[test]
            fn lifecycle() {
                super::lifecycle(&$ctor);
            }

            #[test]
            fn count_matches_inserts() {
                super::count_matches_inserts(&$ctor);
            }

            #[test]
            fn host_and_local_both_key() {
                super::same_host_different_local_and_vice_versa(&$ctor);
            }

            #[test]
            fn concurrent_duplicate_insert() {
                super::concurrent_duplicate_insert(&$ctor);
            }

            #[test]
            fn concurrent_distinct_inserts() {
                super::concurrent_distinct_inserts(&$ctor);
            }
        }
    };
}

store_contract!(sharded, ShardedScenarioStore::new());
store_contract!(ordered, OrderedScenarioStore::new());
