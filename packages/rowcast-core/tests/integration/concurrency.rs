//! Shared-binder concurrency: conversions race registrations and name-table
//! swaps without tearing or deadlock.

use std::sync::Arc;

use ntest::timeout;
use rowcast_core::convert::builtin::Int64Converter;
use rowcast_core::{record, BinderConfig, RowBinder};

use super::helpers::{names, tokens};

record! {
    struct Row {
        "id" => id: i64 as I64,
        "id2" => id2: i64 as I64,
    }
}

#[test]
#[timeout(10000)]
fn concurrent_binds_with_registration() {
    let binder = Arc::new(RowBinder::<Row>::new(BinderConfig::default()));

    let registrar = {
        let binder = binder.clone();
        std::thread::spawn(move || {
            for _ in 0..200 {
                binder.register_converter("i64", Arc::new(Int64Converter));
            }
        })
    };

    let binders: Vec<_> = (0..4)
        .map(|_| {
            let binder = binder.clone();
            std::thread::spawn(move || {
                for i in 0..200i64 {
                    let mut row = tokens(&[&i.to_string(), &(i * 2).to_string()]);
                    let record = binder.bind(&mut row).unwrap();
                    assert_eq!(record.id, i);
                    assert_eq!(record.id2, i * 2);
                }
            })
        })
        .collect();

    registrar.join().unwrap();
    for handle in binders {
        handle.join().unwrap();
    }
}

#[test]
#[timeout(10000)]
fn name_table_swap_affects_subsequent_calls_only() {
    let binder = Arc::new(RowBinder::<Row>::new(BinderConfig::default()));

    let swapper = {
        let binder = binder.clone();
        std::thread::spawn(move || {
            for _ in 0..100 {
                binder.set_field_names(names(&["id", "id2"]));
                binder.set_field_names(names(&["id2", "id"]));
            }
            binder.set_field_names(names(&["id2", "id"]));
        })
    };

    {
        let binder = binder.clone();
        let reader = std::thread::spawn(move || {
            for _ in 0..100 {
                // Either table orientation is valid mid-swap; the bind must
                // always see a consistent one.
                let record = binder.bind(&mut tokens(&["1", "2"])).unwrap();
                assert!(
                    (record.id == 1 && record.id2 == 2) || (record.id == 2 && record.id2 == 1)
                );
            }
        });
        reader.join().unwrap();
    }

    swapper.join().unwrap();
    let record = binder.bind(&mut tokens(&["1", "2"])).unwrap();
    assert_eq!(record.id, 2);
    assert_eq!(record.id2, 1);
}
