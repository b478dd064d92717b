//! The external nullable wrapper family.

use chrono::{DateTime, TimeZone, Utc};
use rowcast_core::{record, BindError, BinderConfig, Nullable, RowBinder};

use super::helpers::tokens;

record! {
    struct NullableId {
        "" => id: Nullable<i64> as NullI64,
    }
}

record! {
    struct Mixed {
        "small" => small: Nullable<i16> as NullI16,
        "medium" => medium: Nullable<i32> as NullI32,
        "byte" => byte: Nullable<u8> as NullByte,
        "ratio" => ratio: Nullable<f64> as NullF64,
        "label" => label: Nullable<String> as NullStr,
        "flag" => flag: Nullable<bool> as NullBool,
        "date" => date: Nullable<DateTime<Utc>> as NullTime,
    }
}

#[test]
fn present_token_sets_value_and_validity() {
    let binder = RowBinder::<NullableId>::new(BinderConfig::default());
    let record = binder.bind(&mut tokens(&["1", "123", "33"])).unwrap();
    assert!(record.id.valid);
    assert_eq!(record.id.value, 1);
}

#[test]
fn empty_token_leaves_wrapper_absent() {
    let binder = RowBinder::<NullableId>::new(BinderConfig::default());
    let record = binder.bind(&mut tokens(&[""])).unwrap();
    assert!(!record.id.valid);
    assert_eq!(record.id.value, 0);
}

#[test]
fn every_wrapper_kind_round_trips() {
    let binder = RowBinder::<Mixed>::new(BinderConfig {
        replace_comma_with_dot: true,
        ..Default::default()
    });
    let record = binder
        .bind(&mut tokens(&["-7", "100000", "255", "3,25", "label", "t", "01.02.2002"]))
        .unwrap();
    assert_eq!(record.small, Nullable::present(-7));
    assert_eq!(record.medium, Nullable::present(100_000));
    assert_eq!(record.byte, Nullable::present(255));
    assert_eq!(record.ratio, Nullable::present(3.25));
    assert_eq!(record.label, Nullable::present("label".to_string()));
    assert_eq!(record.flag, Nullable::present(true));
    assert_eq!(
        record.date,
        Nullable::present(Utc.with_ymd_and_hms(2002, 2, 1, 0, 0, 0).unwrap())
    );
}

#[test]
fn all_empty_tokens_yield_all_absent() {
    let binder = RowBinder::<Mixed>::new(BinderConfig::default());
    let record = binder
        .bind(&mut tokens(&["", "", "", "", "", "", ""]))
        .unwrap();
    assert!(!record.small.valid);
    assert!(!record.medium.valid);
    assert!(!record.byte.valid);
    assert!(!record.ratio.valid);
    assert!(!record.label.valid);
    assert!(!record.flag.valid);
    assert!(!record.date.valid);
}

#[test]
fn nullable_timestamp_default_layout() {
    record! {
        struct Dated {
            "date" => date: Nullable<DateTime<Utc>> as NullTime,
        }
    }

    let binder = RowBinder::<Dated>::new(BinderConfig::default());
    let record = binder.bind(&mut tokens(&["01.02.2002"])).unwrap();
    assert_eq!(record.date.value.timestamp(), 1_012_521_600);
    assert!(record.date.valid);
}

#[test]
fn malformed_wrapper_token_aborts() {
    let binder = RowBinder::<NullableId>::new(BinderConfig::default());
    let err = binder.bind(&mut tokens(&["abc"])).unwrap_err();
    match err {
        BindError::Convert { field, source } => {
            assert_eq!(field, "id");
            assert!(source.to_string().contains("abc"));
        }
        other => panic!("unexpected error: {other}"),
    }
}
