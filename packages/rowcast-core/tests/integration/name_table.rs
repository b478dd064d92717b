//! Explicit name-table resolution.

use rowcast_core::{record, BindError, BinderConfig, RowBinder};

use super::helpers::{names, tokens};

record! {
    struct Aliased {
        "id" => id: i64 as I64,
        "id2" => id2: i64 as I64,
    }
}

record! {
    struct WithExcluded {
        "id" => id: i64 as I64,
        "id2" => id2: i64 as I64,
        "-" => id1_2: i64 as I64,
    }
}

#[test]
fn without_table_aliases_resolve_positionally() {
    let binder = RowBinder::<Aliased>::new(BinderConfig::default());
    let record = binder.bind(&mut tokens(&["123"])).unwrap();
    assert_eq!(record.id, 123);
    assert_eq!(record.id2, 0);
}

#[test]
fn table_shorter_than_input_is_rejected_up_front() {
    let binder = RowBinder::<Aliased>::new(BinderConfig::default());
    binder.set_field_names(names(&["id"]));
    let err = binder.bind(&mut tokens(&["123", "33"])).unwrap_err();
    match err {
        BindError::NameTableTooShort {
            table_len,
            input_len,
        } => {
            assert_eq!(table_len, 1);
            assert_eq!(input_len, 2);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn table_mapping_past_input_is_a_config_error() {
    let binder = RowBinder::<Aliased>::new(BinderConfig::default());
    binder.set_field_names(names(&["id", "id2"]));
    let err = binder.bind(&mut tokens(&["123"])).unwrap_err();
    assert!(matches!(err, BindError::NameIndexOutOfRange { .. }));

    let record = binder.bind(&mut tokens(&["123", "33"])).unwrap();
    assert_eq!(record.id, 123);
    assert_eq!(record.id2, 33);
}

#[test]
fn table_reorders_and_ignores_unused_names() {
    let binder = RowBinder::<Aliased>::new(BinderConfig::default());
    binder.set_field_names(names(&["fake", "id", "id2", "ss"]));
    let record = binder.bind(&mut tokens(&["0", "123", "33"])).unwrap();
    assert_eq!(record.id, 123);
    assert_eq!(record.id2, 33);
}

#[test]
fn excluded_field_need_not_exist_in_the_table() {
    let binder = RowBinder::<WithExcluded>::new(BinderConfig::default());
    binder.set_field_names(names(&["fake", "id", "id2", "ss"]));
    let record = binder.bind(&mut tokens(&["d", "123", "33"])).unwrap();
    assert_eq!(record.id, 123);
    assert_eq!(record.id2, 33);
    assert_eq!(record.id1_2, 0);
}

#[test]
fn missing_alias_is_a_config_error() {
    let binder = RowBinder::<Aliased>::new(BinderConfig::default());
    binder.set_field_names(names(&["id"]));
    let err = binder.bind(&mut tokens(&["1"])).unwrap_err();
    match err {
        BindError::NameNotFound { field } => assert_eq!(field, "id2"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn clearing_the_table_restores_positional_resolution() {
    let binder = RowBinder::<Aliased>::new(BinderConfig::default());
    binder.set_field_names(names(&["fake", "id", "id2"]));
    binder.set_field_names(Vec::new());
    let record = binder.bind(&mut tokens(&["1", "2"])).unwrap();
    assert_eq!(record.id, 1);
    assert_eq!(record.id2, 2);
}

#[test]
fn table_from_config_is_installed_at_construction() {
    let binder = RowBinder::<Aliased>::new(BinderConfig {
        field_names: names(&["fake", "id", "id2"]),
        ..Default::default()
    });
    let record = binder.bind(&mut tokens(&["0", "5", "7"])).unwrap();
    assert_eq!(record.id, 5);
    assert_eq!(record.id2, 7);
}

#[test]
fn case_insensitive_matching_when_enabled() {
    record! {
        struct Upper {
            "ID_alias" => id: i64 as I64,
        }
    }
    record! {
        struct Lower {
            "id_alias" => id: i64 as I64,
        }
    }
    record! {
        struct Mixed {
            "Id_alias" => id: i64 as I64,
        }
    }

    let upper = RowBinder::<Upper>::new(BinderConfig {
        case_insensitive_names: true,
        ..Default::default()
    });
    upper.set_field_names(names(&["iD_alias"]));
    assert_eq!(upper.bind(&mut tokens(&["1"])).unwrap().id, 1);

    let lower = RowBinder::<Lower>::new(BinderConfig {
        case_insensitive_names: true,
        ..Default::default()
    });
    lower.set_field_names(names(&["iD_alias"]));
    assert_eq!(lower.bind(&mut tokens(&["1"])).unwrap().id, 1);

    let mixed = RowBinder::<Mixed>::new(BinderConfig {
        case_insensitive_names: true,
        ..Default::default()
    });
    mixed.set_field_names(names(&["iD_alias"]));
    assert_eq!(mixed.bind(&mut tokens(&["1"])).unwrap().id, 1);

    // Without a table the option has nothing to normalize.
    let positional = RowBinder::<Lower>::new(BinderConfig {
        case_insensitive_names: true,
        ..Default::default()
    });
    assert_eq!(positional.bind(&mut tokens(&["1"])).unwrap().id, 1);

    // Sensitive by default.
    let sensitive = RowBinder::<Lower>::new(BinderConfig::default());
    sensitive.set_field_names(names(&["iD_alias"]));
    assert!(matches!(
        sensitive.bind(&mut tokens(&["1"])).unwrap_err(),
        BindError::NameNotFound { .. }
    ));
}
