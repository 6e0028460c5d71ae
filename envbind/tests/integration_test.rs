//! Integration tests

use envbind::{
    bind, BindError, Bindable, Env, EnvField, FieldDescriptor, FieldType, Kind, Snapshot, Value,
};
use serial_test::serial;
use std::env;

#[derive(Debug, Default, PartialEq, Bindable)]
struct Example {
    #[env = "foo"]
    pub a: String,
    #[env(name = "B")]
    pub b: i64,
    c: String,
    #[env = "-"]
    pub d: String,
    #[env(skip)]
    e: String,
    #[env = "F"]
    pub f: bool,
    #[env = "G"]
    pub g: f64,
}

fn fixture() -> Snapshot {
    Snapshot::from([
        ("foo", "hello"),
        ("B", "342"),
        ("c", "w"),
        ("s", "w"),
        ("F", "true"),
        ("G", "2.42"),
        ("D", "word"),
        ("d", "word"),
        ("e", "word"),
    ])
}

#[test]
fn test_round_trip() {
    let mut actual = Example::default();
    bind(&mut actual, &fixture()).unwrap();

    let expected = Example {
        a: "hello".to_string(),
        b: 342,
        f: true,
        g: 2.42,
        ..Example::default()
    };
    assert_eq!(actual, expected);
}

#[test]
fn test_private_and_skipped_fields_untouched() {
    let mut actual = Example {
        c: "private".to_string(),
        d: "skipped".to_string(),
        e: "both".to_string(),
        ..Example::default()
    };
    bind(&mut actual, &fixture()).unwrap();

    assert_eq!(actual.c, "private");
    assert_eq!(actual.d, "skipped");
    assert_eq!(actual.e, "both");
}

#[derive(Debug, Default, Bindable)]
struct Tagged {
    #[env = "SOURCE"]
    pub value: String,
}

#[test]
fn test_tag_wins_over_field_name() {
    let env = Snapshot::from([("SOURCE", "tagged"), ("value", "by-name")]);
    let config = Tagged::from_snapshot(&env).unwrap();
    assert_eq!(config.value, "tagged");
}

#[allow(non_snake_case)]
#[derive(Debug, Default, Bindable)]
struct Untagged {
    pub Port: i64,
}

#[test]
fn test_field_name_is_case_sensitive() {
    let env = Snapshot::from([("PORT", "1"), ("port", "2"), ("Port", "3")]);
    let config = Untagged::from_snapshot(&env).unwrap();
    assert_eq!(config.Port, 3);

    let err = Untagged::from_snapshot(&Snapshot::from([("PORT", "1")])).unwrap_err();
    assert_eq!(
        err,
        BindError::NotSet {
            key: "Port".to_string(),
            type_name: "i64".to_string(),
        }
    );
}

#[derive(Debug, Default, Bindable)]
struct RawIdent {
    pub r#type: String,
}

#[test]
fn test_raw_identifier_uses_plain_name() {
    let config = RawIdent::from_snapshot(&Snapshot::from([("type", "fast")])).unwrap();
    assert_eq!(config.r#type, "fast");
}

#[derive(Debug, Default, Bindable)]
struct Optionals {
    pub s: Option<String>,
    pub i: Option<i64>,
    pub f: Option<f64>,
    pub b: Option<bool>,
}

#[test]
fn test_optional_fields_absent() {
    let config = Optionals::from_snapshot(&Snapshot::new()).unwrap();
    assert_eq!(config.s, None);
    assert_eq!(config.i, None);
    assert_eq!(config.f, None);
    assert_eq!(config.b, None);
}

#[test]
fn test_optional_fields_present() {
    let env = Snapshot::from([("s", "foo"), ("i", "202"), ("f", "2.320"), ("b", "t")]);
    let config = Optionals::from_snapshot(&env).unwrap();
    assert_eq!(config.s.as_deref(), Some("foo"));
    assert_eq!(config.i, Some(202));
    assert_eq!(config.f, Some(2.32));
    assert_eq!(config.b, Some(true));
}

#[test]
fn test_optional_empty_values() {
    let config = Optionals::from_snapshot(&Snapshot::from([("s", "")])).unwrap();
    assert_eq!(config.s, Some(String::new()));

    for key in ["i", "f", "b"] {
        let env = Snapshot::from([(key, "")]);
        let err = Optionals::from_snapshot(&env).unwrap_err();
        assert!(
            matches!(err, BindError::Parse { key: ref k, ref value, .. } if k == key && value.is_empty()),
            "{key}: {err}"
        );
    }
}

#[derive(Debug, Default, Bindable)]
struct Buffers {
    pub raw: Vec<u8>,
    pub maybe: Option<Vec<u8>>,
}

#[test]
fn test_byte_buffers() {
    let unset = Buffers::from_snapshot(&Snapshot::new()).unwrap();
    assert!(unset.raw.is_empty());
    assert_eq!(unset.maybe, None);

    let empty = Buffers::from_snapshot(&Snapshot::from([("raw", ""), ("maybe", "")])).unwrap();
    assert!(empty.raw.is_empty());
    assert_eq!(empty.maybe, Some(Vec::new()));

    let set = Buffers::from_snapshot(&Snapshot::from([("raw", "foo"), ("maybe", "foo")])).unwrap();
    assert_eq!(set.raw, b"foo");
    assert_eq!(set.maybe.as_deref(), Some(&b"foo"[..]));
}

#[derive(Debug, Default, Bindable)]
struct Numbers {
    pub first: String,
    pub count: i64,
    pub last: String,
}

#[test]
fn test_malformed_value_aborts() {
    let env = Snapshot::from([("first", "a"), ("count", "foo"), ("last", "z")]);
    let mut config = Numbers::default();
    let err = bind(&mut config, &env).unwrap_err();

    assert_eq!(
        err.to_string(),
        r#"cannot parse "foo" into type i64 (environment variable 'count')"#
    );
    assert_eq!(config.first, "a");
    assert_eq!(config.count, 0);
    assert_eq!(config.last, "");
}

#[test]
fn test_required_number_not_set() {
    let env = Snapshot::from([("first", "a")]);
    let err = Numbers::from_snapshot(&env).unwrap_err();
    assert!(matches!(err, BindError::NotSet { ref key, .. } if key == "count"));
}

#[test]
fn test_required_number_empty_is_parse_error() {
    let env = Snapshot::from([("count", "")]);
    let err = Numbers::from_snapshot(&env).unwrap_err();
    assert!(matches!(err, BindError::Parse { ref value, .. } if value.is_empty()));
}

#[derive(Debug, Default, Bindable)]
struct WithList {
    pub name: String,
    pub tags: Vec<String>,
    pub after: String,
}

#[test]
fn test_non_byte_sequence_is_unsupported() {
    let env = Snapshot::from([("name", "svc"), ("tags", "a,b"), ("after", "x")]);
    let mut config = WithList::default();
    let err = bind(&mut config, &env).unwrap_err();

    assert_eq!(
        err,
        BindError::Unsupported {
            field: "tags".to_string(),
            type_name: "Vec<String>".to_string(),
        }
    );
    assert_eq!(config.name, "svc");
    assert!(config.tags.is_empty());
    assert_eq!(config.after, "");
}

/// A hand-written table describing a field of a width the binder cannot parse.
#[derive(Debug, Default)]
struct Narrow {
    name: String,
    width: i32,
    height: i64,
}

impl Bindable for Narrow {
    fn fields() -> &'static [FieldDescriptor] {
        const FIELDS: &[FieldDescriptor] = &[
            FieldDescriptor::new("name", FieldType::Required(Kind::Str)),
            FieldDescriptor::new("width", FieldType::Unsupported("i32")),
            FieldDescriptor::new("height", FieldType::Required(Kind::Int64)),
        ];
        FIELDS
    }

    fn assign(&mut self, index: usize, value: Value) -> Result<(), BindError> {
        match index {
            0 => self.name = EnvField::from_value(value)?,
            2 => self.height = EnvField::from_value(value)?,
            _ => return Err(BindError::usage(format!("no field #{index}"))),
        }
        Ok(())
    }
}

#[test]
fn test_unsupported_width_is_fatal() {
    let env = Snapshot::from([("name", "box"), ("width", "3"), ("height", "4")]);
    let mut record = Narrow::default();
    let err = bind(&mut record, &env).unwrap_err();

    assert_eq!(err.to_string(), "unsupported underlying type: i32 (field 'width')");
    assert_eq!(record.name, "box");
    assert_eq!(record.width, 0);
    assert_eq!(record.height, 0);
}

#[derive(Debug, Default, Bindable)]
#[env(prefix = "APP_")]
struct Prefixed {
    pub name: String,
    #[env = "PORT"]
    pub port: Option<i64>,
    #[env = "-"]
    pub ignored: String,
}

#[test]
fn test_prefix_applies_to_name_and_tag() {
    let env = Snapshot::from([
        ("APP_name", "svc"),
        ("APP_PORT", "8080"),
        ("PORT", "1"),
        ("APP_-", "x"),
        ("APP_ignored", "x"),
    ]);
    let config = Prefixed::from_snapshot(&env).unwrap();
    assert_eq!(config.name, "svc");
    assert_eq!(config.port, Some(8080));
    assert_eq!(config.ignored, "");
}

#[test]
fn test_descriptor_table() {
    let fields = Example::fields();
    assert_eq!(fields.len(), 7);
    assert_eq!(fields[0].name, "a");
    assert_eq!(fields[0].tag, "foo");
    assert_eq!(fields[0].ty, FieldType::Required(Kind::Str));
    assert!(!fields[2].visible);
    assert_eq!(fields[3].tag, "-");
    assert_eq!(fields[6].ty, FieldType::Required(Kind::Float64));
    assert_eq!(Prefixed::PREFIX, "APP_");
}

#[test]
fn test_assign_rejects_skipped_index() {
    let mut record = Example::default();
    let err = record.assign(2, Value::Str("x".to_string())).unwrap_err();
    assert!(matches!(err, BindError::Usage { .. }));
    assert_eq!(record.c, "");
}

#[test]
fn test_snapshot_from_json_fixture() {
    let env: Snapshot = serde_json::from_str(
        r#"{"foo": "hello", "B": "342", "F": "1", "G": "-0.5", "EMPTY": ""}"#,
    )
    .unwrap();
    assert!(env.exists("EMPTY"));

    let config = Example::from_snapshot(&env).unwrap();
    assert_eq!(config.a, "hello");
    assert_eq!(config.b, 342);
    assert!(config.f);
    assert_eq!(config.g, -0.5);
}

#[test]
fn test_bind_from_hash_map() {
    let vars: std::collections::HashMap<String, String> =
        [("foo", "hi"), ("B", "1"), ("F", "f"), ("G", "0")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
    let config = Example::from_snapshot(&vars).unwrap();
    assert_eq!(config.a, "hi");
    assert!(!config.f);
}

#[test]
#[serial]
fn test_from_process_env() {
    env::set_var("ENVBIND_IT_NAME", "live");
    env::set_var("ENVBIND_IT_PORT", "");

    #[derive(Debug, Default, Bindable)]
    #[env(prefix = "ENVBIND_IT_")]
    struct Live {
        #[env = "NAME"]
        pub name: String,
        #[env = "PORT"]
        pub port: Option<String>,
        #[env = "MISSING"]
        pub missing: Option<bool>,
    }

    let config = Live::from_env().unwrap();
    assert_eq!(config.name, "live");
    assert_eq!(config.port, Some(String::new()));
    assert_eq!(config.missing, None);

    env::remove_var("ENVBIND_IT_NAME");
    env::remove_var("ENVBIND_IT_PORT");
}

#[test]
#[serial]
fn test_from_process_env_error_context() {
    env::set_var("ENVBIND_IT_COUNT", "many");

    #[derive(Debug, Default, Bindable)]
    struct Counter {
        #[env = "ENVBIND_IT_COUNT"]
        pub count: i64,
    }

    let mut counter = Counter::default();
    let err = envbind::from_env(&mut counter).unwrap_err();
    assert!(err.to_string().contains("Counter"), "{err}");
    assert!(matches!(
        err.downcast_ref::<BindError>(),
        Some(BindError::Parse { value, .. }) if value == "many"
    ));

    env::remove_var("ENVBIND_IT_COUNT");
}

fn load_counter() -> envbind::anyhow::Result<i64> {
    #[derive(Debug, Default, Bindable)]
    struct Counter {
        #[env = "ENVBIND_IT_REEXPORT"]
        pub count: i64,
    }

    Ok(Counter::from_env()?.count)
}

#[test]
#[serial]
fn test_anyhow_reexport_for_from_env() {
    env::set_var("ENVBIND_IT_REEXPORT", "12");
    assert_eq!(load_counter().unwrap(), 12);

    env::set_var("ENVBIND_IT_REEXPORT", "1e400");
    assert!(load_counter().is_err());

    env::remove_var("ENVBIND_IT_REEXPORT");
}

#[derive(Debug, Default, Bindable)]
struct Ratio {
    pub scale: f64,
}

#[test]
fn test_float_overflow_is_parse_error() {
    let err = Ratio::from_snapshot(&Snapshot::from([("scale", "1e400")])).unwrap_err();
    assert_eq!(
        err,
        BindError::Parse {
            key: "scale".to_string(),
            value: "1e400".to_string(),
            type_name: "f64".to_string(),
        }
    );
}
