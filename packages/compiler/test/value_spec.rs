//! Value Visitor Tests
//!
//! Covers `visitValue` dispatch and `ValueTransformer` from util.ts

use angular_compiler::value::{
    visit_value, DeepCopy, OpaqueValue, Primitive, StringMap, Value, ValueTransformer,
    ValueVisitor,
};
use std::cell::RefCell;

/// Records which operation ran and returns a marker.
#[derive(Default)]
struct Recorder {
    calls: RefCell<Vec<&'static str>>,
}

impl ValueVisitor<str> for Recorder {
    type Output = String;

    fn visit_array(&self, arr: &[Value], context: &str) -> String {
        self.calls.borrow_mut().push("array");
        format!("{}:array({})", context, arr.len())
    }

    fn visit_string_map(&self, map: &StringMap, context: &str) -> String {
        self.calls.borrow_mut().push("map");
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        format!("{}:map({})", context, keys.join(","))
    }

    fn visit_primitive(&self, value: &Primitive, context: &str) -> String {
        self.calls.borrow_mut().push("primitive");
        format!("{}:primitive({:?})", context, value)
    }

    fn visit_other(&self, value: &OpaqueValue, context: &str) -> String {
        self.calls.borrow_mut().push("other");
        format!("{}:other({})", context, value.type_name())
    }
}

fn map_of(entries: &[(&str, Value)]) -> Value {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

#[test]
fn should_visit_sequences_as_arrays() {
    let recorder = Recorder::default();
    let value = Value::from(vec!["a", "b", "c"]);

    let result = visit_value(&value, &recorder, "ctx");

    assert_eq!(result, "ctx:array(3)");
    assert_eq!(*recorder.calls.borrow(), vec!["array"]);
}

#[test]
fn should_visit_empty_sequence_as_array() {
    let recorder = Recorder::default();
    let result = visit_value(&Value::Sequence(vec![]), &recorder, "");
    assert_eq!(result, ":array(0)");
}

#[test]
fn should_visit_bare_maps_with_keys_in_insertion_order() {
    let recorder = Recorder::default();
    let value = map_of(&[
        ("zeta", Value::from(1i64)),
        ("alpha", Value::from(2i64)),
        ("mid", Value::null()),
    ]);

    let result = visit_value(&value, &recorder, "ctx");

    assert_eq!(result, "ctx:map(zeta,alpha,mid)");
    assert_eq!(*recorder.calls.borrow(), vec!["map"]);
}

#[test]
fn should_visit_null_numbers_strings_and_booleans_as_primitives() {
    let recorder = Recorder::default();
    let inputs = vec![
        Value::null(),
        Value::from(None::<String>),
        Value::from(4.5),
        Value::from("text"),
        Value::from(false),
    ];

    let results: Vec<String> = inputs
        .iter()
        .map(|v| visit_value(v, &recorder, "p"))
        .collect();

    assert_eq!(
        results,
        vec![
            "p:primitive(Null)",
            "p:primitive(Null)",
            "p:primitive(Number(4.5))",
            "p:primitive(String(\"text\"))",
            "p:primitive(Bool(false))",
        ]
    );
    assert!(recorder.calls.borrow().iter().all(|c| *c == "primitive"));
}

#[test]
fn should_not_treat_opaque_collections_as_sequences_or_maps() {
    struct Indexed(Vec<u32>);

    let recorder = Recorder::default();
    let as_vec = Value::opaque(vec![1u32, 2, 3]);
    let as_struct = Value::opaque(Indexed(vec![1]));

    visit_value(&as_vec, &recorder, "o");
    let result = visit_value(&as_struct, &recorder, "o");

    assert!(result.starts_with("o:other("));
    assert!(result.ends_with("Indexed)"));
    assert_eq!(*recorder.calls.borrow(), vec!["other", "other"]);

    // the wrapped value is still reachable by its concrete type
    match &as_struct {
        Value::Opaque(other) => {
            let indexed = other.downcast_ref::<Indexed>().unwrap();
            assert_eq!(indexed.0, vec![1]);
        }
        other => panic!("expected opaque, got {:?}", other),
    }
}

#[test]
fn should_deep_copy_nested_structures() {
    let instance = Value::opaque(String::from("instance"));
    let value = map_of(&[
        ("list", Value::Sequence(vec![Value::from(1i64), map_of(&[("x", Value::from(true))])])),
        ("obj", instance.clone()),
        ("name", Value::from("n")),
    ]);

    let copy = visit_value(&value, &DeepCopy, &());

    assert_eq!(copy, value);
    // opaque values are passed through, not cloned structurally
    match &copy {
        Value::Mapping(map) => assert_eq!(map["obj"], instance),
        other => panic!("expected mapping, got {:?}", other),
    }
}

#[test]
fn should_let_transformers_rewrite_leaves() {
    /// Upper-cases every string, leaving structure alone.
    struct Shout;

    impl ValueTransformer<()> for Shout {
        fn transform_primitive(&self, value: &Primitive, _context: &()) -> Value {
            match value {
                Primitive::String(s) => Value::from(s.to_uppercase()),
                other => Value::Primitive(other.clone()),
            }
        }
    }

    let value = map_of(&[
        ("b", Value::from(vec!["x", "y"])),
        ("a", Value::from("z")),
        ("n", Value::from(3i64)),
    ]);

    let result = visit_value(&value, &Shout, &());

    assert_eq!(
        result,
        map_of(&[
            ("b", Value::from(vec!["X", "Y"])),
            ("a", Value::from("Z")),
            ("n", Value::from(3i64)),
        ])
    );
}

#[test]
fn should_use_context_in_transformers() {
    struct Prefix;

    impl ValueTransformer<String> for Prefix {
        fn transform_primitive(&self, value: &Primitive, context: &String) -> Value {
            match value {
                Primitive::String(s) => Value::from(format!("{}{}", context, s)),
                other => Value::Primitive(other.clone()),
            }
        }
    }

    let result = visit_value(&Value::from(vec!["a", "b"]), &Prefix, &"ng-".to_string());
    assert_eq!(result, Value::from(vec!["ng-a", "ng-b"]));
}

#[test]
fn should_convert_json_at_the_boundary() {
    let json = serde_json::json!({
        "items": [1, "two", null],
        "flag": true,
    });

    let recorder = Recorder::default();
    let value = Value::from(json);

    assert_eq!(visit_value(&value, &recorder, "j"), "j:map(items,flag)");
    match value {
        Value::Mapping(map) => {
            assert_eq!(
                map["items"],
                Value::Sequence(vec![Value::from(1i64), Value::from("two"), Value::null()])
            );
            assert_eq!(visit_value(&map["items"], &recorder, "j"), "j:array(3)");
        }
        other => panic!("expected mapping, got {:?}", other),
    }
}

#[test]
fn should_recurse_through_overridden_containers() {
    /// Drops nulls from every sequence, at any depth.
    struct DropNulls;

    impl ValueTransformer<()> for DropNulls {
        fn transform_array(&self, arr: &[Value], context: &()) -> Value {
            Value::Sequence(
                arr.iter()
                    .filter(|v| !v.is_null())
                    .map(|v| visit_value(v, self, context))
                    .collect(),
            )
        }
    }

    let value = Value::Sequence(vec![
        Value::from(1i64),
        Value::null(),
        map_of(&[
            ("inner", Value::Sequence(vec![Value::null(), Value::from("a")])),
            ("kept", Value::null()),
        ]),
    ]);

    let result = visit_value(&value, &DropNulls, &());

    // the map itself goes through the default copy; nulls in maps stay
    assert_eq!(
        result,
        Value::Sequence(vec![
            Value::from(1i64),
            map_of(&[
                ("inner", Value::Sequence(vec![Value::from("a")])),
                ("kept", Value::null()),
            ]),
        ])
    );
}

#[test]
fn should_rewrite_map_keys_and_keep_leaf_hooks() {
    /// Camel-cases keys and upper-cases strings.
    struct Normalize;

    impl ValueTransformer<()> for Normalize {
        fn transform_string_map(&self, map: &StringMap, context: &()) -> Value {
            map.iter()
                .map(|(key, v)| {
                    (
                        angular_compiler::util::dash_case_to_camel_case(key),
                        visit_value(v, self, context),
                    )
                })
                .collect()
        }

        fn transform_primitive(&self, value: &Primitive, _context: &()) -> Value {
            match value {
                Primitive::String(s) => Value::from(s.to_uppercase()),
                other => Value::Primitive(other.clone()),
            }
        }
    }

    let value = map_of(&[(
        "aria-label",
        Value::Sequence(vec![map_of(&[("data-id", Value::from("x"))])]),
    )]);

    assert_eq!(
        visit_value(&value, &Normalize, &()),
        map_of(&[(
            "ariaLabel",
            Value::Sequence(vec![map_of(&[("dataId", Value::from("X"))])]),
        )])
    );
}
