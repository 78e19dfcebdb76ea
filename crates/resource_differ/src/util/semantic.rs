use serde::Serialize;
use serde_json::{Map, Value};

use super::quantity::canonical_quantity;

/// Fields backed by optional structs, where an empty object still means something
/// (`emptyDir: {}` selects a volume source). Every other empty object is the
/// same as an absent one.
const MEANINGFUL_EMPTY_OBJECTS: [&str; 9] = [
    "emptyDir",
    "securityContext",
    "seccompProfile",
    "appArmorProfile",
    "affinity",
    "nodeAffinity",
    "podAffinity",
    "podAntiAffinity",
    "lifecycle",
];

/// Optional string fields where `""` is a value of its own rather than unset.
const MEANINGFUL_EMPTY_STRINGS: [&str; 6] = [
    "storageClassName",
    "runtimeClassName",
    "volumeAttributesClassName",
    "localhostProfile",
    "loadBalancerClass",
    "ipFamilyPolicy",
];

/// Maps whose values are resource quantities.
const QUANTITY_MAPS: [&str; 4] = ["limits", "requests", "overhead", "capacity"];

/// Scalar fields holding a single resource quantity.
const QUANTITY_FIELDS: [&str; 1] = ["sizeLimit"];

/// Deep semantic equality between two snapshots of the same type.
///
/// Derived equality is tried first. When it fails, both sides are serialized and
/// normalized before comparing again:
/// - `null` fields, empty lists and empty strings are dropped, so `None` equals
///   `Some(vec![])` and `Some(String::new())`
/// - empty objects are dropped, so `resources: {}` equals no resources and `None`
///   equals `Some(BTreeMap::new())`
/// - resource quantities compare by value, so `1Gi` equals `1024Mi`
///
/// Values that fail to serialize are never equal unless derived equality said so.
pub fn semantic_eq<T: Serialize + PartialEq + ?Sized>(a: &T, b: &T) -> bool {
    if a == b {
        return true;
    }
    match (normalized(a), normalized(b)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

fn normalized<T: Serialize + ?Sized>(value: &T) -> Option<Value> {
    let value = normalize(serde_json::to_value(value).ok()?, None);
    if is_empty(&value) {
        Some(Value::Null)
    } else {
        Some(value)
    }
}

fn normalize(value: Value, key: Option<&str>) -> Value {
    match value {
        Value::Object(fields) => {
            let quantities = key.is_some_and(|k| QUANTITY_MAPS.contains(&k));
            let fields = fields
                .into_iter()
                .filter_map(|(k, v)| {
                    let v = if quantities || QUANTITY_FIELDS.contains(&k.as_str()) {
                        canonicalize(v)
                    } else {
                        normalize(v, Some(k.as_str()))
                    };
                    let droppable = match &v {
                        Value::Object(_) => is_empty(&v) && !MEANINGFUL_EMPTY_OBJECTS.contains(&k.as_str()),
                        Value::String(_) => is_empty(&v) && !MEANINGFUL_EMPTY_STRINGS.contains(&k.as_str()),
                        other => is_empty(other),
                    };
                    (!droppable).then_some((k, v))
                })
                .collect::<Map<String, Value>>();
            Value::Object(fields)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(|v| normalize(v, None)).collect()),
        other => other,
    }
}

fn canonicalize(value: Value) -> Value {
    match value {
        Value::String(raw) => match canonical_quantity(&raw) {
            Some(canonical) => Value::String(canonical),
            None => Value::String(raw),
        },
        other => other,
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}
