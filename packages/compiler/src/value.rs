//! Structural Values
//!
//! Corresponds to `visitValue` / `ValueVisitor` / `ValueTransformer` in
//! packages/compiler/src/util.ts
//!
//! The shape of a value (sequence, bare string map, primitive, anything else)
//! is fixed when the value is built, so dispatch is a plain `match`.

use indexmap::IndexMap;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

pub type StringMap = IndexMap<String, Value>;

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
}

/// A value whose structure the visitor does not look into, e.g. an
/// instance of a user type. Compared by identity.
#[derive(Clone)]
pub struct OpaqueValue {
    type_name: &'static str,
    inner: Arc<dyn Any + Send + Sync>,
}

impl OpaqueValue {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        OpaqueValue {
            type_name: std::any::type_name::<T>(),
            inner: Arc::new(value),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }
}

impl fmt::Debug for OpaqueValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Opaque<{}>", self.type_name)
    }
}

impl PartialEq for OpaqueValue {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Sequence(Vec<Value>),
    /// A bare key/value map; keys keep insertion order.
    Mapping(StringMap),
    Primitive(Primitive),
    Opaque(OpaqueValue),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Sequence,
    Mapping,
    Primitive,
    Opaque,
}

impl Value {
    pub fn null() -> Self {
        Value::Primitive(Primitive::Null)
    }

    pub fn opaque<T: Any + Send + Sync>(value: T) -> Self {
        Value::Opaque(OpaqueValue::new(value))
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Sequence(_) => ValueKind::Sequence,
            Value::Mapping(_) => ValueKind::Mapping,
            Value::Primitive(_) => ValueKind::Primitive,
            Value::Opaque(_) => ValueKind::Opaque,
        }
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Value::Sequence(_))
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, Value::Mapping(_))
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, Value::Primitive(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Primitive(Primitive::Null))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Primitive(Primitive::String(s)) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Primitive(Primitive::Number(n)) => Some(*n),
            _ => None,
        }
    }
}

impl From<Primitive> for Value {
    fn from(value: Primitive) -> Self {
        Value::Primitive(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Primitive(Primitive::String(value.to_string()))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Primitive(Primitive::String(value))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Primitive(Primitive::Bool(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Primitive(Primitive::Number(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Primitive(Primitive::Number(value as f64))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or_else(Value::null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl From<StringMap> for Value {
    fn from(map: StringMap) -> Self {
        Value::Mapping(map)
    }
}

impl FromIterator<(String, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Value::Mapping(iter.into_iter().collect())
    }
}

/// JSON has no class instances, so it never produces `Opaque`.
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::null(),
            serde_json::Value::Bool(b) => b.into(),
            serde_json::Value::Number(n) => Value::Primitive(Primitive::Number(
                n.as_f64().unwrap_or(f64::NAN),
            )),
            serde_json::Value::String(s) => s.into(),
            serde_json::Value::Array(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => map
                .into_iter()
                .map(|(key, value)| (key, Value::from(value)))
                .collect(),
        }
    }
}

/// One operation per value shape.
pub trait ValueVisitor<C: ?Sized> {
    type Output;

    fn visit_array(&self, arr: &[Value], context: &C) -> Self::Output;
    fn visit_string_map(&self, map: &StringMap, context: &C) -> Self::Output;
    fn visit_primitive(&self, value: &Primitive, context: &C) -> Self::Output;
    fn visit_other(&self, value: &OpaqueValue, context: &C) -> Self::Output;
}

/// Route `value` to exactly one visitor operation and return its result.
///
/// Sequences are checked first, then bare maps, then primitives; everything
/// else goes to `visit_other`.
pub fn visit_value<V, C>(value: &Value, visitor: &V, context: &C) -> V::Output
where
    V: ValueVisitor<C> + ?Sized,
    C: ?Sized,
{
    match value {
        Value::Sequence(items) => visitor.visit_array(items, context),
        Value::Mapping(map) => visitor.visit_string_map(map, context),
        Value::Primitive(primitive) => visitor.visit_primitive(primitive, context),
        Value::Opaque(other) => visitor.visit_other(other, context),
    }
}

/// Deep structural copy.
///
/// Every hook defaults to copying. Override `transform_primitive` /
/// `transform_other` to rewrite leaves, or `transform_array` /
/// `transform_string_map` to reshape containers; children reached through
/// `visit_value(child, self, context)` come back through the same transformer.
pub trait ValueTransformer<C: ?Sized> {
    fn transform_array(&self, arr: &[Value], context: &C) -> Value
    where
        Self: ValueVisitor<C, Output = Value>,
    {
        Value::Sequence(arr.iter().map(|v| visit_value(v, self, context)).collect())
    }

    fn transform_string_map(&self, map: &StringMap, context: &C) -> Value
    where
        Self: ValueVisitor<C, Output = Value>,
    {
        Value::Mapping(
            map.iter()
                .map(|(key, v)| (key.clone(), visit_value(v, self, context)))
                .collect(),
        )
    }

    fn transform_primitive(&self, value: &Primitive, _context: &C) -> Value {
        Value::Primitive(value.clone())
    }

    fn transform_other(&self, value: &OpaqueValue, _context: &C) -> Value {
        Value::Opaque(value.clone())
    }
}

impl<T, C> ValueVisitor<C> for T
where
    T: ValueTransformer<C>,
    C: ?Sized,
{
    type Output = Value;

    fn visit_array(&self, arr: &[Value], context: &C) -> Value {
        self.transform_array(arr, context)
    }

    fn visit_string_map(&self, map: &StringMap, context: &C) -> Value {
        self.transform_string_map(map, context)
    }

    fn visit_primitive(&self, value: &Primitive, context: &C) -> Value {
        self.transform_primitive(value, context)
    }

    fn visit_other(&self, value: &OpaqueValue, context: &C) -> Value {
        self.transform_other(value, context)
    }
}

/// The identity transformer.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeepCopy;

impl<C: ?Sized> ValueTransformer<C> for DeepCopy {}
