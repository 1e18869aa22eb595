//! The generic dynamic value tree handed to embedding hosts.

use indexmap::IndexMap;

/// An integer that remembers its declared width and signedness.
///
/// There are no conversions between variants: a source `u8` stays a
/// [`DynamicInt::U8`] all the way to the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DynamicInt {
    /// Unsigned 8-bit.
    U8(u8),
    /// Signed 8-bit.
    I8(i8),
    /// Unsigned 32-bit.
    U32(u32),
    /// Signed 32-bit.
    I32(i32),
    /// Unsigned 64-bit.
    U64(u64),
    /// Signed 64-bit.
    I64(i64),
}

impl DynamicInt {
    /// The value widened to `i128`, which holds every variant exactly.
    pub fn to_i128(self) -> i128 {
        match self {
            Self::U8(v) => v.into(),
            Self::I8(v) => v.into(),
            Self::U32(v) => v.into(),
            Self::I32(v) => v.into(),
            Self::U64(v) => v.into(),
            Self::I64(v) => v.into(),
        }
    }
}

macro_rules! impl_from_int {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for DynamicInt {
                fn from(v: $ty) -> Self {
                    Self::$variant(v)
                }
            }
        )*
    };
}

impl_from_int! {
    u8 => U8,
    i8 => I8,
    u32 => U32,
    i32 => I32,
    u64 => U64,
    i64 => I64,
}

/// Shape tag of a [`DynamicValue`], integers split by width/signedness.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DynamicKind {
    /// [`DynamicValue::String`].
    String,
    /// [`DynamicInt::U8`].
    U8,
    /// [`DynamicInt::I8`].
    I8,
    /// [`DynamicInt::U32`].
    U32,
    /// [`DynamicInt::I32`].
    I32,
    /// [`DynamicInt::U64`].
    U64,
    /// [`DynamicInt::I64`].
    I64,
    /// [`DynamicValue::F32`].
    F32,
    /// [`DynamicValue::F64`].
    F64,
    /// [`DynamicValue::Bool`].
    Bool,
    /// [`DynamicValue::List`].
    List,
    /// [`DynamicValue::Map`].
    Map,
}

/// A host-agnostic value: scalars, ordered lists, string-keyed maps.
///
/// Fully owned; nothing in the tree borrows from the recording it was
/// converted from. Maps iterate in insertion order.
///
/// # Examples
///
/// ```
/// use tetrec_convert::{DynamicKind, DynamicValue};
///
/// let point = DynamicValue::of_map([
///     ("x", DynamicValue::of_int(4u8)),
///     ("y", DynamicValue::of_int(0u8)),
/// ]);
/// assert_eq!(point.get("x").map(DynamicValue::kind), Some(DynamicKind::U8));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum DynamicValue {
    /// UTF-8 string.
    String(String),
    /// Integer with its original width and signedness.
    Int(DynamicInt),
    /// 32-bit float.
    F32(f32),
    /// 64-bit float.
    F64(f64),
    /// Boolean.
    Bool(bool),
    /// Ordered list.
    List(Vec<DynamicValue>),
    /// Insertion-ordered map with string keys.
    Map(IndexMap<String, DynamicValue>),
}

impl DynamicValue {
    /// A string value.
    pub fn of_string(s: impl Into<String>) -> Self {
        Self::String(s.into())
    }

    /// An integer value; the width and signedness come from the argument type.
    pub fn of_int(v: impl Into<DynamicInt>) -> Self {
        Self::Int(v.into())
    }

    /// A 32-bit float value.
    pub fn of_f32(v: f32) -> Self {
        Self::F32(v)
    }

    /// A 64-bit float value.
    pub fn of_f64(v: f64) -> Self {
        Self::F64(v)
    }

    /// A boolean value.
    pub fn of_bool(v: bool) -> Self {
        Self::Bool(v)
    }

    /// A list, elements kept in iteration order.
    pub fn of_list(values: impl IntoIterator<Item = DynamicValue>) -> Self {
        Self::List(values.into_iter().collect())
    }

    /// A map, entries kept in iteration order. A repeated key keeps its
    /// first position and takes the last value.
    pub fn of_map<K: Into<String>>(entries: impl IntoIterator<Item = (K, DynamicValue)>) -> Self {
        Self::Map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// The shape of this value.
    pub fn kind(&self) -> DynamicKind {
        match self {
            Self::String(_) => DynamicKind::String,
            Self::Int(DynamicInt::U8(_)) => DynamicKind::U8,
            Self::Int(DynamicInt::I8(_)) => DynamicKind::I8,
            Self::Int(DynamicInt::U32(_)) => DynamicKind::U32,
            Self::Int(DynamicInt::I32(_)) => DynamicKind::I32,
            Self::Int(DynamicInt::U64(_)) => DynamicKind::U64,
            Self::Int(DynamicInt::I64(_)) => DynamicKind::I64,
            Self::F32(_) => DynamicKind::F32,
            Self::F64(_) => DynamicKind::F64,
            Self::Bool(_) => DynamicKind::Bool,
            Self::List(_) => DynamicKind::List,
            Self::Map(_) => DynamicKind::Map,
        }
    }

    /// Map lookup; `None` for missing keys and non-map values.
    pub fn get(&self, key: &str) -> Option<&DynamicValue> {
        self.as_map()?.get(key)
    }

    /// List element; `None` when out of range or not a list.
    pub fn index(&self, i: usize) -> Option<&DynamicValue> {
        self.as_list()?.get(i)
    }

    /// The string, if this is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// The integer, if this is one.
    pub fn as_int(&self) -> Option<DynamicInt> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// The elements, if this is a list.
    pub fn as_list(&self) -> Option<&[DynamicValue]> {
        match self {
            Self::List(values) => Some(values.as_slice()),
            _ => None,
        }
    }

    /// The entries, if this is a map.
    pub fn as_map(&self) -> Option<&IndexMap<String, DynamicValue>> {
        match self {
            Self::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Container nesting depth: scalars are 0, a list or map is one more
    /// than its deepest child.
    pub fn depth(&self) -> usize {
        match self {
            Self::List(values) => 1 + values.iter().map(Self::depth).max().unwrap_or(0),
            Self::Map(entries) => 1 + entries.values().map(Self::depth).max().unwrap_or(0),
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn of_int_keeps_width_and_sign() {
        assert_eq!(DynamicValue::of_int(7u8).kind(), DynamicKind::U8);
        assert_eq!(DynamicValue::of_int(-7i8).kind(), DynamicKind::I8);
        assert_eq!(DynamicValue::of_int(7u32).kind(), DynamicKind::U32);
        assert_eq!(DynamicValue::of_int(-7i32).kind(), DynamicKind::I32);
        assert_eq!(DynamicValue::of_int(7u64).kind(), DynamicKind::U64);
        assert_eq!(DynamicValue::of_int(-7i64).kind(), DynamicKind::I64);
    }

    #[test]
    fn to_i128_is_exact_at_extremes() {
        assert_eq!(DynamicInt::U64(u64::MAX).to_i128(), u64::MAX as i128);
        assert_eq!(DynamicInt::I64(i64::MIN).to_i128(), i64::MIN as i128);
    }

    #[test]
    fn map_keeps_insertion_order() {
        let map = DynamicValue::of_map([
            ("z", DynamicValue::of_bool(true)),
            ("a", DynamicValue::of_bool(false)),
            ("m", DynamicValue::of_string("x")),
        ]);
        let keys: Vec<_> = map.as_map().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }

    #[test]
    fn accessors_reject_wrong_shape() {
        let s = DynamicValue::of_string("x");
        assert!(s.get("x").is_none());
        assert!(s.index(0).is_none());
        assert!(s.as_int().is_none());
        assert_eq!(s.as_str(), Some("x"));
    }

    #[test]
    fn depth_counts_maps_and_lists() {
        assert_eq!(DynamicValue::of_f64(1.0).depth(), 0);
        assert_eq!(DynamicValue::List(vec![]).depth(), 1);
        let nested = DynamicValue::of_map([(
            "a",
            DynamicValue::of_list([DynamicValue::List(vec![])]),
        )]);
        assert_eq!(nested.depth(), 3);
    }
}
