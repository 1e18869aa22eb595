//! Keyed header information attached to a recording.

use indexmap::IndexMap;

/// A value stored under one key of [`AdditionalInformation`].
///
/// Exactly one of eleven shapes. The list variant nests arbitrarily and
/// may be empty. Values form a finite owned tree: there is no way to
/// build a cycle.
///
/// # Examples
///
/// ```
/// use tetrec_core::InformationValue;
///
/// let nested = InformationValue::List(vec![
///     InformationValue::from(1u8),
///     InformationValue::List(vec![]),
/// ]);
/// assert_eq!(nested.depth(), 2);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum InformationValue {
    /// UTF-8 string.
    String(String),
    /// 32-bit float.
    F32(f32),
    /// 64-bit float.
    F64(f64),
    /// Boolean.
    Bool(bool),
    /// Unsigned 8-bit integer.
    U8(u8),
    /// Signed 8-bit integer.
    I8(i8),
    /// Unsigned 32-bit integer.
    U32(u32),
    /// Signed 32-bit integer.
    I32(i32),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// Signed 64-bit integer.
    I64(i64),
    /// Ordered sequence of values.
    List(Vec<InformationValue>),
}

impl InformationValue {
    /// Nesting depth: scalars are 0, a list is one more than its deepest
    /// element (an empty list is 1).
    pub fn depth(&self) -> usize {
        match self {
            Self::List(values) => 1 + values.iter().map(Self::depth).max().unwrap_or(0),
            _ => 0,
        }
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for InformationValue {
                fn from(v: $ty) -> Self {
                    Self::$variant(v)
                }
            }
        )*
    };
}

impl_from_scalar! {
    String => String,
    f32 => F32,
    f64 => F64,
    bool => Bool,
    u8 => U8,
    i8 => I8,
    u32 => U32,
    i32 => I32,
    u64 => U64,
    i64 => I64,
    Vec<InformationValue> => List,
}

impl From<&str> for InformationValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_owned())
    }
}

/// Insertion-ordered string-keyed map of [`InformationValue`]s.
///
/// Keys are unique. Iteration yields entries in the order they were
/// first added; replacing an existing key keeps its position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdditionalInformation {
    values: IndexMap<String, InformationValue>,
}

impl AdditionalInformation {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a value. Returns the previous value for `key`, if any.
    pub fn add(
        &mut self,
        key: impl Into<String>,
        value: impl Into<InformationValue>,
    ) -> Option<InformationValue> {
        self.values.insert(key.into(), value.into())
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&InformationValue> {
        self.values.get(key)
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &InformationValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for AdditionalInformation
where
    K: Into<String>,
    V: Into<InformationValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut info = Self::new();
        for (k, v) in iter {
            info.add(k, v);
        }
        info
    }
}
