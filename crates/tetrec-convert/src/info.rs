//! Information-value conversion.
//!
//! [`convert_information_value`] is the only recursive converter: list
//! values convert element by element, so nesting depth, element order and
//! empty lists survive unchanged.

use tetrec_core::{AdditionalInformation, InformationValue};

use crate::value::DynamicValue;

/// Convert one information value, keeping its exact width and signedness.
pub fn convert_information_value(value: &InformationValue) -> DynamicValue {
    match value {
        InformationValue::String(s) => DynamicValue::of_string(s.as_str()),
        InformationValue::F32(v) => DynamicValue::of_f32(*v),
        InformationValue::F64(v) => DynamicValue::of_f64(*v),
        InformationValue::Bool(v) => DynamicValue::of_bool(*v),
        InformationValue::U8(v) => DynamicValue::of_int(*v),
        InformationValue::I8(v) => DynamicValue::of_int(*v),
        InformationValue::U32(v) => DynamicValue::of_int(*v),
        InformationValue::I32(v) => DynamicValue::of_int(*v),
        InformationValue::U64(v) => DynamicValue::of_int(*v),
        InformationValue::I64(v) => DynamicValue::of_int(*v),
        InformationValue::List(values) => {
            DynamicValue::of_list(values.iter().map(convert_information_value))
        }
    }
}

/// Convert the information map, keys verbatim and in insertion order.
pub fn convert_information(information: &AdditionalInformation) -> DynamicValue {
    DynamicValue::of_map(
        information
            .iter()
            .map(|(key, value)| (key, convert_information_value(value))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::DynamicKind;
    use proptest::prelude::*;

    #[test]
    fn scalars_keep_declared_kind() {
        let cases = [
            (InformationValue::from("s"), DynamicKind::String),
            (InformationValue::from(1.0f32), DynamicKind::F32),
            (InformationValue::from(1.0f64), DynamicKind::F64),
            (InformationValue::from(true), DynamicKind::Bool),
            (InformationValue::from(1u8), DynamicKind::U8),
            (InformationValue::from(-1i8), DynamicKind::I8),
            (InformationValue::from(1u32), DynamicKind::U32),
            (InformationValue::from(-1i32), DynamicKind::I32),
            (InformationValue::from(1u64), DynamicKind::U64),
            (InformationValue::from(-1i64), DynamicKind::I64),
        ];
        for (value, kind) in cases {
            assert_eq!(convert_information_value(&value).kind(), kind, "{value:?}");
        }
    }

    #[test]
    fn extreme_values_are_exact() {
        assert_eq!(
            convert_information_value(&InformationValue::U64(u64::MAX)),
            DynamicValue::of_int(u64::MAX)
        );
        assert_eq!(
            convert_information_value(&InformationValue::I64(i64::MIN)),
            DynamicValue::of_int(i64::MIN)
        );
    }

    #[test]
    fn nested_lists_keep_shape() {
        let value = InformationValue::List(vec![
            InformationValue::List(vec![InformationValue::List(vec![]), InformationValue::from(3u8)]),
            InformationValue::from("tail"),
        ]);
        let converted = convert_information_value(&value);

        assert_eq!(converted.depth(), value.depth());
        let outer = converted.as_list().unwrap();
        assert_eq!(outer.len(), 2);
        let inner = outer[0].as_list().unwrap();
        assert_eq!(inner.len(), 2);
        assert_eq!(inner[0], DynamicValue::List(vec![]));
        assert_eq!(inner[1], DynamicValue::of_int(3u8));
        assert_eq!(outer[1].as_str(), Some("tail"));
    }

    #[test]
    fn empty_information_is_empty_map() {
        let converted = convert_information(&AdditionalInformation::new());
        assert_eq!(converted.as_map().map(|m| m.len()), Some(0));
    }

    fn scalar_strategy() -> impl Strategy<Value = InformationValue> {
        prop_oneof![
            any::<String>().prop_map(InformationValue::String),
            any::<f32>().prop_map(InformationValue::F32),
            any::<f64>().prop_map(InformationValue::F64),
            any::<bool>().prop_map(InformationValue::Bool),
            any::<u8>().prop_map(InformationValue::U8),
            any::<i8>().prop_map(InformationValue::I8),
            any::<u32>().prop_map(InformationValue::U32),
            any::<i32>().prop_map(InformationValue::I32),
            any::<u64>().prop_map(InformationValue::U64),
            any::<i64>().prop_map(InformationValue::I64),
        ]
    }

    fn value_strategy() -> impl Strategy<Value = InformationValue> {
        scalar_strategy().prop_recursive(4, 32, 6, |inner| {
            prop::collection::vec(inner, 0..6).prop_map(InformationValue::List)
        })
    }

    fn kind_of(value: &InformationValue) -> DynamicKind {
        match value {
            InformationValue::String(_) => DynamicKind::String,
            InformationValue::F32(_) => DynamicKind::F32,
            InformationValue::F64(_) => DynamicKind::F64,
            InformationValue::Bool(_) => DynamicKind::Bool,
            InformationValue::U8(_) => DynamicKind::U8,
            InformationValue::I8(_) => DynamicKind::I8,
            InformationValue::U32(_) => DynamicKind::U32,
            InformationValue::I32(_) => DynamicKind::I32,
            InformationValue::U64(_) => DynamicKind::U64,
            InformationValue::I64(_) => DynamicKind::I64,
            InformationValue::List(_) => DynamicKind::List,
        }
    }

    fn assert_same_shape(source: &InformationValue, converted: &DynamicValue) {
        assert_eq!(converted.kind(), kind_of(source));
        if let InformationValue::List(values) = source {
            let converted = converted.as_list().unwrap();
            assert_eq!(converted.len(), values.len());
            for (s, c) in values.iter().zip(converted) {
                assert_same_shape(s, c);
            }
        }
    }

    proptest! {
        #[test]
        fn information_keeps_keys_order_and_kinds(
            entries in prop::collection::vec(("[a-z]{1,8}", value_strategy()), 0..12)
        ) {
            let information: AdditionalInformation = entries.into_iter().collect();
            let converted = convert_information(&information);
            let map = converted.as_map().unwrap();

            prop_assert_eq!(map.len(), information.len());
            for ((key, value), (out_key, out_value)) in information.iter().zip(map) {
                prop_assert_eq!(key, out_key.as_str());
                assert_same_shape(value, out_value);
            }
        }

        #[test]
        fn depth_is_preserved(value in value_strategy()) {
            prop_assert_eq!(convert_information_value(&value).depth(), value.depth());
        }
    }
}
