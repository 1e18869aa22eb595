//! DynamicValue -> Python object conversion.

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};
use pyo3::IntoPyObjectExt;

use tetrec_convert::{DynamicInt, DynamicValue};

/// Build the Python equivalent of `value`: maps become `dict` (insertion
/// order kept), lists become `list`, integers of every width become `int`.
pub(crate) fn to_python<'py>(
    py: Python<'py>,
    value: &DynamicValue,
) -> PyResult<Bound<'py, PyAny>> {
    match value {
        DynamicValue::String(s) => s.as_str().into_bound_py_any(py),
        DynamicValue::Int(i) => int_to_python(py, *i),
        DynamicValue::F32(v) => (*v).into_bound_py_any(py),
        DynamicValue::F64(v) => (*v).into_bound_py_any(py),
        DynamicValue::Bool(v) => (*v).into_bound_py_any(py),
        DynamicValue::List(values) => {
            let list = PyList::empty(py);
            for v in values {
                list.append(to_python(py, v)?)?;
            }
            Ok(list.into_any())
        }
        DynamicValue::Map(entries) => {
            let dict = PyDict::new(py);
            for (k, v) in entries {
                dict.set_item(k, to_python(py, v)?)?;
            }
            Ok(dict.into_any())
        }
    }
}

fn int_to_python(py: Python<'_>, i: DynamicInt) -> PyResult<Bound<'_, PyAny>> {
    match i {
        DynamicInt::U8(v) => v.into_bound_py_any(py),
        DynamicInt::I8(v) => v.into_bound_py_any(py),
        DynamicInt::U32(v) => v.into_bound_py_any(py),
        DynamicInt::I32(v) => v.into_bound_py_any(py),
        DynamicInt::U64(v) => v.into_bound_py_any(py),
        DynamicInt::I64(v) => v.into_bound_py_any(py),
    }
}
