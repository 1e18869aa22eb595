//! Python bindings for tetrec recordings.
//!
//! The native extension is named `recordings`. It exposes two functions,
//! `is_recording_file(path)` and `get_information(path)`, plus the module
//! attributes `version` and `properties`. All conversion happens in
//! `tetrec-convert`; this crate only maps the dynamic tree onto Python
//! objects and load errors onto Python exceptions.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::path::PathBuf;

use pyo3::prelude::*;

mod error;
mod value;

/// Whether `path` is a recording file this module can read.
#[pyfunction]
fn is_recording_file(py: Python<'_>, path: PathBuf) -> bool {
    py.detach(|| tetrec_convert::is_recording_file(&path))
}

/// Parse the recording at `path` and return it as nested dicts and lists.
///
/// Raises `FileNotFoundError` for a missing path, `RuntimeError` for a
/// file that is not a valid recording, and `OSError` for other OS failures.
#[pyfunction]
fn get_information<'py>(py: Python<'py>, path: PathBuf) -> PyResult<Bound<'py, PyAny>> {
    // Parse and convert without the GIL; only the final object build needs it.
    let root = py
        .detach(|| tetrec_convert::get_information(&path))
        .map_err(error::to_py_err)?;
    value::to_python(py, &root)
}

/// The native `recordings` extension module.
#[pymodule]
fn recordings(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(is_recording_file, m)?)?;
    m.add_function(wrap_pyfunction!(get_information, m)?)?;

    m.add("version", tetrec_convert::VERSION)?;
    m.add(
        "properties",
        value::to_python(m.py(), &tetrec_convert::properties())?,
    )?;
    Ok(())
}
