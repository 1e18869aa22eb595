//! LoadError -> Python exception mapping.

use pyo3::exceptions::{PyFileNotFoundError, PyIOError, PyRuntimeError};
use pyo3::PyErr;

use tetrec_convert::LoadError;

/// Python exception class a load error is raised as.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ExceptionClass {
    FileNotFound,
    Runtime,
    Os,
}

fn exception_class(err: &LoadError) -> ExceptionClass {
    match err {
        LoadError::NotFound { .. } => ExceptionClass::FileNotFound,
        LoadError::ParseFailed { .. } => ExceptionClass::Runtime,
        LoadError::Io { .. } => ExceptionClass::Os,
    }
}

/// Convert a classified load failure into the matching Python exception.
///
/// OS errors with a code are raised as `OSError(code, message)` so Python
/// fills in `errno` and `strerror`.
pub(crate) fn to_py_err(err: LoadError) -> PyErr {
    match exception_class(&err) {
        ExceptionClass::FileNotFound => PyFileNotFoundError::new_err(err.to_string()),
        ExceptionClass::Runtime => PyRuntimeError::new_err(err.to_string()),
        ExceptionClass::Os => match err {
            LoadError::Io {
                code: Some(code),
                message,
            } => PyIOError::new_err((code, message)),
            other => PyIOError::new_err(other.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn each_variant_has_its_own_class() {
        let not_found = LoadError::NotFound {
            path: PathBuf::from("missing.rec"),
        };
        let parse = LoadError::ParseFailed {
            path: PathBuf::from("bad.rec"),
            message: "unknown entry tag 9".into(),
        };
        let io = LoadError::Io {
            code: Some(13),
            message: "Permission denied".into(),
        };
        assert_eq!(exception_class(&not_found), ExceptionClass::FileNotFound);
        assert_eq!(exception_class(&parse), ExceptionClass::Runtime);
        assert_eq!(exception_class(&io), ExceptionClass::Os);
    }
}
