//! Classified failures of the path-level loaders.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use tetrec_recording::RecordingError;

/// Why a recording could not be loaded from a path.
///
/// Conversion itself never fails; every variant comes from the existence
/// check or the parser.
#[derive(Debug)]
pub enum LoadError {
    /// Nothing exists at the path.
    NotFound {
        /// The path that was looked up.
        path: PathBuf,
    },
    /// The file exists but is not a valid recording.
    ParseFailed {
        /// The file that was parsed.
        path: PathBuf,
        /// The parser's diagnostic, verbatim.
        message: String,
    },
    /// The operating system refused an operation on the path.
    Io {
        /// Raw OS error code, when the platform reported one.
        code: Option<i32>,
        /// Description of the OS error.
        message: String,
    },
}

impl LoadError {
    /// Classify an OS-level error raised while resolving `path`.
    ///
    /// A path below a regular file (`ENOTDIR`) does not exist either.
    pub fn from_io(path: &Path, error: &io::Error) -> Self {
        if matches!(
            error.kind(),
            io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
        ) {
            return Self::NotFound {
                path: path.to_path_buf(),
            };
        }
        Self::Io {
            code: error.raw_os_error(),
            message: error.to_string(),
        }
    }

    /// Classify a parser failure for the file at `path`.
    ///
    /// I/O errors that carry an OS code stay OS errors; those without one
    /// (a truncated stream, for instance) mean the content is bad.
    pub fn from_recording(path: &Path, error: RecordingError) -> Self {
        match error {
            RecordingError::Io(e) if e.raw_os_error().is_some() => Self::from_io(path, &e),
            other => Self::ParseFailed {
                path: path.to_path_buf(),
                message: other.to_string(),
            },
        }
    }

    /// The path involved, when the error is tied to one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::NotFound { path } | Self::ParseFailed { path, .. } => Some(path),
            Self::Io { .. } => None,
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { path } => write!(f, "File '{}' doesn't exist!", path.display()),
            Self::ParseFailed { path, message } => write!(
                f,
                "An error occurred during parsing of the recording file '{}': {message}",
                path.display()
            ),
            Self::Io {
                code: Some(code),
                message,
            } => write!(f, "[Errno {code}] {message}"),
            Self::Io {
                code: None,
                message,
            } => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for LoadError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn path() -> &'static Path {
        Path::new("/recordings/game.rec")
    }

    #[test]
    fn not_found_message_names_path() {
        let err = LoadError::NotFound {
            path: path().to_path_buf(),
        };
        assert_eq!(err.to_string(), "File '/recordings/game.rec' doesn't exist!");
    }

    #[test]
    fn parse_failure_embeds_path_and_diagnostic() {
        let err = LoadError::from_recording(path(), RecordingError::InvalidMagic);
        let msg = err.to_string();
        assert!(msg.starts_with(
            "An error occurred during parsing of the recording file '/recordings/game.rec': "
        ));
        assert!(msg.ends_with(&RecordingError::InvalidMagic.to_string()));
        assert_eq!(err.path(), Some(path()));
    }

    #[test]
    fn os_error_keeps_code() {
        let io = io::Error::from_raw_os_error(13);
        let err = LoadError::from_recording(path(), RecordingError::Io(io));
        match &err {
            LoadError::Io { code, message } => {
                assert_eq!(*code, Some(13));
                assert!(!message.is_empty());
            }
            other => panic!("expected Io, got {other:?}"),
        }
        assert!(err.path().is_none());
    }

    #[test]
    fn os_not_found_is_not_found() {
        let io = io::Error::from(io::ErrorKind::NotFound);
        assert!(matches!(
            LoadError::from_io(path(), &io),
            LoadError::NotFound { .. }
        ));
    }

    #[test]
    fn not_a_directory_is_not_found() {
        let io = io::Error::from(io::ErrorKind::NotADirectory);
        match LoadError::from_io(path(), &io) {
            LoadError::NotFound { path: p } => assert_eq!(p, path()),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn truncation_is_a_parse_failure() {
        let io = io::Error::new(io::ErrorKind::UnexpectedEof, "failed to fill whole buffer");
        let err = LoadError::from_recording(path(), RecordingError::Io(io));
        assert!(matches!(err, LoadError::ParseFailed { .. }));
    }

    #[test]
    fn every_other_parser_error_is_a_parse_failure() {
        let errors = [
            RecordingError::UnsupportedVersion { found: 9 },
            RecordingError::ChecksumMismatch {
                recorded: 1,
                computed: 2,
            },
            RecordingError::UnknownTag {
                what: "entry",
                tag: 7,
            },
        ];
        for e in errors {
            assert!(matches!(
                LoadError::from_recording(path(), e),
                LoadError::ParseFailed { .. }
            ));
        }
    }
}
