//! Error types for reading and writing recordings.

use std::fmt;
use std::io;

/// Errors that can occur while parsing or writing a recording.
#[derive(Debug)]
pub enum RecordingError {
    /// An I/O error occurred during read or write.
    Io(io::Error),
    /// The file does not start with the expected `b"OOPR"` magic bytes.
    InvalidMagic,
    /// The format version is not supported by this build.
    UnsupportedVersion {
        /// The version found in the file.
        found: u8,
    },
    /// The stored header checksum does not match the header bytes.
    ChecksumMismatch {
        /// Checksum stored in the file.
        recorded: u64,
        /// Checksum computed over the header that was read.
        computed: u64,
    },
    /// Data could not be decoded (truncated, corrupt or out of range).
    Malformed {
        /// Human-readable description of what went wrong.
        detail: String,
    },
    /// A type tag or enum discriminant is not recognized.
    UnknownTag {
        /// What the tag was meant to identify.
        what: &'static str,
        /// The unrecognized tag.
        tag: u8,
    },
    /// A record or snapshot refers to a tetrion the header does not declare.
    TetrionIndexOutOfRange {
        /// The index found in the entry.
        index: u32,
        /// Number of tetrion headers in the recording.
        tetrion_count: usize,
    },
    /// A value cannot be represented in the on-disk format.
    InvalidValue {
        /// Human-readable description of the rejected value.
        detail: String,
    },
}

impl fmt::Display for RecordingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidMagic => write!(
                f,
                "magic file bytes are not correct, this is either an old format or no recording at all"
            ),
            Self::UnsupportedVersion { found } => {
                write!(f, "unsupported recording version {found}")
            }
            Self::ChecksumMismatch { recorded, computed } => write!(
                f,
                "header checksum mismatch: recorded={recorded:#018x}, computed={computed:#018x}"
            ),
            Self::Malformed { detail } => write!(f, "malformed recording: {detail}"),
            Self::UnknownTag { what, tag } => write!(f, "unknown {what} tag {tag}"),
            Self::TetrionIndexOutOfRange {
                index,
                tetrion_count,
            } => write!(
                f,
                "tetrion index {index} out of range (recording has {tetrion_count} tetrions)"
            ),
            Self::InvalidValue { detail } => write!(f, "invalid value: {detail}"),
        }
    }
}

impl std::error::Error for RecordingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for RecordingError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<tetrec_core::InvalidDiscriminant> for RecordingError {
    fn from(e: tetrec_core::InvalidDiscriminant) -> Self {
        Self::UnknownTag {
            what: e.what,
            tag: e.value,
        }
    }
}
