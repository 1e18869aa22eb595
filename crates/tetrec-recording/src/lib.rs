//! Binary recording format for tetrec.
//!
//! Parses and writes the files a game session is recorded to. This is the
//! collaborator the conversion layer consumes: it turns bytes on disk into
//! the typed model from `tetrec-core`.
//!
//! # Architecture
//!
//! - [`RecordingReader`] parses a whole recording from any `Read` source
//!   (or a path) and implements [`RecordingView`](tetrec_core::RecordingView)
//! - [`RecordingWriter`] streams a recording to any `Write` sink
//! - [`codec`] holds the primitive and structural encoders/decoders
//!
//! # Format
//!
//! ```text
//! [MAGIC "OOPR"] [VERSION u8]
//! [AdditionalInformation] [tetrion count u8] [TetrionHeader ...]
//! [header checksum u64]
//! [Entry 1] [Entry 2] ... [Entry N]
//! ```
//!
//! Each entry is a tag byte followed by either a record or a snapshot.
//! The header checksum is FNV-1a over the header bytes between the
//! version byte and the checksum itself.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod error;
pub mod hash;
pub mod reader;
pub mod types;
pub mod writer;

pub use error::RecordingError;
pub use reader::RecordingReader;
pub use types::{Entry, RecordingHeader};
pub use writer::RecordingWriter;

/// Magic bytes at the start of every recording file.
pub const MAGIC: [u8; 4] = *b"OOPR";

/// Current binary format version. Files stamped with any other version
/// are rejected.
pub const FORMAT_VERSION: u8 = 1;

/// Deepest list nesting accepted inside an information value.
pub const MAX_INFORMATION_DEPTH: usize = 64;
