//! Recording reader.
//!
//! [`RecordingReader`] parses a complete recording from any `Read` source.
//! The header is validated first, then every entry is decoded and sorted
//! into records and snapshots, preserving file order within each.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::debug;

use tetrec_core::{
    AdditionalInformation, Record, RecordingView, TetrionHeader, TetrionSnapshot,
};

use crate::codec::{decode_entry, decode_header};
use crate::error::RecordingError;
use crate::types::Entry;
use crate::FORMAT_VERSION;

/// A fully parsed recording.
///
/// Owns everything it read; borrowers get read-only slices through
/// [`RecordingView`].
#[derive(Clone, Debug, PartialEq)]
pub struct RecordingReader {
    information: AdditionalInformation,
    tetrion_headers: Vec<TetrionHeader>,
    records: Vec<Record>,
    snapshots: Vec<TetrionSnapshot>,
}

impl RecordingReader {
    /// The only format version this build can parse.
    pub const CURRENT_SUPPORTED_VERSION: u8 = FORMAT_VERSION;

    /// Parse a recording from a byte stream.
    ///
    /// Generic over `R: Read` so tests can use `&[u8]` and production
    /// code can use `BufReader<File>`.
    pub fn open<R: Read>(mut reader: R) -> Result<Self, RecordingError> {
        let header = decode_header(&mut reader)?;
        let tetrion_count = header.tetrion_headers.len();

        let mut records = Vec::new();
        let mut snapshots = Vec::new();
        // Last record step per tetrion, to reject time running backwards.
        let mut last_step: Vec<Option<u64>> = vec![None; tetrion_count];

        while let Some(entry) = decode_entry(&mut reader, tetrion_count)? {
            match entry {
                Entry::Record(record) => {
                    let slot = &mut last_step[record.tetrion_index as usize];
                    if let Some(previous) = *slot {
                        if record.simulation_step_index < previous {
                            return Err(RecordingError::Malformed {
                                detail: format!(
                                    "simulation step index went backwards for tetrion {}: {} after {}",
                                    record.tetrion_index, record.simulation_step_index, previous
                                ),
                            });
                        }
                    }
                    *slot = Some(record.simulation_step_index);
                    records.push(record);
                }
                Entry::Snapshot(snapshot) => snapshots.push(snapshot),
            }
        }

        debug!(
            tetrions = tetrion_count,
            information = header.information.len(),
            records = records.len(),
            snapshots = snapshots.len(),
            "recording parsed"
        );

        Ok(Self {
            information: header.information,
            tetrion_headers: header.tetrion_headers,
            records,
            snapshots,
        })
    }

    /// Open and parse the recording file at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RecordingError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "opening recording");
        let file = File::open(path)?;
        Self::open(BufReader::new(file))
    }
}

impl RecordingView for RecordingReader {
    fn information(&self) -> &AdditionalInformation {
        &self.information
    }

    fn records(&self) -> &[Record] {
        &self.records
    }

    fn snapshots(&self) -> &[TetrionSnapshot] {
        &self.snapshots
    }

    fn tetrion_headers(&self) -> &[TetrionHeader] {
        &self.tetrion_headers
    }
}
