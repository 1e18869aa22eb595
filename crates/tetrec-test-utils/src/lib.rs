//! Test utilities and fixture recordings for tetrec development.
//!
//! Provides [`MockRecording`], an in-memory implementation of
//! [`RecordingView`], and [`fixtures`] that build well-known recordings
//! and write them to temporary files.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    encode_fixture, end_to_end_fixture, multi_tetrion_fixture, temp_dir, write_bytes_file,
    write_fixture_file,
};

use tetrec_core::{
    AdditionalInformation, InformationValue, Record, RecordingView, TetrionHeader,
    TetrionSnapshot,
};

/// In-memory recording for feeding converters without a file.
///
/// Built up with the chaining helpers, then read through
/// [`RecordingView`] like a parsed recording.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MockRecording {
    pub information: AdditionalInformation,
    pub records: Vec<Record>,
    pub snapshots: Vec<TetrionSnapshot>,
    pub tetrion_headers: Vec<TetrionHeader>,
}

impl MockRecording {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_information(mut self, key: &str, value: impl Into<InformationValue>) -> Self {
        self.information.add(key, value);
        self
    }

    pub fn with_tetrion(mut self, seed: u64, starting_level: u32) -> Self {
        self.tetrion_headers.push(TetrionHeader {
            seed,
            starting_level,
        });
        self
    }

    pub fn with_record(mut self, record: Record) -> Self {
        self.records.push(record);
        self
    }

    pub fn with_snapshot(mut self, snapshot: TetrionSnapshot) -> Self {
        self.snapshots.push(snapshot);
        self
    }
}

impl RecordingView for MockRecording {
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
