//! Structural pieces of a recording file.

use tetrec_core::{AdditionalInformation, Record, TetrionHeader, TetrionSnapshot};

/// Everything stored before the first entry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordingHeader {
    /// Keyed header information.
    pub information: AdditionalInformation,
    /// One header per tetrion, in tetrion index order.
    pub tetrion_headers: Vec<TetrionHeader>,
}

/// A single entry in the body of a recording.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entry {
    /// An input event.
    Record(Record),
    /// A board snapshot.
    Snapshot(TetrionSnapshot),
}

impl Entry {
    /// The tetrion the entry belongs to.
    pub fn tetrion_index(&self) -> u32 {
        match self {
            Self::Record(r) => r.tetrion_index,
            Self::Snapshot(s) => s.tetrion_index,
        }
    }
}

// ── Tag constants ───────────────────────────────────────────────

/// Entry tag for [`Entry::Record`].
pub const ENTRY_RECORD: u8 = 0;
/// Entry tag for [`Entry::Snapshot`].
pub const ENTRY_SNAPSHOT: u8 = 1;

/// Information value tag for `InformationValue::String`.
pub const VALUE_STRING: u8 = 0;
/// Information value tag for `InformationValue::F32`.
pub const VALUE_F32: u8 = 1;
/// Information value tag for `InformationValue::F64`.
pub const VALUE_F64: u8 = 2;
/// Information value tag for `InformationValue::Bool`.
pub const VALUE_BOOL: u8 = 3;
/// Information value tag for `InformationValue::U8`.
pub const VALUE_U8: u8 = 4;
/// Information value tag for `InformationValue::I8`.
pub const VALUE_I8: u8 = 5;
/// Information value tag for `InformationValue::U32`.
pub const VALUE_U32: u8 = 6;
/// Information value tag for `InformationValue::I32`.
pub const VALUE_I32: u8 = 7;
/// Information value tag for `InformationValue::U64`.
pub const VALUE_U64: u8 = 8;
/// Information value tag for `InformationValue::I64`.
pub const VALUE_I64: u8 = 9;
/// Information value tag for `InformationValue::List`.
pub const VALUE_LIST: u8 = 10;
