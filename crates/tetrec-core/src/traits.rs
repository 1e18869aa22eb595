//! Read-only access to a parsed recording.

use crate::event::Record;
use crate::info::AdditionalInformation;
use crate::tetrion::{TetrionHeader, TetrionSnapshot};

/// Read-only view of one parsed recording.
///
/// Decouples the conversion layer from the parser: converters read
/// through `&dyn RecordingView` (or a generic bound) rather than
/// depending on a concrete reader type.
pub trait RecordingView {
    /// Keyed header information.
    fn information(&self) -> &AdditionalInformation;

    /// Input records, in file order.
    fn records(&self) -> &[Record];

    /// Board snapshots, in file order.
    fn snapshots(&self) -> &[TetrionSnapshot];

    /// One header per tetrion; the slice index is the tetrion index.
    fn tetrion_headers(&self) -> &[TetrionHeader];
}
