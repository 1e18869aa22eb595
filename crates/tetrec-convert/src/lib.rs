//! Typed-to-dynamic conversion of tetrec recordings.
//!
//! Turns a parsed recording (anything implementing
//! [`RecordingView`](tetrec_core::RecordingView)) into one owned
//! [`DynamicValue`] tree that an embedding host can walk without knowing
//! the typed model.
//!
//! # Architecture
//!
//! - [`value`]: the dynamic value model
//! - [`scalar`]: enum-to-string and grid-point converters
//! - [`info`]: the recursive information-value converter
//! - [`recording`]: the aggregate converter producing the root map
//! - [`load`]: path-level entry points with classified [`LoadError`]s
//! - [`properties`]: static properties exposed alongside the loaders
//!
//! The root map has exactly five keys:
//!
//! ```text
//! { information: {<key>: <value>, ...},
//!   records: [ {event, simulation_step_index, tetrion_index}, ... ],
//!   snapshots: [ {level, lines_cleared, mino_stack, score,
//!                 simulation_step_index, tetrion_index}, ... ],
//!   tetrion_headers: [ {seed, starting_level}, ... ],
//!   version: <u8> }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod info;
pub mod load;
pub mod properties;
pub mod recording;
pub mod scalar;
pub mod value;

pub use error::LoadError;
pub use info::{convert_information, convert_information_value};
pub use load::{get_information, is_recording_file, load_recording};
pub use properties::{grid_properties, properties};
pub use recording::convert_recording;
pub use scalar::{convert_grid_point, input_event_name, tetromino_type_name};
pub use value::{DynamicInt, DynamicKind, DynamicValue};

/// Semantic version of this conversion layer.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
