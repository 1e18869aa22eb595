//! Typed recording model for tetrec.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the already-parsed shape of a game recording: keyed header
//! information, the input event log, per-tetrion headers and periodic
//! board snapshots, plus the [`RecordingView`] trait that decouples the
//! parser from the conversion layer.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod event;
pub mod grid;
pub mod info;
pub mod tetrion;
pub mod traits;

pub use error::InvalidDiscriminant;
pub use event::{InputEvent, Record};
pub use grid::{GridPoint, GridProperties, GRID_HEIGHT, GRID_WIDTH};
pub use info::{AdditionalInformation, InformationValue};
pub use tetrion::{Mino, TetrionHeader, TetrionSnapshot, TetrominoType};
pub use traits::RecordingView;
