//! Path-level entry points for embedding hosts.

use std::path::Path;

use tetrec_recording::RecordingReader;
use tracing::{debug, warn};

use crate::error::LoadError;
use crate::recording::convert_recording;
use crate::value::DynamicValue;

/// Parse the recording at `path`, classifying any failure.
pub fn load_recording(path: &Path) -> Result<RecordingReader, LoadError> {
    match path.try_exists() {
        Ok(true) => {}
        Ok(false) => {
            return Err(LoadError::NotFound {
                path: path.to_path_buf(),
            })
        }
        Err(e) => return Err(LoadError::from_io(path, &e)),
    }
    RecordingReader::from_path(path).map_err(|e| LoadError::from_recording(path, e))
}

/// Whether `path` names a file the parser accepts. Never fails; missing
/// and malformed files are both `false`.
pub fn is_recording_file(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    match load_recording(path) {
        Ok(_) => true,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "not a recording file");
            false
        }
    }
}

/// Parse the recording at `path` and convert it to the root map.
///
/// # Examples
///
/// ```no_run
/// let root = tetrec_convert::get_information("game.rec")?;
/// let records = root.get("records").and_then(|r| r.as_list()).unwrap_or_default();
/// println!("{} records", records.len());
/// # Ok::<(), tetrec_convert::LoadError>(())
/// ```
pub fn get_information(path: impl AsRef<Path>) -> Result<DynamicValue, LoadError> {
    let path = path.as_ref();
    let reader = load_recording(path).inspect_err(|e| {
        warn!(path = %path.display(), error = %e, "failed to load recording");
    })?;
    Ok(convert_recording(&reader))
}
