//! Well-known fixture recordings.
//!
//! - [`end_to_end_fixture`]: one tetrion, one record, one snapshot.
//! - [`multi_tetrion_fixture`]: two tetrions with interleaved entries and
//!   nested information values.
//! - [`encode_fixture`] / [`write_fixture_file`]: turn a fixture into the
//!   on-disk format.

use std::fs;
use std::path::{Path, PathBuf};

use tetrec_core::{
    GridPoint, InformationValue, InputEvent, Mino, Record, RecordingView, TetrionSnapshot,
    TetrominoType,
};
use tetrec_recording::{Entry, RecordingError, RecordingWriter};

use crate::MockRecording;

/// Seed=42 / level 3 tetrion, a `DropPressed` at step 100, one snapshot
/// holding a single T mino at (4, 0), and `{"player": "alice"}`.
pub fn end_to_end_fixture() -> MockRecording {
    MockRecording::new()
        .with_information("player", "alice")
        .with_tetrion(42, 3)
        .with_record(Record {
            event: InputEvent::DropPressed,
            simulation_step_index: 100,
            tetrion_index: 0,
        })
        .with_snapshot(TetrionSnapshot {
            level: 3,
            lines_cleared: 0,
            mino_stack: vec![Mino::new(GridPoint::new(4, 0), TetrominoType::T)],
            score: 0,
            simulation_step_index: 100,
            tetrion_index: 0,
        })
}

/// Two tetrions, `record_count` records alternating between them with a
/// strictly increasing step index, and a snapshot every fourth step.
///
/// The information map covers every scalar width plus a nested list.
pub fn multi_tetrion_fixture(record_count: u64) -> MockRecording {
    let mut recording = MockRecording::new()
        .with_information("player", "bob")
        .with_information("u8", 200u8)
        .with_information("i8", -5i8)
        .with_information("u32", 70_000u32)
        .with_information("i32", -70_000i32)
        .with_information("u64", u64::MAX)
        .with_information("i64", i64::MIN)
        .with_information("f32", 1.5f32)
        .with_information("f64", -0.25f64)
        .with_information("bool", true)
        .with_information(
            "nested",
            vec![
                InformationValue::from(1u8),
                InformationValue::List(vec![
                    InformationValue::List(vec![]),
                    InformationValue::from("deep"),
                ]),
            ],
        )
        .with_tetrion(1, 0)
        .with_tetrion(2, 5);

    for step in 0..record_count {
        let tetrion_index = (step % 2) as u32;
        let event = InputEvent::ALL[(step % InputEvent::ALL.len() as u64) as usize];
        recording.records.push(Record {
            event,
            simulation_step_index: step,
            tetrion_index,
        });
        if step % 4 == 0 {
            let shape = TetrominoType::ALL[(step % 7) as usize];
            recording.snapshots.push(TetrionSnapshot {
                level: (step / 10) as u32,
                lines_cleared: (step / 4) as u32,
                mino_stack: (0..(step % 5) as u32)
                    .map(|x| Mino::new(GridPoint::new(x, 19), shape))
                    .collect(),
                score: step * 10,
                simulation_step_index: step,
                tetrion_index,
            });
        }
    }
    recording
}

/// Encode a recording to bytes.
///
/// Records and snapshots are interleaved by step index (records first on
/// ties); the relative order inside each collection is kept.
pub fn encode_fixture(recording: &dyn RecordingView) -> Result<Vec<u8>, RecordingError> {
    let mut writer = RecordingWriter::new(
        Vec::new(),
        recording.information(),
        recording.tetrion_headers(),
    )?;

    let mut records = recording.records().iter().peekable();
    let mut snapshots = recording.snapshots().iter().peekable();
    loop {
        let take_record = match (records.peek(), snapshots.peek()) {
            (Some(r), Some(s)) => r.simulation_step_index <= s.simulation_step_index,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        let entry = if take_record {
            records.next().map(|r| Entry::Record(*r))
        } else {
            snapshots.next().map(|s| Entry::Snapshot(s.clone()))
        };
        if let Some(entry) = entry {
            writer.write_entry(&entry)?;
        }
    }
    writer.flush()?;
    Ok(writer.into_inner())
}

/// Encode `recording` and write it to `dir/name`.
pub fn write_fixture_file(
    dir: &Path,
    name: &str,
    recording: &dyn RecordingView,
) -> Result<PathBuf, RecordingError> {
    let bytes = encode_fixture(recording)?;
    Ok(write_bytes_file(dir, name, &bytes)?)
}

/// Write raw bytes to `dir/name`.
pub fn write_bytes_file(dir: &Path, name: &str, bytes: &[u8]) -> std::io::Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, bytes)?;
    Ok(path)
}

/// A fresh temporary directory, removed when dropped.
pub fn temp_dir() -> std::io::Result<tempfile::TempDir> {
    tempfile::Builder::new().prefix("tetrec-").tempdir()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_tetrion_steps_increase_per_tetrion() {
        let recording = multi_tetrion_fixture(20);
        for tetrion in 0..2u32 {
            let steps: Vec<_> = recording
                .records
                .iter()
                .filter(|r| r.tetrion_index == tetrion)
                .map(|r| r.simulation_step_index)
                .collect();
            assert!(steps.windows(2).all(|w| w[0] < w[1]));
        }
        assert_eq!(recording.snapshots.len(), 5);
    }

    #[test]
    fn fixture_minos_stay_inside_grid() {
        let recording = multi_tetrion_fixture(64);
        assert!(recording
            .snapshots
            .iter()
            .flat_map(|s| &s.mino_stack)
            .all(|m| m.position.is_inside_grid()));
    }
}
