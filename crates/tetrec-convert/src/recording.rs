//! Aggregate recording conversion.

use tetrec_core::{Mino, Record, RecordingView, TetrionHeader, TetrionSnapshot};
use tetrec_recording::RecordingReader;
use tracing::trace;

use crate::info::convert_information;
use crate::scalar::{convert_grid_point, input_event_name, tetromino_type_name};
use crate::value::DynamicValue;

/// Convert a whole recording into the root map.
///
/// Walks each of the four collections once, in source order. The result
/// owns everything it holds, so `recording` can be dropped right after.
/// `version` is the format version this layer supports, not a value read
/// from the file.
pub fn convert_recording(recording: &dyn RecordingView) -> DynamicValue {
    let information = convert_information(recording.information());
    trace!(entries = recording.information().len(), "converted information");

    let records = DynamicValue::of_list(recording.records().iter().map(convert_record));
    trace!(count = recording.records().len(), "converted records");

    let snapshots = DynamicValue::of_list(recording.snapshots().iter().map(convert_snapshot));
    trace!(count = recording.snapshots().len(), "converted snapshots");

    let tetrion_headers =
        DynamicValue::of_list(recording.tetrion_headers().iter().map(convert_header));
    trace!(count = recording.tetrion_headers().len(), "converted tetrion headers");

    DynamicValue::of_map([
        ("information", information),
        ("records", records),
        ("snapshots", snapshots),
        ("tetrion_headers", tetrion_headers),
        (
            "version",
            DynamicValue::of_int(RecordingReader::CURRENT_SUPPORTED_VERSION),
        ),
    ])
}

fn convert_record(record: &Record) -> DynamicValue {
    DynamicValue::of_map([
        ("event", DynamicValue::of_string(input_event_name(record.event))),
        (
            "simulation_step_index",
            DynamicValue::of_int(record.simulation_step_index),
        ),
        ("tetrion_index", DynamicValue::of_int(record.tetrion_index)),
    ])
}

fn convert_header(header: &TetrionHeader) -> DynamicValue {
    DynamicValue::of_map([
        ("seed", DynamicValue::of_int(header.seed)),
        ("starting_level", DynamicValue::of_int(header.starting_level)),
    ])
}

fn convert_mino(mino: &Mino) -> DynamicValue {
    DynamicValue::of_map([
        ("position", convert_grid_point(mino.position)),
        (
            "type",
            DynamicValue::of_string(tetromino_type_name(mino.tetromino_type)),
        ),
    ])
}

fn convert_snapshot(snapshot: &TetrionSnapshot) -> DynamicValue {
    DynamicValue::of_map([
        ("level", DynamicValue::of_int(snapshot.level)),
        ("lines_cleared", DynamicValue::of_int(snapshot.lines_cleared)),
        (
            "mino_stack",
            DynamicValue::of_list(snapshot.mino_stack.iter().map(convert_mino)),
        ),
        ("score", DynamicValue::of_int(snapshot.score)),
        (
            "simulation_step_index",
            DynamicValue::of_int(snapshot.simulation_step_index),
        ),
        ("tetrion_index", DynamicValue::of_int(snapshot.tetrion_index)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::DynamicKind;
    use tetrec_core::{AdditionalInformation, GridPoint, InputEvent, TetrominoType};

    /// Minimal in-memory view; the shared fixtures live in
    /// `tetrec-test-utils` and are exercised by the integration tests.
    #[derive(Default)]
    struct View {
        information: AdditionalInformation,
        records: Vec<Record>,
        snapshots: Vec<TetrionSnapshot>,
        tetrion_headers: Vec<TetrionHeader>,
    }

    impl RecordingView for View {
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

    fn keys(value: &DynamicValue) -> Vec<&str> {
        value.as_map().unwrap().keys().map(String::as_str).collect()
    }

    #[test]
    fn empty_recording_has_five_keys() {
        let root = convert_recording(&View::default());
        assert_eq!(
            keys(&root),
            ["information", "records", "snapshots", "tetrion_headers", "version"]
        );
        assert_eq!(root.get("records"), Some(&DynamicValue::List(vec![])));
        assert_eq!(
            root.get("version"),
            Some(&DynamicValue::of_int(RecordingReader::CURRENT_SUPPORTED_VERSION))
        );
    }

    #[test]
    fn record_fields_and_widths() {
        let view = View {
            records: vec![Record {
                event: InputEvent::HoldReleased,
                simulation_step_index: u64::MAX,
                tetrion_index: 7,
            }],
            ..View::default()
        };
        let root = convert_recording(&view);
        let record = root.get("records").and_then(|r| r.index(0)).unwrap();

        assert_eq!(keys(record), ["event", "simulation_step_index", "tetrion_index"]);
        assert_eq!(record.get("event").and_then(DynamicValue::as_str), Some("HoldReleased"));
        assert_eq!(
            record.get("simulation_step_index"),
            Some(&DynamicValue::of_int(u64::MAX))
        );
        assert_eq!(
            record.get("tetrion_index").map(DynamicValue::kind),
            Some(DynamicKind::U32)
        );
    }

    #[test]
    fn snapshot_fields_and_mino_stack_order() {
        let view = View {
            snapshots: vec![TetrionSnapshot {
                level: 2,
                lines_cleared: 11,
                mino_stack: vec![
                    Mino::new(GridPoint::new(0, 19), TetrominoType::Z),
                    Mino::new(GridPoint::new(1, 19), TetrominoType::I),
                ],
                score: 1200,
                simulation_step_index: 9,
                tetrion_index: 0,
            }],
            ..View::default()
        };
        let root = convert_recording(&view);
        let snapshot = root.get("snapshots").and_then(|s| s.index(0)).unwrap();

        assert_eq!(
            keys(snapshot),
            [
                "level",
                "lines_cleared",
                "mino_stack",
                "score",
                "simulation_step_index",
                "tetrion_index"
            ]
        );
        assert_eq!(snapshot.get("score"), Some(&DynamicValue::of_int(1200u64)));

        let stack = snapshot.get("mino_stack").and_then(DynamicValue::as_list).unwrap();
        let types: Vec<_> = stack
            .iter()
            .map(|m| m.get("type").and_then(DynamicValue::as_str).unwrap())
            .collect();
        assert_eq!(types, ["Z", "I"]);
        assert_eq!(keys(&stack[1]), ["position", "type"]);
        assert_eq!(
            stack[1].get("position").and_then(|p| p.get("x")),
            Some(&DynamicValue::of_int(1u8))
        );
    }

    #[test]
    fn headers_keep_sequence_order() {
        let view = View {
            tetrion_headers: vec![
                TetrionHeader {
                    seed: 9,
                    starting_level: 1,
                },
                TetrionHeader {
                    seed: 3,
                    starting_level: 0,
                },
            ],
            ..View::default()
        };
        let root = convert_recording(&view);
        let seeds: Vec<_> = root
            .get("tetrion_headers")
            .and_then(DynamicValue::as_list)
            .unwrap()
            .iter()
            .map(|h| h.get("seed").cloned().unwrap())
            .collect();
        assert_eq!(seeds, [DynamicValue::of_int(9u64), DynamicValue::of_int(3u64)]);
    }
}
