//! Recording writer.
//!
//! [`RecordingWriter`] streams entries to any `Write` sink, encoding the
//! binary recording format. The header is written immediately on
//! construction.

use std::io::Write;

use tetrec_core::{AdditionalInformation, Record, TetrionHeader, TetrionSnapshot};

use crate::codec::{encode_entry, encode_header};
use crate::error::RecordingError;
use crate::types::{Entry, RecordingHeader};

/// Writes recording data to a byte stream.
///
/// Generic over `W: Write` so tests can use `Vec<u8>` and production
/// code can use `BufWriter<File>`.
///
/// # Examples
///
/// ```
/// use tetrec_core::{AdditionalInformation, InputEvent, Record, RecordingView, TetrionHeader};
/// use tetrec_recording::{RecordingReader, RecordingWriter};
///
/// let mut info = AdditionalInformation::new();
/// info.add("player", "alice");
/// let headers = [TetrionHeader { seed: 42, starting_level: 3 }];
///
/// let mut buf = Vec::new();
/// let mut writer = RecordingWriter::new(&mut buf, &info, &headers).unwrap();
/// writer
///     .write_record(&Record {
///         event: InputEvent::DropPressed,
///         simulation_step_index: 100,
///         tetrion_index: 0,
///     })
///     .unwrap();
/// assert_eq!(writer.entries_written(), 1);
/// drop(writer);
///
/// let reader = RecordingReader::open(buf.as_slice()).unwrap();
/// assert_eq!(reader.records()[0].simulation_step_index, 100);
/// ```
pub struct RecordingWriter<W: Write> {
    writer: W,
    tetrion_count: usize,
    entries_written: u64,
}

impl<W: Write> RecordingWriter<W> {
    /// Create a new recording writer, immediately writing the header.
    pub fn new(
        mut writer: W,
        information: &AdditionalInformation,
        tetrion_headers: &[TetrionHeader],
    ) -> Result<Self, RecordingError> {
        let header = RecordingHeader {
            information: information.clone(),
            tetrion_headers: tetrion_headers.to_vec(),
        };
        encode_header(&mut writer, &header)?;
        Ok(Self {
            writer,
            tetrion_count: tetrion_headers.len(),
            entries_written: 0,
        })
    }

    /// Append an input record.
    pub fn write_record(&mut self, record: &Record) -> Result<(), RecordingError> {
        self.write_entry(&Entry::Record(*record))
    }

    /// Append a board snapshot.
    pub fn write_snapshot(&mut self, snapshot: &TetrionSnapshot) -> Result<(), RecordingError> {
        self.write_entry(&Entry::Snapshot(snapshot.clone()))
    }

    /// Append a pre-built entry.
    pub fn write_entry(&mut self, entry: &Entry) -> Result<(), RecordingError> {
        let index = entry.tetrion_index();
        if index as usize >= self.tetrion_count {
            return Err(RecordingError::TetrionIndexOutOfRange {
                index,
                tetrion_count: self.tetrion_count,
            });
        }
        encode_entry(&mut self.writer, entry)?;
        self.entries_written += 1;
        Ok(())
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> Result<(), RecordingError> {
        self.writer.flush()?;
        Ok(())
    }

    /// Number of entries written so far.
    pub fn entries_written(&self) -> u64 {
        self.entries_written
    }

    /// Consume the writer and return the underlying `Write` sink.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tetrec_core::InputEvent;

    #[test]
    fn entry_for_undeclared_tetrion_rejected() {
        let headers = [TetrionHeader {
            seed: 1,
            starting_level: 0,
        }];
        let mut writer =
            RecordingWriter::new(Vec::new(), &AdditionalInformation::new(), &headers).unwrap();
        let result = writer.write_record(&Record {
            event: InputEvent::RotateLeftPressed,
            simulation_step_index: 0,
            tetrion_index: 1,
        });
        assert!(matches!(
            result,
            Err(RecordingError::TetrionIndexOutOfRange { index: 1, .. })
        ));
        assert_eq!(writer.entries_written(), 0);
    }

    #[test]
    fn flush_reaches_buffered_sink() {
        let headers = [TetrionHeader {
            seed: 7,
            starting_level: 0,
        }];
        let mut writer = RecordingWriter::new(
            std::io::BufWriter::new(Vec::new()),
            &AdditionalInformation::new(),
            &headers,
        )
        .unwrap();
        writer
            .write_record(&Record {
                event: InputEvent::HoldPressed,
                simulation_step_index: 3,
                tetrion_index: 0,
            })
            .unwrap();
        writer.flush().unwrap();

        let bytes = writer.into_inner().get_ref().clone();
        assert_eq!(&bytes[..4], &crate::MAGIC);
        let reader = crate::RecordingReader::open(bytes.as_slice()).unwrap();
        assert_eq!(tetrec_core::RecordingView::records(&reader).len(), 1);
    }

    #[test]
    fn into_inner_returns_written_bytes() {
        let writer = RecordingWriter::new(Vec::new(), &AdditionalInformation::new(), &[]).unwrap();
        let bytes = writer.into_inner();
        assert_eq!(&bytes[..4], &crate::MAGIC);
        assert_eq!(bytes[4], crate::FORMAT_VERSION);
    }
}
