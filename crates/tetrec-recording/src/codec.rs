//! Binary encode/decode for the recording format.
//!
//! All integers are little-endian. Strings are length-prefixed with a
//! `u32` length. Lists of information values are `u32`-count prefixed and
//! may nest up to [`MAX_INFORMATION_DEPTH`] levels.

use std::io::{ErrorKind, Read, Write};

use tetrec_core::{
    AdditionalInformation, GridPoint, InformationValue, InputEvent, Mino, Record, TetrionHeader,
    TetrionSnapshot, TetrominoType,
};

use crate::error::RecordingError;
use crate::hash::{checksum, HashingReader};
use crate::types::*;
use crate::{FORMAT_VERSION, MAGIC, MAX_INFORMATION_DEPTH};

/// Upper bound on elements preallocated from an untrusted count.
const PREALLOC_LIMIT: usize = 1024;

// ── Primitive writers ───────────────────────────────────────────

/// Write a single byte.
pub fn write_u8(w: &mut dyn Write, v: u8) -> Result<(), RecordingError> {
    w.write_all(&[v])?;
    Ok(())
}

/// Write a little-endian u32.
pub fn write_u32_le(w: &mut dyn Write, v: u32) -> Result<(), RecordingError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

/// Write a little-endian u64.
pub fn write_u64_le(w: &mut dyn Write, v: u64) -> Result<(), RecordingError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

/// Write a count or length as a `u32`, rejecting anything larger.
fn write_len(w: &mut dyn Write, len: usize, what: &str) -> Result<(), RecordingError> {
    let len = u32::try_from(len).map_err(|_| RecordingError::InvalidValue {
        detail: format!("{what} length {len} does not fit in u32"),
    })?;
    write_u32_le(w, len)
}

/// Write a length-prefixed UTF-8 string (u32 length + bytes).
pub fn write_length_prefixed_str(w: &mut dyn Write, s: &str) -> Result<(), RecordingError> {
    write_len(w, s.len(), "string")?;
    w.write_all(s.as_bytes())?;
    Ok(())
}

// ── Primitive readers ───────────────────────────────────────────

/// Read a single byte.
pub fn read_u8(r: &mut dyn Read) -> Result<u8, RecordingError> {
    let mut buf = [0u8; 1];
    r.read_exact(&mut buf)?;
    Ok(buf[0])
}

/// Read a little-endian u32.
pub fn read_u32_le(r: &mut dyn Read) -> Result<u32, RecordingError> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

/// Read a little-endian u64.
pub fn read_u64_le(r: &mut dyn Read) -> Result<u64, RecordingError> {
    let mut buf = [0u8; 8];
    r.read_exact(&mut buf)?;
    Ok(u64::from_le_bytes(buf))
}

/// Read a length-prefixed UTF-8 string.
///
/// Reads through a `take` limit so a corrupt length cannot force a
/// large allocation before the data runs out.
pub fn read_length_prefixed_str(r: &mut dyn Read) -> Result<String, RecordingError> {
    let len = read_u32_le(r)? as usize;
    let mut buf = Vec::with_capacity(len.min(PREALLOC_LIMIT));
    (&mut *r).take(len as u64).read_to_end(&mut buf)?;
    if buf.len() != len {
        return Err(RecordingError::Malformed {
            detail: format!("truncated string: got {} of {len} bytes", buf.len()),
        });
    }
    String::from_utf8(buf).map_err(|e| RecordingError::Malformed {
        detail: format!("invalid UTF-8 string: {e}"),
    })
}

// ── Information values ──────────────────────────────────────────

/// Encode one information value with its type tag.
pub fn encode_information_value(
    w: &mut dyn Write,
    value: &InformationValue,
) -> Result<(), RecordingError> {
    match value {
        InformationValue::String(s) => {
            write_u8(w, VALUE_STRING)?;
            write_length_prefixed_str(w, s)?;
        }
        InformationValue::F32(v) => {
            write_u8(w, VALUE_F32)?;
            w.write_all(&v.to_le_bytes())?;
        }
        InformationValue::F64(v) => {
            write_u8(w, VALUE_F64)?;
            w.write_all(&v.to_le_bytes())?;
        }
        InformationValue::Bool(v) => {
            write_u8(w, VALUE_BOOL)?;
            write_u8(w, *v as u8)?;
        }
        InformationValue::U8(v) => {
            write_u8(w, VALUE_U8)?;
            write_u8(w, *v)?;
        }
        InformationValue::I8(v) => {
            write_u8(w, VALUE_I8)?;
            w.write_all(&v.to_le_bytes())?;
        }
        InformationValue::U32(v) => {
            write_u8(w, VALUE_U32)?;
            write_u32_le(w, *v)?;
        }
        InformationValue::I32(v) => {
            write_u8(w, VALUE_I32)?;
            w.write_all(&v.to_le_bytes())?;
        }
        InformationValue::U64(v) => {
            write_u8(w, VALUE_U64)?;
            write_u64_le(w, *v)?;
        }
        InformationValue::I64(v) => {
            write_u8(w, VALUE_I64)?;
            w.write_all(&v.to_le_bytes())?;
        }
        InformationValue::List(values) => {
            write_u8(w, VALUE_LIST)?;
            write_len(w, values.len(), "list")?;
            for v in values {
                encode_information_value(w, v)?;
            }
        }
    }
    Ok(())
}

/// Decode one tagged information value.
pub fn decode_information_value(r: &mut dyn Read) -> Result<InformationValue, RecordingError> {
    decode_information_value_at(r, 0)
}

fn decode_information_value_at(
    r: &mut dyn Read,
    depth: usize,
) -> Result<InformationValue, RecordingError> {
    let tag = read_u8(r)?;
    let value = match tag {
        VALUE_STRING => InformationValue::String(read_length_prefixed_str(r)?),
        VALUE_F32 => InformationValue::F32(f32::from_bits(read_u32_le(r)?)),
        VALUE_F64 => InformationValue::F64(f64::from_bits(read_u64_le(r)?)),
        VALUE_BOOL => match read_u8(r)? {
            0 => InformationValue::Bool(false),
            1 => InformationValue::Bool(true),
            other => {
                return Err(RecordingError::Malformed {
                    detail: format!("invalid bool byte: {other}"),
                })
            }
        },
        VALUE_U8 => InformationValue::U8(read_u8(r)?),
        VALUE_I8 => InformationValue::I8(read_u8(r)? as i8),
        VALUE_U32 => InformationValue::U32(read_u32_le(r)?),
        VALUE_I32 => InformationValue::I32(read_u32_le(r)? as i32),
        VALUE_U64 => InformationValue::U64(read_u64_le(r)?),
        VALUE_I64 => InformationValue::I64(read_u64_le(r)? as i64),
        VALUE_LIST => {
            if depth >= MAX_INFORMATION_DEPTH {
                return Err(RecordingError::Malformed {
                    detail: format!(
                        "information value nested deeper than {MAX_INFORMATION_DEPTH} levels"
                    ),
                });
            }
            let count = read_u32_le(r)? as usize;
            let mut values = Vec::with_capacity(count.min(PREALLOC_LIMIT));
            for _ in 0..count {
                values.push(decode_information_value_at(r, depth + 1)?);
            }
            InformationValue::List(values)
        }
        tag => {
            return Err(RecordingError::UnknownTag {
                what: "information value",
                tag,
            })
        }
    };
    Ok(value)
}

/// Encode the information map (u32 count, then key/value pairs in order).
pub fn encode_information(
    w: &mut dyn Write,
    info: &AdditionalInformation,
) -> Result<(), RecordingError> {
    write_len(w, info.len(), "information")?;
    for (key, value) in info.iter() {
        write_length_prefixed_str(w, key)?;
        encode_information_value(w, value)?;
    }
    Ok(())
}

/// Decode the information map, rejecting duplicate keys.
pub fn decode_information(r: &mut dyn Read) -> Result<AdditionalInformation, RecordingError> {
    let count = read_u32_le(r)? as usize;
    let mut info = AdditionalInformation::new();
    for _ in 0..count {
        let key = read_length_prefixed_str(r)?;
        let value = decode_information_value(r)?;
        if info.contains_key(&key) {
            return Err(RecordingError::Malformed {
                detail: format!("duplicate information key '{key}'"),
            });
        }
        info.add(key, value);
    }
    Ok(info)
}

// ── Header encode/decode ────────────────────────────────────────

/// Encode the recording header: magic, version, information, tetrion
/// headers and the header checksum.
pub fn encode_header(w: &mut dyn Write, header: &RecordingHeader) -> Result<(), RecordingError> {
    let count = u8::try_from(header.tetrion_headers.len()).map_err(|_| {
        RecordingError::InvalidValue {
            detail: format!(
                "{} tetrions exceed the maximum of {}",
                header.tetrion_headers.len(),
                u8::MAX
            ),
        }
    })?;

    // The checksum covers the body, so build it first.
    let mut body = Vec::new();
    encode_information(&mut body, &header.information)?;
    write_u8(&mut body, count)?;
    for h in &header.tetrion_headers {
        write_u64_le(&mut body, h.seed)?;
        write_u32_le(&mut body, h.starting_level)?;
    }

    w.write_all(&MAGIC)?;
    write_u8(w, FORMAT_VERSION)?;
    w.write_all(&body)?;
    write_u64_le(w, checksum(&body))?;
    Ok(())
}

/// Decode and validate the recording header.
pub fn decode_header(r: &mut dyn Read) -> Result<RecordingHeader, RecordingError> {
    let mut magic = [0u8; 4];
    r.read_exact(&mut magic).map_err(|e| match e.kind() {
        // Too short to even hold the magic: not a recording.
        ErrorKind::UnexpectedEof => RecordingError::InvalidMagic,
        _ => RecordingError::Io(e),
    })?;
    if magic != MAGIC {
        return Err(RecordingError::InvalidMagic);
    }

    let version = read_u8(r)?;
    if version != FORMAT_VERSION {
        return Err(RecordingError::UnsupportedVersion { found: version });
    }

    let mut hashing = HashingReader::new(r);
    let information = decode_information(&mut hashing)?;
    let count = read_u8(&mut hashing)?;
    let mut tetrion_headers = Vec::with_capacity(count as usize);
    for _ in 0..count {
        tetrion_headers.push(TetrionHeader {
            seed: read_u64_le(&mut hashing)?,
            starting_level: read_u32_le(&mut hashing)?,
        });
    }
    let computed = hashing.finish();

    let recorded = read_u64_le(r)?;
    if recorded != computed {
        return Err(RecordingError::ChecksumMismatch { recorded, computed });
    }

    Ok(RecordingHeader {
        information,
        tetrion_headers,
    })
}

// ── Entry encode/decode ─────────────────────────────────────────

fn narrow_coordinate(v: u32, axis: char) -> Result<u8, RecordingError> {
    u8::try_from(v).map_err(|_| RecordingError::InvalidValue {
        detail: format!("mino {axis} coordinate {v} does not fit in u8"),
    })
}

/// Encode a single entry (tag byte + body).
pub fn encode_entry(w: &mut dyn Write, entry: &Entry) -> Result<(), RecordingError> {
    match entry {
        Entry::Record(record) => {
            write_u8(w, ENTRY_RECORD)?;
            write_u32_le(w, record.tetrion_index)?;
            write_u64_le(w, record.simulation_step_index)?;
            write_u8(w, record.event as u8)?;
        }
        Entry::Snapshot(snapshot) => {
            write_u8(w, ENTRY_SNAPSHOT)?;
            write_u32_le(w, snapshot.tetrion_index)?;
            write_u64_le(w, snapshot.simulation_step_index)?;
            write_u32_le(w, snapshot.level)?;
            write_u64_le(w, snapshot.score)?;
            write_u32_le(w, snapshot.lines_cleared)?;
            write_len(w, snapshot.mino_stack.len(), "mino stack")?;
            for mino in &snapshot.mino_stack {
                write_u8(w, narrow_coordinate(mino.position.x, 'x')?)?;
                write_u8(w, narrow_coordinate(mino.position.y, 'y')?)?;
                write_u8(w, mino.tetromino_type as u8)?;
            }
        }
    }
    Ok(())
}

/// Decode a single entry.
///
/// Returns `Ok(None)` on clean EOF (no bytes available before the tag),
/// `Ok(Some(entry))` on success, or an error on truncated/corrupt data.
/// `tetrion_count` bounds the tetrion index every entry may refer to.
pub fn decode_entry(
    r: &mut dyn Read,
    tetrion_count: usize,
) -> Result<Option<Entry>, RecordingError> {
    let mut tag = [0u8; 1];
    loop {
        match r.read(&mut tag) {
            Ok(0) => return Ok(None),
            Ok(_) => break,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(RecordingError::Io(e)),
        }
    }

    let tetrion_index = read_u32_le(r)?;
    if tetrion_index as usize >= tetrion_count {
        return Err(RecordingError::TetrionIndexOutOfRange {
            index: tetrion_index,
            tetrion_count,
        });
    }
    let simulation_step_index = read_u64_le(r)?;

    let entry = match tag[0] {
        ENTRY_RECORD => Entry::Record(Record {
            event: InputEvent::try_from(read_u8(r)?)?,
            simulation_step_index,
            tetrion_index,
        }),
        ENTRY_SNAPSHOT => {
            let level = read_u32_le(r)?;
            let score = read_u64_le(r)?;
            let lines_cleared = read_u32_le(r)?;
            let count = read_u32_le(r)? as usize;
            let mut mino_stack = Vec::with_capacity(count.min(PREALLOC_LIMIT));
            for _ in 0..count {
                let position = GridPoint::new(read_u8(r)? as u32, read_u8(r)? as u32);
                if !position.is_inside_grid() {
                    return Err(RecordingError::Malformed {
                        detail: format!(
                            "mino at ({}, {}) lies outside the grid",
                            position.x, position.y
                        ),
                    });
                }
                let tetromino_type = TetrominoType::try_from(read_u8(r)?)?;
                mino_stack.push(Mino::new(position, tetromino_type));
            }
            Entry::Snapshot(TetrionSnapshot {
                level,
                lines_cleared,
                mino_stack,
                score,
                simulation_step_index,
                tetrion_index,
            })
        }
        tag => return Err(RecordingError::UnknownTag { what: "entry", tag }),
    };
    Ok(Some(entry))
}
