//! Scalar converters: closed enums to stable identifiers, grid points to
//! `{x, y}` maps.

use tetrec_core::{GridPoint, InputEvent, TetrominoType};

use crate::value::DynamicValue;

/// Stable identifier of an input event, e.g. `"DropPressed"`.
pub fn input_event_name(event: InputEvent) -> &'static str {
    match event {
        InputEvent::RotateLeftPressed => "RotateLeftPressed",
        InputEvent::RotateRightPressed => "RotateRightPressed",
        InputEvent::MoveLeftPressed => "MoveLeftPressed",
        InputEvent::MoveRightPressed => "MoveRightPressed",
        InputEvent::MoveDownPressed => "MoveDownPressed",
        InputEvent::DropPressed => "DropPressed",
        InputEvent::HoldPressed => "HoldPressed",
        InputEvent::RotateLeftReleased => "RotateLeftReleased",
        InputEvent::RotateRightReleased => "RotateRightReleased",
        InputEvent::MoveLeftReleased => "MoveLeftReleased",
        InputEvent::MoveRightReleased => "MoveRightReleased",
        InputEvent::MoveDownReleased => "MoveDownReleased",
        InputEvent::DropReleased => "DropReleased",
        InputEvent::HoldReleased => "HoldReleased",
    }
}

/// Single-letter name of a tetromino shape.
pub fn tetromino_type_name(tetromino_type: TetrominoType) -> &'static str {
    match tetromino_type {
        TetrominoType::I => "I",
        TetrominoType::J => "J",
        TetrominoType::L => "L",
        TetrominoType::O => "O",
        TetrominoType::S => "S",
        TetrominoType::T => "T",
        TetrominoType::Z => "Z",
    }
}

/// Convert a grid point to `{x: u8, y: u8}`.
///
/// # Panics
///
/// If either coordinate does not fit in a `u8`. The parser only yields
/// in-grid points, so this is a broken upstream invariant, never bad data.
pub fn convert_grid_point(point: GridPoint) -> DynamicValue {
    DynamicValue::of_map([
        ("x", DynamicValue::of_int(narrow(point.x, "x"))),
        ("y", DynamicValue::of_int(narrow(point.y, "y"))),
    ])
}

fn narrow(coordinate: u32, axis: &str) -> u8 {
    match u8::try_from(coordinate) {
        Ok(v) => v,
        Err(_) => panic!("grid point {axis}={coordinate} does not fit in u8"),
    }
}
