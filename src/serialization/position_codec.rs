//! Compact text encoding of positions and paths kept in memory.
//!
//! A position is encoded as `XXYYRoomName`, e.g., `0712W1N1` for x = 7, y = 12 in room W1N1. Older
//! memory may still contain positions as `[x, y, roomName]` lists or `{x, y, roomName}` objects,
//! both of which are decoded into the same position.

use std::str::FromStr;
use screeps::{Direction, Position, RoomCoordinate, RoomName};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use crate::errors::XiError;
use crate::utils::result_utils::ResultUtils;

/// A position as found in memory, in any of the supported encodings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum SerializedPos {
    Packed(String),
    List(u8, u8, String),
    Fields {
        x: u8,
        y: u8,
        #[serde(rename = "roomName")]
        room_name: String,
    },
}

impl From<Position> for SerializedPos {
    fn from(pos: Position) -> Self {
        SerializedPos::Packed(serialize_pos(pos))
    }
}

/// A single step of a path, as returned by the game's room path search.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PathStep {
    pub x: u8,
    pub y: u8,
    pub direction: Direction,
}

pub fn serialize_pos(pos: Position) -> String {
    format!("{:02}{:02}{}", pos.x().u8(), pos.y().u8(), pos.room_name())
}

pub fn deserialize_pos(serialized_pos: &SerializedPos) -> Result<Position, XiError> {
    match serialized_pos {
        SerializedPos::Packed(packed) => deserialize_packed_pos(packed),
        SerializedPos::List(x, y, room_name) => pos_from_parts(*x, *y, room_name),
        SerializedPos::Fields { x, y, room_name } => pos_from_parts(*x, *y, room_name),
    }
}

/// Reads an optional position from memory. A value in none of the known encodings is logged and
/// read as no position.
pub fn deserialize_pos_leniently<'de, D>(deserializer: D) -> Result<Option<SerializedPos>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(value) => serde_json::from_value(value).warn_if_err("Ignoring a malformed position in memory"),
    })
}

pub fn deserialize_packed_pos(packed: &str) -> Result<Position, XiError> {
    let invalid = || XiError::InvalidPosition(packed.to_string());
    let x = packed.get(0..2).ok_or_else(invalid)?;
    let y = packed.get(2..4).ok_or_else(invalid)?;
    let room_name = packed.get(4..).ok_or_else(invalid)?;
    let x = x.parse::<u8>().map_err(|_| invalid())?;
    let y = y.parse::<u8>().map_err(|_| invalid())?;
    pos_from_parts(x, y, room_name).map_err(|_| invalid())
}

fn pos_from_parts(x: u8, y: u8, room_name: &str) -> Result<Position, XiError> {
    let invalid = || XiError::InvalidPosition(format!("{},{},{}", x, y, room_name));
    let x = RoomCoordinate::new(x).map_err(|_| invalid())?;
    let y = RoomCoordinate::new(y).map_err(|_| invalid())?;
    let room_name = RoomName::from_str(room_name).map_err(|_| invalid())?;
    Ok(Position::new(x, y, room_name))
}

/// Encodes each position of the path. Order and length are preserved.
pub fn serialize_path(path: &[Position]) -> Vec<String> {
    let mut result = Vec::with_capacity(path.len());
    for &pos in path {
        result.push(serialize_pos(pos));
    }
    result
}

/// Encodes the path as a string of direction digits, one per step.
pub fn serialize_relative_path(path: &[PathStep]) -> String {
    path.iter()
        .map(|step| char::from(b'0' + step.direction as u8))
        .collect()
}
