//! Layout transfer encoding.
//!
//! A fleet layout is serialised for copy/paste transfer as comma-separated
//! records, one per ship, each record being the five hyphen-joined fields
//! `origin_col-origin_row-size-orientation_flag-name` (flag `1` horizontal,
//! `0` vertical). The whole string is then base64-encoded with the standard
//! alphabet and padding. Names must not contain `-` or `,`.

use core::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::ship::{Orientation, Ship};

/// Errors produced while decoding a layout string. Decoding never partially
/// populates a ship list; any malformed record fails the whole import.
#[derive(Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// Input was empty or decoded to an empty record list.
    Empty,
    /// The base64 envelope could not be decoded.
    Base64(base64::DecodeError),
    /// The decoded bytes are not valid UTF-8.
    NotUtf8,
    /// A record did not contain exactly five fields.
    WrongFieldCount { record: usize },
    /// A numeric field could not be parsed.
    InvalidInteger { record: usize, field: &'static str },
    /// The orientation flag was neither `0` nor `1`.
    InvalidOrientation { record: usize },
}

impl From<base64::DecodeError> for DecodeError {
    fn from(err: base64::DecodeError) -> Self {
        DecodeError::Base64(err)
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Empty => write!(f, "Layout string is empty"),
            DecodeError::Base64(e) => write!(f, "Invalid base64 envelope: {}", e),
            DecodeError::NotUtf8 => write!(f, "Decoded layout is not valid UTF-8"),
            DecodeError::WrongFieldCount { record } => {
                write!(f, "Record {} does not have five fields", record)
            }
            DecodeError::InvalidInteger { record, field } => {
                write!(f, "Record {}: field \"{}\" is not an integer", record, field)
            }
            DecodeError::InvalidOrientation { record } => {
                write!(f, "Record {}: orientation flag must be 0 or 1", record)
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Encode a ship list into a base64 layout string.
pub fn encode_layout(ships: &[Ship]) -> String {
    let records: Vec<String> = ships
        .iter()
        .map(|ship| {
            let (col, row) = ship.origin();
            let flag = match ship.orientation() {
                Orientation::Horizontal => 1,
                Orientation::Vertical => 0,
            };
            format!("{}-{}-{}-{}-{}", col, row, ship.size(), flag, ship.name())
        })
        .collect();
    STANDARD.encode(records.join(","))
}

/// Decode a base64 layout string back into a ship list.
pub fn decode_layout(encoded: &str) -> Result<Vec<Ship>, DecodeError> {
    if encoded.trim().is_empty() {
        return Err(DecodeError::Empty);
    }
    let bytes = STANDARD.decode(encoded.trim())?;
    let serialised = String::from_utf8(bytes).map_err(|_| DecodeError::NotUtf8)?;
    if serialised.is_empty() {
        return Err(DecodeError::Empty);
    }

    let mut ships = Vec::new();
    for (record, entry) in serialised.split(',').enumerate() {
        let fields: Vec<&str> = entry.split('-').collect();
        if fields.len() != 5 {
            return Err(DecodeError::WrongFieldCount { record });
        }
        let col = parse_int(fields[0], record, "origin_col")?;
        let row = parse_int(fields[1], record, "origin_row")?;
        let size = parse_int(fields[2], record, "size")?;
        let orientation = match fields[3] {
            "1" => Orientation::Horizontal,
            "0" => Orientation::Vertical,
            _ => return Err(DecodeError::InvalidOrientation { record }),
        };
        if size < 1 {
            return Err(DecodeError::InvalidInteger { record, field: "size" });
        }
        ships.push(Ship::new(col, row, size as usize, orientation, fields[4]));
    }
    Ok(ships)
}

fn parse_int(value: &str, record: usize, field: &'static str) -> Result<i32, DecodeError> {
    value
        .parse()
        .map_err(|_| DecodeError::InvalidInteger { record, field })
}
