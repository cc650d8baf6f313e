//! Random generation functors
//!
//! `rand_bytes` and `rand_password` read their input as a count. Absent or unparsable
//! input falls back to [`DEFAULT_COUNT`], zero yields no results, and negative or
//! oversized counts are rejected.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use rand::RngCore;
use uuid::Uuid;

use super::int_to_hex;
use crate::error::ConvertError;
use crate::functor::{Conversion, Functor, FunctorInfo};

pub const DEFAULT_COUNT: usize = 8;
pub const MAX_COUNT: usize = 65536;

/// Parse the requested count from user input.
///
/// Only a signed run of ASCII digits counts as a number; anything else falls back to
/// [`DEFAULT_COUNT`]. Numbers of any magnitude are range-checked.
pub fn parse_count(input: Option<&str>) -> Result<usize, ConvertError> {
    let Some(raw) = input else {
        return Ok(DEFAULT_COUNT);
    };

    let raw = raw.trim();
    let (negative, digits) = match raw.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(DEFAULT_COUNT);
    }

    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return Ok(0);
    }
    if negative {
        return Err(ConvertError::NegativeCount(format!("-{significant}")));
    }

    match significant.parse::<usize>() {
        Ok(count) if count <= MAX_COUNT => Ok(count),
        _ => Err(ConvertError::CountTooLarge {
            count: significant.to_string(),
            max: MAX_COUNT,
        }),
    }
}

fn random_bytes(count: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; count];
    rand::thread_rng().fill_bytes(&mut bytes);
    bytes
}

fn join_bytes(bytes: &[u8], prefix: bool) -> String {
    bytes
        .iter()
        .map(|byte| int_to_hex(u64::from(*byte), prefix))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render bytes as contiguous hex, spaced hex pairs, and spaced `0x` pairs.
pub fn render_bytes(bytes: &[u8]) -> Vec<Conversion> {
    let contiguous: String = bytes.iter().map(|byte| format!("{byte:02x}")).collect();

    vec![
        contiguous.into(),
        join_bytes(bytes, false).into(),
        join_bytes(bytes, true).into(),
    ]
}

pub struct RandBytes {
    info: FunctorInfo,
}

impl RandBytes {
    pub fn new() -> Self {
        Self {
            info: FunctorInfo::new(
                "rand_bytes",
                "Random Bytes",
                "Generate a string of random bytes",
            ),
        }
    }
}

impl Default for RandBytes {
    fn default() -> Self {
        Self::new()
    }
}

impl Functor for RandBytes {
    fn info(&self) -> &FunctorInfo {
        &self.info
    }

    fn convert(&self, input: Option<&str>) -> Result<Vec<Conversion>, ConvertError> {
        let count = parse_count(input)?;
        if count == 0 {
            return Ok(Vec::new());
        }

        Ok(render_bytes(&random_bytes(count)))
    }
}

pub struct RandPassword {
    info: FunctorInfo,
}

impl RandPassword {
    pub fn new() -> Self {
        Self {
            info: FunctorInfo::new(
                "rand_password",
                "Random Password",
                "Generate a random password",
            ),
        }
    }
}

impl Default for RandPassword {
    fn default() -> Self {
        Self::new()
    }
}

impl Functor for RandPassword {
    fn info(&self) -> &FunctorInfo {
        &self.info
    }

    fn convert(&self, input: Option<&str>) -> Result<Vec<Conversion>, ConvertError> {
        let count = parse_count(input)?;
        if count == 0 {
            return Ok(Vec::new());
        }

        // The encoded token is longer than the byte count, so it always covers `count`.
        let mut password = URL_SAFE_NO_PAD.encode(random_bytes(count));
        password.truncate(count);

        Ok(vec![password.into()])
    }
}

pub struct RandUuid {
    info: FunctorInfo,
}

impl RandUuid {
    pub fn new() -> Self {
        Self {
            info: FunctorInfo::new(
                "rand_uuid",
                "Random UUID/GUID",
                "Generate a random UUID/GUID",
            ),
        }
    }
}

impl Default for RandUuid {
    fn default() -> Self {
        Self::new()
    }
}

impl Functor for RandUuid {
    fn info(&self) -> &FunctorInfo {
        &self.info
    }

    fn convert(&self, _input: Option<&str>) -> Result<Vec<Conversion>, ConvertError> {
        Ok(render_uuid(Uuid::new_v4()))
    }
}

/// The six textual renderings of one UUID.
pub fn render_uuid(uuid: Uuid) -> Vec<Conversion> {
    let hyphenated = uuid.hyphenated().to_string();

    vec![
        hyphenated.clone().into(),
        format!("{{{hyphenated}}}").into(),
        format!("{{{}}}", hyphenated.to_uppercase()).into(),
        uuid.simple().to_string().into(),
        uuid.urn().to_string().into(),
        uuid.as_u128().to_string().into(),
    ]
}
