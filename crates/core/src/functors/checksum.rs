use super::{int_to_hex, text};
use crate::error::ConvertError;
use crate::functor::{Conversion, Functor, FunctorInfo};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumAlgorithm {
    Adler32,
    Crc32,
}

impl ChecksumAlgorithm {
    pub fn name(&self) -> &'static str {
        match self {
            ChecksumAlgorithm::Adler32 => "adler32",
            ChecksumAlgorithm::Crc32 => "crc32",
        }
    }

    pub fn checksum(&self, data: &[u8]) -> u32 {
        match self {
            ChecksumAlgorithm::Adler32 => adler2::adler32_slice(data),
            ChecksumAlgorithm::Crc32 => crc32fast::hash(data),
        }
    }
}

/// A 32-bit checksum rendered as hex, prefixed hex and decimal.
pub struct Checksum {
    info: FunctorInfo,
    algorithm: ChecksumAlgorithm,
}

impl Checksum {
    pub fn new(algorithm: ChecksumAlgorithm) -> Self {
        let name = algorithm.name();
        Self {
            info: FunctorInfo::new(
                name,
                format!("Hash ({name})"),
                format!("Hash a string with the {name} algorithm"),
            ),
            algorithm,
        }
    }
}

impl Functor for Checksum {
    fn info(&self) -> &FunctorInfo {
        &self.info
    }

    fn convert(&self, input: Option<&str>) -> Result<Vec<Conversion>, ConvertError> {
        let value = u64::from(self.algorithm.checksum(text(input).as_bytes()));

        Ok(vec![
            int_to_hex(value, false).into(),
            int_to_hex(value, true).into(),
            value.to_string().into(),
        ])
    }
}
