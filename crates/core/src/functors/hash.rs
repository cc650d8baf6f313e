use blake2::{Blake2b512, Blake2s256};
use sha1::Sha1;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256};
use sha3::{Sha3_224, Sha3_256, Sha3_384, Sha3_512};

use super::text;
use crate::error::ConvertError;
use crate::functor::{Conversion, Functor, FunctorInfo};

/// Hash algorithm identifiers as exposed to the registry.
///
/// Some identifiers appear in two spellings; [`crate::HashCasePolicy`] decides which one
/// is registered.
pub const ALGORITHMS_AVAILABLE: &[&str] = &[
    "blake2b",
    "blake2s",
    "md5",
    "MD5",
    "sha1",
    "SHA1",
    "sha224",
    "SHA224",
    "sha256",
    "SHA256",
    "sha384",
    "SHA384",
    "sha512",
    "SHA512",
    "sha512_224",
    "sha512_256",
    "sha3_224",
    "sha3_256",
    "sha3_384",
    "sha3_512",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    Blake2b,
    Blake2s,
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Sha512_224,
    Sha512_256,
    Sha3_224,
    Sha3_256,
    Sha3_384,
    Sha3_512,
}

impl HashAlgorithm {
    /// Resolve an identifier, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "blake2b" => Some(HashAlgorithm::Blake2b),
            "blake2s" => Some(HashAlgorithm::Blake2s),
            "md5" => Some(HashAlgorithm::Md5),
            "sha1" => Some(HashAlgorithm::Sha1),
            "sha224" => Some(HashAlgorithm::Sha224),
            "sha256" => Some(HashAlgorithm::Sha256),
            "sha384" => Some(HashAlgorithm::Sha384),
            "sha512" => Some(HashAlgorithm::Sha512),
            "sha512_224" => Some(HashAlgorithm::Sha512_224),
            "sha512_256" => Some(HashAlgorithm::Sha512_256),
            "sha3_224" => Some(HashAlgorithm::Sha3_224),
            "sha3_256" => Some(HashAlgorithm::Sha3_256),
            "sha3_384" => Some(HashAlgorithm::Sha3_384),
            "sha3_512" => Some(HashAlgorithm::Sha3_512),
            _ => None,
        }
    }

    /// Lower-case hex digest of `data`.
    pub fn hexdigest(&self, data: &[u8]) -> String {
        match self {
            HashAlgorithm::Blake2b => format!("{:x}", Blake2b512::digest(data)),
            HashAlgorithm::Blake2s => format!("{:x}", Blake2s256::digest(data)),
            HashAlgorithm::Md5 => format!("{:x}", md5::compute(data)),
            HashAlgorithm::Sha1 => format!("{:x}", Sha1::digest(data)),
            HashAlgorithm::Sha224 => format!("{:x}", Sha224::digest(data)),
            HashAlgorithm::Sha256 => format!("{:x}", Sha256::digest(data)),
            HashAlgorithm::Sha384 => format!("{:x}", Sha384::digest(data)),
            HashAlgorithm::Sha512 => format!("{:x}", Sha512::digest(data)),
            HashAlgorithm::Sha512_224 => format!("{:x}", Sha512_224::digest(data)),
            HashAlgorithm::Sha512_256 => format!("{:x}", Sha512_256::digest(data)),
            HashAlgorithm::Sha3_224 => format!("{:x}", Sha3_224::digest(data)),
            HashAlgorithm::Sha3_256 => format!("{:x}", Sha3_256::digest(data)),
            HashAlgorithm::Sha3_384 => format!("{:x}", Sha3_384::digest(data)),
            HashAlgorithm::Sha3_512 => format!("{:x}", Sha3_512::digest(data)),
        }
    }
}

/// Hashes UTF-8 input and renders the digest in both cases.
pub struct HashFunctor {
    info: FunctorInfo,
    algorithm: HashAlgorithm,
}

impl HashFunctor {
    /// Build a functor for `algo`, named after its lower-cased spelling.
    ///
    /// Returns `None` for unsupported identifiers.
    pub fn new(algo: &str) -> Option<Self> {
        let algorithm = HashAlgorithm::from_name(algo)?;
        let name = algo.to_lowercase();

        Some(Self {
            info: FunctorInfo::new(
                name.clone(),
                format!("Hash ({name})"),
                format!("Hash a string with the {algo} algorithm"),
            ),
            algorithm,
        })
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }
}

impl Functor for HashFunctor {
    fn info(&self) -> &FunctorInfo {
        &self.info
    }

    fn convert(&self, input: Option<&str>) -> Result<Vec<Conversion>, ConvertError> {
        let digest = self.algorithm.hexdigest(text(input).as_bytes());
        let upper = digest.to_uppercase();

        Ok(vec![digest.into(), upper.into()])
    }
}
