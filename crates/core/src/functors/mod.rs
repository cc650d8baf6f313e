//! Built-in functors
//!
//! Each submodule holds one family of leaf conversions. None of them share state; the
//! only contract they follow is [`crate::Functor`].

pub mod args;
pub mod case;
pub mod checksum;
pub mod hash;
pub mod random;
pub mod rot13;
pub mod url;

use crate::functor::Functor;
use crate::registry::HashCasePolicy;

pub use args::{ArgQuoteUnix, ArgQuoteWin, ArgSplitUnix, ArgSplitWin};
pub use case::ChangeCase;
pub use checksum::{Checksum, ChecksumAlgorithm};
pub use hash::{HashAlgorithm, HashFunctor, ALGORITHMS_AVAILABLE};
pub use random::{RandBytes, RandPassword, RandUuid};
pub use rot13::Rot13;
pub use url::{UrlQuote, UrlQuotePlus, UrlSplit, UrlUnquotePlus};

/// Every built-in functor, in catalog order.
///
/// Hash functors come last and are filtered through `policy`. The list may still contain
/// name collisions; resolving them is the registry's job.
pub fn default_functors(policy: HashCasePolicy) -> Vec<Box<dyn Functor>> {
    let mut functors: Vec<Box<dyn Functor>> = vec![
        Box::new(ArgQuoteUnix::new()),
        Box::new(ArgQuoteWin::new()),
        Box::new(ArgSplitUnix::new()),
        Box::new(ArgSplitWin::new()),
        Box::new(RandBytes::new()),
        Box::new(RandPassword::new()),
        Box::new(RandUuid::new()),
        Box::new(Rot13::new()),
        Box::new(UrlQuote::new()),
        Box::new(UrlQuotePlus::new()),
        Box::new(UrlSplit::new()),
        Box::new(UrlUnquotePlus::new()),
        Box::new(Checksum::new(ChecksumAlgorithm::Adler32)),
        Box::new(Checksum::new(ChecksumAlgorithm::Crc32)),
        Box::new(ChangeCase::new()),
    ];

    for algo in policy.filter(ALGORITHMS_AVAILABLE) {
        match HashFunctor::new(algo) {
            Some(functor) => functors.push(Box::new(functor)),
            None => log::warn!("unsupported hash algorithm: {algo}"),
        }
    }

    functors
}

/// Text of the input, treating absent input as empty.
pub(crate) fn text(input: Option<&str>) -> &str {
    input.unwrap_or_default()
}

/// Render an integer as even-length lower-case hex, optionally `0x`-prefixed.
pub(crate) fn int_to_hex(value: u64, prefix: bool) -> String {
    let mut hex = format!("{value:x}");
    if hex.len() % 2 == 1 {
        hex.insert(0, '0');
    }
    if prefix {
        hex.insert_str(0, "0x");
    }
    hex
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_to_hex_pads_to_even_length() {
        assert_eq!(int_to_hex(0, false), "00");
        assert_eq!(int_to_hex(0xf, false), "0f");
        assert_eq!(int_to_hex(0xabc, false), "0abc");
        assert_eq!(int_to_hex(0xabcd, false), "abcd");
    }

    #[test]
    fn test_int_to_hex_prefix() {
        assert_eq!(int_to_hex(10, true), "0x0a");
        assert_eq!(int_to_hex(0x1234, true), "0x1234");
    }

    #[test]
    fn test_text_treats_absent_as_empty() {
        assert_eq!(text(None), "");
        assert_eq!(text(Some("a")), "a");
    }

    #[test]
    fn test_default_functors_start_with_arg_functors() {
        let functors = default_functors(HashCasePolicy::default());
        let names: Vec<&str> = functors.iter().take(4).map(|f| f.name()).collect();

        assert_eq!(
            names,
            vec!["arg_quote_unix", "arg_quote_win", "arg_split_unix", "arg_split_win"]
        );
    }

    #[test]
    fn test_keep_all_yields_more_functors_than_prefer_upper() {
        let preferred = default_functors(HashCasePolicy::PreferUpper);
        let all = default_functors(HashCasePolicy::KeepAll);

        assert!(all.len() > preferred.len());
    }
}
