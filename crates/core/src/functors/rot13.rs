use super::text;
use crate::error::ConvertError;
use crate::functor::{Conversion, Functor, FunctorInfo};

pub struct Rot13 {
    info: FunctorInfo,
}

impl Rot13 {
    pub fn new() -> Self {
        Self {
            info: FunctorInfo::new(
                "rot13",
                "rot13",
                "rot13 a string (similar to PHP's str_rot13)",
            ),
        }
    }
}

impl Default for Rot13 {
    fn default() -> Self {
        Self::new()
    }
}

impl Functor for Rot13 {
    fn info(&self) -> &FunctorInfo {
        &self.info
    }

    fn convert(&self, input: Option<&str>) -> Result<Vec<Conversion>, ConvertError> {
        Ok(vec![rot13(text(input)).into()])
    }
}

/// Rotate ASCII letters by 13 places. Everything else is left untouched.
pub fn rot13(value: &str) -> String {
    value
        .chars()
        .map(|c| match c {
            'a'..='z' => rotate(c, b'a'),
            'A'..='Z' => rotate(c, b'A'),
            _ => c,
        })
        .collect()
}

fn rotate(c: char, base: u8) -> char {
    (((c as u8 - base + 13) % 26) + base) as char
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rot13() {
        assert_eq!(rot13("Hello, World!"), "Uryyb, Jbeyq!");
    }

    #[test]
    fn test_rot13_is_involution() {
        let input = "The Quick Brown Fox 123";
        assert_eq!(rot13(&rot13(input)), input);
    }

    #[test]
    fn test_rot13_leaves_non_ascii_alone() {
        assert_eq!(rot13("àbç"), "àoç");
    }

    #[test]
    fn test_rot13_functor() {
        let out = Rot13::new().convert(Some("abc")).unwrap();
        assert_eq!(out, vec![Conversion::Bare("nop".to_string())]);
    }
}
