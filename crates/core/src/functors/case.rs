use super::text;
use crate::error::ConvertError;
use crate::functor::{Conversion, Functor, FunctorInfo};

/// Case transformations, in the order their results are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseAlgorithm {
    Upper,
    Lower,
    Capitalize,
    Title,
}

impl CaseAlgorithm {
    pub const ALL: [CaseAlgorithm; 4] = [
        CaseAlgorithm::Upper,
        CaseAlgorithm::Lower,
        CaseAlgorithm::Capitalize,
        CaseAlgorithm::Title,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CaseAlgorithm::Upper => "upper",
            CaseAlgorithm::Lower => "lower",
            CaseAlgorithm::Capitalize => "capitalize",
            CaseAlgorithm::Title => "title",
        }
    }

    pub fn apply(&self, value: &str) -> String {
        match self {
            CaseAlgorithm::Upper => value.to_uppercase(),
            CaseAlgorithm::Lower => value.to_lowercase(),
            CaseAlgorithm::Capitalize => capitalize(value),
            CaseAlgorithm::Title => title(value),
        }
    }
}

/// First character upper-cased, everything else lower-cased.
fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

/// Every letter following a non-letter is upper-cased; other letters are lower-cased.
fn title(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut previous_is_letter = false;

    for c in value.chars() {
        if previous_is_letter {
            result.extend(c.to_lowercase());
        } else {
            result.extend(c.to_uppercase());
        }
        previous_is_letter = c.is_alphabetic();
    }

    result
}

pub struct ChangeCase {
    info: FunctorInfo,
}

impl ChangeCase {
    pub fn new() -> Self {
        Self {
            info: FunctorInfo::new(
                "change_case",
                "Cases",
                "Change the case to a specific type",
            ),
        }
    }
}

impl Default for ChangeCase {
    fn default() -> Self {
        Self::new()
    }
}

impl Functor for ChangeCase {
    fn info(&self) -> &FunctorInfo {
        &self.info
    }

    fn convert(&self, input: Option<&str>) -> Result<Vec<Conversion>, ConvertError> {
        let data = text(input).trim();

        Ok(CaseAlgorithm::ALL
            .iter()
            .map(|algo| {
                Conversion::described(
                    algo.apply(data),
                    format!("Change to {} case", algo.name()),
                )
            })
            .collect())
    }
}
