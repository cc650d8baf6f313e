use crate::error::ConvertError;

/// Identity of a functor: dispatch key, display title and one-line explanation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctorInfo {
    name: String,
    label: String,
    description: String,
}

impl FunctorInfo {
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            description: description.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// A named conversion operation.
///
/// Implementors only provide [`Functor::info`] and [`Functor::convert`]; the name is the
/// sole identity used by the registry and is carried opaquely by catalog entries.
pub trait Functor: Send + Sync {
    fn info(&self) -> &FunctorInfo;

    /// Convert the user input into an ordered list of candidates.
    ///
    /// `None` means the host supplied no input at all. Functors fall back to a sane
    /// default where one exists and only return `Err` for conditions they cannot recover
    /// from.
    fn convert(&self, input: Option<&str>) -> Result<Vec<Conversion>, ConvertError>;

    fn name(&self) -> &str {
        self.info().name()
    }

    fn label(&self) -> &str {
        self.info().label()
    }

    fn description(&self) -> &str {
        self.info().description()
    }
}

impl std::fmt::Debug for dyn Functor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Functor").field("name", &self.name()).finish()
    }
}

/// One raw candidate produced by a functor, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conversion {
    /// Displayed and copied as is, with the default description.
    Bare(String),
    /// Explicit display label and copy target.
    Record {
        label: String,
        target: String,
        description: Option<String>,
    },
}

impl Conversion {
    /// A record whose label and target are the same value.
    pub fn described(value: impl Into<String>, description: impl Into<String>) -> Self {
        let value = value.into();
        Conversion::Record {
            label: value.clone(),
            target: value,
            description: Some(description.into()),
        }
    }

    /// The value copied when this candidate is selected.
    pub fn target(&self) -> &str {
        match self {
            Conversion::Bare(value) => value,
            Conversion::Record { target, .. } => target,
        }
    }
}

impl From<String> for Conversion {
    fn from(value: String) -> Self {
        Conversion::Bare(value)
    }
}

impl From<&str> for Conversion {
    fn from(value: &str) -> Self {
        Conversion::Bare(value.to_string())
    }
}
