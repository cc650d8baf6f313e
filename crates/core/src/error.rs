/// Error type for functor conversions
///
/// Returned from [`crate::Functor::convert`] for conditions a functor cannot fall back
/// from. The dispatcher turns every variant into a single error entry, so none of these
/// ever reach the host as a failure.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("No closing quotation")]
    UnbalancedQuotes,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Negative count: {0}")]
    NegativeCount(String),

    #[error("Count {count} exceeds the maximum of {max}")]
    CountTooLarge { count: String, max: usize },

    #[error("Invalid port: {0}")]
    InvalidPort(String),
}
