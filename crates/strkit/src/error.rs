#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Conversion(String),

    #[error("Invalid selection {index}: there are {available} results")]
    InvalidSelection { index: usize, available: usize },
}
