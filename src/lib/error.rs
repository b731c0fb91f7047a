use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("entry name too long: '{name}' is {len} bytes, ustar allows 100")]
    NameTooLong { name: String, len: usize },
    #[error("{field} value {value} exceeds octal field capacity ({max})")]
    FieldOverflow {
        field: &'static str,
        value: u64,
        max: u64,
    },
    #[error("content error: {0}")]
    ContentError(#[from] std::io::Error),
}
