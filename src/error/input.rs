use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Failed to read input file {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse input file {path}: {source}")]
    ParseError {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
