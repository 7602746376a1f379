use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("API key is missing. Please set the {variable} environment variable.")]
    MissingApiKey { variable: &'static str },

    #[error("no input pdf files were given")]
    NoInputs,
}

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("pdf parse error: {0}")]
    PdfParse(String),

    #[error("pdf had no readable page text: {0}")]
    EmptyDocument(String),

    #[error("no text to summarize")]
    EmptyInput,

    #[error("API error: {status}, {message}")]
    Service { status: u16, message: String },

    #[error("service returned status 200 without summary text")]
    MissingOutput,

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("url parse error: {0}")]
    Url(#[from] url::ParseError),

    #[error("serialize error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("file {0} does not exist or is not a file")]
    NotAFile(String),

    #[error("path has no file name: {0}")]
    InvalidPath(String),

    #[error("{output} was already written from {first} in this batch")]
    OutputConflict { output: String, first: String },

    #[error("folder {0} does not exist or is not a directory")]
    NotADirectory(String),

    #[error("folder walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

pub type Result<T, E = SummaryError> = std::result::Result<T, E>;
