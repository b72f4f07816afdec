use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutlineError {
    #[error("no source geometry for '{0}'")]
    SourceNotFound(String),

    #[error("path data too long ({len} chars)")]
    PathTooLong { len: usize },

    #[error("malformed number '{literal}'")]
    MalformedNumber { literal: String },

    #[error("unsupported path command '{command}'")]
    UnsupportedCommand { command: char },

    #[error("coordinates at token {position} have no active command")]
    MissingCommand { position: usize },

    #[error("command '{command}' expects {expected} coordinates, found {found}")]
    TruncatedCoordinates {
        command: char,
        expected: usize,
        found: usize,
    },

    #[error("path yields no drawable segments")]
    EmptySegments,

    #[error("no stroke data: {0}")]
    EmptyStrokeData(String),

    #[error("unknown glyph '{0}'")]
    UnknownGlyph(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("no record for '{0}' in outline")]
    RecordNotFound(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("svg: {0}")]
    Xml(#[from] xml::reader::Error),
}

pub type Result<T> = std::result::Result<T, OutlineError>;
