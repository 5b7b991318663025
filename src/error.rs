use std::fmt;

#[derive(Debug)]
pub enum TallyError {
    Io(std::io::Error),
    Parse(String),
    Chunk(String),
    Other(String),
}

impl fmt::Display for TallyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TallyError::Io(e) => write!(f, "IO error: {}", e),
            TallyError::Parse(e) => write!(f, "Parse error: {}", e),
            TallyError::Chunk(e) => write!(f, "Chunk error: {}", e),
            TallyError::Other(e) => write!(f, "Error: {}", e),
        }
    }
}

impl std::error::Error for TallyError {}

impl From<std::io::Error> for TallyError {
    fn from(err: std::io::Error) -> Self {
        TallyError::Io(err)
    }
}

impl From<String> for TallyError {
    fn from(err: String) -> Self {
        TallyError::Other(err)
    }
}

impl From<&str> for TallyError {
    fn from(err: &str) -> Self {
        TallyError::Other(err.to_string())
    }
}
