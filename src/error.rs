use thiserror::Error;

#[derive(Error, Debug)]
pub enum StrainerError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(String),
    #[error("Roster error: {message}")]
    Roster { message: String, line: Option<usize>, col: Option<usize> },
    #[error("Pattern error: {0}")]
    Pattern(String),
}

pub type Result<T> = std::result::Result<T, StrainerError>;

// Helper conversions
impl From<config::ConfigError> for StrainerError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}
impl From<std::io::Error> for StrainerError {
    fn from(e: std::io::Error) -> Self { Self::Io(e.to_string()) }
}
impl From<serde_json::Error> for StrainerError {
    fn from(e: serde_json::Error) -> Self {
        let (line, col) = if e.line() > 0 { (Some(e.line()), Some(e.column())) } else { (None, None) };
        Self::Roster { message: e.to_string(), line, col }
    }
}
impl From<regex::Error> for StrainerError {
    fn from(e: regex::Error) -> Self { Self::Pattern(e.to_string()) }
}
