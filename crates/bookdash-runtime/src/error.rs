use bookdash_types::Column;
use std::fmt;
use std::path::PathBuf;

/// Result type for bookdash-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Startup failures. All of them are fatal: no page renders without a dataset.
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// Dataset file is not valid CSV
    Csv(csv::Error),

    /// Dataset header lacks a required column
    MissingColumn(Column),

    /// Decorative image asset could not be found
    MissingAsset(PathBuf),

    /// Configuration error
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Csv(err) => write!(f, "Malformed CSV: {}", err),
            Error::MissingColumn(column) => match column.alias() {
                Some(alias) => write!(
                    f,
                    "Dataset is missing column '{}' (or '{}')",
                    column.header(),
                    alias
                ),
                None => write!(f, "Dataset is missing column '{}'", column.header()),
            },
            Error::MissingAsset(path) => {
                write!(f, "Image asset not found: {}", path.display())
            }
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Csv(err) => Some(err),
            Error::MissingColumn(_) | Error::MissingAsset(_) | Error::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
