use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("YamlSerializationError: {0}")]
    YamlSerializationError(#[source] serde_yaml::Error),

    #[error("UnsupportedKind: {0}")]
    UnsupportedKind(String),

    #[error("KindMismatch: current is {current}, expected is {expected}")]
    KindMismatch { current: String, expected: String },

    #[error("InvalidArgument: {0}")]
    InvalidArgument(String),
}

impl Error {
    pub fn metric_label(&self) -> String {
        match self {
            Error::YamlSerializationError(_) => "yamlserializationerror".to_string(),
            Error::UnsupportedKind(_) => "unsupportedkind".to_string(),
            Error::KindMismatch { .. } => "kindmismatch".to_string(),
            Error::InvalidArgument(_) => "invalidargument".to_string(),
        }
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(e: serde_yaml::Error) -> Self {
        Error::YamlSerializationError(e)
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
