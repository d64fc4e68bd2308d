use thiserror::Error;

#[derive(Error, Debug)]
pub enum TextTallyError {
    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("unable to find year in {path}")]
    YearNotFound { path: String },

    #[error("unable to find table in {path}")]
    TableNotFound { path: String },

    #[error("failed to write summary file {path}")]
    SummaryWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Path validation failed: {path}")]
    InvalidPath { path: String },
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for TextTallyError {
    fn user_message(&self) -> String {
        match self {
            TextTallyError::Io(source) => {
                format!("IO operation failed: {}", source)
            }
            TextTallyError::YearNotFound { path } => {
                format!("unable to find year in {}", path)
            }
            TextTallyError::TableNotFound { path } => {
                format!("unable to find table in {}", path)
            }
            TextTallyError::SummaryWrite { path, source } => {
                format!("failed to write summary file {}: {}", path, source)
            }
            TextTallyError::Config { message } => {
                format!("Configuration error: {}", message)
            }
            TextTallyError::InvalidPath { path } => {
                format!("Invalid file path: {}", path)
            }
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            TextTallyError::Io(_) => {
                Some("Check that the input file exists and is readable.".to_string())
            }
            TextTallyError::YearNotFound { .. } => Some(
                "The input must contain a heading with the text 'Popularity in YYYY'.".to_string(),
            ),
            TextTallyError::TableNotFound { .. } => Some(
                "The input must contain a table whose header row mentions Rank, male and female."
                    .to_string(),
            ),
            TextTallyError::SummaryWrite { .. } => Some(
                "Ensure the directory containing the input file is writable.".to_string(),
            ),
            TextTallyError::Config { .. } => Some(
                "Check your configuration file syntax and ensure all required fields are present."
                    .to_string(),
            ),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for TextTallyError {
    fn from(error: toml::de::Error) -> Self {
        TextTallyError::Config {
            message: error.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TextTallyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_friendly_messages() {
        let error = TextTallyError::YearNotFound {
            path: "baby.html".to_string(),
        };
        assert_eq!(error.user_message(), "unable to find year in baby.html");
        assert!(error.suggestion().is_some());
    }

    #[test]
    fn test_table_not_found_message() {
        let error = TextTallyError::TableNotFound {
            path: "baby.html".to_string(),
        };
        assert_eq!(error.user_message(), "unable to find table in baby.html");
        assert!(error.suggestion().unwrap().contains("Rank"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error = TextTallyError::from(io_error);
        assert!(matches!(error, TextTallyError::Io(_)));
        assert!(error.user_message().contains("IO operation failed"));
    }

    #[test]
    fn test_toml_error_conversion() {
        let parse_error = toml::from_str::<toml::Value>("not [ valid").unwrap_err();
        let error = TextTallyError::from(parse_error);
        assert!(matches!(error, TextTallyError::Config { .. }));
    }
}
