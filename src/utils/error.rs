use thiserror::Error;

#[derive(Error, Debug)]
pub enum FileError {
    #[error("YAML file is empty: {path}")]
    EmptyDocument { path: String },

    #[error("Expected a mapping at the root of {path}, found {found}")]
    NotAMapping { path: String, found: String },

    #[error("Non-finite number at '{key}' cannot be represented in a config tree")]
    NonFiniteNumber { key: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Base64 decoding error: {0}")]
    Base64Error(#[from] base64::DecodeError),

    #[error("Binary serialization error: {0}")]
    BinaryError(#[from] bincode::Error),

    #[error("Missing config key: {key}")]
    MissingKey { key: String },

    #[error("Invalid value for '{key}': expected {expected}")]
    InvalidValue { key: String, expected: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

/// Coarse classification of a [`FileError`], used for reporting and exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    EmptyDocument,
    Io,
    Parse,
    Serialization,
    Config,
}

impl ErrorCategory {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorCategory::EmptyDocument | ErrorCategory::Parse | ErrorCategory::Config => 2,
            ErrorCategory::Io => 3,
            ErrorCategory::Serialization => 4,
        }
    }
}

impl FileError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FileError::EmptyDocument { .. } => ErrorCategory::EmptyDocument,
            FileError::IoError(_) => ErrorCategory::Io,
            FileError::NotAMapping { .. }
            | FileError::NonFiniteNumber { .. }
            | FileError::YamlError(_)
            | FileError::JsonError(_)
            | FileError::TomlError(_)
            | FileError::Base64Error(_) => ErrorCategory::Parse,
            FileError::BinaryError(_) => ErrorCategory::Serialization,
            FileError::MissingKey { .. }
            | FileError::InvalidValue { .. }
            | FileError::InvalidConfigValueError { .. } => ErrorCategory::Config,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FileError::EmptyDocument { .. } => "Add at least one key to the YAML file",
            FileError::NotAMapping { .. } => "Put the document's values under top-level keys",
            FileError::NonFiniteNumber { .. } => {
                "Replace .inf/.nan with a finite number or quote it as a string"
            }
            FileError::IoError(_) => "Check that the path exists and is readable/writable",
            FileError::YamlError(_) | FileError::JsonError(_) | FileError::TomlError(_) => {
                "Fix the syntax error reported above"
            }
            FileError::Base64Error(_) => "Make sure the input is standard, padded base64",
            FileError::BinaryError(_) => {
                "The file is corrupt or was saved from a different type; save it again"
            }
            FileError::MissingKey { .. } | FileError::InvalidValue { .. } => {
                "Check the key path against the config file"
            }
            FileError::InvalidConfigValueError { .. } => "Run with --help to see valid arguments",
        }
    }
}

pub type Result<T> = std::result::Result<T, FileError>;
