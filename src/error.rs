//! Error types for macrotag

use std::path::PathBuf;
use thiserror::Error;

/// Failures raised by the tag engine itself
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagError {
    #[error("Undefined tag type: {0}")]
    UndefinedTagType(String),

    #[error("Invalid render handler for tag type: {0}")]
    InvalidRenderHandler(String),
}

/// Main error type for the macrotag application
#[derive(Debug, Error)]
pub enum MacrotagError {
    #[error(transparent)]
    Tag(#[from] TagError),

    #[error("No macrotag config found from: {0}")]
    ConfigNotFound(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl MacrotagError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MacrotagError::ConfigNotFound(_) => 2,
            MacrotagError::Tag(TagError::UndefinedTagType(_)) => 3,
            MacrotagError::Tag(TagError::InvalidRenderHandler(_)) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MacrotagError::ConfigNotFound(path) => {
                format!(
                    "No macrotag config found from: {}\n\n\
                    Suggestions:\n\
                    • Create a macrotag.toml in this directory or a parent\n\
                    • Pass a config file explicitly: macrotag --config path/to/macrotag.toml\n\
                    • Set MACROTAG_CONFIG environment variable to your config path",
                    path.display()
                )
            }
            MacrotagError::Tag(TagError::UndefinedTagType(name)) => {
                format!(
                    "Undefined tag type: '{}'\n\n\
                    Suggestions:\n\
                    • Check the spelling (tag types are case-sensitive)\n\
                    • Use 'macrotag types' to see registered tag types\n\
                    • Declare it in macrotag.toml under [types.{}]",
                    name, name
                )
            }
            MacrotagError::Tag(TagError::InvalidRenderHandler(name)) => {
                format!(
                    "Invalid render handler for tag type: '{}'\n\n\
                    Suggestions:\n\
                    • Add a template to [types.{}] in macrotag.toml\n\
                    • Use 'macrotag parse' to inspect the tag without rendering it",
                    name, name
                )
            }
            MacrotagError::Config(msg) => {
                if msg.contains("--data") {
                    format!(
                        "{}\n\n\
                        Expected format: key=value\n\
                        Example: macrotag render \"image: cat.png\" --data page=home",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MacrotagError
pub type Result<T> = std::result::Result<T, MacrotagError>;
