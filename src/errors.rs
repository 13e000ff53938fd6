//! Unified error types for Agrix.
//!
//! Every fallible operation in the crate returns [`Result`]. The only domain error is
//! [`Error::NotFound`], tagged with the kind of record that was missing; everything else
//! is infrastructure (database, configuration, I/O).

use std::fmt;
use thiserror::Error;

/// The kinds of record that can be reported as missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// A farm lookup failed
    Farm,
    /// A crop lookup failed
    Crop,
    /// A fertilizer lookup failed
    Fertilizer,
}

impl EntityKind {
    /// Fixed human-readable message returned to API clients.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Farm => "Fazenda não encontrada!",
            Self::Crop => "Plantação não encontrada!",
            Self::Fertilizer => "Fertilizante não encontrado!",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Application error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A referenced farm, crop or fertilizer does not exist
    #[error("{0}")]
    NotFound(EntityKind),

    /// Invalid or unreadable configuration
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// Any failure reported by the database layer, including constraint violations
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Socket or filesystem failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_displays_fixed_message() {
        assert_eq!(
            Error::NotFound(EntityKind::Farm).to_string(),
            "Fazenda não encontrada!"
        );
        assert_eq!(
            Error::NotFound(EntityKind::Crop).to_string(),
            "Plantação não encontrada!"
        );
        assert_eq!(
            Error::NotFound(EntityKind::Fertilizer).to_string(),
            "Fertilizante não encontrado!"
        );
    }

    #[test]
    fn test_config_error_message() {
        let err = Error::Config {
            message: "bad port".to_string(),
        };
        assert_eq!(err.to_string(), "Configuration error: bad port");
    }
}
