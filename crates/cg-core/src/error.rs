use thiserror::Error;

/// Errors originating from the core module.
#[derive(Error, Debug, PartialEq)]
pub enum CoreError {
    /// Invalid configuration value or structure.
    #[error("Configuration invalide : {0}")]
    Config(String),

    /// Bit depth outside `1..=8`.
    #[error("Profondeur invalide : {bits} bits par canal (attendu 1..=8)")]
    InvalidDepth {
        /// Requested bits per channel.
        bits: u8,
    },

    /// Unknown generation strategy name.
    #[error("Stratégie inconnue : {name}")]
    UnknownStrategy {
        /// Name that did not match any strategy.
        name: String,
    },
}
