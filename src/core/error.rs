//! Error types for starlog
//!
//! This module provides structured error handling using thiserror. Every
//! failure a user can trigger from the console is a variant here; the console
//! renders its `Display` text and keeps going.

use crate::core::models::BodyKind;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, StarlogError>;

/// Numeric star fields, named in "expected" errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarField {
    Mass,
    Diameter,
    Temperature,
    Luminosity,
}

impl std::fmt::Display for StarField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StarField::Mass => "mass",
            StarField::Diameter => "diameter",
            StarField::Temperature => "temperature",
            StarField::Luminosity => "luminosity",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while interpreting commands or running the console
#[derive(Error, Debug)]
pub enum StarlogError {
    // =========================================================================
    // Grammar
    // =========================================================================
    /// First word is not a known command
    #[error("Unknown command: {word}")]
    UnknownCommand { word: String },

    /// `add` or `list` without a body type word
    #[error("Celestial body type expected")]
    BodyTypeExpected,

    /// `add` or `list` with a word that names no body type
    #[error("Unknown celestial body type: {word}")]
    UnknownBodyType { word: String },

    /// A bracketed name was required but something else was found
    #[error("Expected {} name in square brackets", .field.noun())]
    ExpectedName { field: BodyKind },

    /// A bracketed name was opened but never closed
    #[error("Missing ']' after {} name", .field.noun())]
    UnterminatedName { field: BodyKind },

    /// `[]`
    #[error("{field} name cannot be empty")]
    EmptyName { field: BodyKind },

    /// Leftover tokens after a complete command
    #[error("Unexpected input after command: '{rest}'")]
    ExtraInput { rest: String },

    // =========================================================================
    // Domain validation
    // =========================================================================
    #[error("Invalid galaxy type: {word}")]
    InvalidGalaxyType { word: String },

    #[error("Galaxy age expected")]
    AgeExpected,

    #[error("Galaxy age must end in M or B")]
    AgeUnit,

    #[error("Galaxy age must be a float followed by M or B")]
    AgeNotNumber,

    #[error("Galaxy age cannot be negative")]
    AgeNegative,

    /// Numeric star field missing or not parseable as its numeric kind
    #[error("Star {field} expected")]
    StarFieldExpected { field: StarField },

    #[error("Star {field} cannot be negative")]
    StarFieldNegative { field: StarField },

    #[error("Invalid combination of star characteristics.")]
    InvalidStar,

    #[error("Planet type expected")]
    PlanetTypeExpected,

    #[error("Unknown planet type: {value}")]
    UnknownPlanetType { value: String },

    #[error("Expected 'yes' or 'no' for life support")]
    LifeSupportExpected,

    // =========================================================================
    // Catalog
    // =========================================================================
    /// Named parent does not exist
    #[error("{kind} {name} not found")]
    NotFound { kind: BodyKind, name: String },

    /// Same-kind name already taken
    #[error("{kind} {name} already exists")]
    Duplicate { kind: BodyKind, name: String },

    /// Handle not issued by this catalog
    #[error("Unknown catalog handle: {index}")]
    UnknownHandle { index: usize },

    // =========================================================================
    // Ambient
    // =========================================================================
    /// IO error on the console streams or config file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or rendering error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Config file not found
    #[error("Config file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<StarlogError>,
    },
}

impl StarlogError {
    /// Wrap an error with additional context
    pub fn with_context(self, context: impl Into<String>) -> Self {
        StarlogError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Create a not-found error for a named parent
    pub fn not_found(kind: BodyKind, name: impl Into<String>) -> Self {
        StarlogError::NotFound {
            kind,
            name: name.into(),
        }
    }

    /// Create a field-expected error
    pub fn expected(field: StarField) -> Self {
        StarlogError::StarFieldExpected { field }
    }

    /// True for a same-kind name collision
    pub fn is_duplicate(&self) -> bool {
        matches!(self, StarlogError::Duplicate { .. })
    }
}

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(ctx))
    }
}
