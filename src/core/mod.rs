//! Core module for starlog
//!
//! This module provides the catalog, the command language and the console.
//!
//! # Architecture
//!
//! - `models`: Celestial body records (Galaxy, Star, Planet, Moon)
//! - `spectral`: Spectral classification of stars
//! - `error`: Error types using thiserror
//! - `store`: The Catalog with per-kind name indexes and parent/child links
//! - `command`: The closed set of console commands
//! - `parser`: Line → Command
//! - `engine`: Command → Catalog mutation/query → Report
//! - `presenter`: Report → text or JSON
//! - `config`: Console settings
//! - `console`: The read/execute/render loop

pub mod models;
pub mod spectral;
pub mod error;
pub mod store;
pub mod command;
pub mod parser;
pub mod engine;
pub mod presenter;
pub mod config;
pub mod console;

// Re-export commonly used types
pub use models::{
    AgeUnit, BodyKind, CelestialBody, Galaxy, GalaxyKind, Moon, Planet, PlanetKind, Star,
};
pub use spectral::{classify, SpectralClass};
pub use error::{Result, ResultExt, StarField, StarlogError};
pub use store::{Catalog, CatalogStats, Handle};
pub use command::Command;
pub use parser::{interpret, parse};
pub use engine::{build_tree, execute, Flow, GalaxyTree, Outcome, PlanetTree, Report, StarTree};
pub use presenter::{EmojiFormatter, OutputFormat, Presenter, Theme};
pub use config::ConsoleConfig;
pub use console::Console;
