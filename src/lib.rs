//! starlog - an interactive catalog of celestial bodies
//!
//! Galaxies contain stars, stars contain planets, planets contain moons. This
//! library holds the catalog, the command language and the console loop. It
//! is consumed by:
//! - The CLI binary (src/bin/starlog.rs)
//! - Integration tests driving [`core::Console`] directly
//!
//! # Architecture
//!
//! This crate follows the "Library-First" pattern:
//! - **lib.rs** (this file): Pure logic, no CLI concerns
//! - **bin/starlog.rs**: Thin wrapper that parses flags, sets up logging and
//!   runs the console on stdin/stdout
//!
//! ```text
//! line → parser::interpret → Command → engine::execute → Report → Presenter
//!              │                             │
//!              └──── &Catalog ───────────────┴──── &mut Catalog
//! ```

pub mod core;

pub use crate::core::{
    classify, execute, interpret, parse, BodyKind, Catalog, CelestialBody, Command, Console,
    ConsoleConfig, Handle, Outcome, Report, SpectralClass, StarlogError,
};

/// Crate version, as reported by `starlog --version`
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the version of the starlog library
pub fn version() -> &'static str {
    VERSION
}
