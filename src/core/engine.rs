//! Command Engine - applies parsed commands to the catalog
//!
//! The engine is the only place the catalog is mutated. Each command yields an
//! [`Outcome`]: a [`Report`] for the presenter plus a [`Flow`] telling the
//! console whether to keep reading lines.

use crate::core::command::Command;
use crate::core::models::{BodyKind, CelestialBody, Galaxy, Moon, Planet, Star};
use crate::core::store::{Catalog, CatalogStats, Handle};
use serde::Serialize;
use tracing::{debug, warn};

/// Whether the console loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// What a command produced, for the display layer to render
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Report {
    /// Nothing to show
    Nothing,
    /// Input was rejected
    Error(String),
    /// Non-fatal notice, such as a duplicate name
    Notice(String),
    /// A body was stored
    Added { kind: BodyKind, name: String },
    /// Sorted names of one kind
    Listing { label: String, names: Vec<String> },
    /// Per-kind counts
    Stats(CatalogStats),
    /// A galaxy and everything beneath it
    Tree(GalaxyTree),
    /// Command summary
    Help,
    /// Console is closing
    Farewell,
}

/// Result of executing one command
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub report: Report,
    pub flow: Flow,
}

impl Outcome {
    fn proceed(report: Report) -> Self {
        Self {
            report,
            flow: Flow::Continue,
        }
    }

    pub fn is_exit(&self) -> bool {
        self.flow == Flow::Exit
    }
}

// =============================================================================
// Galaxy tree
// =============================================================================

/// A galaxy with its stars, their planets and the planets' moons
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GalaxyTree {
    pub galaxy: Galaxy,
    pub stars: Vec<StarTree>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StarTree {
    pub star: Star,
    pub planets: Vec<PlanetTree>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanetTree {
    pub planet: Planet,
    pub moons: Vec<Moon>,
}

impl GalaxyTree {
    /// Number of bodies in the tree, galaxy included
    pub fn body_count(&self) -> usize {
        1 + self
            .stars
            .iter()
            .map(|s| 1 + s.planets.iter().map(|p| 1 + p.moons.len()).sum::<usize>())
            .sum::<usize>()
    }
}

/// Children of `parent` accepted by `select`, in insertion order
fn children<'a, T>(
    catalog: &'a Catalog,
    parent: Handle,
    select: fn(&'a CelestialBody) -> Option<&'a T>,
) -> Vec<(Handle, &'a T)> {
    catalog
        .children_of(parent)
        .unwrap_or_default()
        .iter()
        .filter_map(|&handle| {
            let body = catalog.get(handle)?;
            select(body).map(|typed| (handle, typed))
        })
        .collect()
}

/// Walk galaxy → stars → planets → moons
///
/// A child of an unexpected kind at any level is skipped. Returns `None` if
/// `galaxy` does not resolve to a galaxy.
pub fn build_tree(catalog: &Catalog, galaxy: Handle) -> Option<GalaxyTree> {
    let root = catalog.get(galaxy)?.as_galaxy()?;

    let stars = children(catalog, galaxy, CelestialBody::as_star)
        .into_iter()
        .map(|(star_handle, star)| {
            let planets = children(catalog, star_handle, CelestialBody::as_planet)
                .into_iter()
                .map(|(planet_handle, planet)| PlanetTree {
                    planet: planet.clone(),
                    moons: children(catalog, planet_handle, CelestialBody::as_moon)
                        .into_iter()
                        .map(|(_, moon)| moon.clone())
                        .collect(),
                })
                .collect();
            StarTree {
                star: star.clone(),
                planets,
            }
        })
        .collect();

    Some(GalaxyTree {
        galaxy: root.clone(),
        stars,
    })
}

// =============================================================================
// Execution
// =============================================================================

/// Apply `command` to `catalog`
pub fn execute(command: Command, catalog: &mut Catalog) -> Outcome {
    match command {
        Command::NoOp => Outcome::proceed(Report::Nothing),
        Command::ShowError(message) => Outcome::proceed(Report::Error(message)),
        Command::AddBody { body, parent } => {
            let kind = body.kind();
            let name = body.name().to_string();
            match catalog.add(body, parent) {
                Ok(handle) => {
                    debug!(kind = %kind, name = %name, handle = handle.index(), "added");
                    Outcome::proceed(Report::Added { kind, name })
                }
                Err(err) if err.is_duplicate() => {
                    warn!(error = %err, "duplicate name");
                    Outcome::proceed(Report::Notice(err.to_string()))
                }
                Err(err) => {
                    warn!(error = %err, "add rejected");
                    Outcome::proceed(Report::Error(err.to_string()))
                }
            }
        }
        Command::ListKind { kind, label } => {
            let names = catalog
                .list_names(kind)
                .into_iter()
                .map(str::to_string)
                .collect();
            Outcome::proceed(Report::Listing { label, names })
        }
        Command::Stats => Outcome::proceed(Report::Stats(catalog.stats())),
        Command::PrintGalaxy(galaxy) => match build_tree(catalog, galaxy) {
            Some(tree) => Outcome::proceed(Report::Tree(tree)),
            None => Outcome::proceed(Report::Error(format!(
                "Galaxy #{} not found",
                galaxy.index()
            ))),
        },
        Command::Help => Outcome::proceed(Report::Help),
        Command::Exit => Outcome {
            report: Report::Farewell,
            flow: Flow::Exit,
        },
    }
}
