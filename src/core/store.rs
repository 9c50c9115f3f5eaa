//! Catalog - the hierarchical record store
//!
//! Bodies live in an append-only arena and are addressed by [`Handle`].
//! Two indexes sit beside the arena:
//!
//! - a per-kind name index (sorted, so listings come out in name order)
//! - a parent → children adjacency map keyed by handle, in insertion order
//!
//! Names are unique within a kind only, so the adjacency never looks at names.
//! Every handle carries the id of the catalog that issued it, and a catalog
//! refuses handles it did not issue.

use crate::core::error::{Result, StarlogError};
use crate::core::models::{BodyKind, CelestialBody};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

static NEXT_CATALOG_ID: AtomicU64 = AtomicU64::new(0);

/// Stable reference to a body stored in a [`Catalog`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Handle {
    catalog: u64,
    index: usize,
}

impl Handle {
    /// Arena position of the body
    pub fn index(&self) -> usize {
        self.index
    }
}

/// Per-kind body counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub galaxies: usize,
    pub stars: usize,
    pub planets: usize,
    pub moons: usize,
}

/// Owner of every celestial body recorded during a session
#[derive(Debug)]
pub struct Catalog {
    id: u64,
    bodies: Vec<CelestialBody>,
    names: HashMap<BodyKind, BTreeMap<String, Handle>>,
    children: HashMap<Handle, Vec<Handle>>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Create an empty catalog with a fresh id
    pub fn new() -> Self {
        Self {
            id: NEXT_CATALOG_ID.fetch_add(1, Ordering::Relaxed),
            bodies: Vec::new(),
            names: HashMap::new(),
            children: HashMap::new(),
        }
    }

    fn owns(&self, handle: Handle) -> bool {
        handle.catalog == self.id && handle.index < self.bodies.len()
    }

    /// Store a body, optionally linking it under `parent`
    ///
    /// Fails without side effects when the name is already taken within the
    /// body's kind, or when `parent` was not issued by this catalog. The
    /// parent's kind is not checked here.
    pub fn add(&mut self, body: CelestialBody, parent: Option<Handle>) -> Result<Handle> {
        if let Some(parent) = parent {
            if !self.owns(parent) {
                return Err(StarlogError::UnknownHandle {
                    index: parent.index,
                });
            }
        }

        let kind = body.kind();
        let index = self.names.entry(kind).or_default();
        if index.contains_key(body.name()) {
            return Err(StarlogError::Duplicate {
                kind,
                name: body.name().to_string(),
            });
        }

        let handle = Handle {
            catalog: self.id,
            index: self.bodies.len(),
        };
        index.insert(body.name().to_string(), handle);
        debug!(kind = %kind, name = body.name(), handle = handle.index, "stored body");
        self.bodies.push(body);

        if let Some(parent) = parent {
            self.children.entry(parent).or_default().push(handle);
        }

        Ok(handle)
    }

    /// Names of every body of `kind`, in ascending order
    pub fn list_names(&self, kind: BodyKind) -> Vec<&str> {
        self.names
            .get(&kind)
            .map(|index| index.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Exact-name lookup within a kind
    pub fn find(&self, kind: BodyKind, name: &str) -> Option<Handle> {
        self.names.get(&kind)?.get(name).copied()
    }

    /// Resolve a handle to its body; `None` for a handle from another catalog
    pub fn get(&self, handle: Handle) -> Option<&CelestialBody> {
        if handle.catalog != self.id {
            return None;
        }
        self.bodies.get(handle.index)
    }

    /// Children of `parent` in the order they were added
    ///
    /// `None` means no child was ever added under `parent`.
    pub fn children_of(&self, parent: Handle) -> Option<&[Handle]> {
        self.children.get(&parent).map(Vec::as_slice)
    }

    /// Number of bodies of `kind`
    pub fn count(&self, kind: BodyKind) -> usize {
        self.names.get(&kind).map_or(0, BTreeMap::len)
    }

    /// Counts of all four kinds
    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            galaxies: self.count(BodyKind::Galaxy),
            stars: self.count(BodyKind::Star),
            planets: self.count(BodyKind::Planet),
            moons: self.count(BodyKind::Moon),
        }
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}
