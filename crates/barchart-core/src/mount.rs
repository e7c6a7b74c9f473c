// File: crates/barchart-core/src/mount.rs
// Summary: Mount point contract (find a target, clear it, append a surface)
// and an in-memory document implementing it.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::surface::{DrawingSurface, NewSurface};

/// A container a chart attaches its drawing surface to.
pub trait MountTarget {
    type Surface: DrawingSurface;

    /// Allocate a detached surface; the target is not modified.
    fn create_surface(&mut self, width: u32, height: u32) -> Result<Self::Surface>;
    /// Remove all children.
    fn clear(&mut self);
    /// Append one surface as a child.
    fn append(&mut self, surface: Self::Surface);
}

/// Resolves mount point ids to targets.
pub trait Document {
    type Target: MountTarget;

    fn target_mut(&mut self, id: &str) -> Option<&mut Self::Target>;
}

/// An in-memory mount target holding surfaces of one kind.
#[derive(Clone, Debug)]
pub struct Element<S> {
    id: String,
    children: Vec<S>,
    serial: u64,
}

impl<S> Element<S> {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), children: Vec::new(), serial: 0 }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn children(&self) -> &[S] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [S] {
        &mut self.children
    }

    /// Put a child in place directly (e.g. content that predates a chart).
    pub fn push_child(&mut self, child: S) {
        self.children.push(child);
    }
}

impl<S: NewSurface> MountTarget for Element<S> {
    type Surface = S;

    fn create_surface(&mut self, width: u32, height: u32) -> Result<S> {
        self.serial += 1;
        S::new_surface(format!("{}-{}", self.id, self.serial), width, height)
    }

    fn clear(&mut self) {
        self.children.clear();
    }

    fn append(&mut self, surface: S) {
        self.children.push(surface);
    }
}

/// A set of named mount targets.
#[derive(Clone, Debug)]
pub struct Page<S> {
    targets: BTreeMap<String, Element<S>>,
}

impl<S> Default for Page<S> {
    fn default() -> Self {
        Self { targets: BTreeMap::new() }
    }
}

impl<S> Page<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_target(mut self, id: impl Into<String>) -> Self {
        self.add_target(id);
        self
    }

    /// Add an empty target; an existing target with the same id is kept.
    pub fn add_target(&mut self, id: impl Into<String>) -> &mut Element<S> {
        let id = id.into();
        self.targets.entry(id.clone()).or_insert_with(|| Element::new(id))
    }

    pub fn target(&self, id: &str) -> Option<&Element<S>> {
        self.targets.get(id)
    }
}

impl<S: NewSurface> Document for Page<S> {
    type Target = Element<S>;

    fn target_mut(&mut self, id: &str) -> Option<&mut Element<S>> {
        self.targets.get_mut(id)
    }
}
