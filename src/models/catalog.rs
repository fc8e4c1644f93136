//! Course catalog.
//!
//! An insertion-ordered map from course id to catalog record. Iteration
//! follows insertion order; the fill pass scans the catalog in that order,
//! so reordering entries changes which fillers a plan receives.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{CourseId, CourseInfo};

/// Insertion-ordered collection of course records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(
    from = "Vec<(CourseId, CourseInfo)>",
    into = "Vec<(CourseId, CourseInfo)>"
)]
pub struct Catalog {
    entries: Vec<(CourseId, CourseInfo)>,
    index: HashMap<CourseId, usize>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Inserts or replaces a course record. Replacing keeps the course's
    /// original position in iteration order.
    pub fn insert(&mut self, id: CourseId, info: CourseInfo) {
        match self.index.get(&id) {
            Some(&pos) => self.entries[pos].1 = info,
            None => {
                self.index.insert(id.clone(), self.entries.len());
                self.entries.push((id, info));
            }
        }
    }

    /// Builder form of [`insert`](Catalog::insert).
    pub fn with_course(mut self, id: CourseId, info: CourseInfo) -> Self {
        self.insert(id, info);
        self
    }

    /// Looks up a course record.
    pub fn get(&self, id: &CourseId) -> Option<&CourseInfo> {
        self.index.get(id).map(|&pos| &self.entries[pos].1)
    }

    /// Whether the catalog has a record for the id.
    pub fn contains(&self, id: &CourseId) -> bool {
        self.index.contains_key(id)
    }

    /// Iterates records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&CourseId, &CourseInfo)> {
        self.entries.iter().map(|(id, info)| (id, info))
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no records.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<(CourseId, CourseInfo)>> for Catalog {
    fn from(entries: Vec<(CourseId, CourseInfo)>) -> Self {
        let mut catalog = Catalog::new();
        for (id, info) in entries {
            catalog.insert(id, info);
        }
        catalog
    }
}

impl From<Catalog> for Vec<(CourseId, CourseInfo)> {
    fn from(catalog: Catalog) -> Self {
        catalog.entries
    }
}
