//! # Material Catalog
//!
//! A typed, string-keyed collection of [`Material`] records. The catalog is
//! populated by the caller (seed data, persisted storage, user edits) and
//! treated as an immutable snapshot for the duration of one calculation.
//!
//! Lookups for mandatory roles go through [`MaterialCatalog::require`],
//! which fails fast with a structured error instead of handing back a
//! placeholder record.
//!
//! ## Example
//!
//! ```rust
//! use wall_core::materials::{Material, MaterialCatalog, MaterialCategory, Unit};
//!
//! let mut catalog = MaterialCatalog::new();
//! catalog.insert(
//!     Material::new("stud-c70", "C stud 70 mm", MaterialCategory::Profile, Unit::Piece, 5.0)
//!         .with_length_mm(2600.0),
//! );
//!
//! assert!(catalog.get("stud-c70").is_some());
//! assert!(catalog.require("stud", "stud-c99").is_err());
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::{Material, MaterialCategory};

/// String-keyed material catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaterialCatalog {
    /// All materials, keyed by their id
    materials: HashMap<String, Material>,
}

impl MaterialCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        MaterialCatalog {
            materials: HashMap::new(),
        }
    }

    /// Insert a material, keyed by its id.
    ///
    /// Returns the previous entry if the id was already present.
    pub fn insert(&mut self, material: Material) -> Option<Material> {
        self.materials.insert(material.id.clone(), material)
    }

    /// Look up a material by id.
    pub fn get(&self, id: &str) -> Option<&Material> {
        self.materials.get(id)
    }

    /// Look up a material that a role requires.
    ///
    /// # Returns
    ///
    /// * `Ok(&Material)` - The resolved catalog entry
    /// * `Err(CalcError::MaterialNotFound)` - The id is absent from the catalog
    pub fn require(&self, role: &str, id: &str) -> CalcResult<&Material> {
        self.materials
            .get(id)
            .ok_or_else(|| CalcError::material_not_found(role, id))
    }

    /// Whether an id is present.
    pub fn contains(&self, id: &str) -> bool {
        self.materials.contains_key(id)
    }

    /// Number of materials in the catalog.
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Iterate over all materials (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &Material> {
        self.materials.values()
    }

    /// All materials of one category, sorted by id for stable display.
    pub fn by_category(&self, category: MaterialCategory) -> Vec<&Material> {
        let mut matches: Vec<&Material> = self
            .materials
            .values()
            .filter(|m| m.category == category)
            .collect();
        matches.sort_by(|a, b| a.id.cmp(&b.id));
        matches
    }
}

impl FromIterator<Material> for MaterialCatalog {
    fn from_iter<I: IntoIterator<Item = Material>>(iter: I) -> Self {
        let mut catalog = MaterialCatalog::new();
        for material in iter {
            catalog.insert(material);
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::Unit;

    fn test_material(id: &str, category: MaterialCategory) -> Material {
        Material::new(id, format!("Test {id}"), category, Unit::Piece, 0.0)
    }

    #[test]
    fn test_insert_and_get() {
        let mut catalog = MaterialCatalog::new();
        assert!(catalog.is_empty());

        catalog.insert(test_material("board-a", MaterialCategory::Board));
        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains("board-a"));
        assert_eq!(catalog.get("board-a").unwrap().id, "board-a");
        assert!(catalog.get("board-b").is_none());
    }

    #[test]
    fn test_insert_replaces_same_id() {
        let mut catalog = MaterialCatalog::new();
        catalog.insert(test_material("board-a", MaterialCategory::Board));
        let displaced = catalog.insert(test_material("board-a", MaterialCategory::Other));

        assert!(displaced.is_some());
        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.get("board-a").unwrap().category,
            MaterialCategory::Other
        );
    }

    #[test]
    fn test_require_unknown_id() {
        let catalog = MaterialCatalog::new();
        let err = catalog.require("board", "board-a").unwrap_err();
        assert_eq!(
            err,
            CalcError::MaterialNotFound {
                role: "board".to_string(),
                material_id: "board-a".to_string(),
            }
        );
    }

    #[test]
    fn test_by_category_sorted() {
        let catalog: MaterialCatalog = [
            test_material("profile-b", MaterialCategory::Profile),
            test_material("profile-a", MaterialCategory::Profile),
            test_material("board-a", MaterialCategory::Board),
        ]
        .into_iter()
        .collect();

        let profiles = catalog.by_category(MaterialCategory::Profile);
        let ids: Vec<&str> = profiles.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["profile-a", "profile-b"]);
    }

    #[test]
    fn test_catalog_serialization() {
        let catalog: MaterialCatalog = [test_material("tape-a", MaterialCategory::Tape)]
            .into_iter()
            .collect();

        let json = serde_json::to_string(&catalog).unwrap();
        let roundtrip: MaterialCatalog = serde_json::from_str(&json).unwrap();
        assert!(roundtrip.contains("tape-a"));
    }
}
