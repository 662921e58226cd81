//! # Catalog
//!
//! The collection of droids the CLI manipulates, and the host of the two
//! ordering operations.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog Operations                                   │
//! │                                                                         │
//! │  add_protocol / add_utility / add_janitor / add_astromech              │
//! │       └── validate counts ──► Droid::new ──► droids.push               │
//! │                                                                         │
//! │  sort_into_categories()                                                 │
//! │       └── CategoryRouter (stacks + queue), stable, rank order          │
//! │                                                                         │
//! │  sort_by_total_cost()                                                   │
//! │       └── MergeSorter keyed on Droid::total_cost, stable, ascending    │
//! │                                                                         │
//! │  Both reorder `droids` in place; the caller re-reads the catalog.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::router::CategoryRouter;
use crate::sort::MergeSorter;
use crate::types::{Category, CategoryRanking, Color, Droid, DroidModel, Material, UtilityOptions};
use crate::validation::{validate_language_count, validate_ship_count};

const SEPARATOR: &str = "****************************";

/// Droids in insertion order until one of the sorts reorders them.
#[derive(Debug, Clone)]
pub struct Catalog {
    droids: Vec<Droid>,
    router: CategoryRouter<Category>,
}

impl Catalog {
    /// Creates an empty catalog that buckets in `ranking` order.
    pub fn new(ranking: CategoryRanking) -> Self {
        Catalog {
            droids: Vec::new(),
            router: CategoryRouter::new(ranking.as_slice().iter().copied()),
        }
    }

    /// Adds a protocol droid and returns its id.
    pub fn add_protocol(
        &mut self,
        material: Material,
        color: Color,
        languages: u32,
    ) -> CoreResult<Uuid> {
        validate_language_count(languages)?;
        Ok(self.push(Droid::new(
            material,
            color,
            DroidModel::Protocol { languages },
        )))
    }

    /// Adds a utility droid and returns its id.
    pub fn add_utility(
        &mut self,
        material: Material,
        color: Color,
        utility: UtilityOptions,
    ) -> CoreResult<Uuid> {
        Ok(self.push(Droid::new(material, color, DroidModel::Utility { utility })))
    }

    /// Adds a janitor droid and returns its id.
    pub fn add_janitor(
        &mut self,
        material: Material,
        color: Color,
        utility: UtilityOptions,
        broom: bool,
        vacuum: bool,
    ) -> CoreResult<Uuid> {
        Ok(self.push(Droid::new(
            material,
            color,
            DroidModel::Janitor {
                utility,
                broom,
                vacuum,
            },
        )))
    }

    /// Adds an astromech droid and returns its id.
    pub fn add_astromech(
        &mut self,
        material: Material,
        color: Color,
        utility: UtilityOptions,
        navigation: bool,
        ships: u32,
    ) -> CoreResult<Uuid> {
        validate_ship_count(ships)?;
        Ok(self.push(Droid::new(
            material,
            color,
            DroidModel::Astromech {
                utility,
                navigation,
                ships,
            },
        )))
    }

    fn push(&mut self, droid: Droid) -> Uuid {
        let id = droid.id();
        debug!(%id, category = %droid.category(), total = %droid.total_cost(), "Droid added");
        self.droids.push(droid);
        id
    }

    /// Looks up a droid by id.
    pub fn get(&self, id: Uuid) -> Option<&Droid> {
        self.droids.iter().find(|droid| droid.id() == id)
    }

    /// Removes a droid by id, keeping the order of the rest.
    pub fn remove(&mut self, id: Uuid) -> CoreResult<Droid> {
        let index = self
            .droids
            .iter()
            .position(|droid| droid.id() == id)
            .ok_or_else(|| CoreError::DroidNotFound(id.to_string()))?;
        Ok(self.droids.remove(index))
    }

    pub fn len(&self) -> usize {
        self.droids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.droids.is_empty()
    }

    /// Droids in current catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Droid> {
        self.droids.iter()
    }

    /// Categories in the order `sort_into_categories` emits them.
    pub fn ranking(&self) -> &[Category] {
        self.router.ranking()
    }

    /// Groups droids by category in ranking order, keeping the existing
    /// order inside each category.
    ///
    /// ## Errors
    /// `CoreError::UnrecognizedCategory` when a droid's category is missing
    /// from the ranking; the catalog is then left untouched.
    pub fn sort_into_categories(&mut self) -> CoreResult<()> {
        self.router.bucket_by_category(&mut self.droids)?;
        info!(count = self.droids.len(), "Sorted droids into categories");
        Ok(())
    }

    /// Sorts droids by total cost, cheapest first. Droids with the same total
    /// keep their relative order.
    pub fn sort_by_total_cost(&mut self) {
        MergeSorter::by_key(Droid::total_cost).sort(&mut self.droids);
        info!(count = self.droids.len(), "Sorted droids by total cost");
    }

    /// Sum of every droid's total cost.
    pub fn total_value(&self) -> Money {
        self.droids.iter().map(Droid::total_cost).sum()
    }

    /// Pretty JSON array of the droids in catalog order.
    pub fn to_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(&self.droids)?)
    }

    /// Adds the twelve reference droids, three of each model, with the
    /// models interleaved.
    pub fn load_default_droids(&mut self) -> CoreResult<()> {
        self.add_protocol(Material::Carbonite, Color::White, 12)?;
        self.add_utility(
            Material::Vanadium,
            Color::Red,
            UtilityOptions::new(true, true, true),
        )?;
        self.add_janitor(
            Material::Quadranium,
            Color::Blue,
            UtilityOptions::new(true, true, true),
            true,
            true,
        )?;
        self.add_astromech(
            Material::TearsOfAJedi,
            Color::Green,
            UtilityOptions::new(true, true, false),
            true,
            80,
        )?;
        self.add_protocol(Material::TearsOfAJedi, Color::Blue, 22)?;
        self.add_janitor(
            Material::Quadranium,
            Color::Red,
            UtilityOptions::new(false, false, false),
            false,
            true,
        )?;
        self.add_utility(
            Material::Vanadium,
            Color::White,
            UtilityOptions::new(true, true, false),
        )?;
        self.add_astromech(
            Material::Carbonite,
            Color::Green,
            UtilityOptions::new(false, true, false),
            true,
            150,
        )?;
        self.add_janitor(
            Material::Carbonite,
            Color::Green,
            UtilityOptions::new(false, true, true),
            true,
            true,
        )?;
        self.add_utility(
            Material::Vanadium,
            Color::White,
            UtilityOptions::new(true, false, true),
        )?;
        self.add_astromech(
            Material::Quadranium,
            Color::Red,
            UtilityOptions::new(true, false, false),
            true,
            100,
        )?;
        self.add_protocol(Material::TearsOfAJedi, Color::Blue, 24)?;
        debug!(count = self.droids.len(), "Default droids loaded");
        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::new(CategoryRanking::default())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Droid;
    type IntoIter = std::slice::Iter<'a, Droid>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One framed block per droid, blank line after each.
impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for droid in &self.droids {
            writeln!(f, "{}", SEPARATOR)?;
            writeln!(f, "{}", droid)?;
            writeln!(f, "{}", SEPARATOR)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
