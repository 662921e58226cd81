//! # droidworks-core: Droid Catalog and Ordering Engine
//!
//! This crate holds everything the Droidworks catalog does that is not
//! terminal I/O: the droid model and its pricing, validation, the catalog
//! itself, and the ordered-collection engine the catalog sorts with.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Droidworks Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/cli (droidworks)                        │   │
//! │  │    Menu ──► Create droid ──► Print list ──► Sort ──► Export     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ droidworks-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  catalog  │  │  router   │  │   sort    │  │   │
//! │  │   │  Droid    │  │  Catalog  │  │ Category  │  │  Merge    │  │   │
//! │  │   │  Money    │  │           │  │  Router   │  │  Sorter   │  │   │
//! │  │   └───────────┘  └───────────┘  └─────┬─────┘  └───────────┘  │   │
//! │  │                                       │                         │   │
//! │  │                               ┌───────▼───────┐                 │   │
//! │  │                               │  collections  │                 │   │
//! │  │                               │ Stack · Queue │                 │   │
//! │  │                               └───────────────┘                 │   │
//! │  │   NO I/O • NO PERSISTENCE • SINGLE-THREADED                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`collections`] - Node-based `Stack` (LIFO) and `Queue` (FIFO)
//! - [`sort`] - Stable top-down `MergeSorter`
//! - [`router`] - `CategoryRouter`, the stable bucket-by-category pass
//! - [`types`] - Droid, materials, colors, categories, ranking
//! - [`money`] - Money type with integer arithmetic
//! - [`catalog`] - The droid collection and its two sorts
//! - [`validation`] - Input range checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use droidworks_core::{Catalog, Category};
//!
//! let mut catalog = Catalog::default();
//! catalog.load_default_droids()?;
//!
//! catalog.sort_into_categories()?;
//! let first = catalog.iter().next().map(|d| d.category());
//! assert_eq!(first, Some(Category::Astromech));
//!
//! catalog.sort_by_total_cost();
//! let cheapest = catalog.iter().next().map(|d| d.total_cost().cents());
//! assert_eq!(cheapest, Some(33_000));
//! # Ok::<(), droidworks_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod collections;
pub mod error;
pub mod money;
pub mod router;
pub mod sort;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::Catalog;
pub use collections::{Queue, Stack};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use router::{Categorized, CategoryRouter};
pub use sort::{merge_sort, MergeSorter};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum number of languages a protocol droid can be sold with.
pub const MAX_LANGUAGES: u32 = 200;

/// Maximum number of ships an astromech can be certified for.
pub const MAX_SHIPS: u32 = 500;
