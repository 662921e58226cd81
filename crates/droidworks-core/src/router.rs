//! # Category Router
//!
//! Stable bucket-by-category pass built from [`Stack`]s and a [`Queue`].
//!
//! ## How It Works
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  input:  [U0, A1, U2, A3]          ranking: Astromech > Utility         │
//! │                                                                         │
//! │  1. walk the input back to front, pushing each item on its category's  │
//! │     stack, so the first item of a category ends up on top             │
//! │       Astromech: top→ A1, A3        Utility: top→ U0, U2                │
//! │                                                                         │
//! │  2. pop stacks in rank order into one queue                            │
//! │       queue: A1, A3, U0, U2                                             │
//! │                                                                         │
//! │  3. dequeue back into the caller's storage                             │
//! │       output: [A1, A3, U0, U2]                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The back-to-front walk and the pops cancel out, so every category keeps
//! its input order.

use std::fmt::Debug;

use tracing::{debug, error};

use crate::collections::{Queue, Stack};
use crate::error::{CoreError, CoreResult};

/// Items that belong to exactly one category.
pub trait Categorized {
    type Category: Copy + Eq + Debug;

    fn category(&self) -> Self::Category;
}

/// Regroups items by category in a fixed rank order.
#[derive(Debug, Clone)]
pub struct CategoryRouter<C> {
    ranking: Vec<C>,
}

impl<C: Copy + Eq + Debug> CategoryRouter<C> {
    /// Creates a router; the first category is emitted first.
    pub fn new(ranking: impl IntoIterator<Item = C>) -> Self {
        CategoryRouter {
            ranking: ranking.into_iter().collect(),
        }
    }

    /// Categories, highest rank first.
    pub fn ranking(&self) -> &[C] {
        &self.ranking
    }

    /// Reorders `items` so every category appears as a contiguous run, runs
    /// in rank order, input order preserved within each run.
    ///
    /// ## Errors
    /// `CoreError::UnrecognizedCategory` if some item's category is not in
    /// the ranking. Every item is looked up before any is moved, so on error
    /// `items` is left exactly as it was.
    pub fn bucket_by_category<T>(&self, items: &mut Vec<T>) -> CoreResult<()>
    where
        T: Categorized<Category = C>,
    {
        self.bucket_by(items, |item| item.category())
    }

    /// Same as [`bucket_by_category`](Self::bucket_by_category) with an
    /// explicit classifier.
    pub fn bucket_by<T, F>(&self, items: &mut Vec<T>, classify: F) -> CoreResult<()>
    where
        F: Fn(&T) -> C,
    {
        let ranks = items
            .iter()
            .map(|item| self.rank_of(classify(item)))
            .collect::<CoreResult<Vec<usize>>>()?;

        let mut stacks: Vec<Stack<T>> = self.ranking.iter().map(|_| Stack::new()).collect();
        for (item, rank) in std::mem::take(items).into_iter().zip(ranks).rev() {
            stacks[rank].push(item);
        }

        let mut queue = Queue::new();
        for stack in &mut stacks {
            while let Some(item) = stack.pop() {
                queue.enqueue(item);
            }
        }

        items.reserve(queue.len());
        while let Some(item) = queue.dequeue() {
            items.push(item);
        }

        debug!(
            count = items.len(),
            categories = self.ranking.len(),
            "Bucketed items by category"
        );
        Ok(())
    }

    fn rank_of(&self, category: C) -> CoreResult<usize> {
        self.ranking
            .iter()
            .position(|ranked| *ranked == category)
            .ok_or_else(|| {
                error!(?category, ranking = ?self.ranking, "Item category is not ranked");
                CoreError::UnrecognizedCategory {
                    category: format!("{:?}", category),
                }
            })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
