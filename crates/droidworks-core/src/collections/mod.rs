//! # Node-Based Sequences
//!
//! Two minimal containers built on one shared link cell.
//!
//! ## Ownership Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Stack<T>                                                               │
//! │    head ──own──► [Node] ──own──► [Node] ──own──► [Node] ──► None        │
//! │                                                                         │
//! │  Queue<T>                                                               │
//! │    head ──own──► [Node] ──own──► [Node] ──own──► [Node] ──► None        │
//! │                                                     ▲                   │
//! │    tail ─────────────── (non-owning) ───────────────┘                   │
//! │                                                                         │
//! │  Every node has exactly one owner: the container (head) or the node    │
//! │  before it. The queue's tail only exists for O(1) enqueue and is       │
//! │  cleared whenever the chain becomes empty.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both containers report emptiness through `Option::None` from
//! `pop`/`dequeue`. There are no error paths.

mod node;
mod queue;
mod stack;

pub use queue::Queue;
pub use stack::Stack;
