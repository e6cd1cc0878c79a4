//! The fresh-variable factory.
//!
//! Every time a rule is renamed for a new proof attempt, the whole rule
//! body gets a single new id from this factory. The counter is process-wide
//! and monotonic; its only contract is that two calls never return the same
//! value, which is why it is backed by an atomic rather than a plain
//! integer.

use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

static NEXT_ID: AtomicI64 = AtomicI64::new(1);

/// Sentinel id used by parsers and test fixtures for variables that have
/// not yet been through [`refresh`](crate::proposition::Proposition::refresh).
pub const FRESH_SENTINEL: i64 = -1;

/// Returns a new, globally unique id.
///
/// # Usage
/// ```
/// use horn::fresh_id;
///
/// let a = fresh_id();
/// let b = fresh_id();
/// assert_ne!(a, b);
/// ```
pub fn fresh_id() -> i64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Resets the counter. Exists only so that tests which assert on concrete
/// ids can run deterministically; production code should never call this.
pub fn clear_id() {
    NEXT_ID.store(1, Ordering::Relaxed);
}

/// A logic variable: a source-level name paired with an instantiation id.
///
/// Two variables are equal only if both `name` and `id` match. A variable
/// with `id == -1` is a fresh-sentinel, produced by the parser before any
/// rule has been renamed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variable {
    pub name: String,
    pub id: i64,
}

impl Variable {
    pub fn new(name: &str, id: i64) -> Self {
        Variable { name: name.to_string(), id }
    }

    /// A fresh-sentinel variable, as produced by the parser.
    pub fn sentinel(name: &str) -> Self {
        Variable { name: name.to_string(), id: FRESH_SENTINEL }
    }

    pub fn with_id(&self, id: i64) -> Self {
        Variable { name: self.name.clone(), id }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
