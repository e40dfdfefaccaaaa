//! The `subjects` module provides the `Subject` type, which owns observable state
//! and broadcasts every change of that state to the observers attached to it.
//!
//! A `Subject` keeps its observers in the order they were attached and notifies them
//! synchronously, one after another, in that same order. Attaching returns a
//! [`SubscriptionKey`] which identifies that particular subscription and can later be
//! used to detach it. Observers can also be detached by identity, in which case the
//! first subscription holding the very same `Rc` is removed.

mod subject;

pub use subject::*;

use std::fmt;

/// Opaque token identifying a single subscription on a `Subject`.
///
/// Keys are handed out in increasing order and are never reused by the `Subject`
/// that issued them. Attaching the same observer twice yields two distinct keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionKey(pub(crate) u64);

impl SubscriptionKey {
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubscriptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// Hands out the key at `next` and advances the counter.
fn gen_key(next: &mut u64) -> SubscriptionKey {
    let key = SubscriptionKey(*next);
    *next += 1;
    key
}
