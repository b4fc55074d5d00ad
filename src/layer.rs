//! Layer contract and type erasure.
//!
//! # How layers are stored
//!
//! A pipeline needs to hold layers of *different* concrete types in a single
//! `Vec`. Rust collections can only hold one concrete type, so layers are
//! stored as **trait objects** (`dyn Layer<T>`) behind an `Arc`:
//!
//! ```text
//! struct Mask; impl Layer<String> for Mask { … }   ← user writes this
//!        ↓ Mask.boxed()
//! Arc::new(Mask)                                   ← heap-allocated, shared
//!        ↓  stored as BoxedLayer<T> = Arc<dyn Layer<T> + …>
//! layer.handle(value, next)  at traversal time     ← one vtable dispatch
//! ```
//!
//! The only runtime cost per traversal step is **one virtual call**. Adding
//! a layer to a new pipeline costs **one Arc clone** (atomic inc) — the
//! layer itself is never copied.

use std::sync::Arc;

use crate::next::Next;

/// A heap-allocated, type-erased layer shared across pipeline values.
///
/// `Arc` gives cheap, thread-safe shared ownership: every pipeline built
/// from an existing one holds the same layer allocations, so the immutable
/// builder methods cost pointer clones, not deep copies. `Send + Sync +
/// 'static` keep any pipeline holding the layer freely shareable across
/// threads.
pub type BoxedLayer<T> = Arc<dyn Layer<T> + Send + Sync + 'static>;

/// A middleware unit: one ring of the onion.
///
/// A layer receives the value travelling through the pipeline and the
/// [`Next`] continuation representing the rest of the current stack. The
/// layer decides what happens:
///
/// - transform, then delegate inward: `next.run(changed)`
/// - short-circuit: return without running `next` — nothing deeper runs
/// - act on the way back out: `let out = next.run(value); post(out)`
///
/// Any `Fn(T, Next<'_, T>) -> T` closure or `fn` item is a layer too, via
/// the blanket impl below — a struct is only needed when the layer carries
/// configuration you want named.
///
/// # Example
///
/// ```rust
/// use onion::{Layer, Next, Onion};
///
/// struct Mask;
///
/// impl Layer<String> for Mask {
///     fn handle(&self, value: String, next: Next<'_, String>) -> String {
///         next.run(value.replace("secret", "******"))
///     }
/// }
///
/// let pipeline = Onion::new().add_input_layer(Mask.boxed());
/// assert_eq!(pipeline.handle("a secret note".to_owned(), |v| v), "a ****** note");
/// ```
pub trait Layer<T> {
    /// Processes `value`, delegating inward through `next` zero or more
    /// times.
    fn handle(&self, value: T, next: Next<'_, T>) -> T;

    /// Wraps `self` in an [`Arc`], erasing the concrete type so the layer
    /// can sit in a pipeline stack next to layers of other types.
    fn boxed(self) -> BoxedLayer<T>
    where
        Self: Sized + Send + Sync + 'static,
    {
        Arc::new(self)
    }
}

/// Any compatible closure or function is a layer.
impl<T, F> Layer<T> for F
where
    F: for<'a> Fn(T, Next<'a, T>) -> T,
{
    fn handle(&self, value: T, next: Next<'_, T>) -> T {
        self(value, next)
    }
}
