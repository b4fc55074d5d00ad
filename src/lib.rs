//! # onion
//!
//! A bidirectional middleware pipeline for plain values.
//! Nothing more. Nothing less.
//!
//! ## The contract
//!
//! Your application owns the layers and the core operation; onion owns the
//! sequencing. A pipeline holds two ordered stacks of [`Layer`]s around a
//! core function supplied at call time:
//!
//! ```text
//! value    ──▶ input[0] ──▶ input[1] ──▶ … ──▶ core     ──▶ response
//! response ──▶ output[0] ──▶ output[1] ──▶ … ──▶ identity ──▶ result
//! ```
//!
//! Every layer sees the value on the way in and decides whether the rest of
//! its stack runs at all. What onion deliberately does NOT do:
//!
//! - **No I/O** — layers and the core do the work; the pipeline only
//!   sequences them.
//! - **No error policy** — a panic in a layer crosses [`Onion::handle`]
//!   untouched. Fallibility belongs in the value type: run a
//!   `Onion<Result<Req, Rejection>>` if layers can fail.
//! - **No interior mutability** — a pipeline is an immutable value.
//!   "Adding" a layer builds a new pipeline and leaves the old one intact,
//!   so sharing a pipeline across threads needs no locks.
//!
//! ## Quick start
//!
//! ```rust
//! use onion::{Layer, Next, Onion};
//!
//! struct Double;
//! struct Increment;
//!
//! impl Layer<i64> for Double {
//!     fn handle(&self, value: i64, next: Next<'_, i64>) -> i64 {
//!         next.run(value * 2)
//!     }
//! }
//!
//! impl Layer<i64> for Increment {
//!     fn handle(&self, value: i64, next: Next<'_, i64>) -> i64 {
//!         next.run(value + 1)
//!     }
//! }
//!
//! let pipeline = Onion::new()
//!     .add_input_layer(vec![Double.boxed(), Increment.boxed()]);
//!
//! // Double runs first, Increment second, then the core: (3 * 2) + 1 = 7.
//! assert_eq!(pipeline.handle(3, |v| v), 7);
//! ```

mod layer;
mod layers;
mod next;
mod onion;

pub use layer::{BoxedLayer, Layer};
pub use layers::Layers;
pub use next::Next;
pub use onion::Onion;
