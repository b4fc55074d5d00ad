//! The pipeline value and its traversal.

use std::fmt;

use tracing::trace;

use crate::layer::BoxedLayer;
use crate::layers::Layers;
use crate::next::Next;

/// A bidirectional middleware pipeline.
///
/// Two independently ordered stacks wrap a core function supplied at call
/// time: the **input stack** runs before (and around) the core, the
/// **output stack** post-processes whatever the input pass produced. Index
/// 0 is the outermost ring of each stack.
///
/// An `Onion` is an immutable value. The builder methods never touch the
/// receiver — they return a new pipeline that shares the existing layer
/// allocations — so a base pipeline can be extended in several directions
/// and every variant stays valid, including under concurrent use. Build it
/// once at startup; call [`handle`](Onion::handle) as often as you like.
///
/// ```rust
/// use onion::{Layer, Next, Onion};
///
/// struct Double;
///
/// impl Layer<i64> for Double {
///     fn handle(&self, value: i64, next: Next<'_, i64>) -> i64 {
///         next.run(value * 2)
///     }
/// }
///
/// let base = Onion::new().add_input_layer(Double.boxed());
/// let audited = base.add_output_layer(
///     (|v: i64, next: Next<'_, i64>| next.run(v.max(0))).boxed(),
/// );
///
/// // `base` is untouched by the extension and both remain usable.
/// assert_eq!(base.handle(-3, |v| v), -6);
/// assert_eq!(audited.handle(-3, |v| v), 0);
/// ```
pub struct Onion<T> {
    input: Vec<BoxedLayer<T>>,
    output: Vec<BoxedLayer<T>>,
}

impl<T> Onion<T> {
    /// An empty pipeline: `handle` runs the core function and nothing else.
    pub fn new() -> Self {
        Self { input: Vec::new(), output: Vec::new() }
    }

    /// A pipeline with both stacks supplied up front.
    ///
    /// Each argument takes the same shapes the builder methods do — a boxed
    /// layer, a sequence, or another pipeline to flatten in.
    pub fn from_parts(input: impl Into<Layers<T>>, output: impl Into<Layers<T>>) -> Self {
        Self {
            input: input.into().into_vec(),
            output: output.into().into_vec(),
        }
    }

    /// Returns a new pipeline whose input stack gains `layers`, appended
    /// after the existing ones. The receiver is unchanged.
    ///
    /// Accepts a [`BoxedLayer`], a `Vec` or array of boxed layers, or a
    /// whole [`Onion`] (flattened input-then-output). See [`Layers`].
    ///
    /// ```rust
    /// use onion::{Layer, Next, Onion};
    ///
    /// fn double(v: i64, next: Next<'_, i64>) -> i64 { next.run(v * 2) }
    /// fn increment(v: i64, next: Next<'_, i64>) -> i64 { next.run(v + 1) }
    ///
    /// let p1 = Onion::new().add_input_layer(double.boxed());
    /// let p2 = p1.add_input_layer(increment.boxed());
    ///
    /// assert_eq!(p1.to_vec().len(), 1);
    /// assert_eq!(p2.to_vec().len(), 2);
    /// ```
    #[must_use = "the receiver is unchanged; the extended pipeline is the return value"]
    pub fn add_input_layer(&self, layers: impl Into<Layers<T>>) -> Self {
        let mut input = self.input.clone();
        input.extend(layers.into().into_vec());
        Self { input, output: self.output.clone() }
    }

    /// Returns a new pipeline whose output stack gains `layers`, appended
    /// after the existing ones. The receiver is unchanged.
    ///
    /// Output layers never see the core function: they run over the
    /// response after the input pass has finished, with an identity
    /// terminal at the centre.
    #[must_use = "the receiver is unchanged; the extended pipeline is the return value"]
    pub fn add_output_layer(&self, layers: impl Into<Layers<T>>) -> Self {
        let mut output = self.output.clone();
        output.extend(layers.into().into_vec());
        Self { input: self.input.clone(), output }
    }

    /// All layers of this pipeline — input stack then output stack, in
    /// insertion order. This is the merge currency: feeding the result (or
    /// the pipeline itself) to another pipeline's builder splices the
    /// layers in.
    pub fn to_vec(&self) -> Vec<BoxedLayer<T>> {
        let mut all = Vec::with_capacity(self.input.len() + self.output.len());
        all.extend(self.input.iter().cloned());
        all.extend(self.output.iter().cloned());
        all
    }

    /// The input stack, outermost first.
    pub fn input_layers(&self) -> &[BoxedLayer<T>] {
        &self.input
    }

    /// The output stack, outermost first.
    pub fn output_layers(&self) -> &[BoxedLayer<T>] {
        &self.output
    }

    /// Sends `value` through the pipeline around `core`.
    ///
    /// The input stack runs outermost-first with `core` as its terminal;
    /// the response then travels through the output stack, outermost-first,
    /// with an identity terminal. Each layer controls whether anything
    /// deeper runs: returning without invoking [`Next::run`] short-circuits
    /// the remainder of that stack.
    ///
    /// The pipeline adds no error policy of its own — a panic inside a
    /// layer or `core` crosses this call unmodified, and fallibility is
    /// expressed through `T` itself (e.g. `T = Result<…, …>`).
    ///
    /// ```rust
    /// use onion::{Layer, Next, Onion};
    ///
    /// fn double(v: i64, next: Next<'_, i64>) -> i64 { next.run(v * 2) }
    /// fn increment(v: i64, next: Next<'_, i64>) -> i64 { next.run(v + 1) }
    ///
    /// let pipeline = Onion::new()
    ///     .add_input_layer(vec![double.boxed(), increment.boxed()]);
    ///
    /// // double runs first, increment second, then the core: (3 * 2) + 1 = 7.
    /// assert_eq!(pipeline.handle(3, |v| v), 7);
    /// ```
    pub fn handle<F>(&self, value: T, core: F) -> T
    where
        F: Fn(T) -> T,
    {
        trace!(
            input_layers = self.input.len(),
            output_layers = self.output.len(),
            "running pipeline"
        );

        let response = Next::new(&self.input, &core).run(value);
        Next::new(&self.output, &|v| v).run(response)
    }
}

impl<T> Default for Onion<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Manual impls: `derive` would demand `T: Clone` / `T: Debug`, but the
// stacks only hold `Arc` handles and `dyn Layer` is opaque anyway.
impl<T> Clone for Onion<T> {
    fn clone(&self) -> Self {
        Self { input: self.input.clone(), output: self.output.clone() }
    }
}

impl<T> fmt::Debug for Onion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Onion")
            .field("input_layers", &self.input.len())
            .field("output_layers", &self.output.len())
            .finish()
    }
}
