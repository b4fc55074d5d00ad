//! The continuation a layer delegates through.

use crate::layer::BoxedLayer;

/// The rest of the current stack, plus the terminal function waiting at the
/// centre.
///
/// Handed to [`Layer::handle`](crate::Layer::handle). Running it invokes the
/// next-deeper layer — or the terminal once the stack is exhausted: the core
/// function for the input stack, the identity for the output stack.
///
/// `Next` is `Copy`. A layer may run it zero times (short-circuit), once
/// (the usual case), or several times; the pipeline imposes no limit.
///
/// Internally this is a cursor over the stack slice, not a chain of nested
/// closures: `run` peels one layer off the front and hands the tail to it
/// as the new `Next`.
pub struct Next<'a, T> {
    stack: &'a [BoxedLayer<T>],
    terminal: &'a dyn Fn(T) -> T,
}

impl<'a, T> Next<'a, T> {
    pub(crate) fn new(stack: &'a [BoxedLayer<T>], terminal: &'a dyn Fn(T) -> T) -> Self {
        Self { stack, terminal }
    }

    /// Sends `value` onward: into the next layer if one remains, otherwise
    /// into the terminal function.
    pub fn run(self, value: T) -> T {
        match self.stack.split_first() {
            Some((layer, rest)) => layer.handle(value, Next { stack: rest, terminal: self.terminal }),
            None => (self.terminal)(value),
        }
    }
}

// Manual impls: `derive` would demand `T: Clone`, but only references are
// copied here.
impl<T> Clone for Next<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Next<'_, T> {}
