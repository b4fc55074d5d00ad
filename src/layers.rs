//! Builder-argument normalization.
//!
//! The pipeline builders accept "some layers" in whatever shape the caller
//! has them: one boxed layer, a vector or array of boxed layers, or a whole
//! [`Onion`] to merge in. [`Layers`] is the normalized form — a flat,
//! ordered batch — and the `From` impls below enumerate the accepted
//! shapes. Anything else is rejected by the compiler, not at run time:
//!
//! ```compile_fail
//! use onion::Onion;
//!
//! let pipeline: Onion<i64> = Onion::new();
//! pipeline.add_input_layer(42); // an integer is not a layer
//! ```

use crate::layer::BoxedLayer;
use crate::onion::Onion;

/// A flat batch of boxed layers: the argument type of the pipeline
/// builders.
///
/// You rarely name this type — pass the builders anything that converts:
///
/// ```rust
/// use onion::{Layer, Next, Onion};
///
/// fn double(v: i64, next: Next<'_, i64>) -> i64 { next.run(v * 2) }
/// fn increment(v: i64, next: Next<'_, i64>) -> i64 { next.run(v + 1) }
///
/// let base = Onion::new().add_input_layer(double.boxed());
///
/// let one   = Onion::new().add_input_layer(increment.boxed());
/// let many  = Onion::new().add_input_layer(vec![double.boxed(), increment.boxed()]);
/// let merge = Onion::new().add_input_layer(&base);
/// # let _ = (one, many, merge);
/// ```
pub struct Layers<T> {
    items: Vec<BoxedLayer<T>>,
}

impl<T> Layers<T> {
    pub(crate) fn into_vec(self) -> Vec<BoxedLayer<T>> {
        self.items
    }
}

/// One layer.
impl<T> From<BoxedLayer<T>> for Layers<T> {
    fn from(layer: BoxedLayer<T>) -> Self {
        Self { items: vec![layer] }
    }
}

/// A sequence of layers, in order.
impl<T> From<Vec<BoxedLayer<T>>> for Layers<T> {
    fn from(items: Vec<BoxedLayer<T>>) -> Self {
        Self { items }
    }
}

/// A fixed-size sequence of layers, in order.
impl<T, const N: usize> From<[BoxedLayer<T>; N]> for Layers<T> {
    fn from(items: [BoxedLayer<T>; N]) -> Self {
        Self { items: items.into() }
    }
}

/// A borrowed sequence; the `Arc` handles are cloned, the layers are not.
impl<T> From<&[BoxedLayer<T>]> for Layers<T> {
    fn from(items: &[BoxedLayer<T>]) -> Self {
        Self { items: items.to_vec() }
    }
}

/// A whole pipeline, flattened: its input layers then its output layers.
impl<T> From<&Onion<T>> for Layers<T> {
    fn from(onion: &Onion<T>) -> Self {
        Self { items: onion.to_vec() }
    }
}

/// A whole pipeline by value; flattens exactly like the by-reference impl.
impl<T> From<Onion<T>> for Layers<T> {
    fn from(onion: Onion<T>) -> Self {
        Self::from(&onion)
    }
}

impl<T> FromIterator<BoxedLayer<T>> for Layers<T> {
    fn from_iter<I: IntoIterator<Item = BoxedLayer<T>>>(iter: I) -> Self {
        Self { items: iter.into_iter().collect() }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{Layer, Next};

    struct Noop;

    impl Layer<i64> for Noop {
        fn handle(&self, value: i64, next: Next<'_, i64>) -> i64 {
            next.run(value)
        }
    }

    #[test]
    fn single_boxed_layer_becomes_one_element_batch() {
        let batch = Layers::from(Noop.boxed());
        assert_eq!(batch.into_vec().len(), 1);
    }

    #[test]
    fn vec_of_layers_keeps_order() {
        let a = Noop.boxed();
        let b = Noop.boxed();
        let items = Layers::from(vec![a.clone(), b.clone()]).into_vec();
        assert!(Arc::ptr_eq(&items[0], &a));
        assert!(Arc::ptr_eq(&items[1], &b));
    }

    #[test]
    fn onion_flattens_input_then_output() {
        let input = Noop.boxed();
        let output = Noop.boxed();
        let pipeline = Onion::from_parts(input.clone(), output.clone());

        let items = Layers::from(&pipeline).into_vec();
        assert_eq!(items.len(), 2);
        assert!(Arc::ptr_eq(&items[0], &input));
        assert!(Arc::ptr_eq(&items[1], &output));
    }

    #[test]
    fn collects_from_iterator() {
        let batch: Layers<i64> = (0..3).map(|_| Noop.boxed()).collect();
        assert_eq!(batch.into_vec().len(), 3);
    }
}
