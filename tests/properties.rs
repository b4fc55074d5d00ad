//! Property tests: traversal equals a left-to-right fold, and the builder
//! methods never mutate their receiver.

use proptest::prelude::*;

use onion::{Layer, Next, Onion};

struct Noop;

impl Layer<i64> for Noop {
    fn handle(&self, value: i64, next: Next<'_, i64>) -> i64 {
        next.run(value)
    }
}

/// An affine transform layer: `v -> v * m + a`, then delegate.
fn affine(m: i64, a: i64) -> onion::BoxedLayer<i64> {
    (move |v: i64, next: Next<'_, i64>| next.run(v * m + a)).boxed()
}

proptest! {
    #[test]
    fn input_stack_equals_left_to_right_fold(
        coeffs in proptest::collection::vec((-4i64..=4, -4i64..=4), 0..6),
        value in -100i64..=100,
    ) {
        let layers: Vec<_> = coeffs.iter().map(|&(m, a)| affine(m, a)).collect();
        let pipeline = Onion::new().add_input_layer(layers);

        let expected = coeffs.iter().fold(value, |v, &(m, a)| v * m + a);
        prop_assert_eq!(pipeline.handle(value, |v| v), expected);
    }

    #[test]
    fn output_stack_folds_over_the_response(
        coeffs in proptest::collection::vec((-4i64..=4, -4i64..=4), 0..6),
        value in -100i64..=100,
    ) {
        let layers: Vec<_> = coeffs.iter().map(|&(m, a)| affine(m, a)).collect();
        let pipeline = Onion::new().add_output_layer(layers);

        let response = value.wrapping_mul(3);
        let expected = coeffs.iter().fold(response, |v, &(m, a)| v * m + a);
        prop_assert_eq!(pipeline.handle(value, |v| v.wrapping_mul(3)), expected);
    }

    #[test]
    fn builders_never_mutate_the_receiver(
        input_len in 0usize..5,
        output_len in 0usize..5,
    ) {
        let mut pipeline = Onion::<i64>::new();
        for _ in 0..input_len {
            pipeline = pipeline.add_input_layer(Noop.boxed());
        }
        for _ in 0..output_len {
            pipeline = pipeline.add_output_layer(Noop.boxed());
        }

        let extended = pipeline
            .add_input_layer(Noop.boxed())
            .add_output_layer(Noop.boxed());

        prop_assert_eq!(pipeline.input_layers().len(), input_len);
        prop_assert_eq!(pipeline.output_layers().len(), output_len);
        prop_assert_eq!(extended.to_vec().len(), input_len + output_len + 2);
    }
}
