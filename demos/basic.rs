//! Minimal onion example — a request/response-shaped string pipeline.
//!
//! Run with:
//!   RUST_LOG=trace cargo run --example basic

use onion::{Layer, Next, Onion};

/// Rejects oversized requests without running anything deeper.
struct SizeGate {
    max: usize,
}

impl Layer<String> for SizeGate {
    fn handle(&self, value: String, next: Next<'_, String>) -> String {
        if value.len() > self.max {
            return "413 payload too large".to_owned();
        }
        next.run(value)
    }
}

/// Normalizes the request on the way in.
struct Trim;

impl Layer<String> for Trim {
    fn handle(&self, value: String, next: Next<'_, String>) -> String {
        next.run(value.trim().to_owned())
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    let pipeline = Onion::new()
        .add_input_layer(vec![SizeGate { max: 64 }.boxed(), Trim.boxed()])
        // Output layers post-process the response. Closures are layers too.
        .add_output_layer((|response: String, next: Next<'_, String>| {
            next.run(format!("[{}B] {response}", response.len()))
        })
        .boxed());

    // The core is whatever business operation the pipeline wraps.
    let core = |request: String| format!("echo: {request}");

    println!("{}", pipeline.handle("  hello onion  ".to_owned(), core));
    println!("{}", pipeline.handle("x".repeat(100), core));
}
