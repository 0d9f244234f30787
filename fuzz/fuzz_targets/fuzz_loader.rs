//! Fuzz target for the network file loader.
//!
//! Feeds arbitrary text to the parser. Parsing may fail, but must never
//! panic, and any graph it accepts must satisfy the store invariants.

#![no_main]

use libfuzzer_sys::fuzz_target;

use delivery_network::{connected_components, parse_graph};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Nodes 1..=n are allocated up front
    let announced = text
        .split_whitespace()
        .next()
        .and_then(|t| t.parse::<u64>().ok());
    if text.len() > 4096 || announced.map_or(false, |n| n > 10_000) {
        return;
    }

    if let Ok(graph) = parse_graph(text) {
        graph.validate().expect("loaded graph violates invariants");

        let covered: usize = connected_components(&graph).iter().map(Vec::len).sum();
        assert_eq!(covered, graph.num_nodes());
    }
});
