//! Fuzz target for path and minimum power queries.
//!
//! Builds small random networks and checks that every returned path is
//! simple and within budget, and that reported minimum powers are minimal.

#![no_main]

use std::collections::HashSet;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use delivery_network::{find_path, min_power, Graph, NodeId, Power};

#[derive(Debug, Arbitrary)]
struct FuzzEdge {
    a: u8,
    b: u8,
    power: i8,
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    edges: Vec<FuzzEdge>,
    src: u8,
    dest: u8,
    budget: i8,
}

fn check_path(graph: &Graph, path: &[NodeId], budget: Power) {
    let distinct: HashSet<_> = path.iter().collect();
    assert_eq!(distinct.len(), path.len(), "path repeats a node: {:?}", path);
    for pair in path.windows(2) {
        assert!(graph.has_edge_within(&pair[0], &pair[1], budget));
    }
}

fuzz_target!(|input: FuzzInput| {
    if input.edges.len() > 64 {
        return;
    }

    let node = |v: u8| NodeId(u32::from(v % 16));
    let mut graph = Graph::with_nodes((0..16).map(NodeId));
    for e in &input.edges {
        graph.add_edge(node(e.a), node(e.b), Power(i64::from(e.power)));
    }
    let (src, dest) = (node(input.src), node(input.dest));

    let budget = Power(i64::from(input.budget));
    if let Some(path) = find_path(&graph, &src, &dest, budget).unwrap() {
        check_path(&graph, &path, budget);
        assert!(find_path(&graph, &src, &dest, budget.succ()).unwrap().is_some());
    }

    if let Some(route) = min_power(&graph, &src, &dest).unwrap() {
        check_path(&graph, &route.path, route.power);
        if route.power > Power::ZERO {
            assert!(find_path(&graph, &src, &dest, route.power.pred())
                .unwrap()
                .is_none());
        }
    }
});
