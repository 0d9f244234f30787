//! Delivery network data models.
//!
//! This module provides the core data structures for representing networks:
//! - [`Graph`]: Adjacency-list store for undirected multigraphs
//! - [`NodeId`], [`Power`], [`Distance`], [`ComponentId`]: Value types

pub mod graph;
pub mod node;

pub use graph::{Edge, Graph, GraphBuilder};
pub use node::{ComponentId, Distance, NodeId, Power};
