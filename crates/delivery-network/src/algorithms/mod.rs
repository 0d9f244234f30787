//! Network algorithms.
//!
//! This module provides the query side of the crate:
//! - [`components`]: Connected components (power ignored)
//! - [`path`]: Path search within a power budget
//! - [`min_power`]: Smallest budget that connects two nodes

pub mod components;
pub mod min_power;
pub mod path;

pub use components::{
    component_ids, component_of, connected_components, connected_components_set,
    same_component,
};
pub use min_power::{min_power, min_power_with_config, MinPowerConfig, PowerBound, PowerRoute};
pub use path::{find_path, search_path, NoPathReason, PathOutcome, SearchConfig};
