//! Value types for delivery networks.
//!
//! This module provides strongly-typed wrappers for network concepts:
//! - [`NodeId`]: Integer node identifier used by network files
//! - [`Power`]: Minimum vehicle power on an edge, or a power budget
//! - [`Distance`]: Length of an edge
//! - [`ComponentId`]: Connected component label

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Node identifier.
///
/// Using a newtype prevents mixing up node IDs with powers or distances.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Create a new node ID.
    pub const fn new(id: u32) -> Self {
        NodeId(id)
    }

    /// Get the inner value.
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl From<u32> for NodeId {
    fn from(id: u32) -> Self {
        NodeId(id)
    }
}

impl From<NodeId> for u32 {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NodeId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(NodeId)
    }
}

/// Vehicle power.
///
/// An edge's power is the minimum a vehicle needs to traverse it; a search
/// budget is the maximum edge power a traversal may use. Values are not
/// validated, so zero and negative powers are accepted as-is.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Power(pub i64);

impl Power {
    /// Zero power.
    pub const ZERO: Power = Power(0);

    /// Largest representable power.
    pub const MAX: Power = Power(i64::MAX);

    /// Create a new power value.
    pub const fn new(p: i64) -> Self {
        Power(p)
    }

    /// Get the inner value.
    pub const fn get(&self) -> i64 {
        self.0
    }

    /// Floor of the midpoint between `self` and `other`.
    ///
    /// Never overflows, and is strictly below `other` whenever `self < other`.
    pub fn midpoint(self, other: Power) -> Power {
        let sum = self.0 as i128 + other.0 as i128;
        Power(sum.div_euclid(2) as i64)
    }

    /// The next power up, saturating at [`Power::MAX`].
    pub const fn succ(self) -> Power {
        Power(self.0.saturating_add(1))
    }

    /// The next power down, saturating at `i64::MIN`.
    pub const fn pred(self) -> Power {
        Power(self.0.saturating_sub(1))
    }
}

impl From<i64> for Power {
    fn from(p: i64) -> Self {
        Power(p)
    }
}

impl fmt::Display for Power {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Edge distance.
///
/// Distances are carried alongside power but never drive a search.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Distance(pub i64);

impl Distance {
    /// Distance used when none is given.
    pub const UNIT: Distance = Distance(1);

    /// Create a new distance.
    pub const fn new(d: i64) -> Self {
        Distance(d)
    }

    /// Get the inner value.
    pub const fn get(&self) -> i64 {
        self.0
    }
}

impl Default for Distance {
    fn default() -> Self {
        Distance::UNIT
    }
}

impl From<i64> for Distance {
    fn from(d: i64) -> Self {
        Distance(d)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Connected component identifier.
///
/// Nodes in the same component have the same ComponentId.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct ComponentId(pub u32);

impl ComponentId {
    /// Unassigned component.
    pub const UNASSIGNED: ComponentId = ComponentId(u32::MAX);

    /// Create a new component ID.
    pub const fn new(id: u32) -> Self {
        ComponentId(id)
    }

    /// Check if component is assigned.
    pub const fn is_assigned(&self) -> bool {
        self.0 != u32::MAX
    }

    /// Get the inner value.
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl From<u32> for ComponentId {
    fn from(id: u32) -> Self {
        ComponentId(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_basics() {
        let node = NodeId::new(42);
        assert_eq!(node.get(), 42);
        assert_eq!(node.to_string(), "42");
        assert_eq!("42".parse::<NodeId>().unwrap(), node);
        assert!("x".parse::<NodeId>().is_err());
    }

    #[test]
    fn test_power_midpoint_floors() {
        assert_eq!(Power(0).midpoint(Power(5)), Power(2));
        assert_eq!(Power(4).midpoint(Power(5)), Power(4));
        assert_eq!(Power(-3).midpoint(Power(0)), Power(-2));
        assert_eq!(Power(-1).midpoint(Power(0)), Power(-1));
    }

    #[test]
    fn test_power_midpoint_no_overflow() {
        let mid = Power(i64::MIN).midpoint(Power::MAX);
        assert_eq!(mid, Power(-1));
        assert_eq!(Power::MAX.midpoint(Power::MAX), Power::MAX);
    }

    #[test]
    fn test_power_succ_pred_saturate() {
        assert_eq!(Power(3).succ(), Power(4));
        assert_eq!(Power::MAX.succ(), Power::MAX);
        assert_eq!(Power(i64::MIN).pred(), Power(i64::MIN));
    }

    #[test]
    fn test_distance_default_is_unit() {
        assert_eq!(Distance::default(), Distance::UNIT);
        assert_eq!(Distance::UNIT.get(), 1);
    }

    #[test]
    fn test_component_id_basics() {
        let c = ComponentId::new(3);
        assert_eq!(c.get(), 3);
        assert!(c.is_assigned());
        assert!(!ComponentId::UNASSIGNED.is_assigned());
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&(NodeId(7), Power(-2), Distance(9))).unwrap();
        assert_eq!(json, "[7,-2,9]");
    }
}
