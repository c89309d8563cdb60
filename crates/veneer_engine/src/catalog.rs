//! Widget-name catalog seam
//!
//! The engine's rules are written against logical button identities; the
//! host's actual runtime widget names live behind this collaborator. The
//! role set is a closed enumeration: a new themed control is a new variant
//! here plus catalog data, never a hard-coded name string in a rule.

use rustc_hash::FxHashMap;

/// Logical identity of a themed button
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ButtonRole {
    /// Two-state supervisor-mode toggle
    SpaceMaster,
    /// Two-state automatic-turns toggle
    AutoTurns,
    /// Primary member of the time-increment family
    TimeIncrement,
    /// Primary member of the sub-pulse family
    SubPulse,
    // Toolbar categories with per-role icon and face color
    Economics,
    ShipDesign,
    FleetOrders,
    GroundForces,
    Intelligence,
    Exploration,
    Personnel,
    Survey,
    Technology,
    SectorCommand,
}

/// Families of radio-style buttons identified by name prefix
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GroupKind {
    TimeIncrement,
    SubPulse,
}

/// Maps logical identities to the host's current runtime widget names
pub trait WidgetCatalog {
    /// Runtime name of the widget carrying `role`, if this host build has it
    fn button_name(&self, role: ButtonRole) -> Option<&str>;

    /// Name prefixes identifying members of a button family
    fn group_prefixes(&self, group: GroupKind) -> &[String];
}

/// In-memory catalog for tests, examples, and hosts with static names
#[derive(Default)]
pub struct StaticCatalog {
    names: FxHashMap<ButtonRole, String>,
    prefixes: FxHashMap<GroupKind, Vec<String>>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_button(mut self, role: ButtonRole, name: impl Into<String>) -> Self {
        self.names.insert(role, name.into());
        self
    }

    pub fn with_prefix(mut self, group: GroupKind, prefix: impl Into<String>) -> Self {
        self.prefixes.entry(group).or_default().push(prefix.into());
        self
    }
}

impl WidgetCatalog for StaticCatalog {
    fn button_name(&self, role: ButtonRole) -> Option<&str> {
        self.names.get(&role).map(String::as_str)
    }

    fn group_prefixes(&self, group: GroupKind) -> &[String] {
        self.prefixes.get(&group).map(Vec::as_slice).unwrap_or(&[])
    }
}
