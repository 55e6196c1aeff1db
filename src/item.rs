//! Collectible items aboard the station.
//!
//! The two item kinds only differ in their display name and examine text,
//! so a kind tag with fixed text per kind replaces any item hierarchy.

/// The collectible item kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    DiagnosticTool,
    EnergyCrystal,
}

/// A collectible item: a name plus fixed descriptive text.
///
/// Immutable after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    kind: ItemKind,
}

impl Item {
    pub fn new(kind: ItemKind) -> Self {
        Item { kind }
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    /// Display name as it appears in inventory listings.
    pub fn name(&self) -> &'static str {
        match self.kind {
            ItemKind::DiagnosticTool => "Diagnostic Tool",
            ItemKind::EnergyCrystal => "Energy Crystal",
        }
    }

    /// Examine text: the base description plus a kind-specific hint.
    /// Pure query, no side effects.
    pub fn examine(&self) -> &'static str {
        match self.kind {
            ItemKind::DiagnosticTool => {
                "A handheld device with various connectors and readouts. \
                 It might be useful for repairing maintenance droids."
            }
            ItemKind::EnergyCrystal => {
                "A glowing crystal that pulses with energy. \
                 It looks unstable and dangerous."
            }
        }
    }
}
