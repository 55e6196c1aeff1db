//! Locations: the nodes of the fixed station graph.

use crate::droid::MaintenanceDroid;
use indexmap::IndexMap;

/// Identifies one of the station's locations.
///
/// The graph is fixed at two nodes. Using ids keeps every location in a
/// single owner (the `World`) instead of threading shared references
/// through the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationId {
    MaintenanceTunnels,
    DockingBay,
}

/// A droid stationed in a location, guarding one outbound direction.
///
/// Presence and binding are a single `Option` on `Location`: a location can
/// never claim a droid is present without holding the droid itself, which
/// closes off the half-initialized state where a presence flag is set but
/// no droid is bound. The guarded direction is stored lowercase.
#[derive(Debug)]
pub struct DroidPost {
    pub droid: MaintenanceDroid,
    pub guarded_exit: String,
}

/// A place the player can stand in, holding items, exits, and possibly a
/// stationed droid.
pub struct Location {
    name: String,
    description: String,
    /// direction -> destination, kept in insertion order for the Exits line.
    exits: IndexMap<String, LocationId>,
    has_tool: bool,
    has_crystal: bool,
    droid: Option<DroidPost>,
}

impl Location {
    pub fn new(name: &str, description: &str) -> Self {
        Location {
            name: name.to_string(),
            description: description.to_string(),
            exits: IndexMap::new(),
            has_tool: false,
            has_crystal: false,
            droid: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registers a one-way edge. The direction key is stored exactly as
    /// given; lookup during movement is case-insensitive (see `exit_to`).
    pub fn add_exit(&mut self, direction: &str, target: LocationId) {
        self.exits.insert(direction.to_string(), target);
    }

    /// Case-insensitive exit lookup. Returns the stored direction key and
    /// the destination, or None if no exit matches.
    pub fn exit_to(&self, direction: &str) -> Option<(&str, LocationId)> {
        self.exits
            .iter()
            .find(|(dir, _)| dir.eq_ignore_ascii_case(direction))
            .map(|(dir, target)| (dir.as_str(), *target))
    }

    pub fn has_exits(&self) -> bool {
        !self.exits.is_empty()
    }

    pub fn has_tool(&self) -> bool {
        self.has_tool
    }

    pub fn has_crystal(&self) -> bool {
        self.has_crystal
    }

    pub fn place_tool(&mut self) {
        self.has_tool = true;
    }

    pub fn place_crystal(&mut self) {
        self.has_crystal = true;
    }

    /// Clears the tool flag. True iff a tool was actually here.
    pub fn remove_tool(&mut self) -> bool {
        let had = self.has_tool;
        self.has_tool = false;
        had
    }

    /// Clears the crystal flag. True iff a crystal was actually here.
    pub fn remove_crystal(&mut self) -> bool {
        let had = self.has_crystal;
        self.has_crystal = false;
        had
    }

    /// Stations a droid here, guarding the given outbound direction.
    pub fn post_droid(&mut self, droid: MaintenanceDroid, guarded_exit: &str) {
        self.droid = Some(DroidPost {
            droid,
            guarded_exit: guarded_exit.trim().to_lowercase(),
        });
    }

    /// Removes the stationed droid, if any.
    pub fn clear_droid(&mut self) {
        self.droid = None;
    }

    pub fn droid(&self) -> Option<&DroidPost> {
        self.droid.as_ref()
    }

    pub fn droid_mut(&mut self) -> Option<&mut DroidPost> {
        self.droid.as_mut()
    }

    /// Composes the full room description: name, underline, prose, then one
    /// line per present item, a droid line while it still blocks, and the
    /// exits in insertion order. Absent elements contribute no lines.
    pub fn describe(&self) -> String {
        let mut out = format!(
            "{}\n{}\n{}",
            self.name,
            "-".repeat(self.name.len()),
            self.description
        );

        if self.has_tool {
            out.push_str("\n\nYou see a diagnostic tool on the ground.");
        }
        if self.has_crystal {
            out.push_str("\n\nA glowing energy crystal is placed on a pedestal.");
        }
        if let Some(post) = &self.droid {
            if post.droid.is_blocking() {
                out.push_str(&format!(
                    "\n\nA damaged maintenance droid is blocking the {} exit.",
                    post.guarded_exit
                ));
            }
        }
        if !self.exits.is_empty() {
            let dirs: Vec<&str> = self.exits.keys().map(String::as_str).collect();
            out.push_str(&format!("\n\nExits: {}", dirs.join(", ")));
        }

        out
    }
}
