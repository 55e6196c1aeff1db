//! The player: position, inventory, score, and the actions that mutate them.
//!
//! Every action either succeeds with a state change or fails with a typed
//! reason and no state change at all, with one deliberate exception: a
//! blocked move counts a hazard. The reasons are expected, user-facing
//! outcomes, so each carries its player-facing message in its `Display`.

use crate::item::ItemKind;
use crate::location::LocationId;
use crate::world::World;
use log::{debug, info};
use std::fmt;

/// Points for picking up the diagnostic tool.
pub const TOOL_POINTS: u32 = 10;
/// Points for repairing the droid.
pub const REPAIR_POINTS: u32 = 20;
/// Points for picking up the energy crystal.
pub const CRYSTAL_POINTS: u32 = 50;
/// One-time bonus for completing the mission.
pub const WIN_BONUS: u32 = 30;

/// Why a move attempt failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Direction matches no registered exit from the current location.
    NoSuchExit { direction: String },
    /// An unrepaired droid guards the direction taken. Counted as a hazard.
    Blocked,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NoSuchExit { direction } => {
                write!(f, "There is no exit to the {direction}.")
            }
            MoveError::Blocked => write!(f, "A maintenance droid blocks your way!"),
        }
    }
}

/// Why a pick-up attempt failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickUpError {
    /// Already holding that item. Never re-grants score, even if another
    /// one is sitting in the current location.
    AlreadyHeld(ItemKind),
    /// The item is not in the current location.
    Absent(ItemKind),
}

impl fmt::Display for PickUpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PickUpError::AlreadyHeld(ItemKind::DiagnosticTool) => {
                write!(f, "You already have the diagnostic tool.")
            }
            PickUpError::AlreadyHeld(ItemKind::EnergyCrystal) => {
                write!(f, "You already have the energy crystal.")
            }
            PickUpError::Absent(ItemKind::DiagnosticTool) => {
                write!(f, "There is no diagnostic tool here.")
            }
            PickUpError::Absent(ItemKind::EnergyCrystal) => {
                write!(f, "There is no energy crystal here.")
            }
        }
    }
}

/// Why using the tool on the droid failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UseToolError {
    /// The player is not holding the diagnostic tool.
    NoTool,
    /// No droid is stationed in the current location.
    NoDroidHere,
    /// The stationed droid has already been repaired.
    AlreadyRepaired,
}

impl fmt::Display for UseToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UseToolError::NoTool => write!(f, "You don't have a diagnostic tool."),
            UseToolError::NoDroidHere => {
                write!(f, "There's no droid here to use the tool on.")
            }
            UseToolError::AlreadyRepaired => write!(f, "The droid is already repaired."),
        }
    }
}

/// The player's session-long state. Mutated only through the action
/// methods below.
pub struct Player {
    location: LocationId,
    has_tool: bool,
    has_crystal: bool,
    score: u32,
    hazard_count: u32,
}

impl Player {
    pub fn new(starting_location: LocationId) -> Self {
        Player {
            location: starting_location,
            has_tool: false,
            has_crystal: false,
            score: 0,
            hazard_count: 0,
        }
    }

    pub fn location(&self) -> LocationId {
        self.location
    }

    pub fn has_tool(&self) -> bool {
        self.has_tool
    }

    pub fn has_crystal(&self) -> bool {
        self.has_crystal
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn hazard_count(&self) -> u32 {
        self.hazard_count
    }

    /// Current (score, hazard_count). Pure query.
    pub fn get_status(&self) -> (u32, u32) {
        (self.score, self.hazard_count)
    }

    /// Attempts to move through an exit. The direction is normalized
    /// (trimmed, case-folded) before matching, so `" EAST "` behaves
    /// exactly like `"east"`.
    ///
    /// A blocked move increments the hazard count and leaves the player
    /// where they are; a move with no matching exit changes nothing.
    pub fn move_to(&mut self, world: &World, direction: &str) -> Result<LocationId, MoveError> {
        let normalized = direction.trim().to_lowercase();
        let here = world.location(self.location);

        let Some((matched, destination)) = here.exit_to(&normalized) else {
            debug!("move rejected: no exit '{normalized}' from {}", here.name());
            return Err(MoveError::NoSuchExit {
                direction: normalized,
            });
        };

        if let Some(post) = here.droid() {
            if post.droid.is_blocking() && post.guarded_exit.eq_ignore_ascii_case(matched) {
                self.hazard_count += 1;
                debug!(
                    "move blocked by droid on '{}', hazard_count={}",
                    post.guarded_exit, self.hazard_count
                );
                return Err(MoveError::Blocked);
            }
        }

        self.location = destination;
        info!("player moved {matched} to {:?}", destination);
        Ok(destination)
    }

    /// Picks up the diagnostic tool from the current location. Awards
    /// points exactly once; holding a tool already is its own failure.
    pub fn pick_up_tool(&mut self, world: &mut World) -> Result<(), PickUpError> {
        if self.has_tool {
            return Err(PickUpError::AlreadyHeld(ItemKind::DiagnosticTool));
        }
        if !world.location_mut(self.location).remove_tool() {
            return Err(PickUpError::Absent(ItemKind::DiagnosticTool));
        }
        self.has_tool = true;
        self.score += TOOL_POINTS;
        info!("picked up tool, score={}", self.score);
        Ok(())
    }

    /// Picks up the energy crystal from the current location. Same rules
    /// as the tool, with a larger reward.
    pub fn pick_up_crystal(&mut self, world: &mut World) -> Result<(), PickUpError> {
        if self.has_crystal {
            return Err(PickUpError::AlreadyHeld(ItemKind::EnergyCrystal));
        }
        if !world.location_mut(self.location).remove_crystal() {
            return Err(PickUpError::Absent(ItemKind::EnergyCrystal));
        }
        self.has_crystal = true;
        self.score += CRYSTAL_POINTS;
        info!("picked up crystal, score={}", self.score);
        Ok(())
    }

    /// Uses the diagnostic tool on the droid stationed here. On success the
    /// droid is repaired and leaves its post, so the guarded exit opens up
    /// and a later attempt reports no droid rather than already-repaired.
    pub fn use_tool_on_droid(&mut self, world: &mut World) -> Result<(), UseToolError> {
        if !self.has_tool {
            return Err(UseToolError::NoTool);
        }
        let here = world.location_mut(self.location);
        {
            let Some(post) = here.droid_mut() else {
                return Err(UseToolError::NoDroidHere);
            };
            if !post.droid.is_blocking() {
                return Err(UseToolError::AlreadyRepaired);
            }
            post.droid.repair();
        }
        here.clear_droid();
        self.score += REPAIR_POINTS;
        info!("droid repaired, score={}", self.score);
        Ok(())
    }

    /// Adds the one-time mission bonus. Called exactly once, by the
    /// controller, at the moment the win is granted.
    pub fn award_win_bonus(&mut self) {
        self.score += WIN_BONUS;
    }
}
