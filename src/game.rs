//! The game controller: owns the world and the player, dispatches parsed
//! commands, and evaluates the win condition.

use crate::command::{self, Command};
use crate::item::{Item, ItemKind};
use crate::location::{Location, LocationId};
use crate::player::Player;
use crate::world::World;
use log::{debug, info};
use std::fmt;

/// Printed when the session ends without a win (quit, EOF, interrupt).
pub const FAREWELL: &str = "Thanks for playing!";

/// Why a win attempt failed. The two real causes are distinct so the
/// player is never left guessing which objective is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinError {
    /// Win was not the most recently processed command.
    NotRequested,
    /// The player is not in the Docking Bay.
    WrongLocation,
    /// The player has not retrieved the energy crystal.
    NoCrystal,
}

impl fmt::Display for WinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WinError::NotRequested => {
                write!(f, "You haven't completed all the mission objectives yet!")
            }
            WinError::WrongLocation => {
                write!(f, "You need to be in the Docking Bay to complete your mission!")
            }
            WinError::NoCrystal => {
                write!(f, "You need to retrieve the energy crystal first!")
            }
        }
    }
}

/// What the session loop should do after a processed command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Keep reading commands.
    Continue,
    /// Mission complete; end the session.
    Won,
    /// The player asked to leave; end the session.
    Quit,
}

/// The outcome of one fully processed command: feedback to print, plus
/// what the session loop does next.
#[derive(Debug)]
pub struct Turn {
    pub feedback: String,
    pub state: SessionState,
}

impl Turn {
    fn next(feedback: impl Into<String>) -> Self {
        Turn {
            feedback: feedback.into(),
            state: SessionState::Continue,
        }
    }
}

/// Owns the whole game: the two locations, the droid stationed in them,
/// and the player. Commands come in as raw text; each is fully applied
/// before the next is read, so effects never interleave.
pub struct GameController {
    pub world: World,
    pub player: Player,
    /// Reset at the start of every command, set only by `win` itself, so
    /// winning can never ride along on another command's side effects.
    last_command_was_win: bool,
}

impl GameController {
    /// Builds the fixed world and places the player in the tunnels. Fails
    /// only if the wired graph is malformed.
    pub fn new() -> Result<Self, String> {
        let world = World::new()?;
        Ok(GameController {
            world,
            player: Player::new(LocationId::MaintenanceTunnels),
            last_command_was_win: false,
        })
    }

    fn current_location(&self) -> &Location {
        self.world.location(self.player.location())
    }

    /// Text shown once at session start.
    pub fn opening(&self) -> String {
        format!(
            "Welcome to Space Station Repair!\nType 'help' for a list of commands.\n\n{}",
            self.current_location().describe()
        )
    }

    /// Processes one raw input line: parse, dispatch, report. Expected
    /// failures (bad direction, missing item, unmet win condition) come
    /// back as feedback text with the state unchanged; nothing in here
    /// aborts the session except a granted win or an explicit quit.
    pub fn process_input(&mut self, raw: &str) -> Turn {
        debug!("processing command: {raw:?}");
        self.last_command_was_win = false;

        let command = match command::parse(raw) {
            Ok(command) => command,
            Err(e) => return Turn::next(e.to_string()),
        };

        match command {
            Command::Help => Turn::next(help_text()),
            Command::Look => Turn::next(self.current_location().describe()),
            Command::Inventory => Turn::next(self.inventory_text()),
            Command::Status => Turn::next(self.status_text()),
            Command::Go(direction) => self.handle_move(&direction),
            Command::GetTool => match self.player.pick_up_tool(&mut self.world) {
                Ok(()) => Turn::next("You pick up the diagnostic tool."),
                Err(e) => Turn::next(e.to_string()),
            },
            Command::UseTool => match self.player.use_tool_on_droid(&mut self.world) {
                Ok(()) => Turn::next(
                    "You use the diagnostic tool on the droid. It beeps and powers up!\n\
                     The droid thanks you and moves out of the way.",
                ),
                Err(e) => Turn::next(e.to_string()),
            },
            Command::GetCrystal => match self.player.pick_up_crystal(&mut self.world) {
                Ok(()) => Turn::next("You pick up the energy crystal."),
                Err(e) => Turn::next(e.to_string()),
            },
            Command::Examine(kind) => Turn::next(self.examine_text(kind)),
            Command::Win => self.handle_win(),
            Command::Quit => Turn {
                feedback: FAREWELL.to_string(),
                state: SessionState::Quit,
            },
        }
    }

    fn handle_move(&mut self, direction: &str) -> Turn {
        match self.player.move_to(&self.world, direction) {
            Ok(destination) => Turn::next(format!(
                "You move {} to {}.",
                direction.trim().to_lowercase(),
                self.world.location(destination).name()
            )),
            Err(e) => Turn::next(e.to_string()),
        }
    }

    fn handle_win(&mut self) -> Turn {
        self.last_command_was_win = true;
        match self.check_win_condition() {
            Ok(()) => {
                let (score, hazards) = self.player.get_status();
                info!("mission complete: score={score} hazards={hazards}");
                Turn {
                    feedback: format!(
                        "Congratulations! You've completed your mission!\n\
                         Final Score: {score} (Hazards: {hazards})"
                    ),
                    state: SessionState::Won,
                }
            }
            Err(e) => Turn::next(e.to_string()),
        }
    }

    /// Grants the win iff the most recent command was `win`, the player is
    /// in the Docking Bay, and the crystal is held, checked in that
    /// order, so the reported failure names the first unmet objective.
    /// Adds the one-time bonus on success.
    pub fn check_win_condition(&mut self) -> Result<(), WinError> {
        if !self.last_command_was_win {
            return Err(WinError::NotRequested);
        }
        if self.player.location() != LocationId::DockingBay {
            return Err(WinError::WrongLocation);
        }
        if !self.player.has_crystal() {
            return Err(WinError::NoCrystal);
        }
        self.player.award_win_bonus();
        Ok(())
    }

    fn inventory_text(&self) -> String {
        let mut held = Vec::new();
        if self.player.has_tool() {
            held.push(Item::new(ItemKind::DiagnosticTool).name());
        }
        if self.player.has_crystal() {
            held.push(Item::new(ItemKind::EnergyCrystal).name());
        }
        if held.is_empty() {
            return "You're not carrying anything.".to_string();
        }
        let mut out = String::from("Inventory:");
        for name in held {
            out.push_str(&format!("\n- {name}"));
        }
        out
    }

    fn status_text(&self) -> String {
        let (score, hazards) = self.player.get_status();
        format!("Score: {score}\nHazards encountered: {hazards}")
    }

    /// Examine works on anything the player holds or can see here.
    fn examine_text(&self, kind: ItemKind) -> String {
        let here = self.current_location();
        let visible = match kind {
            ItemKind::DiagnosticTool => self.player.has_tool() || here.has_tool(),
            ItemKind::EnergyCrystal => self.player.has_crystal() || here.has_crystal(),
        };
        if visible {
            Item::new(kind).examine().to_string()
        } else {
            "You don't see that here.".to_string()
        }
    }
}

fn help_text() -> &'static str {
    "Available commands:\n\
     \x20 help           - Show this help message\n\
     \x20 look           - Look around the current location\n\
     \x20 inventory      - Check your inventory\n\
     \x20 status         - Check your score and hazard count\n\
     \x20 go <direction> - Move in the specified direction (e.g., 'go east')\n\
     \x20 get tool       - Pick up the diagnostic tool\n\
     \x20 use tool       - Use the diagnostic tool on the droid\n\
     \x20 get crystal    - Pick up the energy crystal\n\
     \x20 examine <item> - Take a closer look at the tool or the crystal\n\
     \x20 win            - Complete the mission (if all objectives are met)\n\
     \x20 quit           - Give up and leave the station"
}
