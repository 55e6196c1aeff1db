#[macro_use]
extern crate lazy_static;

pub mod command;
pub mod droid;
pub mod game;
pub mod input;
pub mod item;
pub mod location;
pub mod player;
pub mod world;

mod player_tests;
