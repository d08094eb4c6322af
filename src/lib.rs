#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod action;
mod ai;
mod arsenal;
mod bitboard;
mod board;
pub mod combat;
mod common;
mod config;
mod coord;
mod game;
#[cfg(feature = "std")]
mod logging;
mod player;
mod player_ai;
pub mod prelude;
mod ship;
mod side;

pub use action::*;
pub use ai::*;
pub use arsenal::*;
pub use bitboard::{BitBoard, BitBoardError};
pub use board::{Cell, GridSnapshot, HomeGrid, Mark, TrackingGrid};
pub use combat::CombatError;
pub use common::*;
pub use config::*;
pub use coord::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use player::*;
pub use player_ai::*;
pub use ship::*;
pub use side::*;
