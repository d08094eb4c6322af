use rand::rngs::SmallRng;

use crate::{
    action::Action,
    board::HomeGrid,
    common::{ActionReport, BoardError},
    side::Side,
};

/// Interface implemented by anything that can take a turn: the bot, or a
/// host-side adapter for a human.
pub trait Player {
    /// Place all ships onto the provided grid.
    fn place_ships(&mut self, rng: &mut SmallRng, grid: &mut HomeGrid) -> Result<(), BoardError>;

    /// Decide this turn's action from the player's own side of the match.
    fn choose_action(&mut self, rng: &mut SmallRng, me: &Side) -> Action;

    /// Inform the player of what its action produced. `me` already reflects it.
    fn handle_report(&mut self, _me: &Side, _report: &ActionReport) {}
}
