#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::prelude::*;
#[cfg(feature = "std")]
use broadside::MatchSummary;

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

/// Run a match between two bots and print the result.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Difficulty of the first bot.
    #[arg(long, value_enum, default_value_t = Difficulty::Medium)]
    difficulty: Difficulty,
    /// Difficulty of the second bot.
    #[arg(long, value_enum, default_value_t = Difficulty::Hard)]
    opponent_difficulty: Difficulty,
    /// Stop after this many turns if nobody has won.
    #[arg(long, default_value_t = 400)]
    max_turns: u32,
    /// Print the match summary as JSON.
    #[arg(long)]
    json: bool,
}

#[cfg(feature = "std")]
fn seeded(seed: Option<u64>, offset: u64) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s.wrapping_add(offset)),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn print_summary(summary: &MatchSummary) {
    match &summary.winner {
        Some(name) => println!("{} wins after {} turns", name, summary.turns),
        None => println!("No winner after {} turns", summary.turns),
    }
    for side in &summary.sides {
        println!(
            "  {}: {} ships afloat, {} sunk, {} radar sweeps, {} smoke screens",
            side.name, side.ships_remaining, side.ships_sunk, side.radar_sweeps_used, side.smoke_screens_used
        );
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    if let Some(s) = cli.seed {
        log::info!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let mut rng = seeded(cli.seed, 0);
    let mut rng_one = seeded(cli.seed, 1);
    let mut rng_two = seeded(cli.seed, 2);

    let mut bot_one = AiPlayer::with_difficulty(cli.difficulty);
    let mut bot_two = AiPlayer::with_difficulty(cli.opponent_difficulty);

    let mut one = Side::new(format!("Bot 1 ({:?})", cli.difficulty), true);
    let mut two = Side::new(format!("Bot 2 ({:?})", cli.opponent_difficulty), true);
    bot_one
        .place_ships(&mut rng_one, one.home_mut())
        .map_err(|e| anyhow::anyhow!(e))?;
    bot_two
        .place_ships(&mut rng_two, two.home_mut())
        .map_err(|e| anyhow::anyhow!(e))?;
    anyhow::ensure!(
        one.home().is_fully_placed() && two.home().is_fully_placed(),
        "fleet placement incomplete"
    );

    let mut game = Game::with_random_start(&mut rng, one, two);
    log::info!("{} moves first", game.side(game.current()).name());

    while game.status() == GameStatus::InProgress && game.turns() < cli.max_turns {
        let report = match game.current() {
            Seat::One => game.play_turn(&mut bot_one, &mut rng_one),
            Seat::Two => game.play_turn(&mut bot_two, &mut rng_two),
        }
        .map_err(|e| anyhow::anyhow!(e))?;
        log::debug!("{:?}", report);
    }

    let summary = game.summary();
    if cli.json {
        println!("{}", serde_json::to_string(&summary)?);
    } else {
        print_summary(&summary);
    }
    Ok(())
}
