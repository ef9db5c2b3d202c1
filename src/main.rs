use anyhow::Context;
use battleships::{
    decode_layout, default_fleet, encode_layout, generate_layout, init_logging, select_move,
    Board, Game, Rules, StrikeOutcome, DEFAULT_HEIGHT, DEFAULT_WIDTH,
};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
enum Commands {
    /// Watch the targeting heuristic play both sides of a computer-mode game.
    Demo {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Disable the bonus strike after a hit")]
        no_bonus: bool,
    },
    /// Generate a random fleet layout and print its transfer string.
    Export {
        #[arg(long, help = "Fix RNG seed for a reproducible layout")]
        seed: Option<u64>,
    },
    /// Decode a layout transfer string and print the resulting board.
    Import {
        #[arg(help = "Base64 layout string produced by `export`")]
        layout: String,
    },
}

fn seeded_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Demo { seed, no_bonus } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut rng = seeded_rng(seed);

            let mut player_board = Board::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)?;
            generate_layout(&mut player_board, default_fleet(), &mut rng)?;
            let rules = Rules {
                bonus_turn_on_hit: !no_bonus,
            };
            let mut game = Game::versus_computer(player_board, rules, &mut rng)?;

            let mut strikes = 0u32;
            while game.winner().is_none() {
                let Some((col, row)) = select_move(game.board(1), &mut rng) else {
                    break;
                };
                let report = game.attempt_strike(&mut rng, col, row)?;
                strikes += 1;
                print_outcome("player", report.coord, report.outcome);
                if let Some(reply) = report.reply {
                    print_outcome("computer", reply.coord, reply.outcome);
                }
                anyhow::ensure!(strikes < 500, "demo game did not terminate");
            }

            let winner = game.winner().context("game ended without a winner")?;
            println!();
            println!("{} wins after {} player strikes!", side(winner), strikes);
            println!();
            println!("Player board:");
            println!("{}", game.board(0));
            println!();
            println!("Computer board:");
            println!("{}", game.board(1));
        }
        Commands::Export { seed } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (layout will be reproducible)", s);
            }
            let mut rng = seeded_rng(seed);
            let mut board = Board::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)?;
            generate_layout(&mut board, default_fleet(), &mut rng)?;
            println!("{}", board);
            println!();
            println!("{}", encode_layout(board.ships()));
        }
        Commands::Import { layout } => {
            let ships = decode_layout(&layout).context("failed to decode layout string")?;
            let mut board = Board::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)?;
            for ship in ships {
                let name = ship.name().to_owned();
                board
                    .place(ship)
                    .with_context(|| format!("imported ship \"{}\" cannot be placed", name))?;
            }
            println!("Imported {} ships:", board.ships().len());
            for ship in board.ships() {
                println!("  {}", ship);
            }
            println!();
            println!("{}", board);
        }
    }
    Ok(())
}

fn side(player: usize) -> &'static str {
    if player == 0 {
        "Player"
    } else {
        "Computer"
    }
}

fn print_outcome(who: &str, coord: (usize, usize), outcome: StrikeOutcome) {
    let verdict = match outcome {
        StrikeOutcome::Miss => "miss",
        StrikeOutcome::Hit(_) => "hit",
        StrikeOutcome::Sink(_) => "hit - ship sunk",
    };
    println!(
        "{} strikes {}{}: {}",
        who,
        (b'A' + coord.0 as u8) as char,
        coord.1 + 1,
        verdict
    );
}
