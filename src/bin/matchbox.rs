//! matchbox CLI - train a MENACE-style machine and poke at its utilities

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use matchbox::{DEFAULT_ITERATIONS, Player, Trainer, TrainerConfig, knight, play};
use rand::{SeedableRng, rngs::StdRng};

#[derive(Parser)]
#[command(name = "matchbox")]
#[command(version, about = "MENACE-style matchbox learner for Tic-Tac-Toe", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train a machine through self-play
    Train(TrainArgs),

    /// Minimum knight moves between two chessboard squares
    Knight(KnightArgs),
}

#[derive(Args)]
struct TrainArgs {
    /// Number of self-play games
    #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
    iterations: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Play an interactive game against the trained machine
    #[arg(long)]
    play: bool,

    /// Print the learned state table as JSON
    #[arg(long)]
    dump_json: bool,

    /// Hide the training progress bar
    #[arg(long)]
    quiet: bool,
}

#[derive(Args)]
struct KnightArgs {
    /// Starting square (0-63, row-major from the top left)
    from: usize,

    /// Target square (0-63, row-major from the top left)
    to: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Train(args) => train(args),
        Commands::Knight(args) => knight_moves(args),
    }
}

fn train(args: TrainArgs) -> Result<()> {
    let mut trainer = Trainer::new(TrainerConfig {
        iterations: args.iterations,
        seed: args.seed,
    });

    let progress = if args.quiet {
        None
    } else {
        Some(build_progress(args.iterations)?)
    };

    let mut wins_one = 0usize;
    let mut wins_two = 0usize;
    let mut draws = 0usize;

    let mut table = trainer.train_observed(|game, winner| {
        match winner {
            Some(Player::One) => wins_one += 1,
            Some(Player::Two) => wins_two += 1,
            None => draws += 1,
        }
        if let Some(pb) = &progress {
            pb.set_position(game as u64);
            pb.set_message(format!("{wins_one} 2:{wins_two} D:{draws}"));
        }
    })?;

    if let Some(pb) = &progress {
        pb.finish_with_message(format!("{wins_one} 2:{wins_two} D:{draws}"));
    }

    println!(
        "trained on {} games: {} states learned",
        args.iterations,
        table.len()
    );

    if args.dump_json {
        println!("{}", serde_json::to_string_pretty(&table)?);
    }

    if args.play {
        let mut rng = StdRng::seed_from_u64(rand::random::<u64>());
        let stdin = std::io::stdin();
        let mut input = stdin.lock();
        let mut output = std::io::stdout();
        play::play_game(&mut table, &mut rng, &mut input, &mut output)?;
    }

    Ok(())
}

fn knight_moves(args: KnightArgs) -> Result<()> {
    let moves = knight::min_moves(args.from, args.to)?;
    println!("{} -> {}: {} knight moves", args.from, args.to, moves);
    Ok(())
}

fn build_progress(total_games: usize) -> Result<ProgressBar> {
    let pb = ProgressBar::new(total_games as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games (1:{msg})")?
            .progress_chars("=>-"),
    );
    Ok(pb)
}
