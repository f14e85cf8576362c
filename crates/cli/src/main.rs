mod eval;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use stickfight_shared::*;
use stickfight_sim::analyzer::analyze;
use stickfight_sim::simulate_episode;

#[derive(Parser)]
#[command(name = "stickfight", about = "Stick-fight episode simulator CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate one fight and print the result
    Run {
        /// Opponent archetype (random, aggressive, defensive, mirror)
        #[arg(long, default_value = "random")]
        opponent: String,

        /// Random seed for the episode
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Print the per-tick step log
        #[arg(long)]
        steps: bool,

        /// Output path for trajectory JSON
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Evaluate the agent over many seeded episodes per archetype
    Eval {
        /// Comma-separated archetypes (default: all)
        #[arg(long, default_value = "random,aggressive,defensive,mirror")]
        opponents: String,

        /// Episodes per archetype
        #[arg(long, default_value_t = 100)]
        episodes: u32,

        /// Base seed; episode i uses seed base + i
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },

    /// Start the episode server
    Serve {
        /// Port to listen on
        #[arg(long, default_value_t = 3001)]
        port: u16,
    },
}

/// Parse an archetype name, exiting with a usage error on failure.
fn resolve_archetype(name: &str) -> OpponentKind {
    match name.parse() {
        Ok(kind) => kind,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            opponent,
            seed,
            steps,
            output,
        } => cmd_run(&opponent, seed, steps, output),

        Commands::Eval {
            opponents,
            episodes,
            seed,
        } => cmd_eval(&opponents, episodes, seed),

        Commands::Serve { port } => cmd_serve(port),
    }
}

fn cmd_run(opponent_name: &str, seed: u64, show_steps: bool, output: Option<PathBuf>) {
    let opponent = resolve_archetype(opponent_name);

    println!("Running fight vs {opponent} (seed={seed})");

    let trajectory = simulate_episode(opponent, seed);
    let metrics = analyze(&trajectory);
    let last = trajectory
        .steps
        .last()
        .expect("trajectory always has at least one step");

    if show_steps {
        println!();
        for step in &trajectory.steps {
            println!(
                "  t={:<3} self@{:<2} {:>10?} hp={:<5.1} | opp@{:<2} {:>10?} hp={:<5.1} r={:+.2}",
                step.t,
                step.self_pos,
                step.self_action,
                step.self_hp,
                step.opp_pos,
                step.opp_action,
                step.opp_hp,
                step.reward,
            );
        }
    }

    println!();
    println!("=== Fight Result ===");
    println!("Outcome:      {}", if trajectory.won { "WON" } else { "LOST" });
    println!("Ticks:        {}", trajectory.steps.len());
    println!("Total reward: {:.2}", trajectory.total_reward);
    println!();
    println!("--- Stats ---");
    println!(
        "  Agent:    HP={:.0}, dealt={:.0}, attacks={}, blocks={}, hit rate={:.0}%",
        last.self_hp,
        metrics.damage_dealt,
        metrics.agent_attacks,
        metrics.agent_blocks,
        metrics.hit_rate * 100.0,
    );
    println!(
        "  Opponent: HP={:.0}, dealt={:.0}, attacks={}, blocks={}",
        last.opp_hp, metrics.damage_taken, metrics.opponent_attacks, metrics.opponent_blocks,
    );
    println!(
        "  Engagements={}, avg distance={:.1}, aggression={:.0}/100",
        metrics.engagement_count, metrics.avg_distance, metrics.aggression_score,
    );

    if let Some(path) = output {
        match serde_json::to_string_pretty(&trajectory) {
            Ok(json) => match std::fs::write(&path, json) {
                Ok(()) => println!("\nTrajectory written to {}", path.display()),
                Err(e) => eprintln!("\nFailed to write trajectory: {}", e),
            },
            Err(e) => eprintln!("\nFailed to serialize trajectory: {}", e),
        }
    }
}

fn cmd_eval(opponents_str: &str, episodes: u32, base_seed: u64) {
    let opponents: Vec<OpponentKind> = opponents_str
        .split(',')
        .map(|s| resolve_archetype(s.trim()))
        .collect();

    if episodes == 0 {
        eprintln!("Eval requires at least 1 episode.");
        std::process::exit(1);
    }

    eval::run_eval(&opponents, episodes, base_seed);
}

fn cmd_serve(port: u16) {
    let rt = tokio::runtime::Runtime::new().expect("failed to create tokio runtime");
    rt.block_on(async {
        if let Err(e) = stickfight_server::run_server(port).await {
            eprintln!("Server error: {}", e);
            std::process::exit(1);
        }
    });
}
