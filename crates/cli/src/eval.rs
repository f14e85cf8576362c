use rayon::prelude::*;

use stickfight_shared::*;
use stickfight_sim::simulate_episode;

/// Aggregate results for one archetype over a batch of seeded episodes.
struct EvalRow {
    opponent: OpponentKind,
    wins: u32,
    knockout_losses: u32,
    timeouts: u32,
    mean_reward: f32,
    mean_length: f32,
}

fn eval_archetype(opponent: OpponentKind, episodes: u32, base_seed: u64) -> EvalRow {
    let results: Vec<(bool, bool, f32, usize)> = (0..episodes)
        .into_par_iter()
        .map(|i| {
            let traj = simulate_episode(opponent, base_seed + i as u64);
            let knockout = traj
                .steps
                .last()
                .map(|s| s.self_hp == 0.0 || s.opp_hp == 0.0)
                .unwrap_or(false);
            (traj.won, knockout, traj.total_reward, traj.steps.len())
        })
        .collect();

    let n = results.len() as f32;
    let wins = results.iter().filter(|r| r.0).count() as u32;
    let timeouts = results.iter().filter(|r| !r.1).count() as u32;
    let knockout_losses = episodes - wins - timeouts;
    let mean_reward = results.iter().map(|r| r.2).sum::<f32>() / n;
    let mean_length = results.iter().map(|r| r.3 as f32).sum::<f32>() / n;

    EvalRow {
        opponent,
        wins,
        knockout_losses,
        timeouts,
        mean_reward,
        mean_length,
    }
}

/// Run the evaluation batch and print a per-archetype table.
pub fn run_eval(opponents: &[OpponentKind], episodes: u32, base_seed: u64) {
    println!(
        "Evaluating {} episodes per archetype (seeds {}..{})",
        episodes,
        base_seed,
        base_seed + episodes as u64
    );
    println!();
    println!(
        "{:<12} {:>8} {:>8} {:>9} {:>12} {:>10}",
        "Opponent", "Wins", "Losses", "Timeouts", "Mean reward", "Mean len"
    );
    println!("{:-<63}", "");

    for &opponent in opponents {
        let row = eval_archetype(opponent, episodes, base_seed);
        println!(
            "{:<12} {:>7.1}% {:>7.1}% {:>8.1}% {:>12.2} {:>10.1}",
            row.opponent.name(),
            100.0 * row.wins as f32 / episodes as f32,
            100.0 * row.knockout_losses as f32 / episodes as f32,
            100.0 * row.timeouts as f32 / episodes as f32,
            row.mean_reward,
            row.mean_length,
        );
    }
}
