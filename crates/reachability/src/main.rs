//! CLI entry point for the reachability engine.
//!
//! Usage:
//!   reachability crossing [options]
//!   reachability frogs [--frogs <n>] [--all] [options]
//!   reachability explain [--frogs <n>] [--depth <d>]
//!
//! Options:
//!   --order <order>    bfs or dfs (default: bfs)
//!   --format <format>  text or json (default: text)
//!
//! Set RUST_LOG=debug to see search summaries on stderr.

use std::fmt::Display;
use std::hash::Hash;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use serde::{Deserialize, Serialize};

use reachability::puzzle::{crossing, explain_successors, frogs, render_trace};
use reachability::{Collect, SearchOrder, SearchOutcome, SearchStats, StateSpace};

#[derive(Parser)]
#[command(name = "reachability")]
#[command(about = "Solve puzzles by exploring their state space")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Goat, cabbage and wolf river crossing
    Crossing {
        /// Search order: bfs or dfs
        #[arg(long, default_value = "bfs")]
        order: SearchOrder,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Search least-cost-first with unit move costs (ignores --order)
        #[arg(long)]
        uniform_cost: bool,
    },

    /// Leaping frogs
    Frogs {
        /// Frogs on each side of the empty stone
        #[arg(long, default_value = "2")]
        frogs: usize,

        /// Search order: bfs or dfs
        #[arg(long, default_value = "bfs")]
        order: SearchOrder,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Explore the whole space instead of stopping at the first solution
        #[arg(long)]
        all: bool,
    },

    /// Print the successor tree of a leaping frogs start row
    Explain {
        /// Frogs on each side of the empty stone
        #[arg(long, default_value = "2")]
        frogs: usize,

        /// Maximum number of transitions below the start row
        #[arg(long, default_value = "8")]
        depth: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Output format for a solved puzzle
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SolveReport {
    puzzle: String,
    start: String,
    /// `None` when the search was least-cost-first
    #[serde(skip_serializing_if = "Option::is_none")]
    order: Option<SearchOrder>,
    solved: bool,
    solutions: Vec<Vec<String>>,
    stats: SearchStats,
}

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let solved = match cli.command {
        Commands::Crossing {
            order,
            format,
            uniform_cost,
        } => {
            let goal = crossing::is_solved;
            if uniform_cost {
                let space = crossing::cost_state_space();
                let outcome = space.search(goal, order, Collect::FirstGoal);
                emit("crossing", &space, None, &outcome, format, Some(crossing::HEADER))?
            } else {
                let space = crossing::state_space();
                let outcome = space.search(goal, order, Collect::FirstGoal);
                let order = Some(order);
                emit("crossing", &space, order, &outcome, format, Some(crossing::HEADER))?
            }
        }

        Commands::Frogs {
            frogs: count,
            order,
            format,
            all,
        } => {
            let (start, finish) = frogs::Stones::puzzle(count);
            info!("leaping frogs: start {}, finish {}", start, finish);
            let space = frogs::state_space(start);
            let collect = if all {
                Collect::DistinctGoals
            } else {
                Collect::FirstGoal
            };
            let outcome = space.search(|state| *state == finish, order, collect);
            emit("frogs", &space, Some(order), &outcome, format, None)?
        }

        Commands::Explain {
            frogs: count,
            depth,
        } => {
            let (start, _) = frogs::Stones::puzzle(count);
            print!("{}", explain_successors(&frogs::state_space(start), depth));
            true
        }
    };

    // Exit with appropriate code
    Ok(if solved {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Print an outcome and report whether it holds a solution.
fn emit<S, C>(
    puzzle: &str,
    space: &StateSpace<S, C>,
    order: Option<SearchOrder>,
    outcome: &SearchOutcome<S>,
    format: Format,
    header: Option<&str>,
) -> Result<bool>
where
    S: Clone + Eq + Hash + Display + 'static,
    C: Ord + Clone + 'static,
{
    match format {
        Format::Text => {
            println!("{} puzzle start: {}", puzzle, space.initial_state());
            if !outcome.is_solved() {
                println!("No solution found");
            }
            for trace in &outcome.traces {
                println!("Solution: a trace of {} states", trace.len());
                if let Some(header) = header {
                    println!("{}", header);
                }
                print!("{}", render_trace(trace));
            }
        }
        Format::Json => {
            let report = SolveReport {
                puzzle: puzzle.to_string(),
                start: space.initial_state().to_string(),
                order,
                solved: outcome.is_solved(),
                solutions: outcome
                    .traces
                    .iter()
                    .map(|trace| trace.iter().map(ToString::to_string).collect())
                    .collect(),
                stats: outcome.stats.clone(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(outcome.is_solved())
}
