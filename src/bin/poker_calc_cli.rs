//! CLI покерного калькулятора.
//!
//! Примеры:
//!   poker_calc_cli best --hole "HA HK" --community "HQ HJ HT H9 S2"
//!   poker_calc_cli compare --hole1 "H2 H3" --hole2 "S5 D6" --community "H4 H5 H6 C7 D8"
//!   poker_calc_cli equity --hole "HA SA" --players 5 --trials 10000 --workers 4
//!   echo '{"BestHand":{"hole":["HA","HK"],"community":["HQ","HJ","HT"]}}' | poker_calc_cli query

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use poker_calc::api::{
    handle_query, ApiError, BestHandRequest, CompareRequest, ProbabilityRequest,
    Query, QueryResponse,
};
use poker_calc::equity::SimulationConfig;
use poker_calc::infra::init_logging;

#[derive(Parser)]
#[command(author, version, about = "Poker hand evaluator and equity calculator", long_about = None)]
struct Cli {
    /// JSON-файл с SimulationConfig.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Переопределить число воркеров из конфига.
    #[arg(long, global = true)]
    workers: Option<usize>,

    /// Фиксированный seed для воспроизводимых прогонов.
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "Best 5-card hand from 2 hole cards and 3-5 community cards")]
    Best {
        #[arg(long, required = true)]
        hole: String,
        #[arg(long, required = true)]
        community: String,
    },
    #[command(about = "Compare two hole hands on a shared board")]
    Compare {
        #[arg(long, required = true)]
        hole1: String,
        #[arg(long, required = true)]
        hole2: String,
        #[arg(long, required = true)]
        community: String,
    },
    #[command(about = "Monte Carlo win/tie/loss probabilities", alias = "prob")]
    Equity {
        #[arg(long, required = true)]
        hole: String,
        #[arg(long, default_value = "")]
        community: String,
        /// Все игроки за столом, включая героя.
        #[arg(long, default_value_t = 2, allow_negative_numbers = true)]
        players: i64,
        #[arg(long, allow_negative_numbers = true)]
        trials: Option<i64>,
    },
    #[command(about = "Read a JSON query from stdin")]
    Query,
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(c) => c,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let result = to_query(cli.command).and_then(|query| handle_query(query, &config));

    match result {
        Ok(resp) => {
            print_json(&resp);
            ExitCode::SUCCESS
        }
        Err(err) => {
            match serde_json::to_string(&err) {
                Ok(json) => eprintln!("{json}"),
                Err(_) => eprintln!("{err}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> Result<SimulationConfig, String> {
    let mut config = match &cli.config {
        Some(path) => SimulationConfig::from_json_file(path).map_err(|e| e.to_string())?,
        None => SimulationConfig::default(),
    };
    if let Some(workers) = cli.workers {
        config.workers = workers;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

/// "HA SA" → ["HA", "SA"]
fn split_cards(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

fn to_query(command: Command) -> Result<Query, ApiError> {
    let query = match command {
        Command::Best { hole, community } => Query::BestHand(BestHandRequest {
            hole: split_cards(&hole),
            community: split_cards(&community),
        }),
        Command::Compare {
            hole1,
            hole2,
            community,
        } => Query::Compare(CompareRequest {
            player1_hole: split_cards(&hole1),
            player2_hole: split_cards(&hole2),
            community: split_cards(&community),
        }),
        Command::Equity {
            hole,
            community,
            players,
            trials,
        } => Query::Probability(ProbabilityRequest {
            hole: split_cards(&hole),
            community: split_cards(&community),
            num_players: players,
            simulations: trials,
        }),
        Command::Query => serde_json::from_str(&read_stdin()?)?,
    };
    Ok(query)
}

fn read_stdin() -> Result<String, ApiError> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;
    Ok(buf)
}

fn print_json(resp: &QueryResponse) {
    // Наружу отдаём только полезную нагрузку, без тега варианта.
    let json = match resp {
        QueryResponse::BestHand(dto) => serde_json::to_string_pretty(dto),
        QueryResponse::Compare(dto) => serde_json::to_string_pretty(dto),
        QueryResponse::Probability(dto) => serde_json::to_string_pretty(dto),
    };
    match json {
        Ok(text) => println!("{text}"),
        Err(e) => log::error!("cannot serialize response: {e}"),
    }
}
