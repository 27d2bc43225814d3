//! Нагрузочный прогон симулятора: много запросов вероятности подряд,
//! в несколько потоков, со статистикой по задержкам.

use std::time::{Duration, Instant};

use clap::Parser;
use rayon::prelude::*;

use poker_calc::api::{handle_query, ProbabilityRequest, Query};
use poker_calc::equity::SimulationConfig;
use poker_calc::infra::init_logging;

#[derive(Parser)]
#[command(author, version, about = "Load test for the equity simulator", long_about = None)]
struct Args {
    /// Сколько запросов выполнить.
    #[arg(long, default_value_t = 200)]
    requests: usize,
    /// Прогонов на запрос.
    #[arg(long, default_value_t = 10_000)]
    trials: u32,
    /// Игроков за столом.
    #[arg(long, default_value_t = 5)]
    players: i64,
    /// Карманные карты героя.
    #[arg(long, default_value = "HA SA")]
    hole: String,
    /// Порог p95 в миллисекундах (только для отчёта).
    #[arg(long, default_value_t = 500)]
    p95_budget_ms: u64,
}

fn main() {
    init_logging();
    let args = Args::parse();

    log::info!(
        "poker_equity_stress: {} requests, {} trials each, {} players, hole {}",
        args.requests,
        args.trials,
        args.players,
        args.hole
    );

    let config = SimulationConfig {
        max_trials: args.trials.max(SimulationConfig::default().max_trials),
        ..SimulationConfig::default()
    };
    let hole: Vec<String> = args.hole.split_whitespace().map(str::to_string).collect();

    let started = Instant::now();
    let samples: Vec<(Duration, bool)> = (0..args.requests)
        .into_par_iter()
        .map(|_| {
            let query = Query::Probability(ProbabilityRequest {
                hole: hole.clone(),
                community: Vec::new(),
                num_players: args.players,
                simulations: Some(i64::from(args.trials)),
            });
            let t0 = Instant::now();
            let ok = handle_query(query, &config).is_ok();
            (t0.elapsed(), ok)
        })
        .collect();
    let wall = started.elapsed();

    let failures = samples.iter().filter(|(_, ok)| !ok).count();
    let mut latencies: Vec<Duration> = samples.iter().map(|(d, _)| *d).collect();
    latencies.sort_unstable();

    let p50 = percentile(&latencies, 0.50);
    let p95 = percentile(&latencies, 0.95);
    let throughput = args.requests as f64 / wall.as_secs_f64().max(f64::EPSILON);

    println!();
    println!("=========== EQUITY STRESS SUMMARY ===========");
    println!("Запросов: {} (ошибок: {})", args.requests, failures);
    println!("Общее время: {:.2?}", wall);
    println!("Пропускная способность: {:.1} req/s", throughput);
    println!("p50: {:.2?}", p50);
    println!(
        "p95: {:.2?} (порог {} ms: {})",
        p95,
        args.p95_budget_ms,
        if p95 <= Duration::from_millis(args.p95_budget_ms) {
            "OK"
        } else {
            "ПРЕВЫШЕН"
        }
    );
    println!("=============================================");
}

/// Перцентиль по отсортированному списку; пустой список → 0.
fn percentile(sorted: &[Duration], q: f64) -> Duration {
    if sorted.is_empty() {
        return Duration::ZERO;
    }
    let idx = ((sorted.len() - 1) as f64 * q).round() as usize;
    sorted[idx.min(sorted.len() - 1)]
}
