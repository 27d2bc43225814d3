use serde::{Deserialize, Serialize};

use crate::equity::SimulationConfig;
use crate::eval::{compare, evaluate_best_hand};

use super::dto::{
    BestHandRequest, CompareRequest, CompareResponseDto, EquityDto, HandEvalDto,
    ProbabilityRequest,
};
use super::errors::ApiError;
use super::validation::{ensure_distinct, parse_community, parse_hole};

/// Допустимые размеры борда для оценки готовой руки.
const SHOWDOWN_BOARD_SIZES: [usize; 3] = [3, 4, 5];
/// Допустимые размеры борда для симуляции (префлоп, флоп, тёрн, ривер).
const SIMULATION_BOARD_SIZES: [usize; 4] = [0, 3, 4, 5];

/// Запросы "только чтение" — все операции ядра чистые.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Query {
    /// Лучшая 5-карточная рука.
    BestHand(BestHandRequest),

    /// Кто сильнее из двух рук.
    Compare(CompareRequest),

    /// Вероятность выигрыша (Monte Carlo).
    Probability(ProbabilityRequest),
}

/// Результат запроса.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum QueryResponse {
    BestHand(HandEvalDto),
    Compare(CompareResponseDto),
    Probability(EquityDto),
}

/// Проверить запрос и передать его ядру.
pub fn handle_query(query: Query, config: &SimulationConfig) -> Result<QueryResponse, ApiError> {
    let result = match query {
        Query::BestHand(req) => best_hand(&req).map(QueryResponse::BestHand),
        Query::Compare(req) => compare_hands(&req).map(QueryResponse::Compare),
        Query::Probability(req) => probability(&req, config).map(QueryResponse::Probability),
    };

    if let Err(err) = &result {
        log::info!("request rejected: {err}");
    }
    result
}

/// Разобрать JSON-запрос и выполнить его.
pub fn handle_json(json: &str, config: &SimulationConfig) -> Result<QueryResponse, ApiError> {
    let query: Query = serde_json::from_str(json)?;
    handle_query(query, config)
}

fn best_hand(req: &BestHandRequest) -> Result<HandEvalDto, ApiError> {
    let hole = parse_hole("hole", &req.hole)?;
    let community = parse_community("community", &req.community, &SHOWDOWN_BOARD_SIZES)?;
    ensure_distinct(&[&hole[..], &community[..]])?;

    let eval = evaluate_best_hand(&hole, &community);
    Ok(HandEvalDto::from(&eval))
}

fn compare_hands(req: &CompareRequest) -> Result<CompareResponseDto, ApiError> {
    let hole1 = parse_hole("player1_hole", &req.player1_hole)?;
    let hole2 = parse_hole("player2_hole", &req.player2_hole)?;
    let community = parse_community("community", &req.community, &SHOWDOWN_BOARD_SIZES)?;
    ensure_distinct(&[&hole1[..], &hole2[..], &community[..]])?;

    let res = compare(&hole1, &hole2, &community);
    Ok(CompareResponseDto::from(&res))
}

fn probability(
    req: &ProbabilityRequest,
    config: &SimulationConfig,
) -> Result<EquityDto, ApiError> {
    let hole = parse_hole("hole", &req.hole)?;
    let community = parse_community("community", &req.community, &SIMULATION_BOARD_SIZES)?;
    ensure_distinct(&[&hole[..], &community[..]])?;

    let trials = match req.simulations.filter(|&n| n > 0) {
        None => config.default_trials,
        Some(n) => match u32::try_from(n) {
            Ok(trials) if trials <= config.max_trials => trials,
            _ => {
                return Err(ApiError::TooManyTrials {
                    requested: n,
                    max: config.max_trials,
                })
            }
        },
    };

    let num_players = if req.num_players < 2 {
        log::warn!("num_players={} clamped to 2", req.num_players);
        2
    } else {
        // Слишком большое значение всё равно отвергнет симулятор.
        usize::try_from(req.num_players).unwrap_or(usize::MAX)
    };

    let res = config.run(&hole, &community, num_players, trials)?;
    log::info!(
        "probability: {} players, {} trials → win {:.4} tie {:.4} loss {:.4}",
        num_players,
        res.trials,
        res.win_probability,
        res.tie_probability,
        res.loss_probability
    );

    Ok(EquityDto::from(res))
}
