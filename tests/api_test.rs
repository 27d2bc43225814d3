use poker_calc::{
    api::{
        dto::{BestHandRequest, CompareRequest, EquityDto, HandEvalDto, ProbabilityRequest},
        errors::ApiError,
        queries::{handle_json, handle_query, Query, QueryResponse},
        validation::{ensure_distinct, parse_community, parse_hole},
    },
    domain::card::Card,
    equity::SimulationConfig,
};

/// Утилита: ["HA", "HK", ...] из строки.
fn strs(s: &str) -> Vec<String> {
    s.split_whitespace().map(str::to_string).collect()
}

/// Конфиг с фиксированным seed: результаты запросов воспроизводимы.
fn seeded_config() -> SimulationConfig {
    SimulationConfig {
        default_trials: 2_000,
        max_trials: 50_000,
        workers: 1,
        seed: Some(7),
    }
}

fn best_hand(hole: &str, community: &str) -> Result<HandEvalDto, ApiError> {
    let query = Query::BestHand(BestHandRequest {
        hole: strs(hole),
        community: strs(community),
    });
    match handle_query(query, &seeded_config())? {
        QueryResponse::BestHand(dto) => Ok(dto),
        other => panic!("unexpected response: {other:?}"),
    }
}

fn probability(
    hole: &str,
    community: &str,
    num_players: i64,
    simulations: Option<i64>,
) -> Result<EquityDto, ApiError> {
    let query = Query::Probability(ProbabilityRequest {
        hole: strs(hole),
        community: strs(community),
        num_players,
        simulations,
    });
    match handle_query(query, &seeded_config())? {
        QueryResponse::Probability(dto) => Ok(dto),
        other => panic!("unexpected response: {other:?}"),
    }
}

// ----------------------
// best hand
// ----------------------

#[test]
fn best_hand_royal_flush() {
    let dto = best_hand("HA HK", "HQ HJ HT H9 S2").unwrap();

    assert_eq!(dto.rank_name, "Royal Flush");
    assert_eq!(dto.rank, 9);
    assert_eq!(dto.best_cards, strs("HA HK HQ HJ HT"));
    assert_eq!(dto.score >> 20, 9);
}

#[test]
fn best_hand_on_flop_uses_all_five_cards() {
    let dto = best_hand("C5 D6", "H7 S8 C9").unwrap();

    assert_eq!(dto.rank_name, "Straight");
    assert_eq!(dto.rank, 4);
    assert_eq!(dto.best_cards, strs("C9 S8 H7 D6 C5"));
}

#[test]
fn best_hand_rejects_bad_input() {
    assert!(matches!(
        best_hand("HA XX", "HQ HJ HT"),
        Err(ApiError::InvalidCard(_))
    ));
    assert!(matches!(
        best_hand("HA", "HQ HJ HT"),
        Err(ApiError::InvalidCardCount { got: 1, .. })
    ));
    assert!(matches!(
        best_hand("HA HK", "HQ HJ"),
        Err(ApiError::InvalidCardCount { got: 2, .. })
    ));
    // Без борда лучшую руку не посчитать.
    assert!(matches!(
        best_hand("HA HK", ""),
        Err(ApiError::InvalidCardCount { got: 0, .. })
    ));
    assert_eq!(
        best_hand("HA HK", "HA HJ HT"),
        Err(ApiError::DuplicateCard("HA".to_string()))
    );
}

// ----------------------
// compare
// ----------------------

#[test]
fn compare_reports_winner_codes() {
    let query = Query::Compare(CompareRequest {
        player1_hole: strs("H2 H3"),
        player2_hole: strs("S5 D6"),
        community: strs("H4 H5 H6 C7 D8"),
    });

    match handle_query(query, &seeded_config()).unwrap() {
        QueryResponse::Compare(dto) => {
            assert_eq!(dto.winner, 1);
            assert_eq!(dto.player1_eval.rank_name, "Straight Flush");
            assert_eq!(dto.player2_eval.rank_name, "Straight");
        }
        other => panic!("unexpected response: {other:?}"),
    }

    let tie = Query::Compare(CompareRequest {
        player1_hole: strs("S2 D3"),
        player2_hole: strs("C2 H3"),
        community: strs("HA HK HQ HJ HT"),
    });
    match handle_query(tie, &seeded_config()).unwrap() {
        QueryResponse::Compare(dto) => assert_eq!(dto.winner, 0),
        other => panic!("unexpected response: {other:?}"),
    }
}

#[test]
fn compare_rejects_shared_cards_between_players() {
    let query = Query::Compare(CompareRequest {
        player1_hole: strs("HA HK"),
        player2_hole: strs("HA D5"),
        community: strs("C2 C3 C4"),
    });

    assert_eq!(
        handle_query(query, &seeded_config()),
        Err(ApiError::DuplicateCard("HA".to_string()))
    );
}

// ----------------------
// probability
// ----------------------

#[test]
fn probability_uses_default_trials_when_missing() {
    let dto = probability("HA SA", "", 2, None).unwrap();
    assert_eq!(dto.trials, 2_000);

    let zero = probability("HA SA", "", 2, Some(0)).unwrap();
    assert_eq!(zero.trials, 2_000);

    let explicit = probability("HA SA", "", 2, Some(1_500)).unwrap();
    assert_eq!(explicit.trials, 1_500);

    let sum = dto.win_probability + dto.tie_probability + dto.loss_probability;
    assert!((sum - 1.0).abs() < 1e-9);
    assert!(dto.win_probability > 0.75);
}

#[test]
fn probability_is_reproducible_with_seeded_config() {
    let a = probability("HK DQ", "C2 D7 HJ", 3, Some(3_000)).unwrap();
    let b = probability("HK DQ", "C2 D7 HJ", 3, Some(3_000)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn probability_rejects_too_many_trials() {
    assert_eq!(
        probability("HA SA", "", 2, Some(50_001)),
        Err(ApiError::TooManyTrials {
            requested: 50_001,
            max: 50_000
        })
    );
}

#[test]
fn probability_clamps_lonely_hero_to_heads_up() {
    let clamped = probability("HA SA", "", 1, Some(1_000)).unwrap();
    let heads_up = probability("HA SA", "", 2, Some(1_000)).unwrap();
    assert_eq!(clamped, heads_up);

    let zero = probability("HA SA", "", 0, Some(1_000)).unwrap();
    assert_eq!(zero, heads_up);
}

#[test]
fn probability_rejects_bad_board_and_crowded_table() {
    assert!(matches!(
        probability("HA SA", "C2 C3", 2, None),
        Err(ApiError::InvalidCardCount { got: 2, .. })
    ));
    assert!(matches!(
        probability("HA SA", "", 24, Some(10)),
        Err(ApiError::Simulation(_))
    ));
    assert!(probability("HA SA", "", 23, Some(10)).is_ok());
    assert_eq!(
        probability("HA SA", "SA C3 C4", 2, None),
        Err(ApiError::DuplicateCard("SA".to_string()))
    );
}

// ----------------------
// JSON
// ----------------------

#[test]
fn handle_json_runs_best_hand_query() {
    let json = r#"{"BestHand":{"hole":["HA","HK"],"community":["HQ","HJ","HT"]}}"#;

    match handle_json(json, &seeded_config()).unwrap() {
        QueryResponse::BestHand(dto) => assert_eq!(dto.rank_name, "Royal Flush"),
        other => panic!("unexpected response: {other:?}"),
    }
}

#[test]
fn handle_json_probability_with_optional_fields() {
    let json = r#"{"Probability":{"hole":["HA","SA"],"num_players":3}}"#;

    match handle_json(json, &seeded_config()).unwrap() {
        QueryResponse::Probability(dto) => assert_eq!(dto.trials, 2_000),
        other => panic!("unexpected response: {other:?}"),
    }
}

#[test]
fn handle_json_probability_is_lenient_like_the_http_service() {
    let config = seeded_config();
    let expect_heads_up = |json: &str| match handle_json(json, &config).unwrap() {
        QueryResponse::Probability(dto) => dto,
        other => panic!("unexpected response: {other:?}"),
    };

    let heads_up = expect_heads_up(r#"{"Probability":{"hole":["HA","SA"],"num_players":2}}"#);

    // Нет num_players → 2 игрока.
    let missing = expect_heads_up(r#"{"Probability":{"hole":["HA","SA"],"community":[]}}"#);
    assert_eq!(missing, heads_up);

    // Отрицательное число игроков → 2.
    let negative = expect_heads_up(r#"{"Probability":{"hole":["HA","SA"],"num_players":-1}}"#);
    assert_eq!(negative, heads_up);

    // Отрицательное число прогонов → default_trials.
    let sims = expect_heads_up(
        r#"{"Probability":{"hole":["HA","SA"],"num_players":2,"simulations":-5}}"#,
    );
    assert_eq!(sims.trials, 2_000);
    assert_eq!(sims, heads_up);
}

#[test]
fn probability_rejects_trials_beyond_u32() {
    assert_eq!(
        probability("HA SA", "", 2, Some(i64::from(u32::MAX) + 1)),
        Err(ApiError::TooManyTrials {
            requested: i64::from(u32::MAX) + 1,
            max: 50_000
        })
    );
}

#[test]
fn handle_json_rejects_garbage() {
    assert!(matches!(
        handle_json("{ nope", &seeded_config()),
        Err(ApiError::BadRequest(_))
    ));
    assert!(matches!(
        handle_json(r#"{"Unknown":{}}"#, &seeded_config()),
        Err(ApiError::BadRequest(_))
    ));
}

#[test]
fn hand_eval_dto_json_keys() {
    let dto = best_hand("HA HK", "HQ HJ HT").unwrap();
    let value = serde_json::to_value(&dto).unwrap();

    assert_eq!(value["rank_name"], "Royal Flush");
    assert_eq!(value["rank"], 9);
    assert_eq!(value["best_cards"][0], "HA");
    assert!(value["score"].is_u64());
}

#[test]
fn api_error_serde_roundtrip() {
    let err = ApiError::InvalidCardCount {
        field: "hole".to_string(),
        expected: "2".to_string(),
        got: 3,
    };
    let json = serde_json::to_string(&err).unwrap();
    let back: ApiError = serde_json::from_str(&json).unwrap();

    assert_eq!(back, err);
    assert_eq!(err.to_string(), "hole must have 2 cards, got 3");
}

// ----------------------
// validation
// ----------------------

#[test]
fn validation_helpers() {
    let hole = parse_hole("hole", &strs("HA KD")).unwrap_err();
    assert!(matches!(hole, ApiError::InvalidCard(_)));

    let [a, b] = parse_hole("hole", &strs("HA DK")).unwrap();
    assert_eq!(a, "HA".parse::<Card>().unwrap());
    assert_eq!(b, "DK".parse::<Card>().unwrap());

    let err = parse_community("community", &strs("C2"), &[0, 3, 4, 5]).unwrap_err();
    assert_eq!(
        err,
        ApiError::InvalidCardCount {
            field: "community".to_string(),
            expected: "0|3|4|5".to_string(),
            got: 1
        }
    );

    let x: Card = "C2".parse().unwrap();
    let y: Card = "C3".parse().unwrap();
    assert!(ensure_distinct(&[&[x][..], &[y][..]]).is_ok());
    assert_eq!(
        ensure_distinct(&[&[x, y][..], &[y][..]]),
        Err(ApiError::DuplicateCard("C3".to_string()))
    );
}
