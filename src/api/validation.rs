//! Проверки на границе: формат карт, количество, дубликаты.
//!
//! Ядро (eval / equity) считает вход уже проверенным.

use std::collections::HashSet;

use crate::domain::card::Card;

use super::errors::ApiError;

/// Разобрать список карт из внешнего формата.
pub fn parse_cards(raw: &[String]) -> Result<Vec<Card>, ApiError> {
    raw.iter()
        .map(|s| s.parse::<Card>().map_err(ApiError::from))
        .collect()
}

/// Ровно 2 карманные карты.
pub fn parse_hole(field: &str, raw: &[String]) -> Result<[Card; 2], ApiError> {
    match parse_cards(raw)?.as_slice() {
        &[a, b] => Ok([a, b]),
        other => Err(ApiError::InvalidCardCount {
            field: field.to_string(),
            expected: "2".to_string(),
            got: other.len(),
        }),
    }
}

/// Общие карты: допустимые размеры задаёт вызывающий.
pub fn parse_community(
    field: &str,
    raw: &[String],
    allowed: &[usize],
) -> Result<Vec<Card>, ApiError> {
    if !allowed.contains(&raw.len()) {
        let expected = allowed
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("|");
        return Err(ApiError::InvalidCardCount {
            field: field.to_string(),
            expected,
            got: raw.len(),
        });
    }
    parse_cards(raw)
}

/// Ни одна карта не повторяется во всех переданных группах вместе.
pub fn ensure_distinct(groups: &[&[Card]]) -> Result<(), ApiError> {
    let mut seen = HashSet::new();
    for card in groups.iter().flat_map(|g| g.iter()) {
        if !seen.insert(*card) {
            return Err(ApiError::DuplicateCard(card.to_string()));
        }
    }
    Ok(())
}
