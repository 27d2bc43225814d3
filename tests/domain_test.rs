//! Интеграционные тесты для доменной модели (crate::domain).

use std::collections::HashSet;

use poker_calc::domain::*;

/// Все 52 карты: parse(to_string(card)) == card и текст совпадает посимвольно.
#[test]
fn card_text_round_trips_for_whole_deck() {
    for card in Deck::standard_52().cards {
        let text = card.to_string();
        assert_eq!(text.len(), 2);

        let parsed: Card = text.parse().unwrap();
        assert_eq!(parsed, card);
        assert_eq!(parsed.to_string(), text);
    }
}

#[test]
fn card_parse_known_codes() {
    let c: Card = "HA".parse().unwrap();
    assert_eq!(c, Card::new(Suit::Hearts, Rank::Ace));

    let c: Card = "DT".parse().unwrap();
    assert_eq!(c, Card::new(Suit::Diamonds, Rank::Ten));

    let c: Card = "C7".parse().unwrap();
    assert_eq!(c.suit, Suit::Clubs);
    assert_eq!(c.rank.value(), 7);

    let c: Card = "S2".parse().unwrap();
    assert_eq!(c, Card::new(Suit::Spades, Rank::Two));
}

#[test]
fn card_parse_rejects_bad_length() {
    assert!(matches!(
        "".parse::<Card>(),
        Err(CardParseError::InvalidLength(_))
    ));
    assert!(matches!(
        "H".parse::<Card>(),
        Err(CardParseError::InvalidLength(_))
    ));
    assert!(matches!(
        "HAK".parse::<Card>(),
        Err(CardParseError::InvalidLength(_))
    ));
    assert!(matches!(
        "H10".parse::<Card>(),
        Err(CardParseError::InvalidLength(_))
    ));
}

#[test]
fn card_parse_rejects_bad_suit_and_rank() {
    assert_eq!(
        "XA".parse::<Card>(),
        Err(CardParseError::InvalidSuit {
            suit: 'X',
            text: "XA".to_string()
        })
    );
    assert_eq!(
        "H1".parse::<Card>(),
        Err(CardParseError::InvalidRank {
            rank: '1',
            text: "H1".to_string()
        })
    );

    // Старый формат "ранг+масть" не принимаем.
    assert!("AH".parse::<Card>().is_err());
    // Только заглавные: иначе не будет точного round-trip.
    assert!("ha".parse::<Card>().is_err());
    assert!("Ht".parse::<Card>().is_err());
}

#[test]
fn parse_and_format_card_lists() {
    let cards = parse_cards("HA  C2 D3\tS4 H5").unwrap();
    assert_eq!(cards.len(), 5);
    assert_eq!(format_cards(&cards), "HA C2 D3 S4 H5");

    assert!(parse_cards("HA ZZ").is_err());
    assert!(parse_cards("").unwrap().is_empty());
}

#[test]
fn rank_values_and_symbols() {
    assert_eq!(Rank::Two.value(), 2);
    assert_eq!(Rank::Jack.value(), 11);
    assert_eq!(Rank::Ace.value(), 14);

    for rank in Rank::ALL {
        assert_eq!(Rank::from_value(rank.value()), Some(rank));
    }
    assert_eq!(Rank::from_value(0), None);
    assert_eq!(Rank::from_value(1), None);
    assert_eq!(Rank::from_value(15), None);

    assert_eq!(Rank::Ten.symbol(), 'T');
    assert_eq!(Rank::Nine.symbol(), '9');
    assert!(Rank::Ace > Rank::King);
}

#[test]
fn standard_deck_has_52_unique_cards() {
    let deck = Deck::standard_52();
    assert_eq!(deck.len(), DECK_SIZE);

    let unique: HashSet<Card> = deck.cards.iter().copied().collect();
    assert_eq!(unique.len(), 52);

    for suit in Suit::ALL {
        let n = deck.cards.iter().filter(|c| c.suit == suit).count();
        assert_eq!(n, 13);
    }
}

#[test]
fn deck_without_excludes_known_cards() {
    let known = parse_cards("HA SA C7").unwrap();
    let deck = Deck::without(&known);

    assert_eq!(deck.len(), 49);
    for c in &known {
        assert!(!deck.contains(c));
    }
    assert!(deck.contains(&"DA".parse().unwrap()));
}

#[test]
fn winner_codes_and_swap() {
    assert_eq!(Winner::Tie.code(), 0);
    assert_eq!(Winner::Player1.code(), 1);
    assert_eq!(Winner::Player2.code(), 2);

    assert_eq!(Winner::Player1.swapped(), Winner::Player2);
    assert_eq!(Winner::Player2.swapped(), Winner::Player1);
    assert_eq!(Winner::Tie.swapped(), Winner::Tie);
}
