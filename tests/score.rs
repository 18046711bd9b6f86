//! Card identity and hand evaluation tests.

use std::cmp::Ordering;

use pokerhands::{
    CARDS_PER_SUIT, Card, CardError, Color, DECK_SIZE, Dealer, HandType, Rank, Score, ScoreError,
    Suit, evaluate,
};

fn rank(value: u8) -> Rank {
    Rank::new(value).unwrap()
}

fn card(suit: Suit, value: u8) -> Card {
    Card::new(suit, rank(value))
}

fn ranks(values: &[u8]) -> Vec<Rank> {
    values.iter().map(|&value| rank(value)).collect()
}

/// Builds an off-suit hand from face values, cycling through the suits.
fn hand(values: &[u8]) -> Vec<Card> {
    values
        .iter()
        .enumerate()
        .map(|(index, &value)| card(Suit::ALL[index % 4], value))
        .collect()
}

fn suited(suit: Suit, values: &[u8]) -> Vec<Card> {
    values.iter().map(|&value| card(suit, value)).collect()
}

#[test]
fn identity_maps_to_rank_and_suit() {
    let expectations = [
        (0, Suit::Clubs, Rank::ACE),
        (12, Suit::Clubs, Rank::KING),
        (13, Suit::Hearts, Rank::ACE),
        (30, Suit::Spades, rank(5)),
        (51, Suit::Diamonds, Rank::KING),
    ];

    for (id, suit, rank) in expectations {
        let card = Card::from_id(id).unwrap();
        assert_eq!(card.id(), id);
        assert_eq!(card.suit(), suit);
        assert_eq!(card.rank(), rank);
    }
}

#[test]
fn every_identity_round_trips() {
    for id in 0..DECK_SIZE as u8 {
        let card = Card::from_id(id).unwrap();
        let value = card.rank().value();
        assert!((1..=CARDS_PER_SUIT).contains(&value));
        assert_eq!(Card::new(card.suit(), card.rank()), card);
    }
}

#[test]
fn out_of_range_identity_is_rejected() {
    assert_eq!(Card::from_id(52), Err(CardError::InvalidIdentity(52)));
    assert_eq!(Card::try_from(255_u8), Err(CardError::InvalidIdentity(255)));
    assert_eq!(Rank::new(0), None);
    assert_eq!(Rank::new(14), None);
}

#[test]
fn labels_and_display() {
    assert_eq!(Rank::ACE.label(), "A");
    assert_eq!(rank(10).label(), "10");
    assert_eq!(Rank::JACK.label(), "J");
    assert_eq!(Rank::QUEEN.label(), "Q");
    assert_eq!(Rank::KING.to_string(), "K");

    let labels: Vec<_> = (1..=CARDS_PER_SUIT).map(|value| rank(value).label()).collect();
    assert_eq!(
        labels,
        ["A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K"]
    );

    assert_eq!(card(Suit::Hearts, 1).to_string(), "A♥");
    assert_eq!(card(Suit::Clubs, 10).to_string(), "10♣");
    assert_eq!(card(Suit::Spades, 12).to_string(), "Q♠");
    assert_eq!(card(Suit::Diamonds, 7).to_string(), "7♦");
}

#[test]
fn suit_colors() {
    assert_eq!(Suit::Clubs.color(), Color::Black);
    assert_eq!(Suit::Spades.color(), Color::Black);
    assert_eq!(Suit::Hearts.color(), Color::Red);
    assert_eq!(Suit::Diamonds.color(), Color::Red);
}

#[test]
fn ace_ranks_above_king() {
    assert!(Rank::ACE > Rank::KING);
    assert!(Rank::KING > Rank::QUEEN);
    assert!(rank(2) < rank(3));
}

#[test]
fn random_cards_stay_in_range_and_replay() {
    let mut dealer = Dealer::new(3);
    let mut replay = Dealer::new(3);
    for _ in 0..500 {
        let card = Card::random(&mut dealer);
        assert!(usize::from(card.id()) < DECK_SIZE);
        assert_eq!(card, replay.deal());
    }
}

#[test_log::test]
fn broadway_is_an_ace_high_straight() {
    let score = evaluate(&hand(&[10, 11, 12, 13, 1]));
    assert_eq!(score, Score::Straight(Rank::ACE));
    assert_eq!(score.describe(), "Straight with A high");

    let score = evaluate(&suited(Suit::Hearts, &[1, 13, 12, 11, 10]));
    assert_eq!(score, Score::StraightFlush(Rank::ACE));
    assert_eq!(score.describe(), "Straight flush with A high");
}

#[test]
fn wheel_is_five_high() {
    let score = evaluate(&hand(&[1, 2, 3, 4, 5]));
    assert_eq!(score, Score::Straight(rank(5)));
    assert!(score < evaluate(&hand(&[2, 3, 4, 5, 6])));
}

#[test]
fn standard_straight() {
    let score = evaluate(&hand(&[6, 4, 8, 5, 7]));
    assert_eq!(score.hand_type(), HandType::Straight);
    assert_eq!(score.tiebreakers(), ranks(&[8]));
}

#[test]
fn broadway_beats_king_high_straight() {
    let broadway = evaluate(&hand(&[10, 11, 12, 13, 1]));
    let king_high = evaluate(&hand(&[9, 10, 11, 12, 13]));
    assert_eq!(broadway.compare(&king_high), Ordering::Greater);
}

#[test]
fn near_wheel_is_not_a_straight() {
    let score = evaluate(&hand(&[1, 2, 3, 4, 13]));
    assert_eq!(score, Score::HighCard(ranks(&[1, 13, 4, 3, 2])));
}

#[test]
fn full_house_over_three_of_a_kind() {
    let score = evaluate(&hand(&[9, 2, 9, 2, 9]));
    assert_eq!(
        score,
        Score::FullHouse {
            triple: rank(9),
            pair: rank(2)
        }
    );
    assert_eq!(score.tiebreakers(), ranks(&[9, 2]));
    assert_eq!(score.describe(), "Full house of 9 over 2");
}

#[test]
fn full_house_takes_the_higher_pair() {
    let score = evaluate(&hand(&[9, 9, 9, 2, 2, 13, 13]));
    assert_eq!(
        score,
        Score::FullHouse {
            triple: rank(9),
            pair: Rank::KING
        }
    );
}

#[test]
fn two_triples_use_the_higher_triple() {
    let score = evaluate(&hand(&[4, 4, 4, 9, 9, 9, 13]));
    assert_eq!(
        score,
        Score::ThreeOfAKind {
            triple: rank(9),
            kickers: vec![Rank::KING]
        }
    );
}

#[test]
fn three_pairs_fall_through_to_high_card() {
    let score = evaluate(&hand(&[9, 9, 4, 4, 2, 2]));
    assert_eq!(score, Score::HighCard(ranks(&[9, 9, 4, 4, 2, 2])));
}

#[test]
fn six_of_a_kind_is_high_card() {
    let cards = vec![card(Suit::Spades, 7); 6];
    assert_eq!(evaluate(&cards), Score::HighCard(ranks(&[7; 6])));
}

#[test]
fn five_of_a_kind_from_repeated_cards() {
    let cards = vec![card(Suit::Spades, 7); 5];
    let score = evaluate(&cards);
    assert_eq!(score, Score::FiveOfAKind(rank(7)));
    assert_eq!(score.describe(), "Five of a kind of 7");
}

#[test]
fn four_of_a_kind_keeps_kicker() {
    let score = evaluate(&hand(&[3, 3, 1, 3, 3]));
    assert_eq!(
        score,
        Score::FourOfAKind {
            quad: rank(3),
            kickers: vec![Rank::ACE]
        }
    );
    assert_eq!(score.describe(), "Four of a kind of 3");
}

#[test]
fn flush_lists_ranks_ace_high() {
    let score = evaluate(&suited(Suit::Diamonds, &[3, 1, 9, 11, 7]));
    assert_eq!(score, Score::Flush([Rank::ACE, Rank::JACK, rank(9), rank(7), rank(3)]));
    assert_eq!(score.describe(), "Flush (A high)");
}

#[test]
fn flush_and_straight_need_exactly_five_cards() {
    let six_suited = suited(Suit::Clubs, &[2, 3, 4, 5, 6, 7]);
    assert_eq!(evaluate(&six_suited).hand_type(), HandType::HighCard);

    let four_suited = suited(Suit::Clubs, &[2, 3, 4, 5]);
    assert_eq!(evaluate(&four_suited).hand_type(), HandType::HighCard);
}

#[test]
fn three_of_a_kind_sorts_kickers() {
    let score = evaluate(&hand(&[8, 2, 8, 1, 8]));
    assert_eq!(
        score,
        Score::ThreeOfAKind {
            triple: rank(8),
            kickers: ranks(&[1, 2])
        }
    );
    assert_eq!(score.describe(), "Three of a kind of 8");
}

#[test]
fn two_pair_orders_pairs() {
    let score = evaluate(&hand(&[4, 12, 7, 4, 12]));
    assert_eq!(
        score,
        Score::TwoPair {
            high: Rank::QUEEN,
            low: rank(4),
            kickers: ranks(&[7])
        }
    );
    assert_eq!(score.describe(), "Two pair of Q and 4");
}

#[test]
fn one_pair_with_kickers() {
    let score = evaluate(&hand(&[5, 13, 5, 2, 10]));
    assert_eq!(score.tiebreakers(), ranks(&[5, 13, 10, 2]));
    assert_eq!(score.describe(), "One pair of 5");
}

#[test]
fn high_card_descriptions() {
    let score = evaluate(&hand(&[12, 3, 8]));
    assert_eq!(score, Score::HighCard(ranks(&[12, 8, 3])));
    assert_eq!(score.describe(), "Nothing (Q high)");

    assert_eq!(evaluate(&[]), Score::HighCard(Vec::new()));
    assert_eq!(evaluate(&[]).describe(), "Nothing");
}

#[test]
fn evaluation_ignores_card_order() {
    let cards = hand(&[11, 4, 11, 9, 4]);
    let mut reversed = cards.clone();
    reversed.reverse();
    assert_eq!(evaluate(&cards), evaluate(&reversed));
}

#[test]
fn hand_type_priority_dominates_tiebreakers() {
    // Each hand is the weakest of its type and still beats the strongest of the next.
    let weakest_first = [
        evaluate(&hand(&[2, 2, 2, 2, 2])),
        evaluate(&suited(Suit::Hearts, &[1, 2, 3, 4, 5])),
        evaluate(&hand(&[2, 2, 2, 2, 3])),
        evaluate(&hand(&[2, 2, 2, 3, 3])),
        evaluate(&suited(Suit::Clubs, &[2, 3, 4, 5, 7])),
        evaluate(&hand(&[1, 2, 3, 4, 5])),
        evaluate(&hand(&[2, 2, 2, 3, 4])),
        evaluate(&hand(&[2, 2, 3, 3, 4])),
        evaluate(&hand(&[2, 2, 3, 4, 5])),
    ];
    let strongest_next = [
        Score::StraightFlush(Rank::ACE),
        Score::new(HandType::FourOfAKind, ranks(&[1, 13])).unwrap(),
        Score::new(HandType::FullHouse, ranks(&[1, 13])).unwrap(),
        Score::new(HandType::Flush, ranks(&[1, 13, 12, 11, 9])).unwrap(),
        Score::Straight(Rank::ACE),
        Score::new(HandType::ThreeOfAKind, ranks(&[1, 13, 12])).unwrap(),
        Score::new(HandType::TwoPair, ranks(&[1, 13, 12])).unwrap(),
        Score::new(HandType::OnePair, ranks(&[1, 13, 12, 11])).unwrap(),
        Score::HighCard(ranks(&[1, 13, 12, 11, 9])),
    ];

    for (weak, strong) in weakest_first.iter().zip(&strongest_next) {
        assert_eq!(weak.compare(strong), Ordering::Greater, "{weak} vs {strong}");
        assert_eq!(strong.compare(weak), Ordering::Less, "{strong} vs {weak}");
        assert!(weak.hand_type().priority() > strong.hand_type().priority());
    }
    assert_eq!(HandType::FiveOfAKind.priority(), 9);
    assert_eq!(HandType::HighCard.priority(), 0);
}

#[test]
fn tiebreakers_compare_ace_high() {
    let aces = evaluate(&hand(&[1, 1, 2, 3, 4]));
    let kings = evaluate(&hand(&[13, 13, 12, 11, 10]));
    assert_eq!(aces.compare(&kings), Ordering::Greater);

    let kicker_ace = evaluate(&hand(&[9, 9, 1, 3, 2]));
    let kicker_king = evaluate(&hand(&[9, 9, 13, 12, 11]));
    assert_eq!(kicker_ace.compare(&kicker_king), Ordering::Greater);
}

#[test]
fn equal_hands_compare_equal() {
    let a = evaluate(&hand(&[1, 13, 9, 5, 2]));
    let b = evaluate(&[
        card(Suit::Spades, 2),
        card(Suit::Hearts, 5),
        card(Suit::Clubs, 9),
        card(Suit::Diamonds, 13),
        card(Suit::Hearts, 1),
    ]);
    assert_eq!(a.compare(&b), Ordering::Equal);
    assert_eq!(a, b);
}

#[test]
fn shorter_tiebreakers_compare_on_common_prefix() {
    let short = Score::HighCard(ranks(&[13]));
    let long = Score::HighCard(ranks(&[13, 5]));
    assert_eq!(short.compare(&long), Ordering::Equal);
    assert_eq!(long.compare(&short), Ordering::Equal);

    // Ord still tells them apart without contradicting compare.
    assert!(long > short);
    assert!(Score::HighCard(ranks(&[13, 2])) > short);
    assert!(Score::HighCard(ranks(&[1])) > long);
}

#[test]
fn flat_constructor_checks_arity() {
    let cases: [(HandType, &[u8], bool); 16] = [
        (HandType::FiveOfAKind, &[4], true),
        (HandType::FiveOfAKind, &[4, 4], false),
        (HandType::StraightFlush, &[], false),
        (HandType::FourOfAKind, &[4], true),
        (HandType::FourOfAKind, &[], false),
        (HandType::FullHouse, &[4, 2], true),
        (HandType::FullHouse, &[4, 2, 3], false),
        (HandType::Flush, &[1, 9, 7, 5, 3], true),
        (HandType::Flush, &[1, 9, 7, 5], false),
        (HandType::Straight, &[9], true),
        (HandType::ThreeOfAKind, &[], false),
        (HandType::TwoPair, &[4, 2], true),
        (HandType::TwoPair, &[4], false),
        (HandType::OnePair, &[4, 13, 12], true),
        (HandType::HighCard, &[], true),
        (HandType::HighCard, &[1, 2, 3, 4, 5, 6], true),
    ];

    for (hand_type, values, valid) in cases {
        let tiebreakers = ranks(values);
        match Score::new(hand_type, tiebreakers.clone()) {
            Ok(score) => {
                assert!(valid, "{hand_type:?} accepted {values:?}");
                assert_eq!(score.hand_type(), hand_type);
                assert_eq!(score.tiebreakers(), tiebreakers);
            }
            Err(err) => {
                assert!(!valid, "{hand_type:?} rejected {values:?}");
                assert_eq!(
                    err,
                    ScoreError::InvalidScore {
                        hand_type,
                        tiebreakers
                    }
                );
            }
        }
    }
}

#[test]
fn evaluated_scores_rebuild_from_flat_parts() {
    let hands = [
        hand(&[9, 2, 9, 2, 9]),
        hand(&[4, 12, 7, 4, 12]),
        suited(Suit::Hearts, &[2, 6, 9, 11, 13]),
        hand(&[1, 1]),
        hand(&[]),
    ];

    for cards in hands {
        let score = evaluate(&cards);
        let rebuilt = Score::new(score.hand_type(), score.tiebreakers()).unwrap();
        assert_eq!(rebuilt, score);
    }
}
