use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use scoring::bracket::{
    generate, place_winner, winner_destination, BracketError, Placement, Slot, SlotConflict,
};

fn entrants(n: i64) -> Vec<i64> {
    (1..=n).collect()
}

#[test]
fn fewer_than_two_entrants_is_rejected() {
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(
        generate(&[], &mut rng),
        Err(BracketError::InsufficientEntrants(0))
    );
    assert_eq!(
        generate(&[7], &mut rng),
        Err(BracketError::InsufficientEntrants(1))
    );
}

#[test]
fn total_matches_is_always_entrants_minus_one() {
    let mut rng = StdRng::seed_from_u64(2);
    for (count, expected_byes) in [(2, 0), (3, 1), (5, 3), (8, 0)] {
        let draw = generate(&entrants(count), &mut rng).unwrap();
        assert_eq!(
            draw.matches.len(),
            count as usize - 1,
            "entrants: {}",
            count
        );
        assert_eq!(draw.byes, expected_byes, "entrants: {}", count);
    }
}

#[test]
fn match_numbers_are_a_single_counter_across_rounds() {
    let mut rng = StdRng::seed_from_u64(3);
    let draw = generate(&entrants(8), &mut rng).unwrap();

    let numbers: Vec<u16> = draw.matches.iter().map(|m| m.number).collect();
    assert_eq!(numbers, (1..=7).collect::<Vec<u16>>());

    let rounds: Vec<u16> = draw.matches.iter().map(|m| m.round).collect();
    assert_eq!(rounds, vec![1, 1, 1, 1, 2, 2, 3]);
}

#[test]
fn every_entrant_appears_exactly_once() {
    let mut rng = StdRng::seed_from_u64(4);
    let draw = generate(&entrants(6), &mut rng).unwrap();

    let mut seen: Vec<i64> = draw
        .matches
        .iter()
        .flat_map(|m| [m.team1, m.team2])
        .flatten()
        .collect();
    seen.sort_unstable();
    assert_eq!(seen, entrants(6));
}

#[test]
fn five_entrants_produce_one_opener_and_prefilled_round_two() {
    let mut rng = StdRng::seed_from_u64(5);
    let draw = generate(&entrants(5), &mut rng).unwrap();
    assert_eq!(draw.byes, 3);

    let round_one: Vec<_> = draw.matches.iter().filter(|m| m.round == 1).collect();
    let round_two: Vec<_> = draw.matches.iter().filter(|m| m.round == 2).collect();
    let round_three: Vec<_> = draw.matches.iter().filter(|m| m.round == 3).collect();
    assert_eq!(round_one.len(), 1);
    assert_eq!(round_two.len(), 2);
    assert_eq!(round_three.len(), 1);

    // Round 1 holds two real opponents.
    assert!(round_one[0].team1.is_some() && round_one[0].team2.is_some());

    // Byes fill round 2 left-to-right, team1 before team2, leaving exactly one
    // slot open for the round-1 winner.
    assert!(round_two[0].team1.is_some() && round_two[0].team2.is_some());
    assert!(round_two[1].team1.is_some());
    assert!(round_two[1].team2.is_none());

    // The final is an empty placeholder.
    assert!(round_three[0].team1.is_none() && round_three[0].team2.is_none());
}

#[test]
fn round_one_winner_lands_after_the_byes() {
    // Five entrants: three byes occupy round-2 positions 0..3, so the single
    // round-1 winner takes position 3 (second match, team2).
    let destination = winner_destination(1, 0, 3);
    assert_eq!(destination.round, 2);
    assert_eq!(destination.index, 1);
    assert_eq!(destination.slot, Slot::Team2);
}

#[test]
fn later_round_winners_pair_directly() {
    let first = winner_destination(2, 0, 3);
    assert_eq!((first.round, first.index, first.slot), (3, 0, Slot::Team1));

    let second = winner_destination(2, 1, 3);
    assert_eq!((second.round, second.index, second.slot), (3, 0, Slot::Team2));
}

#[test]
fn an_empty_slot_takes_the_winner() {
    assert_eq!(place_winner(None, 42), Ok(Placement::Filled));
}

#[test]
fn recording_the_same_winner_again_is_a_no_op() {
    assert_eq!(place_winner(Some(42), 42), Ok(Placement::AlreadyRecorded));
}

#[test]
fn a_different_winner_for_a_decided_slot_is_a_conflict() {
    assert_eq!(
        place_winner(Some(42), 7),
        Err(SlotConflict {
            existing: 42,
            incoming: 7,
        })
    );
}

#[test]
fn full_bracket_without_byes_pairs_winners_in_order() {
    for (index, expected_index, expected_slot) in [
        (0, 0, Slot::Team1),
        (1, 0, Slot::Team2),
        (2, 1, Slot::Team1),
        (3, 1, Slot::Team2),
    ] {
        let destination = winner_destination(1, index, 0);
        assert_eq!(destination.round, 2);
        assert_eq!(destination.index, expected_index);
        assert_eq!(destination.slot, expected_slot);
    }
}
