use scoring::sequencer::{next_ball, BallCoordinate};
use scoring::{Delivery, ExtraType};

fn delivery(over: u16, ball: u16, extra: ExtraType) -> Delivery {
    Delivery {
        over,
        ball,
        batsman: 10,
        bowler: 20,
        runs: 0,
        extras: 0,
        wicket: false,
        dismissal: None,
        extra,
    }
}

#[test]
fn empty_inning_starts_at_first_ball() {
    assert_eq!(next_ball(None), BallCoordinate { over: 1, ball: 1 });
}

#[test]
fn legal_delivery_advances_within_over() {
    let last = delivery(3, 2, ExtraType::None);
    assert_eq!(next_ball(Some(&last)), BallCoordinate { over: 3, ball: 3 });
}

#[test]
fn sixth_legal_ball_rolls_into_next_over() {
    let last = delivery(7, 6, ExtraType::None);
    assert_eq!(next_ball(Some(&last)), BallCoordinate { over: 8, ball: 1 });
}

#[test]
fn wide_is_rebowled_at_same_coordinate() {
    let last = delivery(4, 5, ExtraType::Wide);
    assert_eq!(next_ball(Some(&last)), BallCoordinate { over: 4, ball: 5 });
}

#[test]
fn no_ball_is_rebowled_even_on_the_sixth_ball() {
    let last = delivery(9, 6, ExtraType::NoBall);
    assert_eq!(next_ball(Some(&last)), BallCoordinate { over: 9, ball: 6 });
}

#[test]
fn consecutive_illegal_deliveries_stay_on_one_coordinate() {
    // Two wides in a row both re-score at (2, 3); only insertion order tells
    // them apart.
    let first_wide = delivery(2, 3, ExtraType::Wide);
    let coordinate = next_ball(Some(&first_wide));
    assert_eq!(coordinate, BallCoordinate { over: 2, ball: 3 });

    let second_wide = delivery(coordinate.over, coordinate.ball, ExtraType::Wide);
    assert_eq!(next_ball(Some(&second_wide)), BallCoordinate { over: 2, ball: 3 });
}

#[test]
fn bye_extras_still_consume_the_ball() {
    let last = delivery(5, 4, ExtraType::Other);
    assert_eq!(next_ball(Some(&last)), BallCoordinate { over: 5, ball: 5 });
}
