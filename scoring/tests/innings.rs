use pretty_assertions::assert_eq;
use scoring::innings::{summarize, InningTotals};
use scoring::{Delivery, DismissalType, ExtraType};

fn legal(over: u16, ball: u16, runs: u16) -> Delivery {
    Delivery {
        over,
        ball,
        batsman: 1,
        bowler: 2,
        runs,
        extras: 0,
        wicket: false,
        dismissal: None,
        extra: ExtraType::None,
    }
}

#[test]
fn empty_inning_is_all_zero() {
    assert_eq!(
        summarize(&[]),
        InningTotals {
            total_runs: 0,
            total_wickets: 0,
            overs_played: 0.0,
        }
    );
}

#[test]
fn one_full_over() {
    let deliveries: Vec<_> = [1, 4, 0, 6, 2, 1]
        .into_iter()
        .enumerate()
        .map(|(i, runs)| legal(1, i as u16 + 1, runs))
        .collect();

    assert_eq!(
        summarize(&deliveries),
        InningTotals {
            total_runs: 14,
            total_wickets: 0,
            overs_played: 1.0,
        }
    );
}

#[test]
fn extras_count_toward_the_total() {
    let mut wide = legal(1, 1, 0);
    wide.extras = 1;
    wide.extra = ExtraType::Wide;

    let deliveries = vec![wide, legal(1, 1, 3)];
    let totals = summarize(&deliveries);
    assert_eq!(totals.total_runs, 4);
}

#[test]
fn wickets_are_summed() {
    let mut out = legal(1, 2, 0);
    out.wicket = true;
    out.dismissal = Some(DismissalType::Bowled);

    let totals = summarize(&[legal(1, 1, 1), out]);
    assert_eq!(totals.total_wickets, 1);
}

#[test]
fn overs_played_counts_illegal_deliveries_too() {
    // Display figure: a wide still bumps the delivery count, so 7 recorded
    // deliveries show as 1.2 overs even though only one legal over was bowled.
    let mut deliveries: Vec<_> = (1..=6).map(|b| legal(1, b, 0)).collect();
    let mut wide = legal(1, 3, 0);
    wide.extras = 1;
    wide.extra = ExtraType::Wide;
    deliveries.insert(2, wide);

    assert_eq!(summarize(&deliveries).overs_played, 1.2);
}

#[test]
fn partial_over_rounds_to_one_decimal() {
    let deliveries: Vec<_> = (1..=4).map(|b| legal(1, b, 0)).collect();
    assert_eq!(summarize(&deliveries).overs_played, 0.7);
}
