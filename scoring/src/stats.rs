use std::collections::HashMap;

use crate::Delivery;

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BattingFigures {
    pub runs: u32,
    pub balls_faced: u32,
    pub fours: u32,
    pub sixes: u32,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BowlingFigures {
    pub overs: f32,
    pub runs_conceded: u32,
    pub wickets: u32,
    deliveries: u32,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlayerFigures {
    pub batting: BattingFigures,
    pub bowling: BowlingFigures,
}

/// Recomputes every player's match figures from the complete delivery set.
/// Not an accumulation onto prior totals: folding twice yields the same
/// output, so stored rows can be overwritten on every invocation.
pub fn fold(deliveries: &[Delivery]) -> HashMap<i64, PlayerFigures> {
    let mut figures: HashMap<i64, PlayerFigures> = HashMap::new();

    for delivery in deliveries {
        let batting = &mut figures.entry(delivery.batsman).or_default().batting;
        batting.runs += delivery.runs as u32;
        batting.balls_faced += 1;
        match delivery.runs {
            4 => batting.fours += 1,
            6 => batting.sixes += 1,
            _ => {}
        }

        let bowling = &mut figures.entry(delivery.bowler).or_default().bowling;
        bowling.runs_conceded += delivery.runs as u32 + delivery.extras as u32;
        if delivery.wicket {
            bowling.wickets += 1;
        }
        bowling.deliveries += 1;
    }

    for player in figures.values_mut() {
        player.bowling.overs = crate::overs_from_delivery_count(player.bowling.deliveries as usize);
    }

    figures
}
