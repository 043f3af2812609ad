use crate::Delivery;

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InningTotals {
    pub total_runs: u32,
    pub total_wickets: u32,
    pub overs_played: f32,
}

/// Derives an inning's cached totals from its full delivery set; last write
/// wins.
pub fn summarize(deliveries: &[Delivery]) -> InningTotals {
    let mut total_runs = 0u32;
    let mut total_wickets = 0u32;

    for delivery in deliveries {
        total_runs += delivery.runs as u32 + delivery.extras as u32;
        if delivery.wicket {
            total_wickets += 1;
        }
    }

    InningTotals {
        total_runs,
        total_wickets,
        overs_played: crate::overs_from_delivery_count(deliveries.len()),
    }
}
