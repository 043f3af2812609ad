//! Single-elimination draw construction and winner placement addressing.

use rand::seq::SliceRandom;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BracketError {
    #[error("at least 2 entrants are required, got {0}")]
    InsufficientEntrants(usize),
    #[error("no matches were generated")]
    NoMatchesGenerated,
}

/// A match slot in the draw before persistence. `None` teams are TBD until a
/// bye or a propagated winner fills them.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlannedMatch {
    pub round: u16,
    pub number: u16,
    pub team1: Option<i64>,
    pub team2: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    pub matches: Vec<PlannedMatch>,
    pub byes: usize,
}

/// Builds a complete single-elimination draw: shuffled entrants, byes off the
/// front straight into round 2, the rest paired into round-1 matches, then
/// half-sized placeholder rounds down to the final. Match numbers are a
/// single counter across all rounds, starting at 1.
pub fn generate<R: rand::Rng>(entrants: &[i64], rng: &mut R) -> Result<Draw, BracketError> {
    if entrants.len() < 2 {
        return Err(BracketError::InsufficientEntrants(entrants.len()));
    }

    let mut pool: Vec<i64> = entrants.to_vec();
    pool.shuffle(rng);

    let bracket_size = pool.len().next_power_of_two();
    let byes = bracket_size - pool.len();
    tracing::debug!(entrants = pool.len(), bracket_size, byes, "Planning draw");

    let bye_teams: Vec<i64> = pool.drain(..byes).collect();

    let mut matches = Vec::new();
    let mut number = 1u16;

    let mut remaining = pool.into_iter();
    while let (Some(team1), Some(team2)) = (remaining.next(), remaining.next()) {
        matches.push(PlannedMatch {
            round: 1,
            number,
            team1: Some(team1),
            team2: Some(team2),
        });
        number += 1;
    }
    let round_one_count = matches.len();

    // Byes skip round 1, so round 2 is sized for them plus round-1 winners.
    let round_two_count = (round_one_count + byes) / 2;
    let mut round_two: Vec<PlannedMatch> = (0..round_two_count)
        .map(|_| {
            let planned = PlannedMatch {
                round: 2,
                number,
                team1: None,
                team2: None,
            };
            number += 1;
            planned
        })
        .collect();
    for (position, team) in bye_teams.into_iter().enumerate() {
        let slot = &mut round_two[position / 2];
        if slot.team1.is_none() {
            slot.team1 = Some(team);
        } else {
            slot.team2 = Some(team);
        }
    }
    let mut previous_count = round_two.len();
    matches.extend(round_two);

    let mut round = 3u16;
    while previous_count > 1 {
        let count = previous_count / 2;
        for _ in 0..count {
            matches.push(PlannedMatch {
                round,
                number,
                team1: None,
                team2: None,
            });
            number += 1;
        }
        previous_count = count;
        round += 1;
    }

    if matches.is_empty() {
        return Err(BracketError::NoMatchesGenerated);
    }

    Ok(Draw { matches, byes })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Team1,
    Team2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotAddress {
    pub round: u16,
    /// 0-based match index within the round, ordered by match number.
    pub index: usize,
    pub slot: Slot,
}

/// Computes where a decided match's winner lands in the next round. Round-2
/// slots are laid out as [bye teams..., round-1 winners in match order], two
/// per match; every later round pairs winners directly.
pub fn winner_destination(
    round: u16,
    index_in_round: usize,
    round_two_byes: usize,
) -> SlotAddress {
    let offset = if round == 1 { round_two_byes } else { 0 };
    let position = offset + index_in_round;

    SlotAddress {
        round: round + 1,
        index: position / 2,
        slot: if position % 2 == 0 {
            Slot::Team1
        } else {
            Slot::Team2
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Filled,
    AlreadyRecorded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("slot already decided for team {existing}, refusing team {incoming}")]
pub struct SlotConflict {
    pub existing: i64,
    pub incoming: i64,
}

/// Decides whether a winner may take a slot (the winner column of its own
/// match, or its destination slot in the next round). Re-recording the same
/// team is a no-op; a different occupant is a conflict.
pub fn place_winner(occupant: Option<i64>, incoming: i64) -> Result<Placement, SlotConflict> {
    match occupant {
        None => Ok(Placement::Filled),
        Some(existing) if existing == incoming => Ok(Placement::AlreadyRecorded),
        Some(existing) => Err(SlotConflict { existing, incoming }),
    }
}
