//! Match lifecycle: toss -> team_selection -> inning_one -> inning_two -> finished.
//! Transitions are linear, one step at a time, never backwards.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPhase {
    Toss,
    TeamSelection,
    InningOne,
    InningTwo,
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PhaseError {
    #[error("unknown phase '{0}'")]
    Unknown(String),
    #[error("match is already in phase {0}")]
    AlreadyInPhase(MatchPhase),
    #[error("cannot move backwards from {from} to {requested}")]
    Backward { from: MatchPhase, requested: MatchPhase },
    #[error("cannot skip from {from} to {requested}")]
    Skipped { from: MatchPhase, requested: MatchPhase },
    #[error("match is already finished")]
    Terminal,
}

impl MatchPhase {
    pub const ALL: [MatchPhase; 5] = [
        MatchPhase::Toss,
        MatchPhase::TeamSelection,
        MatchPhase::InningOne,
        MatchPhase::InningTwo,
        MatchPhase::Finished,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchPhase::Toss => "toss",
            MatchPhase::TeamSelection => "team_selection",
            MatchPhase::InningOne => "inning_one",
            MatchPhase::InningTwo => "inning_two",
            MatchPhase::Finished => "finished",
        }
    }

    pub fn next(&self) -> Option<MatchPhase> {
        let position = Self::ALL.iter().position(|p| p == self).unwrap();
        Self::ALL.get(position + 1).copied()
    }

    /// The ordered prefix of the phase list strictly before this phase.
    pub fn completed(&self) -> &'static [MatchPhase] {
        let position = Self::ALL.iter().position(|p| p == self).unwrap();
        &Self::ALL[..position]
    }

    /// A finished match takes no further organizer actions.
    pub fn is_terminal(&self) -> bool {
        *self == MatchPhase::Finished
    }

    /// The inning sequence number this phase scores, if any.
    pub fn inning_number(&self) -> Option<i16> {
        match self {
            MatchPhase::InningOne => Some(1),
            MatchPhase::InningTwo => Some(2),
            _ => None,
        }
    }
}

impl std::fmt::Display for MatchPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MatchPhase {
    type Err = PhaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|p| p.as_str() == s)
            .copied()
            .ok_or_else(|| PhaseError::Unknown(s.to_string()))
    }
}

/// Only the immediate successor of the current phase is a legal transition.
pub fn transition(current: MatchPhase, requested: MatchPhase) -> Result<MatchPhase, PhaseError> {
    if current == MatchPhase::Finished {
        return Err(PhaseError::Terminal);
    }
    if requested == current {
        return Err(PhaseError::AlreadyInPhase(current));
    }
    if requested < current {
        return Err(PhaseError::Backward {
            from: current,
            requested,
        });
    }
    if current.next() != Some(requested) {
        return Err(PhaseError::Skipped {
            from: current,
            requested,
        });
    }

    Ok(requested)
}
