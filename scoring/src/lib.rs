pub mod bracket;
pub mod innings;
pub mod phase;
pub mod sequencer;
pub mod stats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtraType {
    None,
    Wide,
    NoBall,
    Other,
}

impl ExtraType {
    /// Wides and no-balls must be re-bowled and do not consume a legal-ball slot.
    pub fn is_illegal(&self) -> bool {
        matches!(self, ExtraType::Wide | ExtraType::NoBall)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExtraType::None => "none",
            ExtraType::Wide => "wide",
            ExtraType::NoBall => "no_ball",
            ExtraType::Other => "other",
        }
    }
}

impl std::str::FromStr for ExtraType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(ExtraType::None),
            "wide" => Ok(ExtraType::Wide),
            "no_ball" => Ok(ExtraType::NoBall),
            "other" => Ok(ExtraType::Other),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DismissalType {
    Bowled,
    Caught,
    LegBeforeWicket,
    RunOut,
    Stumped,
    HitWicket,
    Other,
}

impl DismissalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DismissalType::Bowled => "bowled",
            DismissalType::Caught => "caught",
            DismissalType::LegBeforeWicket => "leg_before_wicket",
            DismissalType::RunOut => "run_out",
            DismissalType::Stumped => "stumped",
            DismissalType::HitWicket => "hit_wicket",
            DismissalType::Other => "other",
        }
    }
}

impl std::str::FromStr for DismissalType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bowled" => Ok(DismissalType::Bowled),
            "caught" => Ok(DismissalType::Caught),
            "leg_before_wicket" => Ok(DismissalType::LegBeforeWicket),
            "run_out" => Ok(DismissalType::RunOut),
            "stumped" => Ok(DismissalType::Stumped),
            "hit_wicket" => Ok(DismissalType::HitWicket),
            "other" => Ok(DismissalType::Other),
            _ => Err(()),
        }
    }
}

/// One ball event from the append-only ledger of an inning. Ordering is
/// (over, ball, insertion order); insertion order breaks the tie because an
/// illegal delivery re-scores at the coordinate of the ball it replaces.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Delivery {
    pub over: u16,
    pub ball: u16,
    pub batsman: i64,
    pub bowler: i64,
    pub runs: u16,
    pub extras: u16,
    pub wicket: bool,
    pub dismissal: Option<DismissalType>,
    pub extra: ExtraType,
}

// Display figure: counts every delivery, illegal ones included, so it can
// disagree with the sequencer's legal-ball rule after a wide/no-ball.
pub(crate) fn overs_from_delivery_count(count: usize) -> f32 {
    ((count as f32 / 6.0) * 10.0).round() / 10.0
}
