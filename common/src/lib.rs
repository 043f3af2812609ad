#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StartInningRequest {
    pub match_id: i64,
    pub batting_team_id: i64,
    pub bowling_team_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StartInningResponse {
    pub inning_id: i64,
    pub inning_number: i16,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NextBallResponse {
    pub over: i16,
    pub ball: i16,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RecordDeliveryRequest {
    pub over: i16,
    pub ball: i16,
    pub batsman_id: i64,
    pub bowler_id: i64,
    pub runs: i16,
    pub extras: i16,
    pub wicket: bool,
    pub dismissal_type: Option<String>,
    pub extra_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RecordDeliveryResponse {
    pub delivery_id: i64,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InningSummary {
    pub inning_id: i64,
    pub total_runs: i32,
    pub total_wickets: i32,
    pub overs_played: f32,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlayerStatLine {
    pub player_id: i64,
    pub runs_scored: i32,
    pub balls_faced: i32,
    pub fours: i32,
    pub sixes: i32,
    pub overs_bowled: f32,
    pub runs_conceded: i32,
    pub wickets: i32,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FoldStatsResponse {
    pub match_id: i64,
    pub players: Vec<PlayerStatLine>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PhaseStatus {
    pub phase: String,
    pub completed: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SetPhaseRequest {
    pub phase: String,
    pub winner_team_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RecordWinnerRequest {
    pub winner_team_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PropagationResult {
    pub match_id: i64,
    pub winner_team_id: i64,
    pub advanced_to: Option<i64>,
    pub already_recorded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BracketMatch {
    pub id: i64,
    pub round: i16,
    pub match_number: i16,
    pub team1: Option<String>,
    pub team2: Option<String>,
    pub winner: Option<String>,
}
