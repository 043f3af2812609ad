use diesel::prelude::*;

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::matches)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Match {
    pub id: i64,
    pub tournament_id: Option<i64>,
    pub team1_id: Option<i64>,
    pub team2_id: Option<i64>,
    pub round: i16,
    pub match_number: i16,
    pub phase: String,
    pub winner_id: Option<i64>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::schema::matches)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewMatch {
    pub tournament_id: Option<i64>,
    pub team1_id: Option<i64>,
    pub team2_id: Option<i64>,
    pub round: i16,
    pub match_number: i16,
    pub phase: String,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::innings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Inning {
    pub id: i64,
    pub match_id: i64,
    pub batting_team_id: i64,
    pub bowling_team_id: i64,
    pub inning_number: i16,
    pub total_runs: i32,
    pub total_wickets: i32,
    pub overs_played: f32,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::schema::innings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewInning {
    pub match_id: i64,
    pub batting_team_id: i64,
    pub bowling_team_id: i64,
    pub inning_number: i16,
    pub total_runs: i32,
    pub total_wickets: i32,
    pub overs_played: f32,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::deliveries)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct DeliveryRow {
    pub id: i64,
    pub inning_id: i64,
    pub over_number: i16,
    pub ball_number: i16,
    pub batsman_id: i64,
    pub bowler_id: i64,
    pub runs: i16,
    pub extras: i16,
    pub wicket: bool,
    pub dismissal_type: Option<String>,
    pub extra_type: String,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::schema::deliveries)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewDelivery {
    pub inning_id: i64,
    pub over_number: i16,
    pub ball_number: i16,
    pub batsman_id: i64,
    pub bowler_id: i64,
    pub runs: i16,
    pub extras: i16,
    pub wicket: bool,
    pub dismissal_type: Option<String>,
    pub extra_type: String,
}

impl DeliveryRow {
    /// Maps a ledger row onto the scoring event type. The write path validates
    /// the enum texts, so stored values always parse.
    pub fn to_event(&self) -> scoring::Delivery {
        scoring::Delivery {
            over: self.over_number as u16,
            ball: self.ball_number as u16,
            batsman: self.batsman_id,
            bowler: self.bowler_id,
            runs: self.runs as u16,
            extras: self.extras as u16,
            wicket: self.wicket,
            dismissal: self.dismissal_type.as_deref().and_then(|s| s.parse().ok()),
            extra: self.extra_type.parse().unwrap_or(scoring::ExtraType::None),
        }
    }
}

#[derive(Queryable, Selectable, Insertable, Debug)]
#[diesel(table_name = crate::schema::player_match_stats)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PlayerMatchStat {
    pub match_id: i64,
    pub player_id: i64,
    pub runs_scored: i32,
    pub balls_faced: i32,
    pub fours: i32,
    pub sixes: i32,
    pub overs_bowled: f32,
    pub runs_conceded: i32,
    pub wickets: i32,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::teams)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Team {
    pub id: i64,
    pub name: String,
}
