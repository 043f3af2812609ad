use axum::extract::Path;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use scoring::phase::MatchPhase;

use crate::CoreError;

pub fn router() -> axum::Router {
    axum::Router::new()
        .route("/:id/phase", axum::routing::get(get_phase).post(set_phase))
        .route("/:id/stats", axum::routing::post(fold_stats))
        .route("/:id/winner", axum::routing::post(record_winner))
}

async fn load_match(
    connection: &mut diesel_async::AsyncPgConnection,
    match_id: i64,
) -> Result<crate::models::Match, CoreError> {
    crate::schema::matches::dsl::matches
        .find(match_id)
        .first(connection)
        .await
        .optional()?
        .ok_or_else(|| CoreError::not_found("match", match_id))
}

fn phase_status(phase: MatchPhase) -> common::PhaseStatus {
    common::PhaseStatus {
        phase: phase.as_str().to_string(),
        completed: phase
            .completed()
            .iter()
            .map(|p| p.as_str().to_string())
            .collect(),
    }
}

async fn get_phase(
    Path(match_id): Path<i64>,
) -> Result<axum::Json<common::PhaseStatus>, CoreError> {
    let mut db_con = crate::db_connection().await;

    let row = load_match(&mut db_con, match_id).await?;
    let phase: MatchPhase = row.phase.parse().map_err(CoreError::Phase)?;

    Ok(axum::Json(phase_status(phase)))
}

async fn set_phase(
    Path(match_id): Path<i64>,
    axum::Json(payload): axum::Json<common::SetPhaseRequest>,
) -> Result<axum::Json<common::PhaseStatus>, CoreError> {
    let requested: MatchPhase = payload.phase.parse().map_err(CoreError::Phase)?;

    tracing::info!("Move match {} to phase {}", match_id, requested);

    let mut db_con = crate::db_connection().await;

    let phase = db_con
        .transaction::<_, CoreError, _>(|connection| {
            async move {
                let row = load_match(connection, match_id).await?;
                let current: MatchPhase = row.phase.parse().map_err(CoreError::Phase)?;

                let next = scoring::phase::transition(current, requested)?;

                // An innings phase needs its inning row, finished needs a winner.
                if let Some(number) = next.inning_number() {
                    let innings: i64 = crate::schema::innings::dsl::innings
                        .filter(crate::schema::innings::dsl::match_id.eq(match_id))
                        .filter(crate::schema::innings::dsl::inning_number.eq(number))
                        .count()
                        .get_result(connection)
                        .await?;
                    if innings == 0 {
                        return Err(CoreError::Validation(
                            "inning for the requested phase has not been started",
                        ));
                    }
                }

                if next == MatchPhase::Finished {
                    let winner = payload
                        .winner_team_id
                        .or(row.winner_id)
                        .ok_or(CoreError::Validation("finished phase requires a winner"))?;
                    if row.team1_id != Some(winner) && row.team2_id != Some(winner) {
                        return Err(CoreError::Validation("winner is not part of this match"));
                    }

                    diesel::dsl::update(crate::schema::matches::dsl::matches.find(match_id))
                        .set((
                            crate::schema::matches::dsl::phase.eq(next.as_str()),
                            crate::schema::matches::dsl::winner_id.eq(Some(winner)),
                        ))
                        .execute(connection)
                        .await?;
                } else {
                    diesel::dsl::update(crate::schema::matches::dsl::matches.find(match_id))
                        .set(crate::schema::matches::dsl::phase.eq(next.as_str()))
                        .execute(connection)
                        .await?;
                }

                Ok(next)
            }
            .scope_boxed()
        })
        .await?;

    Ok(axum::Json(phase_status(phase)))
}

async fn fold_stats(
    Path(match_id): Path<i64>,
) -> Result<axum::Json<common::FoldStatsResponse>, CoreError> {
    tracing::info!("Fold player stats for match {}", match_id);

    let mut db_con = crate::db_connection().await;

    let players = db_con
        .transaction::<_, CoreError, _>(|connection| {
            async move {
                load_match(connection, match_id).await?;

                let inning_ids: Vec<i64> = crate::schema::innings::dsl::innings
                    .filter(crate::schema::innings::dsl::match_id.eq(match_id))
                    .select(crate::schema::innings::dsl::id)
                    .load(connection)
                    .await?;

                let rows: Vec<crate::models::DeliveryRow> =
                    crate::schema::deliveries::dsl::deliveries
                        .filter(crate::schema::deliveries::dsl::inning_id.eq_any(inning_ids))
                        .order(crate::schema::deliveries::dsl::id.asc())
                        .load(connection)
                        .await?;

                let events: Vec<scoring::Delivery> =
                    rows.iter().map(|row| row.to_event()).collect();
                let figures = scoring::stats::fold(&events);

                let mut players = Vec::with_capacity(figures.len());
                for (player_id, player) in figures {
                    players.push(common::PlayerStatLine {
                        player_id,
                        runs_scored: player.batting.runs as i32,
                        balls_faced: player.batting.balls_faced as i32,
                        fours: player.batting.fours as i32,
                        sixes: player.batting.sixes as i32,
                        overs_bowled: player.bowling.overs,
                        runs_conceded: player.bowling.runs_conceded as i32,
                        wickets: player.bowling.wickets as i32,
                    });
                }
                players.sort_by_key(|line| line.player_id);

                for line in players.iter() {
                    let row = crate::models::PlayerMatchStat {
                        match_id,
                        player_id: line.player_id,
                        runs_scored: line.runs_scored,
                        balls_faced: line.balls_faced,
                        fours: line.fours,
                        sixes: line.sixes,
                        overs_bowled: line.overs_bowled,
                        runs_conceded: line.runs_conceded,
                        wickets: line.wickets,
                    };

                    diesel::dsl::insert_into(
                        crate::schema::player_match_stats::dsl::player_match_stats,
                    )
                    .values(&row)
                    .on_conflict((
                        crate::schema::player_match_stats::dsl::match_id,
                        crate::schema::player_match_stats::dsl::player_id,
                    ))
                    .do_update()
                    .set((
                        crate::schema::player_match_stats::dsl::runs_scored.eq(row.runs_scored),
                        crate::schema::player_match_stats::dsl::balls_faced.eq(row.balls_faced),
                        crate::schema::player_match_stats::dsl::fours.eq(row.fours),
                        crate::schema::player_match_stats::dsl::sixes.eq(row.sixes),
                        crate::schema::player_match_stats::dsl::overs_bowled.eq(row.overs_bowled),
                        crate::schema::player_match_stats::dsl::runs_conceded
                            .eq(row.runs_conceded),
                        crate::schema::player_match_stats::dsl::wickets.eq(row.wickets),
                    ))
                    .execute(connection)
                    .await?;
                }

                Ok(players)
            }
            .scope_boxed()
        })
        .await?;

    Ok(axum::Json(common::FoldStatsResponse { match_id, players }))
}

async fn record_winner(
    Path(match_id): Path<i64>,
    axum::Json(payload): axum::Json<common::RecordWinnerRequest>,
) -> Result<axum::Json<common::PropagationResult>, CoreError> {
    let winner = payload.winner_team_id;
    if winner <= 0 {
        return Err(CoreError::Validation("winner team id is required"));
    }

    tracing::info!("Record winner {} for match {}", winner, match_id);

    let mut db_con = crate::db_connection().await;

    let result = db_con
        .transaction::<_, CoreError, _>(|connection| {
            async move {
                let row = load_match(connection, match_id).await?;

                if row.team1_id != Some(winner) && row.team2_id != Some(winner) {
                    return Err(CoreError::Validation("winner is not part of this match"));
                }
                if scoring::bracket::place_winner(row.winner_id, winner)?
                    == scoring::bracket::Placement::AlreadyRecorded
                {
                    return Ok(common::PropagationResult {
                        match_id,
                        winner_team_id: winner,
                        advanced_to: None,
                        already_recorded: true,
                    });
                }

                diesel::dsl::update(crate::schema::matches::dsl::matches.find(match_id))
                    .set(crate::schema::matches::dsl::winner_id.eq(Some(winner)))
                    .execute(connection)
                    .await?;

                let advanced_to = match row.tournament_id {
                    Some(tournament_id) if row.round >= 1 => {
                        advance(connection, &row, tournament_id, winner).await?
                    }
                    _ => None,
                };

                Ok(common::PropagationResult {
                    match_id,
                    winner_team_id: winner,
                    advanced_to,
                    already_recorded: false,
                })
            }
            .scope_boxed()
        })
        .await?;

    Ok(axum::Json(result))
}

/// Places a winner into its next-round slot, addressed by the source match's
/// position within its round.
async fn advance(
    connection: &mut diesel_async::AsyncPgConnection,
    source: &crate::models::Match,
    tournament_id: i64,
    winner: i64,
) -> Result<Option<i64>, CoreError> {
    let round_ids: Vec<i64> = crate::schema::matches::dsl::matches
        .filter(crate::schema::matches::dsl::tournament_id.eq(tournament_id))
        .filter(crate::schema::matches::dsl::round.eq(source.round))
        .order(crate::schema::matches::dsl::match_number.asc())
        .select(crate::schema::matches::dsl::id)
        .load(connection)
        .await?;
    let index = round_ids
        .iter()
        .position(|id| *id == source.id)
        .ok_or_else(|| CoreError::not_found("match", source.id))?;

    let next_round: Vec<crate::models::Match> = crate::schema::matches::dsl::matches
        .filter(crate::schema::matches::dsl::tournament_id.eq(tournament_id))
        .filter(crate::schema::matches::dsl::round.eq(source.round + 1))
        .order(crate::schema::matches::dsl::match_number.asc())
        .load(connection)
        .await?;
    if next_round.is_empty() {
        // The final; nothing to advance into.
        return Ok(None);
    }

    // Round 2 is laid out as byes first, then round-1 winners. The generator
    // sizes round 2 so that 2 * matches = round-1 matches + byes.
    let byes = if source.round == 1 {
        (2 * next_round.len()).saturating_sub(round_ids.len())
    } else {
        0
    };
    let destination = scoring::bracket::winner_destination(source.round as u16, index, byes);

    let target = next_round
        .get(destination.index)
        .ok_or_else(|| CoreError::Validation("bracket has no slot for this winner"))?;

    let occupant = match destination.slot {
        scoring::bracket::Slot::Team1 => target.team1_id,
        scoring::bracket::Slot::Team2 => target.team2_id,
    };
    if scoring::bracket::place_winner(occupant, winner)?
        == scoring::bracket::Placement::AlreadyRecorded
    {
        return Ok(Some(target.id));
    }

    let update = diesel::dsl::update(crate::schema::matches::dsl::matches.find(target.id));
    match destination.slot {
        scoring::bracket::Slot::Team1 => {
            update
                .set(crate::schema::matches::dsl::team1_id.eq(Some(winner)))
                .execute(connection)
                .await?;
        }
        scoring::bracket::Slot::Team2 => {
            update
                .set(crate::schema::matches::dsl::team2_id.eq(Some(winner)))
                .execute(connection)
                .await?;
        }
    }

    tracing::debug!(
        "Advanced winner {} into match {} ({:?})",
        winner,
        target.id,
        destination.slot
    );

    Ok(Some(target.id))
}
