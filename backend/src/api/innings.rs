use axum::extract::Path;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

use crate::CoreError;

pub fn router() -> axum::Router {
    axum::Router::new()
        .route("/start", axum::routing::post(start))
        .route("/:id/next-ball", axum::routing::get(next_ball))
        .route("/:id/deliveries", axum::routing::post(record_delivery))
        .route("/:id/finalize", axum::routing::post(finalize))
}

async fn load_inning(
    connection: &mut diesel_async::AsyncPgConnection,
    inning_id: i64,
) -> Result<crate::models::Inning, CoreError> {
    crate::schema::innings::dsl::innings
        .find(inning_id)
        .first(connection)
        .await
        .optional()?
        .ok_or_else(|| CoreError::not_found("inning", inning_id))
}

/// Innings are immutable once their match finishes.
async fn ensure_match_open(
    connection: &mut diesel_async::AsyncPgConnection,
    match_id: i64,
) -> Result<(), CoreError> {
    let row: crate::models::Match = crate::schema::matches::dsl::matches
        .find(match_id)
        .first(connection)
        .await
        .optional()?
        .ok_or_else(|| CoreError::not_found("match", match_id))?;

    let phase: scoring::phase::MatchPhase = row.phase.parse().map_err(CoreError::Phase)?;
    if phase.is_terminal() {
        return Err(CoreError::Validation("match is finished"));
    }

    Ok(())
}

async fn start(
    axum::Json(payload): axum::Json<common::StartInningRequest>,
) -> Result<axum::Json<common::StartInningResponse>, CoreError> {
    if payload.match_id <= 0 || payload.batting_team_id <= 0 || payload.bowling_team_id <= 0 {
        return Err(CoreError::Validation("match and team ids are required"));
    }

    tracing::info!("Start inning for match {}", payload.match_id);

    let mut db_con = crate::db_connection().await;

    let (inning_id, inning_number) = db_con
        .transaction::<_, CoreError, _>(|connection| {
            async move {
                ensure_match_open(connection, payload.match_id).await?;

                let existing: i64 = crate::schema::innings::dsl::innings
                    .filter(crate::schema::innings::dsl::match_id.eq(payload.match_id))
                    .count()
                    .get_result(connection)
                    .await?;
                if existing >= 2 {
                    return Err(CoreError::Validation("match already has two innings"));
                }
                let inning_number = existing as i16 + 1;

                let inning_id = diesel::dsl::insert_into(crate::schema::innings::dsl::innings)
                    .values(crate::models::NewInning {
                        match_id: payload.match_id,
                        batting_team_id: payload.batting_team_id,
                        bowling_team_id: payload.bowling_team_id,
                        inning_number,
                        total_runs: 0,
                        total_wickets: 0,
                        overs_played: 0.0,
                    })
                    .returning(crate::schema::innings::dsl::id)
                    .get_result(connection)
                    .await?;

                Ok((inning_id, inning_number))
            }
            .scope_boxed()
        })
        .await?;

    Ok(axum::Json(common::StartInningResponse {
        inning_id,
        inning_number,
    }))
}

async fn next_ball(
    Path(inning_id): Path<i64>,
) -> Result<axum::Json<common::NextBallResponse>, CoreError> {
    let mut db_con = crate::db_connection().await;

    load_inning(&mut db_con, inning_id).await?;

    // Most recently appended delivery by ledger id, not by coordinate.
    let last: Option<crate::models::DeliveryRow> = crate::schema::deliveries::dsl::deliveries
        .filter(crate::schema::deliveries::dsl::inning_id.eq(inning_id))
        .order(crate::schema::deliveries::dsl::id.desc())
        .first(&mut db_con)
        .await
        .optional()?;

    let coordinate = scoring::sequencer::next_ball(last.map(|row| row.to_event()).as_ref());

    Ok(axum::Json(common::NextBallResponse {
        over: coordinate.over as i16,
        ball: coordinate.ball as i16,
    }))
}

fn validate_delivery(payload: &common::RecordDeliveryRequest) -> Result<(), CoreError> {
    if payload.batsman_id <= 0 || payload.bowler_id <= 0 {
        return Err(CoreError::Validation("batsman and bowler ids are required"));
    }
    if payload.over < 1 || !(1..=6).contains(&payload.ball) {
        return Err(CoreError::Validation("ball coordinate out of range"));
    }
    if payload.runs < 0 || payload.extras < 0 {
        return Err(CoreError::Validation("runs and extras cannot be negative"));
    }
    if payload.extra_type.parse::<scoring::ExtraType>().is_err() {
        return Err(CoreError::Validation("unknown extra type"));
    }
    match &payload.dismissal_type {
        Some(dismissal) if dismissal.parse::<scoring::DismissalType>().is_err() => {
            return Err(CoreError::Validation("unknown dismissal type"));
        }
        None if payload.wicket => {
            return Err(CoreError::Validation("wicket requires a dismissal type"));
        }
        _ => {}
    }

    Ok(())
}

async fn record_delivery(
    Path(inning_id): Path<i64>,
    axum::Json(payload): axum::Json<common::RecordDeliveryRequest>,
) -> Result<axum::Json<common::RecordDeliveryResponse>, CoreError> {
    validate_delivery(&payload)?;

    tracing::info!(
        "Delivery ({}, {}) for inning {}",
        payload.over,
        payload.ball,
        inning_id
    );

    let mut db_con = crate::db_connection().await;

    let delivery_id = db_con
        .transaction::<_, CoreError, _>(|connection| {
            async move {
                let inning = load_inning(connection, inning_id).await?;
                ensure_match_open(connection, inning.match_id).await?;

                let delivery_id = diesel::dsl::insert_into(crate::schema::deliveries::dsl::deliveries)
                    .values(crate::models::NewDelivery {
                        inning_id,
                        over_number: payload.over,
                        ball_number: payload.ball,
                        batsman_id: payload.batsman_id,
                        bowler_id: payload.bowler_id,
                        runs: payload.runs,
                        extras: payload.extras,
                        wicket: payload.wicket,
                        dismissal_type: payload.dismissal_type.clone(),
                        extra_type: payload.extra_type.clone(),
                    })
                    .returning(crate::schema::deliveries::dsl::id)
                    .get_result(connection)
                    .await?;

                // Every append overwrites the cached totals from the full ledger.
                recompute_totals(connection, inning_id).await?;

                Ok(delivery_id)
            }
            .scope_boxed()
        })
        .await?;

    Ok(axum::Json(common::RecordDeliveryResponse { delivery_id }))
}

async fn recompute_totals(
    connection: &mut diesel_async::AsyncPgConnection,
    inning_id: i64,
) -> Result<scoring::innings::InningTotals, CoreError> {
    let rows: Vec<crate::models::DeliveryRow> = crate::schema::deliveries::dsl::deliveries
        .filter(crate::schema::deliveries::dsl::inning_id.eq(inning_id))
        .order(crate::schema::deliveries::dsl::id.asc())
        .load(connection)
        .await?;

    let events: Vec<scoring::Delivery> = rows.iter().map(|row| row.to_event()).collect();
    let totals = scoring::innings::summarize(&events);

    diesel::dsl::update(crate::schema::innings::dsl::innings.find(inning_id))
        .set((
            crate::schema::innings::dsl::total_runs.eq(totals.total_runs as i32),
            crate::schema::innings::dsl::total_wickets.eq(totals.total_wickets as i32),
            crate::schema::innings::dsl::overs_played.eq(totals.overs_played),
        ))
        .execute(connection)
        .await?;

    Ok(totals)
}

async fn finalize(
    Path(inning_id): Path<i64>,
) -> Result<axum::Json<common::InningSummary>, CoreError> {
    tracing::info!("Finalize inning {}", inning_id);

    let mut db_con = crate::db_connection().await;

    let totals = db_con
        .transaction::<_, CoreError, _>(|connection| {
            async move {
                let inning = load_inning(connection, inning_id).await?;
                ensure_match_open(connection, inning.match_id).await?;
                recompute_totals(connection, inning_id).await
            }
            .scope_boxed()
        })
        .await?;

    Ok(axum::Json(common::InningSummary {
        inning_id,
        total_runs: totals.total_runs as i32,
        total_wickets: totals.total_wickets as i32,
        overs_played: totals.overs_played,
    }))
}
