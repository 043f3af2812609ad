use std::collections::HashMap;

use axum::extract::Path;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use rand::SeedableRng;

use crate::CoreError;

pub fn router() -> axum::Router {
    axum::Router::new()
        .route("/:tournament_id/generate", axum::routing::post(generate))
        .route("/:tournament_id", axum::routing::get(get_bracket))
}

async fn generate(
    Path(tournament_id): Path<i64>,
) -> Result<axum::Json<Vec<common::BracketMatch>>, CoreError> {
    tracing::info!("Generate bracket for tournament {}", tournament_id);

    let mut rng = rand::rngs::StdRng::from_entropy();
    let mut db_con = crate::db_connection().await;

    // Read entrants, compute the draw and write every match in one transaction.
    let created = db_con
        .transaction::<_, CoreError, _>(|connection| {
            async move {
                let existing: i64 = crate::schema::matches::dsl::matches
                    .filter(crate::schema::matches::dsl::tournament_id.eq(tournament_id))
                    .count()
                    .get_result(connection)
                    .await?;
                if existing > 0 {
                    return Err(CoreError::Validation("bracket was already generated"));
                }

                let entrants: Vec<i64> = crate::schema::tournament_entries::dsl::tournament_entries
                    .filter(crate::schema::tournament_entries::dsl::tournament_id.eq(tournament_id))
                    .filter(crate::schema::tournament_entries::dsl::present.eq(true))
                    .filter(crate::schema::tournament_entries::dsl::accepted.eq(true))
                    .order(crate::schema::tournament_entries::dsl::team_id.asc())
                    .select(crate::schema::tournament_entries::dsl::team_id)
                    .load(connection)
                    .await?;

                let draw = scoring::bracket::generate(&entrants, &mut rng)?;

                let new_matches: Vec<crate::models::NewMatch> = draw
                    .matches
                    .iter()
                    .map(|planned| crate::models::NewMatch {
                        tournament_id: Some(tournament_id),
                        team1_id: planned.team1,
                        team2_id: planned.team2,
                        round: planned.round as i16,
                        match_number: planned.number as i16,
                        phase: scoring::phase::MatchPhase::Toss.as_str().to_string(),
                    })
                    .collect();

                let created: Vec<crate::models::Match> =
                    diesel::dsl::insert_into(crate::schema::matches::dsl::matches)
                        .values(&new_matches)
                        .returning(crate::models::Match::as_returning())
                        .get_results(connection)
                        .await?;

                Ok(created)
            }
            .scope_boxed()
        })
        .await?;

    let names = team_names(&mut db_con, &created).await?;

    Ok(axum::Json(
        created.iter().map(|m| to_view(m, &names)).collect(),
    ))
}

async fn get_bracket(
    Path(tournament_id): Path<i64>,
) -> Result<axum::Json<Vec<common::BracketMatch>>, CoreError> {
    let mut db_con = crate::db_connection().await;

    let rows: Vec<crate::models::Match> = crate::schema::matches::dsl::matches
        .filter(crate::schema::matches::dsl::tournament_id.eq(tournament_id))
        .order((
            crate::schema::matches::dsl::round.asc(),
            crate::schema::matches::dsl::match_number.asc(),
        ))
        .load(&mut db_con)
        .await?;
    if rows.is_empty() {
        return Err(CoreError::not_found("bracket", tournament_id));
    }

    let names = team_names(&mut db_con, &rows).await?;

    Ok(axum::Json(rows.iter().map(|m| to_view(m, &names)).collect()))
}

async fn team_names(
    connection: &mut diesel_async::AsyncPgConnection,
    rows: &[crate::models::Match],
) -> Result<HashMap<i64, String>, CoreError> {
    let team_ids: Vec<i64> = rows
        .iter()
        .flat_map(|m| [m.team1_id, m.team2_id, m.winner_id])
        .flatten()
        .collect();

    let teams: Vec<crate::models::Team> = crate::schema::teams::dsl::teams
        .filter(crate::schema::teams::dsl::id.eq_any(team_ids))
        .load(connection)
        .await?;

    Ok(teams.into_iter().map(|t| (t.id, t.name)).collect())
}

fn to_view(row: &crate::models::Match, names: &HashMap<i64, String>) -> common::BracketMatch {
    let name_of = |id: Option<i64>| id.and_then(|id| names.get(&id).cloned());

    common::BracketMatch {
        id: row.id,
        round: row.round,
        match_number: row.match_number,
        team1: name_of(row.team1_id),
        team2: name_of(row.team2_id),
        winner: name_of(row.winner_id),
    }
}
