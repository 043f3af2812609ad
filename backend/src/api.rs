pub mod bracket;
pub mod innings;
pub mod matches;

pub fn router() -> axum::Router {
    axum::Router::new()
        .nest("/innings/", innings::router())
        .nest("/matches/", matches::router())
        .nest("/bracket/", bracket::router())
}
