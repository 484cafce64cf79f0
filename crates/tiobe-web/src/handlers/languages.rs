//! Ranking and language-detail API.

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::HeaderName,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use tiobe_common::error::ApiError;
use tiobe_common::{IndexPeriod, Language, LanguageDetail};
use utoipa::IntoParams;

use crate::state::SharedState;

/// Reports whether the ranking was fetched live, served from cache, or the built-in snapshot.
pub const ORIGIN_HEADER: HeaderName = HeaderName::from_static("x-index-origin");

/// Optional historical period. Both fields must be given to select one.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PeriodQuery {
    pub year: Option<i32>,
    pub month: Option<i32>,
}

impl PeriodQuery {
    fn resolve(&self) -> Result<Option<IndexPeriod>, ApiError> {
        Ok(IndexPeriod::resolve(self.year, self.month, Utc::now().date_naive())?)
    }
}

/// GET /api/languages - Ranking for the current or a historical month
#[utoipa::path(
    get,
    path = "/api/languages",
    params(PeriodQuery),
    responses(
        (status = 200, description = "List of languages", body = Vec<Language>),
        (status = 400, description = "Malformed query, invalid or future period")
    ),
    tag = "rust-tiobe"
)]
pub async fn list_languages(
    State(state): State<SharedState>,
    query: Result<Query<PeriodQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query?;
    let period = query.resolve()?;
    let rankings = state.service.rankings(period).await;

    Ok((
        [(ORIGIN_HEADER, rankings.origin.as_str())],
        Json(rankings.languages.to_vec()),
    ))
}

/// GET /api/language/{name} - Profile and position of one language
#[utoipa::path(
    get,
    path = "/api/language/{name}",
    params(
        ("name" = String, Path, description = "Language name, case-insensitive"),
        PeriodQuery
    ),
    responses(
        (status = 200, description = "Language details", body = LanguageDetail),
        (status = 400, description = "Malformed name or query, invalid or future period")
    ),
    tag = "rust-tiobe"
)]
pub async fn get_language(
    State(state): State<SharedState>,
    name: Result<Path<String>, PathRejection>,
    query: Result<Query<PeriodQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(name) = name?;
    let Query(query) = query?;
    let period = query.resolve()?;
    let (detail, origin) = state.service.language_detail(&name, period).await;

    Ok(([(ORIGIN_HEADER, origin.as_str())], Json(detail)))
}
