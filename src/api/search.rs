use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::models::{ErrorBody, SearchParams, SearchResponse};
use crate::search::{self, SearchError};
use crate::state::AppState;

/// GET /api/lexicon/search - Search lexicon entries.
///
/// Query parameters: `query` (required, >= 2 characters), `language`
/// (optional, defaults to "all"), `limit` and `offset` (optional; malformed
/// values coerce to defaults rather than failing).
pub async fn search_lexicon(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, (StatusCode, Json<ErrorBody>)> {
    match search::run(state.store.as_ref(), &params) {
        Ok((request, result)) => Ok(Json(SearchResponse {
            entries: result.entries,
            pagination: result.pagination,
            query: request.query,
            language: request.language.as_str().to_string(),
        })),
        Err(e @ SearchError::InvalidQuery) => {
            Err((StatusCode::BAD_REQUEST, Json(ErrorBody::new(e.to_string()))))
        }
        Err(SearchError::Store(e)) => {
            tracing::error!("Lexicon search failed: {e}");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody::new("search is temporarily unavailable")),
            ))
        }
    }
}
