use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use crate::models::{ErrorBody, LexiconEntry};
use crate::state::AppState;
use crate::store::EntryStore;

/// GET /api/lexicon/{id} - Fetch a single entry.
pub async fn get_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<LexiconEntry>, (StatusCode, Json<ErrorBody>)> {
    match state.store.get(id) {
        Ok(Some(entry)) => Ok(Json(entry)),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorBody::new("entry not found")),
        )),
        Err(e) => {
            tracing::error!("Entry lookup failed for {id}: {e}");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody::new("lookup is temporarily unavailable")),
            ))
        }
    }
}

/// GET /api/lexicon/languages - List the language tags present in the store.
pub async fn list_languages(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, (StatusCode, Json<ErrorBody>)> {
    match state.store.languages() {
        Ok(tags) => Ok(Json(tags)),
        Err(e) => {
            tracing::error!("Language listing failed: {e}");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody::new("lookup is temporarily unavailable")),
            ))
        }
    }
}
