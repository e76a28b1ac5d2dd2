use axum::{routing::get, Router};

use crate::handlers::note_handlers::{create_note, list_notes};
use crate::state::AppState;

pub fn note_routes() -> Router<AppState> {
    Router::new().route("/notes/{id}", get(list_notes).post(create_note))
}
