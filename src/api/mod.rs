mod handlers;

pub use handlers::MessageResponse;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::store::SharedStore;

pub fn create_router(store: SharedStore) -> Router {
    Router::new()
        .route("/", get(handlers::welcome))
        // Questions
        .route("/questions", get(handlers::list_questions))
        .route("/questions", post(handlers::create_question))
        .route("/questions/{id}", get(handlers::get_question))
        // Answers
        .route("/questions/{id}/answers", get(handlers::list_answers))
        .route("/questions/{id}/answers", post(handlers::create_answer))
        .route(
            "/questions/{id}/answers/{answer_id}",
            get(handlers::get_answer),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(store)
}
