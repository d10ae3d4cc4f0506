//! Static content routes: blog posts and the quote of the day

use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;
use fitsync_shared::{daily_quote, BlogPost, Quote};

pub fn content_routes() -> Router<AppState> {
    Router::new()
        .route("/blog-posts", get(list_blog_posts))
        .route("/quote", get(get_quote))
}

/// GET /api/blog-posts
async fn list_blog_posts(State(state): State<AppState>) -> Json<Vec<BlogPost>> {
    Json(state.catalog().blog_posts().to_vec())
}

/// GET /api/quote
async fn get_quote() -> Json<Quote> {
    Json(daily_quote(Utc::now().date_naive()))
}
