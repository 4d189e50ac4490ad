use axum::{Json, extract::State};

use crate::{
    AppState,
    cache::{keys, read_through},
    error::AppError,
    upstream::newsdata::{self, NewsArticle},
};

#[axum::debug_handler]
pub async fn get_crypto_news(
    State(state): State<AppState>,
) -> Result<Json<Vec<NewsArticle>>, AppError> {
    let cache_key = keys::crypto_news_key();

    read_through(
        state.store.as_ref(),
        &state.flights,
        &cache_key,
        keys::NEWS_TTL_SECS,
        || newsdata::fetch_crypto_news(&state.http, &state.config),
    )
    .await
    .map(Json)
    .map_err(|e| {
        tracing::error!("Error fetching news: {}", e);
        AppError::FailedToFetchNews
    })
}
