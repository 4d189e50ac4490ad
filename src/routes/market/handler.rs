use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde_json::Value;

use crate::{
    AppState,
    cache::{keys, read_through},
    error::AppError,
    upstream::coingecko,
};

use super::model::{HistoricalQuery, PricesQuery};

#[axum::debug_handler]
pub async fn get_coin_list(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let cache_key = keys::coin_list_key();

    read_through(
        state.store.as_ref(),
        &state.flights,
        &cache_key,
        keys::COIN_LIST_TTL_SECS,
        || coingecko::fetch_coin_list(&state.http, &state.config),
    )
    .await
    .map(Json)
    .map_err(|e| {
        tracing::error!("Error fetching coin list: {}", e);
        AppError::FailedToFetchCoinList
    })
}

#[axum::debug_handler]
pub async fn get_trending_coins(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let cache_key = keys::trending_coins_key();

    read_through(
        state.store.as_ref(),
        &state.flights,
        &cache_key,
        keys::TRENDING_TTL_SECS,
        || coingecko::fetch_trending_coins(&state.http, &state.config),
    )
    .await
    .map(Json)
    .map_err(|e| {
        tracing::error!("Error fetching trending coins: {}", e);
        AppError::FailedToFetchTrending
    })
}

#[axum::debug_handler]
pub async fn get_historical_data(
    State(state): State<AppState>,
    Path(coin): Path<String>,
    Query(query): Query<HistoricalQuery>,
) -> Result<Json<Value>, AppError> {
    let days = query.days.unwrap_or_else(|| "7".to_string());
    let currency = query.vs_currency.unwrap_or_else(|| "usd".to_string());

    let cache_key = keys::historical_key(&coin, &days, &currency);

    read_through(
        state.store.as_ref(),
        &state.flights,
        &cache_key,
        keys::HISTORICAL_TTL_SECS,
        || coingecko::fetch_historical_data(&state.http, &state.config, &coin, &days, &currency),
    )
    .await
    .map(Json)
    .map_err(|e| {
        tracing::error!("Error fetching historical data for {}: {}", coin, e);
        AppError::FailedToFetchHistorical
    })
}

#[axum::debug_handler]
pub async fn get_crypto_prices(
    State(state): State<AppState>,
    Query(query): Query<PricesQuery>,
) -> Result<Json<Value>, AppError> {
    // 参数校验先于任何缓存或上游访问
    let ids = match query.ids {
        Some(ids) if !ids.trim().is_empty() => ids,
        _ => return Err(AppError::MissingIds),
    };
    let currency = query.vs_currency.unwrap_or_else(|| "usd".to_string());

    let cache_key = keys::prices_key(&ids, &currency);

    read_through(
        state.store.as_ref(),
        &state.flights,
        &cache_key,
        keys::PRICES_TTL_SECS,
        || coingecko::fetch_simple_prices(&state.http, &state.config, &ids, &currency),
    )
    .await
    .map(Json)
    .map_err(|e| {
        tracing::error!("Error fetching crypto prices: {}", e);
        AppError::FailedToFetchPrices
    })
}
