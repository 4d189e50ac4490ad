use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;

use crate::{AppState, middleware::log_errors, routes};

// 行情相关的路由
pub fn market_routes() -> Router<AppState> {
    Router::new()
        .route("/coins", get(routes::market::get_coin_list))
        .route("/trending", get(routes::market::get_trending_coins))
        .route("/historical/{coin}", get(routes::market::get_historical_data))
}

// 新闻相关的路由
pub fn news_routes() -> Router<AppState> {
    Router::new().route("/news", get(routes::news::get_crypto_news))
}

// 价格相关的路由
pub fn price_routes() -> Router<AppState> {
    Router::new().route("/price", get(routes::market::get_crypto_prices))
}

// 创建主路由
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new().merge(market_routes()).merge(news_routes());

    Router::new()
        .nest("/api", api_routes)
        .nest("/prices", price_routes())
        .layer(axum::middleware::from_fn(log_errors))
        // 仪表盘前端跑在浏览器里，跨域放开
        .layer(CorsLayer::permissive())
        .with_state(state)
}
