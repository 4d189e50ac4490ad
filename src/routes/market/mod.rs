mod handler;
mod model;

pub use handler::{get_coin_list, get_crypto_prices, get_historical_data, get_trending_coins};
