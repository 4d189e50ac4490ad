/// 缓存键模块
/// 提供各种缓存键生成函数与对应 TTL
///
/// 键格式与 TTL 是对前端的兼容面，不可随意变更

// 行情缓存键模块
pub mod market_keys;

// 新闻缓存键模块
pub mod news_keys;

// 重新导出常用的键生成函数
pub use market_keys::{
    COIN_LIST_TTL_SECS, HISTORICAL_TTL_SECS, PRICES_TTL_SECS, TRENDING_TTL_SECS, coin_list_key,
    historical_key, prices_key, trending_coins_key,
};
pub use news_keys::{NEWS_TTL_SECS, crypto_news_key};
