/// 币种列表缓存 TTL（秒）
pub const COIN_LIST_TTL_SECS: u64 = 3600;

/// 热门币种缓存 TTL（秒）
pub const TRENDING_TTL_SECS: u64 = 3600;

/// 历史行情缓存 TTL（秒）
pub const HISTORICAL_TTL_SECS: u64 = 3600;

/// 实时价格缓存 TTL（秒），价格时效性要求高
pub const PRICES_TTL_SECS: u64 = 300;

/// 生成币种列表缓存键
pub fn coin_list_key() -> String {
    "coinList".to_string()
}

/// 生成热门币种缓存键
pub fn trending_coins_key() -> String {
    "trendingCoins".to_string()
}

/// 生成历史行情缓存键
/// 影响响应的所有查询参数都必须进入键，避免不同参数组合相互覆盖
pub fn historical_key(coin: &str, days: &str, currency: &str) -> String {
    format!("historical-{}-{}-{}", coin, days, currency)
}

/// 生成实时价格缓存键
pub fn prices_key(ids: &str, currency: &str) -> String {
    format!("cryptoPrices:{}:{}", ids, currency)
}
