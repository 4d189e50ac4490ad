/// 新闻缓存 TTL（秒）
pub const NEWS_TTL_SECS: u64 = 3600;

/// 生成加密货币新闻缓存键
pub fn crypto_news_key() -> String {
    "cryptoNews".to_string()
}
