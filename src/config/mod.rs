use std::env;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    pub redis_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub coingecko_base_url: String,
    pub newsdata_base_url: String,
    pub newsdata_api_key: String,
    pub news_query: String,
    pub news_language: String,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenv::dotenv().ok();

        Ok(Config {
            redis_url: env::var("REDIS_URL")?,
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5001),
            coingecko_base_url: env::var("COINGECKO_BASE_URL")
                .unwrap_or_else(|_| "https://api.coingecko.com/api/v3".to_string()),
            newsdata_base_url: env::var("NEWSDATA_BASE_URL")
                .unwrap_or_else(|_| "https://newsdata.io/api/1".to_string()),
            newsdata_api_key: env::var("NEWSDATA_API_KEY")?,
            news_query: env::var("NEWS_QUERY").unwrap_or_else(|_| {
                "cryptocurrency OR bitcoin OR ethereum OR blockchain OR crypto OR NFTs OR altcoins"
                    .to_string()
            }),
            news_language: env::var("NEWS_LANGUAGE").unwrap_or_else(|_| "en".to_string()),
        })
    }
}
