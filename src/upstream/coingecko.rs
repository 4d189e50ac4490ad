use reqwest::Client;
use serde_json::Value;

use crate::config::Config;

/// 拉取币种行情列表
/// 响应体原样透传给前端，不做结构化
pub async fn fetch_coin_list(http: &Client, config: &Config) -> Result<Value, reqwest::Error> {
    let url = format!("{}/coins/markets", config.coingecko_base_url);
    let response = http
        .get(&url)
        .query(&[("vs_currency", "usd")])
        .send()
        .await?
        .error_for_status()?;

    response.json().await
}

/// 拉取热门搜索币种
pub async fn fetch_trending_coins(http: &Client, config: &Config) -> Result<Value, reqwest::Error> {
    let url = format!("{}/search/trending", config.coingecko_base_url);
    let response = http
        .get(&url)
        .header("accept", "application/json")
        .send()
        .await?
        .error_for_status()?;

    response.json().await
}

/// 拉取单个币种的历史行情
pub async fn fetch_historical_data(
    http: &Client,
    config: &Config,
    coin: &str,
    days: &str,
    currency: &str,
) -> Result<Value, reqwest::Error> {
    let url = format!("{}/coins/{}/market_chart", config.coingecko_base_url, coin);
    let response = http
        .get(&url)
        .query(&[("vs_currency", currency), ("days", days)])
        .send()
        .await?
        .error_for_status()?;

    response.json().await
}

/// 拉取一组币种的实时价格
pub async fn fetch_simple_prices(
    http: &Client,
    config: &Config,
    ids: &str,
    currency: &str,
) -> Result<Value, reqwest::Error> {
    let url = format!("{}/simple/price", config.coingecko_base_url);
    let response = http
        .get(&url)
        .query(&[("ids", ids), ("vs_currencies", currency)])
        .send()
        .await?
        .error_for_status()?;

    response.json().await
}
