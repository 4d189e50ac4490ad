use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::Config;

/// 返回给前端的新闻条目
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewsArticle {
    pub title: Option<String>,
    pub link: Option<String>,
    pub published: Option<String>,
    pub source: Option<String>,
}

// NewsData 响应信封，只取需要的字段
#[derive(Deserialize)]
struct NewsEnvelope {
    results: Vec<NewsItem>,
}

#[derive(Deserialize)]
struct NewsItem {
    title: Option<String>,
    link: Option<String>,
    #[serde(rename = "pubDate")]
    pub_date: Option<String>,
    source_id: Option<String>,
}

impl From<NewsItem> for NewsArticle {
    fn from(item: NewsItem) -> Self {
        NewsArticle {
            title: item.title,
            link: item.link,
            published: item.pub_date,
            source: item.source_id,
        }
    }
}

/// 拉取加密货币相关新闻并映射为精简条目
pub async fn fetch_crypto_news(
    http: &Client,
    config: &Config,
) -> Result<Vec<NewsArticle>, reqwest::Error> {
    let url = format!("{}/news", config.newsdata_base_url);
    let response = http
        .get(&url)
        .query(&[
            ("apikey", config.newsdata_api_key.as_str()),
            ("q", config.news_query.as_str()),
            ("language", config.news_language.as_str()),
        ])
        .send()
        .await?
        .error_for_status()?;

    let envelope: NewsEnvelope = response.json().await?;
    Ok(envelope.results.into_iter().map(NewsArticle::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_maps_to_trimmed_articles() {
        let raw = serde_json::json!({
            "status": "success",
            "totalResults": 2,
            "results": [
                {
                    "title": "Bitcoin breaks new high",
                    "link": "https://example.com/btc",
                    "pubDate": "2026-08-25 10:00:00",
                    "source_id": "example",
                    "category": ["business"]
                },
                {
                    "title": "Ethereum upgrade lands",
                    "link": "https://example.com/eth",
                    "pubDate": "2026-08-24 08:30:00",
                    "source_id": "example2"
                }
            ]
        });

        let envelope: NewsEnvelope = serde_json::from_value(raw).unwrap();
        let articles: Vec<NewsArticle> = envelope.results.into_iter().map(NewsArticle::from).collect();

        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].title.as_deref(), Some("Bitcoin breaks new high"));
        assert_eq!(articles[0].published.as_deref(), Some("2026-08-25 10:00:00"));
        assert_eq!(articles[0].source.as_deref(), Some("example"));
        // 上游多余字段被丢弃，缺失字段容忍为 None
        assert_eq!(articles[1].link.as_deref(), Some("https://example.com/eth"));
    }
}
