use serde::Deserialize;

// 历史行情查询参数
#[derive(Debug, Deserialize)]
pub struct HistoricalQuery {
    pub days: Option<String>,
    pub vs_currency: Option<String>,
}

// 实时价格查询参数
#[derive(Debug, Deserialize)]
pub struct PricesQuery {
    pub ids: Option<String>,
    pub vs_currency: Option<String>,
}
