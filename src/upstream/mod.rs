// 上游数据源
// 每个资源一个拉取函数；调用方负责缓存，此处只管取数

pub mod coingecko;
pub mod newsdata;
