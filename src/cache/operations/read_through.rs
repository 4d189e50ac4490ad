use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::cache::single_flight::{Flight, SingleFlight, wait_for_leader};
use crate::cache::store::CacheStore;

/// 缓存查询的内部三态
/// 对外只暴露"命中/未命中"，但测试需要区分"键不存在"与"存储故障"
#[derive(Debug, PartialEq, Eq)]
pub enum CacheLookup<T> {
    Hit(T),
    Miss,
    Unavailable,
}

/// 查缓存，区分未命中与存储故障
/// 反序列化失败按未命中处理：旧格式残留数据等同于不存在
pub(crate) async fn lookup<T: DeserializeOwned>(store: &dyn CacheStore, key: &str) -> CacheLookup<T> {
    match store.get(key).await {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => CacheLookup::Hit(value),
            Err(e) => {
                tracing::error!("Failed to deserialize cached data for key {}: {}", key, e);
                CacheLookup::Miss
            }
        },
        Ok(None) => CacheLookup::Miss,
        Err(e) => {
            tracing::error!("Error getting data from cache for key {}: {}", key, e);
            CacheLookup::Unavailable
        }
    }
}

/// 查缓存；未命中或存储故障一律返回 None，绝不向调用方抛错
pub async fn get_from_cache<T: DeserializeOwned>(store: &dyn CacheStore, key: &str) -> Option<T> {
    match lookup(store, key).await {
        CacheLookup::Hit(value) => Some(value),
        CacheLookup::Miss | CacheLookup::Unavailable => None,
    }
}

/// 写缓存，带过期时间，尽力而为
/// 写入失败只记录日志：缓存写失败绝不拖垮已拿到数据的请求
pub async fn set_to_cache<T: Serialize>(store: &dyn CacheStore, key: &str, value: &T, ttl_secs: u64) {
    let json = match serde_json::to_string(value) {
        Ok(json) => json,
        Err(e) => {
            tracing::error!("Failed to serialize data for cache key {}: {}", key, e);
            return;
        }
    };

    match store.set(key, &json, ttl_secs).await {
        Ok(()) => tracing::info!("Data cached with key: {}", key),
        Err(e) => tracing::error!("Error setting data to cache for key {}: {}", key, e),
    }
}

/// 读穿缓存：查缓存 → 未命中则拉上游 → 回填缓存
/// 所有端点统一走这一条路径；同键并发未命中由 SingleFlight 合并为一次上游拉取。
/// 上游错误向调用方传播，缓存错误永远不传播。
pub async fn read_through<T, E, F, Fut>(
    store: &dyn CacheStore,
    flights: &SingleFlight,
    key: &str,
    ttl_secs: u64,
    fetch: F,
) -> Result<T, E>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    if let Some(cached) = get_from_cache(store, key).await {
        tracing::info!("Cache hit for key: {}", key);
        return Ok(cached);
    }

    match flights.join(key) {
        Flight::Leader(_guard) => {
            let value = fetch().await?;
            set_to_cache(store, key, &value, ttl_secs).await;
            Ok(value)
        }
        Flight::Follower(rx) => {
            wait_for_leader(rx).await;
            if let Some(cached) = get_from_cache(store, key).await {
                tracing::info!("Cache hit for key: {} (after in-flight fetch)", key);
                return Ok(cached);
            }
            // 领跑请求失败或回填被吞（如 Redis 宕机），退回自行拉取
            let value = fetch().await?;
            set_to_cache(store, key, &value, ttl_secs).await;
            Ok(value)
        }
    }
}
