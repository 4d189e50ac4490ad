use std::sync::Arc;

use async_trait::async_trait;
use redis::{AsyncCommands, Client as RedisClient, RedisError};

/// 键值存储抽象
/// 生产环境走 Redis；测试注入内存/故障替身
#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, RedisError>;

    async fn set(&self, key: &str, value: &str, ttl_secs: u64) -> Result<(), RedisError>;
}

/// Redis 存储
/// 连接按操作获取；Redis 不可用时每次操作报错，由上层降级为缓存未命中
pub struct RedisStore {
    client: Arc<RedisClient>,
}

impl RedisStore {
    pub fn new(client: Arc<RedisClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CacheStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>, RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str, ttl_secs: u64) -> Result<(), RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let _: () = conn.set_ex(key, value, ttl_secs).await?;
        Ok(())
    }
}
