// 缓存模块
// 旁路缓存：键生成、读穿访问器、并发合并与存储抽象

pub mod keys;
pub mod operations;
pub mod single_flight;
pub mod store;

// 重新导出常用类型和函数，方便其他模块使用
pub use operations::{get_from_cache, read_through, set_to_cache};
pub use single_flight::SingleFlight;
pub use store::{CacheStore, RedisStore};
