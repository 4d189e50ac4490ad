/// 缓存操作
/// 所有端点共用的旁路缓存读写实现

pub mod read_through;

// 重新导出常用操作
pub use read_through::{CacheLookup, get_from_cache, read_through, set_to_cache};
