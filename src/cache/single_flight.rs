use std::collections::HashMap;
use std::sync::Mutex;

use tokio::sync::watch;

/// 按缓存键合并并发未命中
/// 同一键的首个未命中成为领跑者，其余请求等待其完成后重查缓存，
/// 避免缓存失效瞬间对上游的惊群效应
#[derive(Default)]
pub struct SingleFlight {
    inflight: Mutex<HashMap<String, watch::Receiver<()>>>,
}

pub enum Flight<'a> {
    /// 本请求负责拉取上游
    Leader(FlightGuard<'a>),
    /// 已有同键请求在拉取，等待其完成
    Follower(watch::Receiver<()>),
}

/// 领跑者凭据
/// 析构时移除在途记录并关闭通道，唤醒所有等待者；
/// 依赖 Drop 保证拉取失败或 panic 时等待者不会被挂死
pub struct FlightGuard<'a> {
    flights: &'a SingleFlight,
    key: String,
    _done: watch::Sender<()>,
}

impl SingleFlight {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn join(&self, key: &str) -> Flight<'_> {
        let mut inflight = self.inflight.lock().unwrap();
        if let Some(rx) = inflight.get(key) {
            return Flight::Follower(rx.clone());
        }
        let (tx, rx) = watch::channel(());
        inflight.insert(key.to_string(), rx);
        Flight::Leader(FlightGuard {
            flights: self,
            key: key.to_string(),
            _done: tx,
        })
    }
}

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        // 先移除记录再析构 sender，晚到的请求会开启新一轮领跑
        let mut inflight = self.flights.inflight.lock().unwrap();
        inflight.remove(&self.key);
    }
}

/// 等待领跑者完成；通道关闭即完成信号
pub async fn wait_for_leader(mut rx: watch::Receiver<()>) {
    let _ = rx.changed().await;
}
