//! 时间轮统计信息
//! Timing wheel statistics

use std::time::Duration;

/// 时间轮统计信息
/// Timing wheel statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimingWheelStats {
    /// 当前注册的定时器数
    /// Number of currently registered timers
    pub active_timers: usize,
    /// 容量上限
    /// Capacity bound
    pub max_timers: usize,
    /// 滴答周期
    /// Tick period
    pub precision: Duration,
    /// 驱动是否正在扫描
    /// Whether the driver is scanning
    pub running: bool,
    /// 成功注册次数
    /// Successful registrations
    pub registered: u64,
    /// 因容量不足被拒绝的注册次数
    /// Registrations rejected for capacity
    pub rejected: u64,
    /// 实际移除条目的注销次数
    /// Deregistrations that removed an entry
    pub deregistered: u64,
    /// 已触发的回调数
    /// Callbacks fired
    pub fired: u64,
    /// 发生 panic 的回调数
    /// Callbacks that panicked
    pub callback_panics: u64,
    /// 驱动扫描次数
    /// Driver scans performed
    pub ticks: u64,
}

impl std::fmt::Display for TimingWheelStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "TimingWheelStats {{ timers: {}/{}, running: {}, registered: {}, rejected: {}, deregistered: {}, fired: {}, panics: {}, ticks: {}, precision: {:?} }}",
            self.active_timers,
            self.max_timers,
            self.running,
            self.registered,
            self.rejected,
            self.deregistered,
            self.fired,
            self.callback_panics,
            self.ticks,
            self.precision
        )
    }
}
