//! 时间轮实现
//! Timing Wheel Implementation
//!
//! 时间轮维护一组具名定时器，后台驱动按固定精度周期性扫描全部定时器，
//! 触发已到期的定时器：周期定时器重新设定到期时间，一次性定时器被移除。
//!
//! The timing wheel keeps a set of named timers. A background driver scans
//! every timer once per precision period and fires the expired ones: periodic
//! timers are re-armed, one-shot timers are removed.

mod core;
mod driver;
mod entry;
mod stats;

pub use self::core::TimerWheel;
pub use self::stats::TimingWheelStats;
