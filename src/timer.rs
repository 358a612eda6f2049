//! 定时器模块
//! Timer Module
//!
//! 该模块实现了进程内的定时器轮：调用方注册具名定时器，后台驱动按固定精度
//! 扫描并触发到期的定时器，适用于重传超时、心跳、会话过期等大量进程内定时需求。
//!
//! This module implements an in-process timer wheel: callers register named
//! timers and a background driver scans them at a fixed precision, firing the
//! expired ones. It serves retransmission timeouts, heartbeats, session
//! expiry and similar in-process deadlines.

pub mod clock;
pub mod types;
pub mod wheel;

pub use clock::{MonotonicClock, Nanos};
pub use types::{ClosureTimer, Timer, TimerKind};
pub use wheel::{TimerWheel, TimingWheelStats};
