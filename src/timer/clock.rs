//! 单调时钟
//! Monotonic clock
//!
//! 所有时间戳都是相对于时间轮创建时刻的有符号64位纳秒数，不处理回绕。
//! All timestamps are signed 64-bit nanosecond counts relative to the wheel's
//! creation instant; no wraparound handling is provided.

use std::time::Duration;
use tokio::time::Instant;

/// 单调纳秒时间戳
/// Monotonic nanosecond timestamp
pub type Nanos = i64;

/// 以时间轮创建时刻为原点的单调时钟
/// Monotonic clock anchored at the wheel's creation instant
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// 当前时间戳
    /// Current timestamp
    pub fn now_nanos(&self) -> Nanos {
        duration_to_nanos(Instant::now().saturating_duration_since(self.origin))
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

/// 将 `Duration` 饱和转换为纳秒数
/// Saturating conversion of a `Duration` into nanoseconds
pub fn duration_to_nanos(duration: Duration) -> Nanos {
    Nanos::try_from(duration.as_nanos()).unwrap_or(Nanos::MAX)
}
