//! 时间轮定时器条目实现
//! Timer entry implementation for timing wheel

use crate::timer::clock::{Nanos, duration_to_nanos};
use crate::timer::types::{Timer, TimerKind};
use std::sync::Arc;

/// 时间轮中的定时器条目
/// Timer entry in the timing wheel
///
/// 调用方的定时器只作为只读描述符保存；下一次到期时间由时间轮独占。
/// The caller's timer is kept as a read-only descriptor; the next expiration
/// time belongs to the wheel alone.
pub(crate) struct TimerEntry {
    /// 调用方提供的定时器
    /// Caller-supplied timer
    pub timer: Arc<dyn Timer>,
    /// 注册时读取的调度类型
    /// Scheduling kind captured at registration
    pub kind: TimerKind,
    /// 下一次到期时间
    /// Next expiration time
    pub next_expiration: Nanos,
}

impl TimerEntry {
    /// 创建新的定时器条目，首次到期时间为 `now + start_offset`
    /// Create new timer entry expiring first at `now + start_offset`
    pub fn new(timer: Arc<dyn Timer>, now: Nanos) -> Self {
        let kind = timer.kind();
        let next_expiration = now.saturating_add(duration_to_nanos(timer.start_offset()));
        Self {
            timer,
            kind,
            next_expiration,
        }
    }

    pub fn is_expired(&self, now: Nanos) -> bool {
        self.next_expiration <= now
    }

    /// 周期定时器重新设定到期时间，返回是否应保留在时间轮中
    /// Re-arm a periodic timer; returns whether the entry stays in the wheel
    pub fn rearm(&mut self, now: Nanos) -> bool {
        match self.kind {
            TimerKind::Periodic { interval } => {
                self.next_expiration = now.saturating_add(duration_to_nanos(interval));
                true
            }
            TimerKind::OneShot => false,
        }
    }
}
