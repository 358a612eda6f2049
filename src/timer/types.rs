//! 定时器契约定义
//! Timer contract definitions
//!
//! 本模块定义了调用方提供给时间轮的定时器 trait，以及一个基于闭包的便捷实现。
//! 时间轮只读取定时器的描述信息，下一次到期时间由时间轮内部独占维护。
//!
//! This module defines the timer trait that callers hand to the wheel, plus a
//! closure-based convenience implementation. The wheel only reads the timer's
//! descriptor; the next expiration time is owned exclusively by the wheel.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// 定时器的调度类型
/// Scheduling kind of a timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// 只触发一次，触发后从时间轮移除
    /// Fires once, then is removed from the wheel
    OneShot,
    /// 以固定间隔重复触发，直到被注销。下一次到期时间为触发时刻加上间隔；
    /// 间隔为零时定时器会在每个滴答触发。
    ///
    /// Fires repeatedly at a fixed interval until deregistered. The next
    /// expiration is the firing scan's time plus the interval; with a zero
    /// interval the timer fires on every tick.
    Periodic {
        /// 两次触发之间的间隔
        /// Gap between two firings
        interval: Duration,
    },
}

/// 由调用方提供的定时器
/// A caller-supplied timer
///
/// `name` 是时间轮内的唯一键，在定时器生命周期内必须保持不变。
/// `on_expired` 在时间轮锁之外调用，因此可以重新进入时间轮，但不应无限期阻塞。
///
/// `name` is the unique key inside one wheel and must stay stable for the
/// timer's lifetime. `on_expired` runs outside the wheel lock, so it may
/// re-enter the wheel, but it must not block indefinitely.
pub trait Timer: Send + Sync + 'static {
    /// 定时器名称（时间轮的键）
    /// Timer name (key in the wheel)
    fn name(&self) -> &str;

    /// 调度类型
    /// Scheduling kind
    fn kind(&self) -> TimerKind;

    /// 从注册到首次到期的延迟
    /// Delay from registration to the first expiration
    fn start_offset(&self) -> Duration;

    /// 到期回调
    /// Expiration callback
    fn on_expired(&self);

    /// 是否为周期定时器，由 [`Timer::kind`] 推导
    /// Whether this is a periodic timer, derived from [`Timer::kind`]
    fn is_periodic(&self) -> bool {
        matches!(self.kind(), TimerKind::Periodic { .. })
    }

    /// 是否为一次性定时器，与 [`Timer::is_periodic`] 互斥
    /// Whether this is a one-shot timer; mutually exclusive with [`Timer::is_periodic`]
    fn is_oneshot(&self) -> bool {
        !self.is_periodic()
    }
}

/// 基于闭包的定时器实现
/// Closure-based timer implementation
#[derive(Clone)]
pub struct ClosureTimer {
    name: String,
    kind: TimerKind,
    start_offset: Duration,
    callback: Arc<dyn Fn() + Send + Sync + 'static>,
}

impl ClosureTimer {
    /// 创建一次性定时器
    /// Create a one-shot timer
    pub fn oneshot<F>(name: impl Into<String>, start_offset: Duration, callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            kind: TimerKind::OneShot,
            start_offset,
            callback: Arc::new(callback),
        }
    }

    /// 创建周期定时器
    /// Create a periodic timer
    pub fn periodic<F>(
        name: impl Into<String>,
        start_offset: Duration,
        interval: Duration,
        callback: F,
    ) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            kind: TimerKind::Periodic { interval },
            start_offset,
            callback: Arc::new(callback),
        }
    }
}

impl Timer for ClosureTimer {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> TimerKind {
        self.kind
    }

    fn start_offset(&self) -> Duration {
        self.start_offset
    }

    fn on_expired(&self) {
        (self.callback)()
    }
}

impl fmt::Debug for ClosureTimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClosureTimer")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("start_offset", &self.start_offset)
            .finish_non_exhaustive()
    }
}
