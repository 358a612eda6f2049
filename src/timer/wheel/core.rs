//! 时间轮核心实现
//! Timing wheel core implementation
//!
//! 一把互斥锁同时保护定时器映射、运行标志、驱动代数与统计信息。
//! 每次注册/注销，以及每个滴答的扫描与更新，都在这把锁内完整执行；
//! 到期回调则在释放锁之后调用。
//!
//! A single mutex guards the timer map, the running flag, the driver epoch
//! and the statistics. Each register/deregister call and the scan-and-update
//! pass of each tick run entirely under this lock; expiration callbacks are
//! invoked after it has been released.

use crate::config::WheelConfig;
use crate::error::{Error, Result};
use crate::timer::clock::{MonotonicClock, Nanos};
use crate::timer::types::Timer;
use crate::timer::wheel::driver;
use crate::timer::wheel::entry::TimerEntry;
use crate::timer::wheel::stats::TimingWheelStats;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tracing::{debug, error, trace, warn};

/// 定时器轮
/// Timer wheel
///
/// 句柄可以廉价克隆并在线程间共享。所有句柄被释放后，后台驱动会在下一个滴答退出。
///
/// The handle is cheap to clone and may be shared across threads. Once every
/// handle is dropped the background driver exits on its next tick.
#[derive(Clone)]
pub struct TimerWheel {
    shared: Arc<Shared>,
}

/// 驱动与句柄共享的状态
/// State shared between the handles and the driver
pub(super) struct Shared {
    config: WheelConfig,
    clock: MonotonicClock,
    runtime: Handle,
    state: Mutex<WheelState>,
}

#[derive(Default)]
struct WheelState {
    timers: HashMap<String, TimerEntry>,
    /// 驱动是否正在扫描
    /// Whether the driver is actively scanning
    running: bool,
    /// 当前驱动的代数；代数不匹配的驱动会自行退出
    /// Generation of the current driver; a driver with a stale epoch exits
    epoch: u64,
    /// 扫描时收集到期名称的缓冲区，避免边遍历边修改映射
    /// Scratch buffer for expired names so the map is never mutated mid-iteration
    expired_names: Vec<String>,
    registered: u64,
    rejected: u64,
    deregistered: u64,
    fired: u64,
    callback_panics: u64,
    ticks: u64,
}

impl WheelState {
    /// 两遍处理：先收集到期名称，再重新设定周期定时器、移除一次性定时器
    /// Two passes: collect expired names, then re-arm periodic entries and
    /// remove one-shot entries
    fn collect_expired(&mut self, now: Nanos) -> Vec<Arc<dyn Timer>> {
        let mut names = std::mem::take(&mut self.expired_names);
        names.extend(
            self.timers
                .iter()
                .filter(|(_, entry)| entry.is_expired(now))
                .map(|(name, _)| name.clone()),
        );

        let mut expired = Vec::with_capacity(names.len());
        for name in names.drain(..) {
            let Some(entry) = self.timers.get_mut(&name) else {
                continue;
            };
            expired.push(Arc::clone(&entry.timer));
            if !entry.rearm(now) {
                self.timers.remove(&name);
            }
        }

        self.expired_names = names;
        expired
    }
}

impl TimerWheel {
    /// 使用给定的精度和容量创建时间轮，必须在 tokio 运行时内调用
    /// Create a wheel with the given precision and capacity; must be called
    /// inside a tokio runtime
    pub fn new(precision: Duration, max_timers: usize) -> Result<Self> {
        Self::with_config(WheelConfig {
            precision,
            max_timers,
        })
    }

    /// 使用配置创建时间轮，驱动运行在当前 tokio 运行时上
    /// Create a wheel from a config; the driver runs on the current tokio runtime
    pub fn with_config(config: WheelConfig) -> Result<Self> {
        let runtime = Handle::try_current().map_err(|_| Error::NoRuntime)?;
        Self::with_config_and_handle(config, runtime)
    }

    /// 使用配置和指定的运行时句柄创建时间轮
    /// Create a wheel from a config and an explicit runtime handle
    ///
    /// # Errors
    /// 精度为零时返回 [`Error::InvalidConfig`]。
    /// Returns [`Error::InvalidConfig`] when the precision is zero.
    pub fn with_config_and_handle(config: WheelConfig, runtime: Handle) -> Result<Self> {
        config.validate()?;
        debug!(
            precision = ?config.precision,
            max_timers = config.max_timers,
            "Timer wheel created"
        );
        Ok(Self {
            shared: Arc::new(Shared {
                config,
                clock: MonotonicClock::new(),
                runtime,
                state: Mutex::new(WheelState::default()),
            }),
        })
    }

    /// 注册定时器
    /// Register timer
    ///
    /// 同名定时器会被覆盖。若注册前时间轮为空，则启动新的后台驱动。
    /// A timer with the same name is replaced. If the wheel was empty before
    /// this call, a fresh background driver is started.
    ///
    /// # Errors
    /// 已有 `max_timers` 个定时器时返回 [`Error::CapacityExceeded`]，时间轮保持不变。
    /// Returns [`Error::CapacityExceeded`] when `max_timers` timers are already
    /// registered; the wheel is left unchanged.
    ///
    /// 运行时已关闭、无法启动驱动时返回 [`Error::NoRuntime`]，时间轮同样保持不变。
    /// Returns [`Error::NoRuntime`] when the runtime has shut down and no
    /// driver can be started; the wheel is likewise left unchanged.
    pub fn register<T: Timer>(&self, timer: Arc<T>) -> Result<()> {
        self.register_shared(timer)
    }

    /// 注册类型擦除后的定时器
    /// Register a type-erased timer
    pub fn register_shared(&self, timer: Arc<dyn Timer>) -> Result<()> {
        let max_timers = self.shared.config.max_timers;
        let mut state = self.shared.state.lock();

        if state.timers.len() >= max_timers {
            state.rejected += 1;
            warn!(name = timer.name(), max_timers, "Timer wheel is full, registration rejected");
            return Err(Error::CapacityExceeded { max_timers });
        }

        let was_empty = state.timers.is_empty();
        let entry = TimerEntry::new(timer, self.shared.clock.now_nanos());
        let name = entry.timer.name().to_owned();

        if was_empty {
            // 驱动在获取锁之前无法退出，因此此时已结束只可能是运行时已关闭
            // The driver cannot exit before it takes the lock, so a finished
            // task here means the runtime has shut down
            let epoch = state.epoch.wrapping_add(1);
            let driver = self.shared.runtime.spawn(driver::run(
                Arc::downgrade(&self.shared),
                epoch,
                self.shared.config.precision,
            ));
            if driver.is_finished() {
                warn!(name = %name, "Timer wheel runtime is gone, registration rejected");
                return Err(Error::NoRuntime);
            }
            state.epoch = epoch;
            state.running = true;
        }

        trace!(
            name = %name,
            kind = ?entry.kind,
            next_expiration = entry.next_expiration,
            "Timer registered successfully"
        );

        state.timers.insert(name, entry);
        state.registered += 1;

        Ok(())
    }

    /// 注销定时器；定时器不存在时为空操作
    /// Deregister timer; a no-op when the timer is absent
    ///
    /// # Returns
    /// 返回是否确实移除了条目
    /// Returns whether an entry was actually removed
    pub fn deregister<T: Timer + ?Sized>(&self, timer: &T) -> bool {
        self.deregister_by_name(timer.name())
    }

    /// 按名称注销定时器
    /// Deregister timer by name
    pub fn deregister_by_name(&self, name: &str) -> bool {
        let mut state = self.shared.state.lock();
        if state.timers.remove(name).is_none() {
            return false;
        }

        state.deregistered += 1;
        trace!(name, "Timer deregistered");

        if state.timers.is_empty() {
            state.running = false;
            debug!("Timer wheel drained, driver will stop");
        }
        true
    }

    /// 驱动是否正在扫描（即时间轮非空）
    /// Whether the driver is actively scanning (the wheel is non-empty)
    pub fn is_running(&self) -> bool {
        self.shared.state.lock().running
    }

    pub fn len(&self) -> usize {
        self.shared.state.lock().timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shared.state.lock().timers.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.shared.state.lock().timers.contains_key(name)
    }

    /// 指定定时器的下一次到期时间
    /// Next expiration time of the named timer
    pub fn next_expiration(&self, name: &str) -> Option<Nanos> {
        self.shared
            .state
            .lock()
            .timers
            .get(name)
            .map(|entry| entry.next_expiration)
    }

    /// 时间轮时钟的当前时间戳
    /// Current timestamp on the wheel's clock
    pub fn now_nanos(&self) -> Nanos {
        self.shared.clock.now_nanos()
    }

    pub fn precision(&self) -> Duration {
        self.shared.config.precision
    }

    pub fn max_timers(&self) -> usize {
        self.shared.config.max_timers
    }

    /// 获取统计信息
    /// Get statistics
    pub fn stats(&self) -> TimingWheelStats {
        let state = self.shared.state.lock();
        TimingWheelStats {
            active_timers: state.timers.len(),
            max_timers: self.shared.config.max_timers,
            precision: self.shared.config.precision,
            running: state.running,
            registered: state.registered,
            rejected: state.rejected,
            deregistered: state.deregistered,
            fired: state.fired,
            callback_panics: state.callback_panics,
            ticks: state.ticks,
        }
    }
}

impl std::fmt::Debug for TimerWheel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerWheel")
            .field("config", &self.shared.config)
            .finish_non_exhaustive()
    }
}

impl Shared {
    /// 执行一次滴答
    /// Perform one tick
    ///
    /// # Returns
    /// 返回false表示驱动应该退出
    /// Returns false if the driver should exit
    pub(super) fn tick(&self, epoch: u64) -> bool {
        let now = self.clock.now_nanos();

        let (expired, keep_running) = {
            let mut state = self.state.lock();
            if !state.running || state.epoch != epoch {
                return false;
            }

            state.ticks += 1;
            let expired = state.collect_expired(now);
            if state.timers.is_empty() {
                state.running = false;
                debug!(epoch, "Timer wheel drained by expiry, driver will stop");
            }
            (expired, state.running)
        };

        if !expired.is_empty() {
            let panics = fire_expired(&expired);
            let mut state = self.state.lock();
            state.fired += expired.len() as u64;
            state.callback_panics += panics;
        }

        keep_running
    }
}

/// 逐个调用到期回调，单个回调 panic 不会影响其余定时器
/// Invoke each expired callback; one panicking callback does not affect the rest
///
/// # Returns
/// 返回发生 panic 的回调数
/// Returns the number of callbacks that panicked
fn fire_expired(expired: &[Arc<dyn Timer>]) -> u64 {
    let mut panics = 0;
    for timer in expired {
        trace!(name = timer.name(), "Timer expired");
        if panic::catch_unwind(AssertUnwindSafe(|| timer.on_expired())).is_err() {
            panics += 1;
            error!(name = timer.name(), "Timer callback panicked");
        }
    }
    panics
}
