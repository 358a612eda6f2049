//! 时间轮后台驱动
//! Timing wheel background driver

use super::core::Shared;
use std::sync::Weak;
use std::time::Duration;
use tokio::time::{MissedTickBehavior, interval};
use tracing::debug;

/// 运行驱动主循环，直到时间轮清空、代数过期或时间轮被释放
/// Run the driver loop until the wheel drains, the epoch goes stale, or the
/// wheel is dropped
pub(super) async fn run(shared: Weak<Shared>, epoch: u64, precision: Duration) {
    debug!(epoch, "Timer wheel driver started");

    let mut ticker = interval(precision);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;

        let Some(shared) = shared.upgrade() else {
            debug!(epoch, "Timer wheel dropped");
            break;
        };
        if !shared.tick(epoch) {
            break;
        }
    }

    debug!(epoch, "Timer wheel driver stopped");
}
