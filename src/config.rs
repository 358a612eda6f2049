//! 定义了时间轮的可配置参数。
//! Defines configurable parameters for the timer wheel.

use crate::error::{Error, Result};
use std::time::Duration;

/// A structure containing all configurable parameters for a timer wheel.
///
/// 包含时间轮所有可配置参数的结构体。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WheelConfig {
    /// The tick period of the background driver. A deadline is honored
    /// within one tick of this period.
    /// 后台驱动的滴答周期。到期时间的误差不超过一个周期。
    pub precision: Duration,
    /// The maximum number of timers that may be registered at the same time.
    /// 同时注册的定时器的最大数量。
    pub max_timers: usize,
}

impl WheelConfig {
    /// Creates a builder starting from the default configuration.
    /// 从默认配置创建构建器。
    pub fn builder() -> WheelConfigBuilder {
        WheelConfigBuilder::default()
    }

    /// Checks that the configuration can drive a wheel.
    /// 检查配置是否可以驱动时间轮。
    pub fn validate(&self) -> Result<()> {
        if self.precision.is_zero() {
            return Err(Error::InvalidConfig(
                "precision must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            precision: Duration::from_millis(10),
            max_timers: 1024,
        }
    }
}

/// Builder for [`WheelConfig`].
///
/// [`WheelConfig`] 的构建器。
#[derive(Debug, Clone, Default)]
pub struct WheelConfigBuilder {
    config: WheelConfig,
}

impl WheelConfigBuilder {
    /// Sets the tick period.
    /// 设置滴答周期。
    pub fn precision(mut self, precision: Duration) -> Self {
        self.config.precision = precision;
        self
    }

    /// Sets the capacity bound.
    /// 设置容量上限。
    pub fn max_timers(mut self, max_timers: usize) -> Self {
        self.config.max_timers = max_timers;
        self
    }

    /// Validates and returns the configuration.
    /// 校验并返回配置。
    pub fn build(self) -> Result<WheelConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
