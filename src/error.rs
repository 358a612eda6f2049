//! 定义了库中所有可能的错误类型。
//! Defines all possible error types in the library.

use thiserror::Error;

/// The primary error type for the timer wheel library.
/// 定时器轮库的主要错误类型。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The wheel already holds `max_timers` timers and cannot accept another.
    /// 时间轮已持有 `max_timers` 个定时器，无法再接收新的定时器。
    #[error("Already have max timers ({max_timers}) in the timer wheel")]
    CapacityExceeded {
        /// The configured capacity bound.
        /// 配置的容量上限。
        max_timers: usize,
    },

    /// The supplied configuration was rejected.
    /// 提供的配置无效。
    #[error("Invalid timer wheel configuration: {0}")]
    InvalidConfig(String),

    /// No tokio runtime was available to host the background driver.
    ///
    /// 没有可用于承载后台驱动任务的 tokio 运行时。
    #[error("No tokio runtime available to run the timer wheel driver")]
    NoRuntime,
}

/// A specialized `Result` type for this library.
/// 本库专用的 `Result` 类型。
pub type Result<T> = std::result::Result<T, Error>;
