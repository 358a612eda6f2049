#![deny(clippy::expect_used, clippy::unwrap_used)]

//! The root of the in-process timer wheel library.
//! 进程内定时器轮库的根。

pub mod config;
pub mod error;
pub mod timer;

pub use config::{WheelConfig, WheelConfigBuilder};
pub use error::{Error, Result};
pub use timer::{ClosureTimer, Timer, TimerKind, TimerWheel, TimingWheelStats};
