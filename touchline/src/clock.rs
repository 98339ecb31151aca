//! Clock 时钟模块
//!
//! 时间窗口以"当前时间"为终点。分析服务通过 [`AnalyticsClock`] 读取当前时间，
//! 再把它作为参数传给纯函数 [`WindowResolver::resolve`](crate::statistic::window::WindowResolver::resolve)，
//! 因此窗口解析本身不读取任何全局状态。
//!
//! - **LiveClock**: 使用系统当前时间
//! - **FixedClock**: 始终返回同一时刻，用于测试和历史报告

use chrono::{DateTime, Utc};
use derive_more::Constructor;
use serde::{Deserialize, Serialize};

/// 定义分析服务如何确定当前时间。
pub trait AnalyticsClock {
    fn time(&self) -> DateTime<Utc>;
}

/// 使用系统当前时间的实时时钟。
#[derive(Debug, Copy, Clone, Default, Deserialize, Serialize)]
pub struct LiveClock;

impl AnalyticsClock for LiveClock {
    fn time(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// 始终返回构造时给定时刻的时钟。
///
/// 用于生成某个历史时刻的报告，例如"截至 2024-05-31 的赛季数据"。
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize, Serialize, Constructor)]
pub struct FixedClock {
    pub time: DateTime<Utc>,
}

impl AnalyticsClock for FixedClock {
    fn time(&self) -> DateTime<Utc> {
        self.time
    }
}

impl<T> AnalyticsClock for &T
where
    T: AnalyticsClock,
{
    fn time(&self) -> DateTime<Utc> {
        T::time(self)
    }
}
