//! TimeWindow 时间窗口模块
//!
//! 本模块将符号化的窗口标记与参考时刻解析为具体的半开区间 `[start, end)`，
//! 其中 `end` 总是参考时刻本身。
//!
//! # 解析规则
//!
//! - **week**: `start = end - 7 天`
//! - **month**: `start = end - 1 个日历月`，上个月没有同一天时多出的天数顺延到下个月
//! （例如 3 月 31 日得到 3 月 2 日）
//! - **season**: 赛季从每年 8 月 1 日开始；参考时刻的月份早于 8 月时，赛季起始年份为上一年
//! - **all**: `start = 2000-01-01`，即实际上无下界
//!
//! 标记区分大小写且不去除空白。无法识别的标记一律按 **all** 处理，这是明确的默认策略，而不是解析失败。

use crate::config::DEFAULT_SEASON_START_MONTH;
use chrono::{DateTime, Datelike, Days, NaiveDate, TimeZone, Utc};
use derive_more::Constructor;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt::{Display, Formatter};

/// "all" 窗口的默认起点（2000-01-01）。
pub const HISTORY_FLOOR: NaiveDate = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();

/// 选择相对时间范围的符号化窗口标记。
///
/// 从字符串转换时永不失败：只识别小写的 "week"、"month"、"season"，其余标记解析为 [`WindowToken::All`]。
///
/// # 使用示例
///
/// ```rust
/// use touchline::statistic::window::WindowToken;
///
/// assert_eq!(WindowToken::from("season"), WindowToken::Season);
/// assert_eq!(WindowToken::from("week"), WindowToken::Week);
/// assert_eq!(WindowToken::from("WEEK"), WindowToken::All);
/// assert_eq!(WindowToken::from("last-decade"), WindowToken::All);
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default, Deserialize, Serialize)]
#[serde(from = "SmolStr", into = "SmolStr")]
pub enum WindowToken {
    Week,
    Month,
    Season,
    #[default]
    All,
}

impl WindowToken {
    /// 返回窗口标记的规范名称。
    pub fn name(&self) -> SmolStr {
        SmolStr::new_static(match self {
            WindowToken::Week => "week",
            WindowToken::Month => "month",
            WindowToken::Season => "season",
            WindowToken::All => "all",
        })
    }
}

impl From<&str> for WindowToken {
    fn from(value: &str) -> Self {
        match value {
            "week" => WindowToken::Week,
            "month" => WindowToken::Month,
            "season" => WindowToken::Season,
            _ => WindowToken::All,
        }
    }
}

impl From<SmolStr> for WindowToken {
    fn from(value: SmolStr) -> Self {
        Self::from(value.as_str())
    }
}

impl From<WindowToken> for SmolStr {
    fn from(value: WindowToken) -> Self {
        value.name()
    }
}

impl Display for WindowToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 半开时间区间 `[start, end)`。
///
/// 每次请求时临时生成，不会被持久化。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize, Serialize, Constructor)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Display for TimeWindow {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// 将 [`WindowToken`] 解析为 [`TimeWindow`]。
///
/// 解析过程是纯函数：参考时刻由调用方传入，不读取系统时钟。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Deserialize, Serialize, Constructor)]
pub struct WindowResolver {
    /// 赛季开始的月份（1 到 12）。
    pub season_start_month: u32,
    /// "all" 窗口的起点。
    pub history_floor: DateTime<Utc>,
}

impl Default for WindowResolver {
    fn default() -> Self {
        Self {
            season_start_month: DEFAULT_SEASON_START_MONTH,
            history_floor: midnight(HISTORY_FLOOR),
        }
    }
}

impl WindowResolver {
    /// 以 `now` 为终点解析窗口。
    ///
    /// 该函数不会失败。起点在 chrono 可表示范围之外时（只可能出现在极端的参考时刻）
    /// 回退到 `history_floor` 和 `now` 中较早的一个。
    pub fn resolve(&self, token: WindowToken, now: DateTime<Utc>) -> TimeWindow {
        let start = match token {
            WindowToken::Week => now.checked_sub_days(Days::new(7)),
            WindowToken::Month => previous_month(now),
            WindowToken::Season => self.season_start(now),
            WindowToken::All => Some(self.history_floor),
        };

        TimeWindow {
            start: start.unwrap_or_else(|| self.history_floor.min(now)),
            end: now,
        }
    }

    /// 包含 `now` 的赛季的开始时刻。
    fn season_start(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let year = if now.month() < self.season_start_month {
            now.year() - 1
        } else {
            now.year()
        };

        Utc.with_ymd_and_hms(year, self.season_start_month, 1, 0, 0, 0)
            .single()
    }
}

/// `now` 往前推一个日历月，保留日期中的日与时刻。
///
/// 上个月没有同一天时（例如 3 月 31 日对应的 2 月 31 日），多出的天数顺延到下个月，
/// 而不是截断到月末：2024-03-31 得到 2024-03-02。
fn previous_month(now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let (year, month) = match now.month() {
        1 => (now.year() - 1, 12),
        month => (now.year(), month - 1),
    };

    NaiveDate::from_ymd_opt(year, month, 1)?
        .checked_add_days(Days::new(u64::from(now.day() - 1)))
        .map(|date| date.and_time(now.time()).and_utc())
}

/// 给定日期 00:00 UTC。
pub fn midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc()
}
