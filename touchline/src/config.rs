//! AnalyticsConfig 配置模块
//!
//! 本模块提供了分析服务的配置结构。所有字段都有默认值，默认值与固定的业务规则一致：
//!
//! - 进度分桶大小为 5 场比赛
//! - 赛季从 8 月 1 日开始
//! - "all" 窗口的起点为 2000-01-01
//! - 多球员对比与按位置分组统计使用 "season" 窗口
//! - 综合评分使用固定权重（100、50、0.3、0.2、0.1、0.1，除数 6）
//!
//! 配置文件可以只覆盖部分字段，未出现的字段使用默认值。

use crate::statistic::{
    metric::rating::RatingWeights,
    window::{HISTORY_FLOOR, WindowToken},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{io::Read, num::NonZeroUsize};
use thiserror::Error;

/// 每个进度分桶包含的比赛数。
pub const DEFAULT_PROGRESS_BUCKET_SIZE: NonZeroUsize = NonZeroUsize::new(5).unwrap();

/// 赛季开始的月份（8 月）。
pub const DEFAULT_SEASON_START_MONTH: u32 = 8;

/// 配置加载与校验错误。
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize, Serialize, Error)]
pub enum ConfigError {
    #[error("failed to parse AnalyticsConfig: {0}")]
    Parse(String),

    #[error("season_start_month must be within 1..=12, got {0}")]
    InvalidSeasonStartMonth(u32),

    #[error("rating_weights.divisor must be non-zero")]
    ZeroRatingDivisor,
}

/// 分析服务配置。
///
/// # 使用示例
///
/// ```rust
/// use touchline::config::AnalyticsConfig;
///
/// let config = AnalyticsConfig::from_json_str(r#"{ "progress_bucket_size": 3 }"#).unwrap();
/// assert_eq!(config.progress_bucket_size.get(), 3);
/// assert_eq!(config.season_start_month, 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// 每个进度分桶包含的比赛数（按已遍历的比赛计数，而非按出场记录计数）。
    pub progress_bucket_size: NonZeroUsize,

    /// 赛季开始的月份，赛季从该月 1 日 00:00 UTC 开始。
    pub season_start_month: u32,

    /// "all" 窗口的起点日期。
    pub history_floor: NaiveDate,

    /// 多球员对比与按位置分组统计使用的时间窗口。
    pub comparison_window: WindowToken,

    /// 综合评分权重。
    pub rating_weights: RatingWeights,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            progress_bucket_size: DEFAULT_PROGRESS_BUCKET_SIZE,
            season_start_month: DEFAULT_SEASON_START_MONTH,
            history_floor: HISTORY_FLOOR,
            comparison_window: WindowToken::Season,
            rating_weights: RatingWeights::default(),
        }
    }
}

impl AnalyticsConfig {
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        serde_json::from_str::<Self>(input)
            .map_err(|error| ConfigError::Parse(error.to_string()))?
            .validate()
    }

    pub fn from_reader<R>(reader: R) -> Result<Self, ConfigError>
    where
        R: Read,
    {
        serde_json::from_reader::<_, Self>(reader)
            .map_err(|error| ConfigError::Parse(error.to_string()))?
            .validate()
    }

    /// 检查反序列化无法表达的约束。
    pub fn validate(self) -> Result<Self, ConfigError> {
        if !(1..=12).contains(&self.season_start_month) {
            return Err(ConfigError::InvalidSeasonStartMonth(
                self.season_start_month,
            ));
        }
        if self.rating_weights.divisor.is_zero() {
            return Err(ConfigError::ZeroRatingDivisor);
        }
        Ok(self)
    }
}
