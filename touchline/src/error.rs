//! Touchline 错误处理模块
//!
//! 聚合核心内部只有两类运行时错误：
//!
//! - **协作者失败**: 球员、比赛或统计存储不可达，或实体不存在
//! - **日期格式错误**: 进度查询的日期字符串不是 `YYYY-MM-DD`
//!
//! 所有数值边界情况（零出场时间、零射门、零记录、空分桶）都被吸收为零值结果，
//! 从不作为错误返回。多步编排中的第一个失败会立即中止整个调用，并将该失败原样返回。

use crate::config::ConfigError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use touchline_integration::{Unrecoverable, error::RepositoryError};

/// 表示 Touchline 核心可能遇到的所有错误。
#[derive(Debug, Clone, Eq, PartialEq, Deserialize, Serialize, Error)]
pub enum AnalyticsError {
    /// 协作者调用失败，原样包装底层 [`RepositoryError`]。
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),

    /// 日期字符串格式错误。
    #[error("invalid date '{input}', expected YYYY-MM-DD: {reason}")]
    InvalidDate { input: String, reason: String },

    #[error("config: {0}")]
    Config(#[from] ConfigError),
}

impl Unrecoverable for AnalyticsError {
    fn is_unrecoverable(&self) -> bool {
        match self {
            AnalyticsError::Repository(error) => error.is_unrecoverable(),
            AnalyticsError::InvalidDate { .. } | AnalyticsError::Config(_) => true,
        }
    }
}
