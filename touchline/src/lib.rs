#![forbid(unsafe_code)]
#![warn(
    unused,
    clippy::cognitive_complexity,
    unused_crate_dependencies,
    unused_extern_crates,
    clippy::unused_self,
    clippy::useless_let_if_seq,
    missing_debug_implementations,
    rust_2018_idioms,
    rust_2024_compatibility
)]
#![allow(clippy::type_complexity, clippy::too_many_arguments, type_alias_bounds)]

//! # Touchline
//! Touchline 核心是一个用于从单场比赛统计中推导球员绩效指标的 Rust 框架。
//! * **确定性**：时间窗口解析、指标归约和进度分桶都是纯函数，当前时间通过时钟显式注入。
//! * **精确**：所有指标使用 `Decimal` 计算，综合评分在不同平台上逐位一致。
//! * **可替换**：存储通过能力接口抽象，聚合核心可以使用内存实现进行单元测试。
//!
//! ## 概述
//! 从高层次来看，它提供了几个主要组件：
//! * 将窗口标记（"week"、"month"、"season"、其他）解析为具体半开区间的 `WindowResolver`。
//! * 将统计记录折叠为 `PerformanceMetrics` 的 `PerformanceMetricsGenerator`。
//! * 按固定比赛数分桶、生成绩效时间序列的 `ProgressBucketer`。
//! * 组合上述组件的 `AnalyticsService`：单球员绩效、多球员对比、进度曲线、按位置分组的球队绩效。
//!
//! ## 快速开始
//! 参见 `touchline/examples/season_report.rs`。

/// 组合窗口解析、比赛选择、统计过滤和指标归约的分析服务。
///
/// 例如：`AnalyticsService::calculate_player_performance`、`compare_player_performance` 等。
pub mod analytics;

/// 定义分析服务如何确定当前时间。
pub mod clock;

/// 分析服务配置。
pub mod config;

/// 定义 Touchline 核心中所有可能的错误。
pub mod error;

/// 提供 Touchline 核心的默认 Tracing 日志初始化器。
pub mod logging;

/// 绩效指标、时间窗口与进度分桶算法。
///
/// 例如：`PerformanceMetrics`、`TimeWindow`、`ProgressBucketer` 等。
pub mod statistic;
