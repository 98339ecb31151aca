//! Statistic 统计模块
//!
//! 本模块提供了从单场比赛统计推导球员绩效指标的全部纯计算逻辑。
//!
//! # 核心概念
//!
//! - **window**: 将窗口标记解析为具体的半开时间区间
//! - **select**: 比赛集合选择与统计记录过滤
//! - **metric**: 绩效指标及其归约算法
//! - **progress**: 按固定比赛数分桶生成绩效时间序列
//! - **display**: 绩效指标的表格输出
//!
//! 本模块中的所有函数都没有副作用，对不同球员的计算可以安全地并发执行。

/// 绩效指标的表格输出。
pub mod display;

/// 绩效指标及其归约算法。
///
/// 例如：`PerformanceMetrics`、`PerMinute`、`PassAccuracy`、`OverallRating` 等。
pub mod metric;

/// 按固定比赛数分桶的进度时间序列。
pub mod progress;

/// 比赛集合选择与统计记录过滤。
pub mod select;

/// 时间窗口定义与解析。
///
/// 例如：`WindowToken::Season`、`TimeWindow` 等。
pub mod window;
