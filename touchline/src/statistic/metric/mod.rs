//! Metric 绩效指标模块
//!
//! 本模块提供了将一组单场统计记录归约为一个 [`PerformanceMetrics`] 的算法。
//!
//! # 核心指标
//!
//! - **goals_per_minute / assists_per_minute**: 总进球（助攻）/ 总出场分钟，见 [`rate::PerMinute`]
//! - **pass_accuracy**: 单场传球成功率的算术平均值，见 [`accuracy::PassAccuracy`]
//! - **shot_accuracy**: 总射正 / 总射门，见 [`accuracy::ShotAccuracy`]
//! - **defensive_efficiency**: 场均（抢断 + 拦截），见 [`rate::PerMatch`]
//! - **stamina**: 场均跑动距离，见 [`rate::PerMatch`]
//! - **overall_rating**: 固定权重的综合评分，见 [`rating::OverallRating`]

use crate::statistic::metric::{
    accuracy::{PassAccuracy, ShotAccuracy},
    rate::{PerMatch, PerMinute},
    rating::{OverallRating, RatingWeights},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use touchline_domain::{id::PlayerId, stats::PlayerMatchStats};

/// PassAccuracy 与 ShotAccuracy 计算逻辑。
pub mod accuracy;

/// PerMinute 与 PerMatch 计算逻辑。
pub mod rate;

/// Overall Rating 综合评分计算逻辑。
pub mod rating;

/// 一名球员在一组统计记录上的绩效指标。
///
/// 每次聚合调用都会构造一个新的实例，返回后归调用方独占所有，不会再被修改。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
pub struct PerformanceMetrics {
    pub player_id: PlayerId,
    pub goals_per_minute: Decimal,
    pub assists_per_minute: Decimal,
    /// 百分比（0 到 100）。
    pub pass_accuracy: Decimal,
    /// 比率（0 到 1）。
    pub shot_accuracy: Decimal,
    pub defensive_efficiency: Decimal,
    pub stamina: Decimal,
    pub overall_rating: Decimal,
}

impl PerformanceMetrics {
    /// 所有数值字段为零的指标。
    pub fn zero(player_id: PlayerId) -> Self {
        Self {
            player_id,
            ..Self::default()
        }
    }

    /// 将 `records` 归约为 [`PerformanceMetrics`]。
    ///
    /// 记录为空时返回全零指标，不执行任何除法。
    pub fn calculate<'a, Records>(
        player_id: PlayerId,
        records: Records,
        weights: &RatingWeights,
    ) -> Self
    where
        Records: IntoIterator<Item = &'a PlayerMatchStats>,
    {
        records
            .into_iter()
            .fold(
                PerformanceMetricsGenerator::init(player_id),
                |mut generator, record| {
                    generator.update(record);
                    generator
                },
            )
            .generate(weights)
    }
}

/// [`PerformanceMetrics`] 的生成器。
///
/// 逐条累加统计记录的计数器，并在任意时刻生成当前累加结果对应的指标。
///
/// ## 字段说明
///
/// - **records**: 已累加的记录数，作为 PerMatch 类指标和传球成功率的分母
/// - **pass_accuracy_sum**: 单场传球成功率（百分比）之和，不根据传球次数重新计算
/// - **passes**: 总传球次数，仅做累计，不参与任何指标
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
pub struct PerformanceMetricsGenerator {
    pub player_id: PlayerId,
    pub records: u64,
    pub minutes: u64,
    pub goals: u64,
    pub assists: u64,
    pub passes: u64,
    pub shots: u64,
    pub shots_on_target: u64,
    pub tackles: u64,
    pub interceptions: u64,
    pub pass_accuracy_sum: Decimal,
    pub distance_sum: Decimal,
}

impl PerformanceMetricsGenerator {
    pub fn init(player_id: PlayerId) -> Self {
        Self {
            player_id,
            ..Self::default()
        }
    }

    /// 累加下一条统计记录。
    ///
    /// `Decimal` 累加值溢出时饱和为 [`Decimal::MAX`]（或 [`Decimal::MIN`]），不会 panic。
    pub fn update(&mut self, record: &PlayerMatchStats) {
        self.records += 1;
        self.minutes += u64::from(record.minutes_played);
        self.goals += u64::from(record.goals);
        self.assists += u64::from(record.assists);
        self.passes += u64::from(record.passes);
        self.shots += u64::from(record.shots);
        self.shots_on_target += u64::from(record.shots_on_target);
        self.tackles += u64::from(record.tackles);
        self.interceptions += u64::from(record.interceptions);
        self.pass_accuracy_sum = self.pass_accuracy_sum.saturating_add(record.pass_accuracy);
        self.distance_sum = self.distance_sum.saturating_add(record.distance_covered);
    }

    pub fn is_empty(&self) -> bool {
        self.records == 0
    }

    /// 生成当前累加结果对应的 [`PerformanceMetrics`]。
    pub fn generate(&self, weights: &RatingWeights) -> PerformanceMetrics {
        if self.is_empty() {
            return PerformanceMetrics::zero(self.player_id.clone());
        }

        let mut metrics = PerformanceMetrics {
            player_id: self.player_id.clone(),
            goals_per_minute: PerMinute::calculate(self.goals, self.minutes).value,
            assists_per_minute: PerMinute::calculate(self.assists, self.minutes).value,
            pass_accuracy: PassAccuracy::calculate(self.pass_accuracy_sum, self.records).value,
            shot_accuracy: ShotAccuracy::calculate(self.shots_on_target, self.shots).value,
            defensive_efficiency: PerMatch::calculate(
                Decimal::from(self.tackles + self.interceptions),
                self.records,
            )
            .value,
            stamina: PerMatch::calculate(self.distance_sum, self.records).value,
            overall_rating: Decimal::ZERO,
        };

        metrics.overall_rating = OverallRating::calculate(&metrics, weights).value;
        metrics
    }
}
