//! Overall Rating 综合评分模块
//!
//! 综合评分是各项绩效指标的固定线性加权和：
//!
//! `Overall Rating = (进球/分钟 × 100 + 助攻/分钟 × 50 + 传球成功率 × 0.3
//!                   + 射正率 × 0.2 + 场均防守 × 0.1 + 场均跑动 × 0.1) / 6`
//!
//! 各输入不做量纲归一化。每分钟进球、助攻都是很小的分数，乘以较大的权重后在数值上占主导。
//! 默认权重与除数需要保持不变，以便与既有评分输出兼容。

use crate::statistic::metric::PerformanceMetrics;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 综合评分的各项权重与除数。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct RatingWeights {
    pub goals_per_minute: Decimal,
    pub assists_per_minute: Decimal,
    pub pass_accuracy: Decimal,
    pub shot_accuracy: Decimal,
    pub defensive_efficiency: Decimal,
    pub stamina: Decimal,
    pub divisor: Decimal,
}

impl Default for RatingWeights {
    fn default() -> Self {
        Self {
            goals_per_minute: Decimal::ONE_HUNDRED,
            assists_per_minute: Decimal::new(50, 0),
            pass_accuracy: Decimal::new(3, 1),
            shot_accuracy: Decimal::new(2, 1),
            defensive_efficiency: Decimal::new(1, 1),
            stamina: Decimal::new(1, 1),
            divisor: Decimal::new(6, 0),
        }
    }
}

/// 由 [`RatingWeights`] 加权得到的综合评分。
#[derive(Debug, Clone, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
pub struct OverallRating {
    pub value: Decimal,
}

impl OverallRating {
    /// 根据 `metrics` 中已经计算好的各项指标计算综合评分。
    ///
    /// `metrics.overall_rating` 本身不参与计算。除数为零或加权和溢出时返回零。
    pub fn calculate(metrics: &PerformanceMetrics, weights: &RatingWeights) -> Self {
        let weighted_sum = [
            (metrics.goals_per_minute, weights.goals_per_minute),
            (metrics.assists_per_minute, weights.assists_per_minute),
            (metrics.pass_accuracy, weights.pass_accuracy),
            (metrics.shot_accuracy, weights.shot_accuracy),
            (metrics.defensive_efficiency, weights.defensive_efficiency),
            (metrics.stamina, weights.stamina),
        ]
        .into_iter()
        .try_fold(Decimal::ZERO, |sum, (value, weight)| {
            sum.checked_add(value.checked_mul(weight)?)
        });

        Self {
            value: weighted_sum
                .and_then(|sum| sum.checked_div(weights.divisor))
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use touchline_domain::id::PlayerId;

    fn metrics() -> PerformanceMetrics {
        PerformanceMetrics {
            player_id: PlayerId::from("p1"),
            goals_per_minute: dec!(0.02),
            assists_per_minute: dec!(0.01),
            pass_accuracy: dec!(80),
            shot_accuracy: dec!(0.5),
            defensive_efficiency: dec!(3),
            stamina: dec!(8),
            overall_rating: Decimal::ZERO,
        }
    }

    #[test]
    fn test_overall_rating_hand_computed() {
        // (2 + 0.5 + 24 + 0.1 + 0.3 + 0.8) / 6 = 27.7 / 6
        let actual = OverallRating::calculate(&metrics(), &RatingWeights::default());

        assert_eq!(actual.value.round_dp(4), dec!(4.6167));
        assert_eq!(actual.value, dec!(27.7) / dec!(6));
    }

    #[test]
    fn test_overall_rating_ignores_previous_rating() {
        let mut input = metrics();
        input.overall_rating = dec!(1000);

        assert_eq!(
            OverallRating::calculate(&input, &RatingWeights::default()),
            OverallRating::calculate(&metrics(), &RatingWeights::default())
        );
    }

    #[test]
    fn test_overall_rating_zero_divisor() {
        let weights = RatingWeights {
            divisor: Decimal::ZERO,
            ..RatingWeights::default()
        };
        assert_eq!(
            OverallRating::calculate(&metrics(), &weights).value,
            Decimal::ZERO
        );
    }

    #[test]
    fn test_overall_rating_overflow_is_zero() {
        let input = PerformanceMetrics {
            stamina: Decimal::MAX,
            ..metrics()
        };
        let weights = RatingWeights {
            stamina: dec!(10),
            ..RatingWeights::default()
        };

        assert_eq!(OverallRating::calculate(&input, &weights).value, Decimal::ZERO);
    }
}
