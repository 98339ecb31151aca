//! Rate 比率模块
//!
//! 本模块提供了两类按分母归一化的指标：
//!
//! - **PerMinute**: 按出场分钟数归一化，例如每分钟进球数
//! - **PerMatch**: 按统计记录数（即出场场次）归一化，例如场均抢断加拦截、场均跑动距离
//!
//! 两者的分母为零时都返回零，而不是失败。

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 每分钟发生次数，计算公式为 `count / minutes`。
///
/// 出场时间为零时（例如只有替补未登场的记录）返回零。
#[derive(Debug, Clone, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
pub struct PerMinute {
    pub value: Decimal,
}

impl PerMinute {
    pub fn calculate(count: u64, minutes: u64) -> Self {
        if minutes == 0 {
            return Self::default();
        }

        let value = Decimal::from(count)
            .checked_div(Decimal::from(minutes))
            .unwrap_or_default();

        Self { value }
    }
}

/// 场均值，计算公式为 `total / matches`。
///
/// `matches` 是参与聚合的统计记录数，而不是窗口内的比赛总数。
#[derive(Debug, Clone, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
pub struct PerMatch {
    pub value: Decimal,
}

impl PerMatch {
    pub fn calculate(total: Decimal, matches: u64) -> Self {
        if matches == 0 {
            return Self::default();
        }

        let value = total
            .checked_div(Decimal::from(matches))
            .unwrap_or_default();

        Self { value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_per_minute_calculate() {
        // no minutes played
        assert_eq!(PerMinute::calculate(3, 0).value, Decimal::ZERO);

        // no events
        assert_eq!(PerMinute::calculate(0, 90).value, Decimal::ZERO);

        // one goal every 90 minutes
        assert_eq!(
            PerMinute::calculate(1, 90).value.round_dp(6),
            dec!(0.011111)
        );

        // exact ratio
        assert_eq!(PerMinute::calculate(2, 100).value, dec!(0.02));
    }

    #[test]
    fn test_per_match_calculate() {
        // no matches
        assert_eq!(PerMatch::calculate(dec!(10), 0).value, Decimal::ZERO);

        // tackles plus interceptions over 4 matches
        assert_eq!(PerMatch::calculate(dec!(12), 4).value, dec!(3));

        // distance covered
        assert_eq!(PerMatch::calculate(dec!(21.5), 2).value, dec!(10.75));
    }
}
