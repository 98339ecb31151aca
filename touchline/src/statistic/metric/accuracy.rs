//! Accuracy 准确率模块
//!
//! 本模块提供了两种口径不同的准确率指标：
//!
//! - **PassAccuracy**: 各条记录传球成功率（百分比）的算术平均值，即"平均值的平均值"
//! - **ShotAccuracy**: 总射正数除以总射门数，即真正的加权比率（0 到 1）
//!
//! 两者口径不对称：传球成功率不按传球次数加权，一场 1 次传球 1 次成功的比赛与一场
//! 99 次传球全部失败的比赛平均后为 50%，而加权比率约为 1%。为了与既有输出保持一致，
//! 两种口径都按原样保留。

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 各条统计记录传球成功率（百分比）的算术平均值。
///
/// ## 计算公式
///
/// `Pass Accuracy = Σ 单场传球成功率 / 记录数`
///
/// 单场传球成功率由存储层预先计算，本指标不会根据传球次数重新计算。
#[derive(Debug, Clone, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
pub struct PassAccuracy {
    /// 百分比（0 到 100）。
    pub value: Decimal,
}

impl PassAccuracy {
    pub fn calculate(sum_of_percentages: Decimal, records: u64) -> Self {
        if records == 0 {
            return Self::default();
        }

        let value = sum_of_percentages
            .checked_div(Decimal::from(records))
            .unwrap_or_default();

        Self { value }
    }
}

/// 总射正数与总射门数的比率（0 到 1）。
///
/// 没有射门时返回零。
#[derive(Debug, Clone, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
pub struct ShotAccuracy {
    pub value: Decimal,
}

impl ShotAccuracy {
    pub fn calculate(shots_on_target: u64, shots: u64) -> Self {
        if shots == 0 {
            return Self::default();
        }

        let value = Decimal::from(shots_on_target)
            .checked_div(Decimal::from(shots))
            .unwrap_or_default();

        Self { value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_pass_accuracy_is_mean_of_percentages() {
        // record A: 1/1 passes = 100%, record B: 0/99 passes = 0%
        let actual = PassAccuracy::calculate(dec!(100) + dec!(0), 2);
        assert_eq!(actual.value, dec!(50));

        // the pass-weighted ratio would be 1/100 = 1%, which is deliberately not used
        assert_ne!(actual.value, dec!(1));

        // no records
        assert_eq!(PassAccuracy::calculate(dec!(0), 0).value, Decimal::ZERO);
    }

    #[test]
    fn test_shot_accuracy_is_weighted_ratio() {
        // record A: 1/1 on target, record B: 0/99 on target
        assert_eq!(ShotAccuracy::calculate(1, 100).value, dec!(0.01));

        // no shots
        assert_eq!(ShotAccuracy::calculate(0, 0).value, Decimal::ZERO);

        // every shot on target
        assert_eq!(ShotAccuracy::calculate(7, 7).value, Decimal::ONE);
    }
}
