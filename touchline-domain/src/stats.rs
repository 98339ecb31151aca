//! PlayerMatchStats 单场统计模块
//!
//! 本模块定义了单个球员在单场比赛中的统计记录，这是所有绩效指标聚合的输入单元。
//!
//! # 派生字段
//!
//! - **pass_accuracy**: `passes_completed / passes × 100`
//! - **shot_accuracy**: `shots_on_target / shots × 100`
//!
//! 派生字段由 [`PlayerMatchStats::calculate`] 在写入存储前计算一次，聚合核心直接使用
//! 预先计算好的值，不会根据原始计数重新计算。

use crate::{
    error::ValidationError,
    id::{MatchId, PlayerId},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 单场比赛中每名球员最多可以获得的黄牌数。
pub const MAX_YELLOW_CARDS: u32 = 2;

/// 单场比赛中每名球员最多可以获得的红牌数。
pub const MAX_RED_CARDS: u32 = 1;

/// 单场比赛中跑动距离的上限（公里）。
pub const MAX_DISTANCE_COVERED: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// 单个球员在单场比赛中的统计记录。
///
/// 计数器均为无符号整数，因此负数不可表示。记录之间的一致性约束
/// （例如射正数不超过射门数）由 [`validate`](Self::validate) 检查。
///
/// ## 字段说明
///
/// - **pass_accuracy**: 传球成功率（百分比，0 到 100）
/// - **shot_accuracy**: 射正率（百分比，0 到 100）
/// - **distance_covered**: 跑动距离（公里）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
pub struct PlayerMatchStats {
    pub player_id: PlayerId,
    pub match_id: MatchId,
    pub minutes_played: u32,
    pub goals: u32,
    pub assists: u32,
    pub shots: u32,
    pub shots_on_target: u32,
    pub passes: u32,
    pub passes_completed: u32,
    pub tackles: u32,
    pub interceptions: u32,
    pub fouls: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,
    pub pass_accuracy: Decimal,
    pub shot_accuracy: Decimal,
    pub distance_covered: Decimal,
}

impl PlayerMatchStats {
    /// 创建除出场时间外所有计数器均为零的统计记录。
    pub fn new(player_id: PlayerId, match_id: MatchId, minutes_played: u32) -> Self {
        Self {
            player_id,
            match_id,
            minutes_played,
            ..Self::default()
        }
    }

    /// 校验统计记录的内部一致性，以及传球成功率（0 到 100）和跑动距离（0 到
    /// [`MAX_DISTANCE_COVERED`]）的取值范围。
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.shots_on_target > self.shots {
            return Err(ValidationError::ShotsOnTargetExceedShots {
                on_target: self.shots_on_target,
                shots: self.shots,
            });
        }
        if self.passes_completed > self.passes {
            return Err(ValidationError::PassesCompletedExceedPasses {
                completed: self.passes_completed,
                passes: self.passes,
            });
        }
        if self.yellow_cards > MAX_YELLOW_CARDS || self.red_cards > MAX_RED_CARDS {
            return Err(ValidationError::InvalidCards {
                yellow: self.yellow_cards,
                red: self.red_cards,
            });
        }
        if self.pass_accuracy.is_sign_negative() || self.pass_accuracy > Decimal::ONE_HUNDRED {
            return Err(ValidationError::PassAccuracyOutOfRange(self.pass_accuracy));
        }
        if self.distance_covered.is_sign_negative() || self.distance_covered > MAX_DISTANCE_COVERED {
            return Err(ValidationError::DistanceOutOfRange {
                distance: self.distance_covered,
                max: MAX_DISTANCE_COVERED,
            });
        }
        Ok(())
    }

    /// 根据原始计数计算派生的百分比字段。
    ///
    /// 分母为零时保留字段原值。
    pub fn calculate(&mut self) {
        if let Some(accuracy) = percentage(self.passes_completed, self.passes) {
            self.pass_accuracy = accuracy;
        }
        if let Some(accuracy) = percentage(self.shots_on_target, self.shots) {
            self.shot_accuracy = accuracy;
        }
    }
}

fn percentage(part: u32, total: u32) -> Option<Decimal> {
    if total == 0 {
        return None;
    }
    Decimal::from(part)
        .checked_div(Decimal::from(total))?
        .checked_mul(Decimal::ONE_HUNDRED)
}
