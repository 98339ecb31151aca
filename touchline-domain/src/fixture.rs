//! Match 比赛模块
//!
//! 本模块定义了比赛实体及其状态。比赛的开球时间决定了它落入哪个统计时间窗口。

use crate::{
    error::ValidationError,
    id::{MatchId, TeamId},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// 比赛状态。
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    Ongoing,
    Completed,
    Cancelled,
}

impl Display for MatchStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                MatchStatus::Scheduled => "scheduled",
                MatchStatus::Ongoing => "ongoing",
                MatchStatus::Completed => "completed",
                MatchStatus::Cancelled => "cancelled",
            }
        )
    }
}

/// 比赛实体。
///
/// ## 字段说明
///
/// - **kick_off**: 开球时间（UTC），按日期范围查询比赛时以此为准
/// - **home_score** / **away_score**: 比分，未开赛时为 0
#[derive(Debug, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub struct Match {
    pub id: MatchId,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    pub kick_off: DateTime<Utc>,
    pub venue: String,
    pub competition: String,
    pub home_score: u8,
    pub away_score: u8,
    pub status: MatchStatus,
}

impl Match {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.home_team_id == self.away_team_id {
            return Err(ValidationError::SameTeams(self.home_team_id.clone()));
        }
        Ok(())
    }
}
