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

//! # Touchline-Domain
//! Touchline-Domain 包含核心的 Player、Team、Match 和单场比赛统计数据结构及相关工具。
//!
//! 所有实体都是纯数据，不执行任何 I/O。实体校验（`validate`）在写入存储之前由
//! 调用方执行，聚合核心假定收到的统计记录已经通过校验。
//!
//! ## 示例
//! 有关完整的使用示例，请参见 Touchline 核心 crate 的 /examples 目录。

/// 实体标识符新类型。
///
/// 例如：`PlayerId`、`TeamId`、`MatchId`。
pub mod id;

/// [`Player`](player::Player) 与 [`Position`](player::Position) 数据结构。
pub mod player;

/// [`Team`](team::Team) 数据结构。
pub mod team;

/// [`Match`](fixture::Match) 赛程与赛果数据结构。
pub mod fixture;

/// 单个球员在单场比赛中的统计记录 [`PlayerMatchStats`](stats::PlayerMatchStats)。
pub mod stats;

/// 实体校验错误。
pub mod error;

pub mod test_utils {
    use crate::{
        fixture::{Match, MatchStatus},
        id::{MatchId, PlayerId, TeamId},
        player::{Player, Position},
        stats::PlayerMatchStats,
        team::Team,
    };
    use chrono::{DateTime, Days, NaiveDate, TimeZone, Utc};
    use rust_decimal::Decimal;

    /// 构造给定日期 00:00 UTC 的时间戳。
    ///
    /// # Panics
    ///
    /// 如果日期无效，此函数会 panic。
    pub fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
    }

    /// 在基础时间上增加指定的天数。
    ///
    /// # Panics
    ///
    /// 如果时间溢出，此函数会 panic。
    pub fn time_plus_days(base: DateTime<Utc>, plus: u64) -> DateTime<Utc> {
        base.checked_add_days(Days::new(plus)).unwrap()
    }

    pub fn team(id: &str) -> Team {
        Team {
            id: TeamId::from(id),
            name: format!("{id} FC"),
            country: "England".to_string(),
            league: "Premier League".to_string(),
            logo: String::new(),
        }
    }

    pub fn player(id: &str, team: &str, position: Position) -> Player {
        Player {
            id: PlayerId::from(id),
            name: format!("Player {id}"),
            position,
            team_id: TeamId::from(team),
            number: 10,
            birthday: NaiveDate::from_ymd_opt(1998, 6, 15).unwrap(),
            height: 180,
            weight: 75,
        }
    }

    /// 创建一场在 `kick_off` 开球、已完赛的测试比赛。
    pub fn fixture(id: &str, kick_off: DateTime<Utc>) -> Match {
        Match {
            id: MatchId::from(id),
            home_team_id: TeamId::from("home"),
            away_team_id: TeamId::from("away"),
            kick_off,
            venue: "Stadium".to_string(),
            competition: "League".to_string(),
            home_score: 1,
            away_score: 0,
            status: MatchStatus::Completed,
        }
    }

    /// 创建一条测试用统计记录，除出场时间外所有计数器均为零。
    pub fn stats(player: &str, fixture: &str, minutes: u32) -> PlayerMatchStats {
        PlayerMatchStats::new(PlayerId::from(player), MatchId::from(fixture), minutes)
    }

    /// 创建一条带有常用计数器的测试用统计记录。
    pub fn stats_with(
        player: &str,
        fixture: &str,
        minutes: u32,
        goals: u32,
        assists: u32,
        pass_accuracy: Decimal,
        distance_covered: Decimal,
    ) -> PlayerMatchStats {
        PlayerMatchStats {
            goals,
            assists,
            pass_accuracy,
            distance_covered,
            ..stats(player, fixture, minutes)
        }
    }
}
