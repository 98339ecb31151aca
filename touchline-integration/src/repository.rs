//! Repository 协作者契约模块
//!
//! 本模块定义了聚合核心读取数据所需的三个能力接口。每个接口只暴露聚合核心需要的
//! 读取操作，写入与校验由具体的存储实现负责。
//!
//! # 语义约定
//!
//! - 所有调用都是原子的：要么返回完整结果，要么返回 [`RepositoryError`]
//! - 本层不定义超时、重试或取消，这些属于具体的存储实现

use crate::error::RepositoryError;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use touchline_domain::{fixture::Match, id::PlayerId, player::Player, stats::PlayerMatchStats};

/// 球员查找能力。
pub trait PlayerRepository {
    /// 按标识符查找球员，不存在时返回 [`RepositoryError::NotFound`]。
    fn get_player(
        &self,
        id: &PlayerId,
    ) -> impl Future<Output = Result<Player, RepositoryError>>;

    /// 列出全部球员。
    fn list_players(&self) -> impl Future<Output = Result<Vec<Player>, RepositoryError>>;
}

/// 比赛范围查询能力。
pub trait MatchRepository {
    /// 列出开球时间位于半开区间 `[start, end)` 内的比赛，按开球时间升序排列。
    ///
    /// 调用方将返回的集合视为权威结果，不再做额外的日期过滤。
    fn list_matches_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> impl Future<Output = Result<Vec<Match>, RepositoryError>>;
}

/// 统计记录列表能力。
pub trait PlayerStatsRepository {
    /// 列出某名球员的全部单场统计记录。
    ///
    /// 记录已经过校验且内部一致，顺序由存储决定（假定为时间顺序）。
    fn list_player_stats(
        &self,
        player: &PlayerId,
    ) -> impl Future<Output = Result<Vec<PlayerMatchStats>, RepositoryError>>;
}

impl<T> PlayerRepository for Arc<T>
where
    T: PlayerRepository,
{
    fn get_player(
        &self,
        id: &PlayerId,
    ) -> impl Future<Output = Result<Player, RepositoryError>> {
        T::get_player(self, id)
    }

    fn list_players(&self) -> impl Future<Output = Result<Vec<Player>, RepositoryError>> {
        T::list_players(self)
    }
}

impl<T> MatchRepository for Arc<T>
where
    T: MatchRepository,
{
    fn list_matches_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> impl Future<Output = Result<Vec<Match>, RepositoryError>> {
        T::list_matches_between(self, start, end)
    }
}

impl<T> PlayerStatsRepository for Arc<T>
where
    T: PlayerStatsRepository,
{
    fn list_player_stats(
        &self,
        player: &PlayerId,
    ) -> impl Future<Output = Result<Vec<PlayerMatchStats>, RepositoryError>> {
        T::list_player_stats(self, player)
    }
}
