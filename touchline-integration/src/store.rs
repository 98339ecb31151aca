//! InMemoryStore 内存存储模块
//!
//! 本模块提供了实现全部协作者契约的内存存储。写入操作在存储之前执行实体校验，
//! 并计算统计记录的派生字段，因此读取到的数据总是满足聚合核心的前置条件。

use crate::{
    collection::FnvIndexMap,
    error::{Entity, RepositoryError},
    repository::{MatchRepository, PlayerRepository, PlayerStatsRepository},
};
use chrono::{DateTime, Utc};
use itertools::Itertools;
use parking_lot::RwLock;
use touchline_domain::{
    fixture::Match,
    id::{MatchId, PlayerId, TeamId},
    player::Player,
    stats::PlayerMatchStats,
    team::Team,
};
use tracing::debug;

/// 实现 [`PlayerRepository`]、[`MatchRepository`] 和 [`PlayerStatsRepository`] 的内存存储。
///
/// 实体按插入顺序保存。统计记录以 `(PlayerId, MatchId)` 为键，重复写入同一场比赛的
/// 记录会原地替换旧记录。
///
/// 通过 [`set_unavailable`](Self::set_unavailable) 可以模拟存储故障，此时所有读取操作
/// 都返回 [`RepositoryError::Unavailable`]。
#[derive(Debug, Default)]
pub struct InMemoryStore {
    players: RwLock<FnvIndexMap<PlayerId, Player>>,
    teams: RwLock<FnvIndexMap<TeamId, Team>>,
    matches: RwLock<FnvIndexMap<MatchId, Match>>,
    stats: RwLock<FnvIndexMap<(PlayerId, MatchId), PlayerMatchStats>>,
    outage: RwLock<Option<String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_team(&self, team: Team) -> Result<(), RepositoryError> {
        team.validate().map_err(|error| RepositoryError::Invalid {
            entity: Entity::Team,
            error,
        })?;
        self.teams.write().insert(team.id.clone(), team);
        Ok(())
    }

    /// 写入球员，所属球队必须已经存在。
    pub fn insert_player(&self, player: Player) -> Result<(), RepositoryError> {
        player.validate().map_err(|error| RepositoryError::Invalid {
            entity: Entity::Player,
            error,
        })?;

        if !self.teams.read().contains_key(&player.team_id) {
            return Err(RepositoryError::not_found(Entity::Team, &player.team_id));
        }

        self.players.write().insert(player.id.clone(), player);
        Ok(())
    }

    pub fn insert_match(&self, fixture: Match) -> Result<(), RepositoryError> {
        fixture.validate().map_err(|error| RepositoryError::Invalid {
            entity: Entity::Match,
            error,
        })?;
        self.matches.write().insert(fixture.id.clone(), fixture);
        Ok(())
    }

    /// 校验并写入一条统计记录。
    ///
    /// 记录引用的球员和比赛必须已经存在。写入前会调用
    /// [`PlayerMatchStats::calculate`] 计算派生的百分比字段。
    pub fn insert_player_stats(&self, mut stats: PlayerMatchStats) -> Result<(), RepositoryError> {
        stats.validate().map_err(|error| RepositoryError::Invalid {
            entity: Entity::PlayerStats,
            error,
        })?;

        if !self.players.read().contains_key(&stats.player_id) {
            return Err(RepositoryError::not_found(Entity::Player, &stats.player_id));
        }
        if !self.matches.read().contains_key(&stats.match_id) {
            return Err(RepositoryError::not_found(Entity::Match, &stats.match_id));
        }

        stats.calculate();
        self.stats
            .write()
            .insert((stats.player_id.clone(), stats.match_id.clone()), stats);
        Ok(())
    }

    /// 删除球员及其全部统计记录。
    pub fn delete_player(&self, id: &PlayerId) -> Result<Player, RepositoryError> {
        let player = self
            .players
            .write()
            .shift_remove(id)
            .ok_or_else(|| RepositoryError::not_found(Entity::Player, id))?;

        self.stats.write().retain(|(player, _), _| player != id);
        Ok(player)
    }

    /// 设置（`Some(reason)`）或清除（`None`）模拟的存储故障。
    pub fn set_unavailable(&self, reason: Option<String>) {
        *self.outage.write() = reason;
    }

    fn ensure_available(&self) -> Result<(), RepositoryError> {
        match self.outage.read().as_ref() {
            Some(reason) => Err(RepositoryError::Unavailable(reason.clone())),
            None => Ok(()),
        }
    }
}

impl PlayerRepository for InMemoryStore {
    async fn get_player(&self, id: &PlayerId) -> Result<Player, RepositoryError> {
        self.ensure_available()?;
        debug!(%id, "InMemoryStore get_player");
        self.players
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(Entity::Player, id))
    }

    async fn list_players(&self) -> Result<Vec<Player>, RepositoryError> {
        self.ensure_available()?;
        let players = self.players.read().values().cloned().collect::<Vec<_>>();
        debug!(count = players.len(), "InMemoryStore list_players");
        Ok(players)
    }
}

impl MatchRepository for InMemoryStore {
    async fn list_matches_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Match>, RepositoryError> {
        self.ensure_available()?;
        let matches = self
            .matches
            .read()
            .values()
            .filter(|fixture| start <= fixture.kick_off && fixture.kick_off < end)
            .cloned()
            .sorted_by_key(|fixture| fixture.kick_off)
            .collect::<Vec<_>>();

        debug!(%start, %end, count = matches.len(), "InMemoryStore list_matches_between");
        Ok(matches)
    }
}

impl PlayerStatsRepository for InMemoryStore {
    async fn list_player_stats(
        &self,
        player: &PlayerId,
    ) -> Result<Vec<PlayerMatchStats>, RepositoryError> {
        self.ensure_available()?;
        let stats = self
            .stats
            .read()
            .values()
            .filter(|stats| &stats.player_id == player)
            .cloned()
            .collect::<Vec<_>>();

        debug!(%player, count = stats.len(), "InMemoryStore list_player_stats");
        Ok(stats)
    }
}
