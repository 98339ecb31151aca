//! Analytics 分析服务模块
//!
//! 本模块组合窗口解析、比赛选择、统计过滤、指标归约和进度分桶，对外提供四个入口：
//!
//! - **calculate_player_performance**: 单球员在某个时间窗口内的绩效
//! - **compare_player_performance**: 多球员在对比窗口（默认赛季）内的绩效对比
//! - **player_progress_over_time**: 单球员在日期范围内按比赛分桶的绩效时间序列
//! - **team_performance_by_position**: 球队阵容按位置分组的绩效
//!
//! # 错误传播
//!
//! 只有协作者调用和日期解析会失败。任何一步失败都会立即中止整个调用并原样返回该错误，
//! 不会返回部分结果。多球员的子流程并发执行，第一个错误出现时其余子流程被丢弃。

use crate::{
    clock::AnalyticsClock,
    config::AnalyticsConfig,
    error::AnalyticsError,
    statistic::{
        metric::PerformanceMetrics,
        progress::ProgressBucketer,
        select::{filter_stats, index_stats_by_match, select_matches},
        window::{TimeWindow, WindowResolver, WindowToken, midnight},
    },
};
use chrono::{DateTime, NaiveDate, Utc};
use futures::future::try_join_all;
use itertools::Itertools;
use touchline_domain::{
    id::{PlayerId, TeamId},
    player::Position,
};
use touchline_integration::{
    Unrecoverable,
    collection::FnvIndexMap,
    error::RepositoryError,
    repository::{MatchRepository, PlayerRepository, PlayerStatsRepository},
};
use tracing::{debug, info, warn};

/// 进度查询接受的日期格式。
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// 球员绩效分析服务。
///
/// ## 类型参数
///
/// - `Players`: 球员查找协作者
/// - `Matches`: 比赛范围查询协作者
/// - `Stats`: 统计记录列表协作者
/// - `Clock`: 确定窗口终点的时钟
///
/// 同一个存储可以同时充当三个协作者，例如三个参数都传入同一个
/// `Arc<InMemoryStore>` 的克隆。
#[derive(Debug, Clone)]
pub struct AnalyticsService<Players, Matches, Stats, Clock> {
    players: Players,
    matches: Matches,
    stats: Stats,
    clock: Clock,
    config: AnalyticsConfig,
    resolver: WindowResolver,
    bucketer: ProgressBucketer,
}

impl<Players, Matches, Stats, Clock> AnalyticsService<Players, Matches, Stats, Clock>
where
    Players: PlayerRepository,
    Matches: MatchRepository,
    Stats: PlayerStatsRepository,
    Clock: AnalyticsClock,
{
    pub fn new(
        players: Players,
        matches: Matches,
        stats: Stats,
        clock: Clock,
        config: AnalyticsConfig,
    ) -> Self {
        let resolver = WindowResolver::new(
            config.season_start_month,
            midnight(config.history_floor),
        );
        let bucketer = ProgressBucketer::new(config.progress_bucket_size);

        Self {
            players,
            matches,
            stats,
            clock,
            config,
            resolver,
            bucketer,
        }
    }

    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// 以时钟当前时间为终点解析 `window`。
    pub fn resolve_window(&self, window: WindowToken) -> TimeWindow {
        self.resolver.resolve(window, self.clock.time())
    }

    /// 计算球员在 `window` 时间窗口内的绩效。
    ///
    /// ## 工作流程
    ///
    /// 1. 查找球员（不存在时失败）
    /// 2. 以时钟当前时间为终点解析时间窗口
    /// 3. 查询窗口内的比赛，得到比赛标识符集合
    /// 4. 列出球员全部统计记录，保留落在比赛集合内的记录
    /// 5. 归约为 [`PerformanceMetrics`]
    ///
    /// 球员在窗口内没有任何记录时返回全零指标，而不是失败。
    pub async fn calculate_player_performance(
        &self,
        player_id: &PlayerId,
        window: WindowToken,
    ) -> Result<PerformanceMetrics, AnalyticsError> {
        let player = self
            .players
            .get_player(player_id)
            .await
            .inspect_err(|error| log_collaborator_failure("get_player", error))?;

        let window_range = self.resolve_window(window);
        debug!(%player_id, %window, %window_range, "resolved performance window");

        let matches = self
            .matches
            .list_matches_between(window_range.start, window_range.end)
            .await
            .inspect_err(|error| log_collaborator_failure("list_matches_between", error))?;
        let selected = select_matches(&matches);

        let stats = self
            .stats
            .list_player_stats(&player.id)
            .await
            .inspect_err(|error| log_collaborator_failure("list_player_stats", error))?;
        let total_records = stats.len();
        let filtered = filter_stats(stats, &selected);

        debug!(
            %player_id,
            matches = selected.len(),
            total_records,
            window_records = filtered.len(),
            "selected player stats within window"
        );

        let metrics =
            PerformanceMetrics::calculate(player.id, &filtered, &self.config.rating_weights);

        info!(
            %player_id,
            %window,
            overall_rating = %metrics.overall_rating,
            "calculated player performance"
        );
        Ok(metrics)
    }

    /// 在对比窗口内计算多名球员的绩效，返回按输入顺序排列的球员到绩效的映射。
    ///
    /// 任意一名球员的流程失败时，整个对比失败，不返回部分映射。重复的球员标识符
    /// 只保留一项。
    pub async fn compare_player_performance<PlayerIds>(
        &self,
        player_ids: PlayerIds,
    ) -> Result<FnvIndexMap<PlayerId, PerformanceMetrics>, AnalyticsError>
    where
        PlayerIds: IntoIterator<Item = PlayerId>,
    {
        let player_ids = player_ids.into_iter().collect::<Vec<_>>();
        let window = self.config.comparison_window;

        let metrics = try_join_all(
            player_ids
                .iter()
                .map(|player_id| self.calculate_player_performance(player_id, window)),
        )
        .await?;

        info!(
            players = %player_ids.iter().join(","),
            %window,
            "compared player performance"
        );

        Ok(player_ids.into_iter().zip(metrics).collect())
    }

    /// 计算球员在 `[start_date, end_date)` 范围内按比赛分桶的绩效时间序列。
    ///
    /// 日期格式为 `YYYY-MM-DD`，按 00:00 UTC 解释。每 `progress_bucket_size` 场比赛
    /// （以及最后一场比赛）关闭一个分桶，没有出场记录的分桶不产生输出。
    pub async fn player_progress_over_time(
        &self,
        player_id: &PlayerId,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<PerformanceMetrics>, AnalyticsError> {
        let start = parse_date(start_date)?;
        let end = parse_date(end_date)?;

        let matches = self
            .matches
            .list_matches_between(start, end)
            .await
            .inspect_err(|error| log_collaborator_failure("list_matches_between", error))?;

        let stats = self
            .stats
            .list_player_stats(player_id)
            .await
            .inspect_err(|error| log_collaborator_failure("list_player_stats", error))?;
        let stats_by_match = index_stats_by_match(&stats);

        let progress = self.bucketer.generate(
            player_id,
            &matches,
            &stats_by_match,
            &self.config.rating_weights,
        );

        info!(
            %player_id,
            %start,
            %end,
            matches = matches.len(),
            buckets = progress.len(),
            "calculated player progress over time"
        );
        Ok(progress)
    }

    /// 按位置分组计算球队阵容在对比窗口内的绩效。
    ///
    /// 每个位置下的绩效按球员在存储中的顺序排列。没有球员的位置不会出现在结果中，
    /// 没有任何球员的球队得到空映射。
    pub async fn team_performance_by_position(
        &self,
        team_id: &TeamId,
    ) -> Result<FnvIndexMap<Position, Vec<PerformanceMetrics>>, AnalyticsError> {
        let roster = self
            .players
            .list_players()
            .await
            .inspect_err(|error| log_collaborator_failure("list_players", error))?
            .into_iter()
            .filter(|player| &player.team_id == team_id)
            .collect::<Vec<_>>();

        let window = self.config.comparison_window;
        let metrics = try_join_all(
            roster
                .iter()
                .map(|player| self.calculate_player_performance(&player.id, window)),
        )
        .await?;

        let by_position = roster.iter().zip(metrics).fold(
            FnvIndexMap::<Position, Vec<PerformanceMetrics>>::default(),
            |mut by_position, (player, metrics)| {
                by_position.entry(player.position).or_default().push(metrics);
                by_position
            },
        );

        info!(
            %team_id,
            players = roster.len(),
            positions = by_position.len(),
            "calculated team performance by position"
        );
        Ok(by_position)
    }
}

/// 将 `YYYY-MM-DD` 解析为当天 00:00 UTC。
pub fn parse_date(input: &str) -> Result<DateTime<Utc>, AnalyticsError> {
    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map(midnight)
        .map_err(|error| AnalyticsError::InvalidDate {
            input: input.to_string(),
            reason: error.to_string(),
        })
}

fn log_collaborator_failure(operation: &'static str, error: &RepositoryError) {
    warn!(
        operation,
        %error,
        unrecoverable = error.is_unrecoverable(),
        "collaborator call failed, aborting analytics request"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{clock::FixedClock, statistic::metric::rating::RatingWeights};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::sync::Arc;
    use touchline_domain::test_utils::{date, fixture, player, stats_with, team, time_plus_days};
    use touchline_integration::{error::Entity, store::InMemoryStore};

    type TestService = AnalyticsService<
        Arc<InMemoryStore>,
        Arc<InMemoryStore>,
        Arc<InMemoryStore>,
        FixedClock,
    >;

    fn service(store: &Arc<InMemoryStore>) -> TestService {
        AnalyticsService::new(
            Arc::clone(store),
            Arc::clone(store),
            Arc::clone(store),
            FixedClock::new(date(2024, 3, 15)),
            AnalyticsConfig::default(),
        )
    }

    fn store_with_squad() -> Arc<InMemoryStore> {
        let store = Arc::new(InMemoryStore::new());
        store.insert_team(team("t1")).unwrap();
        store.insert_team(team("t2")).unwrap();
        for (id, team_id, position) in [
            ("p1", "t1", Position::Forward),
            ("p2", "t1", Position::Defender),
            ("p3", "t1", Position::Forward),
            ("p4", "t2", Position::Goalkeeper),
        ] {
            store.insert_player(player(id, team_id, position)).unwrap();
        }

        // m0 kicks off before the 2023/24 season starts
        store.insert_match(fixture("m0", date(2023, 7, 15))).unwrap();
        store.insert_match(fixture("m1", date(2023, 9, 2))).unwrap();
        store.insert_match(fixture("m2", date(2024, 3, 10))).unwrap();
        store
    }

    #[tokio::test]
    async fn test_calculate_player_performance_filters_by_window() {
        let store = store_with_squad();
        let records = [
            stats_with("p1", "m0", 90, 3, 0, dec!(70), dec!(10)),
            stats_with("p1", "m1", 90, 1, 1, dec!(80), dec!(11)),
            stats_with("p1", "m2", 45, 0, 1, dec!(90), dec!(6)),
        ];
        for record in records.iter().cloned() {
            store.insert_player_stats(record).unwrap();
        }
        let service = service(&store);

        struct TestCase {
            window: WindowToken,
            expected_records: Vec<usize>,
        }

        let cases = vec![
            // TC0: season starts 2023-08-01, excludes m0
            TestCase {
                window: WindowToken::Season,
                expected_records: vec![1, 2],
            },
            // TC1: week ending 2024-03-15 only covers m2
            TestCase {
                window: WindowToken::Week,
                expected_records: vec![2],
            },
            // TC2: all covers every match since the history floor
            TestCase {
                window: WindowToken::All,
                expected_records: vec![0, 1, 2],
            },
        ];

        for (index, test) in cases.into_iter().enumerate() {
            let actual = service
                .calculate_player_performance(&PlayerId::from("p1"), test.window)
                .await
                .unwrap();

            let expected = PerformanceMetrics::calculate(
                PlayerId::from("p1"),
                test.expected_records.iter().map(|record| &records[*record]),
                &RatingWeights::default(),
            );

            assert_eq!(actual, expected, "TC{index} failed");
        }
    }

    #[tokio::test]
    async fn test_calculate_player_performance_without_records_is_zero() {
        let store = store_with_squad();
        let service = service(&store);

        let actual = service
            .calculate_player_performance(&PlayerId::from("p2"), WindowToken::Month)
            .await
            .unwrap();

        assert_eq!(actual, PerformanceMetrics::zero(PlayerId::from("p2")));
    }

    #[tokio::test]
    async fn test_calculate_player_performance_unknown_player() {
        let store = store_with_squad();
        let service = service(&store);

        let actual = service
            .calculate_player_performance(&PlayerId::from("ghost"), WindowToken::All)
            .await;

        assert_eq!(
            actual,
            Err(AnalyticsError::Repository(RepositoryError::NotFound {
                entity: Entity::Player,
                id: "ghost".to_string(),
            }))
        );
    }

    #[tokio::test]
    async fn test_compare_player_performance_preserves_input_order() {
        let store = store_with_squad();
        store
            .insert_player_stats(stats_with("p1", "m1", 90, 2, 0, dec!(80), dec!(10)))
            .unwrap();
        store
            .insert_player_stats(stats_with("p3", "m1", 90, 0, 2, dec!(85), dec!(12)))
            .unwrap();
        let service = service(&store);

        let actual = service
            .compare_player_performance([
                PlayerId::from("p3"),
                PlayerId::from("p2"),
                PlayerId::from("p1"),
            ])
            .await
            .unwrap();

        assert_eq!(
            actual.keys().collect::<Vec<_>>(),
            vec![
                &PlayerId::from("p3"),
                &PlayerId::from("p2"),
                &PlayerId::from("p1"),
            ]
        );
        assert_eq!(actual[&PlayerId::from("p2")].overall_rating, Decimal::ZERO);
        assert!(actual[&PlayerId::from("p1")].goals_per_minute > Decimal::ZERO);
        assert!(actual[&PlayerId::from("p3")].assists_per_minute > Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_compare_player_performance_fails_without_partial_result() {
        let store = store_with_squad();
        let service = service(&store);

        let actual = service
            .compare_player_performance([PlayerId::from("p1"), PlayerId::from("ghost")])
            .await;

        assert!(matches!(
            actual,
            Err(AnalyticsError::Repository(RepositoryError::NotFound { .. }))
        ));
    }

    #[tokio::test]
    async fn test_compare_player_performance_empty_input() {
        let store = store_with_squad();
        let service = service(&store);

        let actual = service
            .compare_player_performance(Vec::<PlayerId>::new())
            .await
            .unwrap();

        assert!(actual.is_empty());
    }

    #[tokio::test]
    async fn test_player_progress_over_time_buckets() {
        let store = Arc::new(InMemoryStore::new());
        store.insert_team(team("t1")).unwrap();
        store
            .insert_player(player("p1", "t1", Position::Midfielder))
            .unwrap();

        let base = date(2024, 1, 6);
        for day in 0..7 {
            let id = format!("w{day}");
            store
                .insert_match(fixture(&id, time_plus_days(base, day * 7)))
                .unwrap();
            store
                .insert_player_stats(stats_with("p1", &id, 90, 1, 0, dec!(80), dec!(10)))
                .unwrap();
        }
        let service = service(&store);

        let actual = service
            .player_progress_over_time(&PlayerId::from("p1"), "2024-01-01", "2024-03-01")
            .await
            .unwrap();

        // 7 matches with bucket size 5
        assert_eq!(actual.len(), 2);
        assert!(actual.iter().all(|metrics| metrics.player_id == PlayerId::from("p1")));

        let empty = service
            .player_progress_over_time(&PlayerId::from("p1"), "2025-01-01", "2025-02-01")
            .await
            .unwrap();
        assert!(empty.is_empty());
    }

    #[tokio::test]
    async fn test_player_progress_over_time_invalid_dates() {
        let store = store_with_squad();
        let service = service(&store);

        struct TestCase {
            start: &'static str,
            end: &'static str,
            input: &'static str,
        }

        let cases = vec![
            // TC0: malformed start date
            TestCase {
                start: "2024/01/01",
                end: "2024-02-01",
                input: "2024/01/01",
            },
            // TC1: impossible end date
            TestCase {
                start: "2024-01-01",
                end: "2024-02-30",
                input: "2024-02-30",
            },
            // TC2: empty start date
            TestCase {
                start: "",
                end: "2024-02-01",
                input: "",
            },
        ];

        for (index, test) in cases.into_iter().enumerate() {
            let actual = service
                .player_progress_over_time(&PlayerId::from("p1"), test.start, test.end)
                .await;

            match actual {
                Err(AnalyticsError::InvalidDate { input, .. }) => {
                    assert_eq!(input, test.input, "TC{index} failed")
                }
                other => panic!("TC{index} failed: {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn test_team_performance_by_position() {
        let store = store_with_squad();
        store
            .insert_player_stats(stats_with("p3", "m2", 90, 1, 0, dec!(75), dec!(9)))
            .unwrap();
        let service = service(&store);

        let actual = service
            .team_performance_by_position(&TeamId::from("t1"))
            .await
            .unwrap();

        assert_eq!(
            actual.keys().copied().collect::<Vec<_>>(),
            vec![Position::Forward, Position::Defender]
        );

        let forwards = &actual[&Position::Forward];
        assert_eq!(forwards.len(), 2);
        assert_eq!(forwards[0].player_id, PlayerId::from("p1"));
        assert_eq!(forwards[1].player_id, PlayerId::from("p3"));
        assert!(forwards[1].overall_rating > Decimal::ZERO);
        assert_eq!(actual[&Position::Defender].len(), 1);
    }

    #[tokio::test]
    async fn test_team_performance_by_position_empty_team() {
        let store = store_with_squad();
        let service = service(&store);

        let actual = service
            .team_performance_by_position(&TeamId::from("nobody"))
            .await
            .unwrap();

        assert!(actual.is_empty());
    }

    #[tokio::test]
    async fn test_collaborator_outage_aborts_request() {
        let store = store_with_squad();
        store.set_unavailable(Some("maintenance".to_string()));
        let service = service(&store);

        let actual = service
            .team_performance_by_position(&TeamId::from("t1"))
            .await;

        assert_eq!(
            actual,
            Err(AnalyticsError::Repository(RepositoryError::Unavailable(
                "maintenance".to_string()
            )))
        );
        assert!(!actual.unwrap_err().is_unrecoverable());
    }
}
