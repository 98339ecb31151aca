//! Select 比赛选择与统计过滤模块
//!
//! - **select_matches**: 将比赛范围查询的结果转换为比赛标识符集合
//! - **filter_stats**: 保留比赛标识符在集合中的统计记录，保持输入顺序
//! - **index_stats_by_match**: 为进度分桶按比赛标识符索引统计记录

use touchline_domain::{fixture::Match, id::MatchId, stats::PlayerMatchStats};
use touchline_integration::collection::{FnvMap, FnvSet};

/// 返回 `matches` 中所有比赛的标识符集合。
///
/// 比赛存储的范围查询结果被视为权威结果，这里不再做任何日期过滤。
pub fn select_matches<'a, Matches>(matches: Matches) -> FnvSet<MatchId>
where
    Matches: IntoIterator<Item = &'a Match>,
{
    matches
        .into_iter()
        .map(|fixture| fixture.id.clone())
        .collect()
}

/// 保留比赛标识符在 `selected` 中的统计记录。
///
/// 输出保持输入顺序，不会重新排序。
pub fn filter_stats(
    stats: Vec<PlayerMatchStats>,
    selected: &FnvSet<MatchId>,
) -> Vec<PlayerMatchStats> {
    stats
        .into_iter()
        .filter(|stats| selected.contains(&stats.match_id))
        .collect()
}

/// 按比赛标识符索引统计记录。同一场比赛出现多条记录时，保留最后一条。
pub fn index_stats_by_match(stats: &[PlayerMatchStats]) -> FnvMap<MatchId, &PlayerMatchStats> {
    stats
        .iter()
        .map(|stats| (stats.match_id.clone(), stats))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use touchline_domain::test_utils::{date, fixture, stats};

    #[test]
    fn test_select_matches_deduplicates() {
        let matches = vec![
            fixture("m1", date(2024, 9, 1)),
            fixture("m2", date(2024, 9, 8)),
            fixture("m1", date(2024, 9, 1)),
        ];

        let actual = select_matches(&matches);

        assert_eq!(actual.len(), 2);
        assert!(actual.contains(&MatchId::from("m1")));
        assert!(actual.contains(&MatchId::from("m2")));
    }

    #[test]
    fn test_filter_stats_preserves_order() {
        let selected = select_matches(&[
            fixture("m3", date(2024, 9, 15)),
            fixture("m1", date(2024, 9, 1)),
        ]);

        let input = vec![
            stats("p1", "m1", 90),
            stats("p1", "m2", 90),
            stats("p1", "m3", 90),
        ];

        let actual = filter_stats(input, &selected)
            .into_iter()
            .map(|stats| stats.match_id)
            .collect::<Vec<_>>();

        assert_eq!(actual, vec![MatchId::from("m1"), MatchId::from("m3")]);
    }

    #[test]
    fn test_filter_stats_empty_inputs() {
        let selected = select_matches(&[fixture("m1", date(2024, 9, 1))]);
        assert!(filter_stats(vec![], &selected).is_empty());

        let no_matches = FnvSet::default();
        assert!(filter_stats(vec![stats("p1", "m1", 90)], &no_matches).is_empty());
    }

    #[test]
    fn test_index_stats_by_match_keeps_last() {
        let input = vec![stats("p1", "m1", 10), stats("p1", "m1", 90)];

        let actual = index_stats_by_match(&input);

        assert_eq!(actual.len(), 1);
        assert_eq!(actual[&MatchId::from("m1")].minutes_played, 90);
    }
}
