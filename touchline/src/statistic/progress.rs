//! Progress 进度分桶模块
//!
//! 本模块将按时间排序的比赛列表切分为固定大小的分桶，并为每个分桶归约一次绩效指标，
//! 从而生成球员的绩效时间序列。
//!
//! # 分桶规则
//!
//! - 按顺序遍历比赛，每遍历 `bucket_size` 场比赛或到达最后一场比赛时关闭当前分桶
//! - 分桶边界由已遍历的比赛数决定，而不是由出场记录数决定
//! - 球员未出场的比赛被跳过，不会补零
//! - 没有任何出场记录的分桶不产生输出，但仍然推进了比赛计数
//!
//! 因此输出长度不超过 `⌈比赛数 / bucket_size⌉`。

use crate::statistic::metric::{PerformanceMetrics, PerformanceMetricsGenerator, rating::RatingWeights};
use derive_more::Constructor;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use touchline_domain::{
    fixture::Match,
    id::{MatchId, PlayerId},
    stats::PlayerMatchStats,
};
use touchline_integration::collection::FnvMap;

/// 按固定比赛数分桶的进度时间序列生成器。
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize, Serialize, Constructor)]
pub struct ProgressBucketer {
    pub bucket_size: NonZeroUsize,
}

impl ProgressBucketer {
    /// 为 `player_id` 生成绩效时间序列，每个非空分桶对应一个 [`PerformanceMetrics`]。
    ///
    /// `matches` 必须已经按开球时间升序排列，本函数不会重新排序。
    pub fn generate(
        &self,
        player_id: &PlayerId,
        matches: &[Match],
        stats_by_match: &FnvMap<MatchId, &PlayerMatchStats>,
        weights: &RatingWeights,
    ) -> Vec<PerformanceMetrics> {
        matches
            .chunks(self.bucket_size.get())
            .filter_map(|bucket| {
                let generator = bucket
                    .iter()
                    .filter_map(|fixture| stats_by_match.get(&fixture.id))
                    .fold(
                        PerformanceMetricsGenerator::init(player_id.clone()),
                        |mut generator, stats| {
                            generator.update(stats);
                            generator
                        },
                    );

                (!generator.is_empty()).then(|| generator.generate(weights))
            })
            .collect()
    }
}
