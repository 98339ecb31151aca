use crate::statistic::metric::PerformanceMetrics;
use prettytable::{Table, row};
use touchline_domain::id::PlayerId;
use touchline_integration::collection::FnvIndexMap;

/// 表格中数值保留的小数位数。
const DISPLAY_DECIMAL_PLACES: u32 = 4;

/// 为一组 [`PerformanceMetrics`] 生成表格，每行一组指标。
///
/// `label` 是首列的表头，例如 "Player" 或 "Bucket"；`rows` 的每一项是行标签与对应的指标。
pub fn metrics_table<'a, Rows>(label: &str, rows: Rows) -> Table
where
    Rows: IntoIterator<Item = (String, &'a PerformanceMetrics)>,
{
    let mut table = Table::new();
    table.set_titles(row![
        label,
        "Goals/Min",
        "Assists/Min",
        "Pass Acc %",
        "Shot Acc",
        "Def Eff",
        "Stamina",
        "Rating",
    ]);

    for (name, metrics) in rows {
        table.add_row(row![
            name,
            metrics.goals_per_minute.round_dp(DISPLAY_DECIMAL_PLACES),
            metrics.assists_per_minute.round_dp(DISPLAY_DECIMAL_PLACES),
            metrics.pass_accuracy.round_dp(DISPLAY_DECIMAL_PLACES),
            metrics.shot_accuracy.round_dp(DISPLAY_DECIMAL_PLACES),
            metrics.defensive_efficiency.round_dp(DISPLAY_DECIMAL_PLACES),
            metrics.stamina.round_dp(DISPLAY_DECIMAL_PLACES),
            metrics.overall_rating.round_dp(DISPLAY_DECIMAL_PLACES),
        ]);
    }

    table
}

/// 多球员对比表格，按球员标识符逐行输出。
pub fn comparison_table(comparison: &FnvIndexMap<PlayerId, PerformanceMetrics>) -> Table {
    metrics_table(
        "Player",
        comparison
            .iter()
            .map(|(player, metrics)| (player.to_string(), metrics)),
    )
}

/// 进度时间序列表格，首列为分桶序号（从 1 开始）。
pub fn progress_table(progress: &[PerformanceMetrics]) -> Table {
    metrics_table(
        "Bucket",
        progress
            .iter()
            .enumerate()
            .map(|(index, metrics)| ((index + 1).to_string(), metrics)),
    )
}
