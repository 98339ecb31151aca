use chrono::{DateTime, Days, NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use std::{fs::File, io::BufReader, sync::Arc};
use touchline::{
    analytics::AnalyticsService,
    clock::FixedClock,
    config::AnalyticsConfig,
    logging::{init_json_logging, init_logging},
    statistic::{
        display::{comparison_table, progress_table},
        window::WindowToken,
    },
};
use touchline_domain::{
    fixture::{Match, MatchStatus},
    id::{MatchId, PlayerId, TeamId},
    player::{Player, Position},
    stats::PlayerMatchStats,
    team::Team,
};
use touchline_integration::store::InMemoryStore;

/// 分析配置文件路径。
const FILE_PATH_ANALYTICS_CONFIG: &str = "touchline/examples/config/analytics_config.json";

/// 示例中球队的比赛数量（每周一场）。
const NUM_MATCHES: u64 = 12;

/// 示例：基于内存存储生成一份赛季绩效报告。
///
/// 写入两支球队、六名球员和一个赛季的比赛统计，然后依次输出：
/// 单球员赛季绩效、主队球员对比、单球员进度曲线、按位置分组的球队绩效。
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志追踪，设置 TOUCHLINE_LOG_JSON 时输出 JSON 日志
    if std::env::var_os("TOUCHLINE_LOG_JSON").is_some() {
        init_json_logging();
    } else {
        init_logging();
    }

    // 加载分析配置
    let config = load_config()?;

    // 写入示例数据
    let store = Arc::new(InMemoryStore::new());
    seed(&store)?;

    // 固定报告时间，使窗口解析结果可复现
    let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).single().ok_or("invalid now")?;

    let analytics = AnalyticsService::new(
        Arc::clone(&store),
        Arc::clone(&store),
        Arc::clone(&store),
        FixedClock::new(now),
        config,
    );

    let striker = PlayerId::from("saka");
    let season = analytics
        .calculate_player_performance(&striker, WindowToken::Season)
        .await?;
    println!("\n{striker} season overall rating: {}", season.overall_rating.round_dp(4));

    let comparison = analytics
        .compare_player_performance(["saka", "odegaard", "saliba"].map(PlayerId::from))
        .await?;
    println!("\nPlayer comparison ({})", analytics.config().comparison_window);
    comparison_table(&comparison).printstd();

    let progress = analytics
        .player_progress_over_time(&striker, "2023-08-01", "2024-03-15")
        .await?;
    println!("\n{striker} progress over time");
    progress_table(&progress).printstd();

    let by_position = analytics
        .team_performance_by_position(&TeamId::from("arsenal"))
        .await?;
    for (position, metrics) in &by_position {
        let mean_rating = metrics
            .iter()
            .map(|metrics| metrics.overall_rating)
            .sum::<Decimal>()
            .checked_div(Decimal::from(metrics.len()))
            .unwrap_or_default();

        println!(
            "{position}: {} players, mean rating {}",
            metrics.len(),
            mean_rating.round_dp(4)
        );
    }

    Ok(())
}

fn load_config() -> Result<AnalyticsConfig, Box<dyn std::error::Error>> {
    let file = File::open(FILE_PATH_ANALYTICS_CONFIG)?;
    let reader = BufReader::new(file);
    let config = AnalyticsConfig::from_reader(reader)?;
    Ok(config)
}

fn seed(store: &InMemoryStore) -> Result<(), Box<dyn std::error::Error>> {
    for (id, name) in [("arsenal", "Arsenal"), ("chelsea", "Chelsea")] {
        store.insert_team(Team {
            id: TeamId::from(id),
            name: name.to_string(),
            country: "England".to_string(),
            league: "Premier League".to_string(),
            logo: String::new(),
        })?;
    }

    let squad = [
        ("saka", "Bukayo Saka", Position::Forward, "arsenal", 7),
        ("odegaard", "Martin Odegaard", Position::Midfielder, "arsenal", 8),
        ("saliba", "William Saliba", Position::Defender, "arsenal", 2),
        ("raya", "David Raya", Position::Goalkeeper, "arsenal", 22),
        ("palmer", "Cole Palmer", Position::Midfielder, "chelsea", 20),
        ("james", "Reece James", Position::Defender, "chelsea", 24),
    ];
    for (id, name, position, team, number) in squad {
        store.insert_player(Player {
            id: PlayerId::from(id),
            name: name.to_string(),
            position,
            team_id: TeamId::from(team),
            number,
            birthday: NaiveDate::from_ymd_opt(2000, 1, 1).ok_or("invalid birthday")?,
            height: 180,
            weight: 75,
        })?;
    }

    let season_start = Utc.with_ymd_and_hms(2023, 8, 12, 15, 0, 0).single().ok_or("invalid kick off")?;
    for week in 0..NUM_MATCHES {
        let fixture = Match {
            id: MatchId::new(format!("arsenal-chelsea-{week}")),
            home_team_id: TeamId::from("arsenal"),
            away_team_id: TeamId::from("chelsea"),
            kick_off: kick_off(season_start, week)?,
            venue: "Emirates Stadium".to_string(),
            competition: "Premier League".to_string(),
            home_score: (week % 3) as u8,
            away_score: (week % 2) as u8,
            status: MatchStatus::Completed,
        };
        let match_id = fixture.id.clone();
        store.insert_match(fixture)?;

        for (index, (player, _, position, _, _)) in squad.iter().enumerate() {
            // everyone rests once in a while
            if (week + index as u64) % 5 == 4 {
                continue;
            }
            store.insert_player_stats(match_stats(player, &match_id, *position, week + index as u64))?;
        }
    }

    Ok(())
}

fn kick_off(start: DateTime<Utc>, week: u64) -> Result<DateTime<Utc>, &'static str> {
    start
        .checked_add_days(Days::new(week * 14))
        .ok_or("kick off out of range")
}

fn match_stats(player: &str, fixture: &MatchId, position: Position, seed: u64) -> PlayerMatchStats {
    let seed = seed as u32;
    let attacking = matches!(position, Position::Forward | Position::Midfielder);

    PlayerMatchStats {
        goals: if attacking { seed % 3 / 2 } else { 0 },
        assists: if attacking { seed % 2 } else { 0 },
        shots: if attacking { 2 + seed % 4 } else { seed % 2 },
        shots_on_target: if attacking { 1 + seed % 2 } else { 0 },
        passes: 30 + seed % 25,
        passes_completed: 24 + seed % 20,
        tackles: if attacking { 1 } else { 3 + seed % 3 },
        interceptions: if attacking { seed % 2 } else { 2 + seed % 2 },
        fouls: seed % 3,
        yellow_cards: u32::from(seed % 7 == 0),
        distance_covered: Decimal::new(95 + i64::from(seed % 20), 1),
        ..PlayerMatchStats::new(PlayerId::from(player), fixture.clone(), 75 + seed % 16)
    }
}
