#![forbid(unsafe_code)]
#![warn(
    unused,
    clippy::cognitive_complexity,
    unused_crate_dependencies,
    clippy::unused_self,
    clippy::useless_let_if_seq,
    missing_debug_implementations,
    rust_2018_idioms,
    rust_2024_compatibility
)]
#![allow(clippy::type_complexity, clippy::too_many_arguments, type_alias_bounds)]

//! # Touchline-Integration
//! 聚合核心与存储层之间的协作者契约。
//!
//! 聚合核心只通过以下能力接口读取数据，从而独立于任何具体的存储技术：
//! * **PlayerRepository**: 按标识符查找球员、列出全部球员。
//! * **MatchRepository**: 按开球时间范围查询比赛。
//! * **PlayerStatsRepository**: 列出某名球员的全部单场统计记录。
//!
//! [`InMemoryStore`](store::InMemoryStore) 实现了全部契约，用于测试、示例和小型部署。

/// Touchline-Integration 中生成的所有 [`Error`](std::error::Error)。
pub mod error;

/// 协作者契约 Trait。
pub mod repository;

/// 实现全部协作者契约的内存存储。
pub mod store;

/// 集合工具。
pub mod collection;

/// 确定某物是否被认为是"不可恢复的"，例如不可恢复的错误。
///
/// 注意，[`Unrecoverable`] 的含义可能因上下文而异。
pub trait Unrecoverable {
    fn is_unrecoverable(&self) -> bool;
}
