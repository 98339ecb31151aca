use crate::Unrecoverable;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;
use touchline_domain::error::ValidationError;

/// 存储中的实体种类，用于错误信息。
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Deserialize, Serialize)]
pub enum Entity {
    Player,
    Team,
    Match,
    PlayerStats,
}

impl Display for Entity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Entity::Player => "player",
                Entity::Team => "team",
                Entity::Match => "match",
                Entity::PlayerStats => "player stats",
            }
        )
    }
}

/// 协作者调用可能遇到的所有错误。
///
/// 聚合核心将协作者视为原子失败：任何一次调用返回错误时，整个操作立即中止，
/// 错误原样返回给调用方，不会产生部分聚合结果。
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize, Serialize, Error)]
pub enum RepositoryError {
    /// 请求的实体不存在。
    #[error("{entity} not found: {id}")]
    NotFound { entity: Entity, id: String },

    /// 存储暂时不可达。
    #[error("repository unavailable: {0}")]
    Unavailable(String),

    /// 写入的实体未通过校验。
    #[error("invalid {entity}: {error}")]
    Invalid {
        entity: Entity,
        error: ValidationError,
    },
}

impl RepositoryError {
    pub fn not_found<Id>(entity: Entity, id: Id) -> Self
    where
        Id: Display,
    {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

impl Unrecoverable for RepositoryError {
    /// 实体缺失或校验失败无法通过重试解决。
    fn is_unrecoverable(&self) -> bool {
        !matches!(self, RepositoryError::Unavailable(_))
    }
}
