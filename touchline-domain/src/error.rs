use crate::id::TeamId;
use serde::{Deserialize, Serialize};
use rust_decimal::Decimal;
use smol_str::SmolStr;
use thiserror::Error;

/// 实体未通过校验时产生的所有错误。
///
/// 每个变体对应一条具体的校验规则。存储层在写入之前调用实体的 `validate` 方法，
/// 并将该错误向上传递给调用方。
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize, Serialize, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(SmolStr),

    #[error("{0} must be positive")]
    NonPositive(SmolStr),

    #[error("unknown position: {0}")]
    UnknownPosition(String),

    #[error("shirt number must be between 1 and 99, got {0}")]
    InvalidShirtNumber(u8),

    #[error("home and away team are both {0}")]
    SameTeams(TeamId),

    #[error("shots on target ({on_target}) cannot exceed total shots ({shots})")]
    ShotsOnTargetExceedShots { on_target: u32, shots: u32 },

    #[error("completed passes ({completed}) cannot exceed total passes ({passes})")]
    PassesCompletedExceedPasses { completed: u32, passes: u32 },

    #[error("invalid card count: {yellow} yellow, {red} red")]
    InvalidCards { yellow: u32, red: u32 },

    #[error("pass accuracy must be between 0 and 100, got {0}")]
    PassAccuracyOutOfRange(Decimal),

    #[error("distance covered must be between 0 and {max} km, got {distance}")]
    DistanceOutOfRange { distance: Decimal, max: Decimal },
}
