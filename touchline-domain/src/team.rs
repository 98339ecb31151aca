use crate::{error::ValidationError, id::TeamId};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// 球队实体。
#[derive(Debug, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub country: String,
    pub league: String,
    /// 队徽图片地址，可以为空。
    pub logo: String,
}

impl Team {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField(SmolStr::new_static("name")));
        }
        Ok(())
    }
}
