use crate::{
    error::ValidationError,
    id::{PlayerId, TeamId},
};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

/// 球员在场上的位置。
///
/// 按位置分组的球队绩效报告以该枚举作为分组键。
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Deserialize, Serialize)]
pub enum Position {
    /// 门将。
    #[serde(alias = "goalkeeper", alias = "GK")]
    Goalkeeper,
    /// 后卫。
    #[serde(alias = "defender", alias = "DF")]
    Defender,
    /// 中场。
    #[serde(alias = "midfielder", alias = "MF")]
    Midfielder,
    /// 前锋。
    #[serde(alias = "forward", alias = "FW")]
    Forward,
}

impl Position {
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "Goalkeeper",
            Position::Defender => "Defender",
            Position::Midfielder => "Midfielder",
            Position::Forward => "Forward",
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Position {
    type Err = ValidationError;

    /// 不区分大小写地解析位置名称，同时接受两字母缩写（例如 "GK"）。
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_ascii_lowercase();
        match normalised.as_str() {
            "goalkeeper" | "gk" => Ok(Position::Goalkeeper),
            "defender" | "df" => Ok(Position::Defender),
            "midfielder" | "mf" => Ok(Position::Midfielder),
            "forward" | "fw" => Ok(Position::Forward),
            _ => Err(ValidationError::UnknownPosition(s.to_string())),
        }
    }
}

/// 球员实体。
///
/// ## 字段说明
///
/// - **height**: 身高（厘米）
/// - **weight**: 体重（千克）
/// - **number**: 球衣号码（1 到 99）
#[derive(Debug, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub position: Position,
    pub team_id: TeamId,
    pub number: u8,
    pub birthday: NaiveDate,
    pub height: u16,
    pub weight: u16,
}

impl Player {
    /// 校验球员数据。
    ///
    /// 姓名不能为空，身高与体重必须为正，球衣号码必须在 1 到 99 之间。
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField(SmolStr::new_static("name")));
        }
        if self.team_id.as_str().is_empty() {
            return Err(ValidationError::MissingField(SmolStr::new_static("team_id")));
        }
        if !(1..=99).contains(&self.number) {
            return Err(ValidationError::InvalidShirtNumber(self.number));
        }
        if self.height == 0 {
            return Err(ValidationError::NonPositive(SmolStr::new_static("height")));
        }
        if self.weight == 0 {
            return Err(ValidationError::NonPositive(SmolStr::new_static("weight")));
        }
        Ok(())
    }

    /// 计算球员在给定日期的周岁年龄。
    ///
    /// 如果当年生日尚未到来，年龄减一。给定日期早于出生日期时返回 0。
    pub fn age_at(&self, date: NaiveDate) -> u32 {
        let mut age = date.year() - self.birthday.year();
        if (date.month(), date.day()) < (self.birthday.month(), self.birthday.day()) {
            age -= 1;
        }
        u32::try_from(age).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::player;

    #[test]
    fn test_position_from_str() {
        struct TestCase {
            input: &'static str,
            expected: Result<Position, ValidationError>,
        }

        let cases = vec![
            // TC0: canonical name
            TestCase {
                input: "Goalkeeper",
                expected: Ok(Position::Goalkeeper),
            },
            // TC1: lowercase with whitespace
            TestCase {
                input: "  midfielder ",
                expected: Ok(Position::Midfielder),
            },
            // TC2: short code
            TestCase {
                input: "FW",
                expected: Ok(Position::Forward),
            },
            // TC3: unknown
            TestCase {
                input: "Libero",
                expected: Err(ValidationError::UnknownPosition("Libero".to_string())),
            },
        ];

        for (index, test) in cases.into_iter().enumerate() {
            let actual = Position::from_str(test.input);
            assert_eq!(actual, test.expected, "TC{index} failed");
        }
    }

    #[test]
    fn test_player_validate() {
        let valid = player("p1", "t1", Position::Defender);
        assert_eq!(valid.validate(), Ok(()));

        let unnamed = Player {
            name: " ".to_string(),
            ..valid.clone()
        };
        assert_eq!(
            unnamed.validate(),
            Err(ValidationError::MissingField(SmolStr::new("name")))
        );

        let no_number = Player {
            number: 0,
            ..valid.clone()
        };
        assert_eq!(
            no_number.validate(),
            Err(ValidationError::InvalidShirtNumber(0))
        );

        let weightless = Player { weight: 0, ..valid };
        assert_eq!(
            weightless.validate(),
            Err(ValidationError::NonPositive(SmolStr::new("weight")))
        );
    }

    #[test]
    fn test_player_age_at() {
        let player = player("p1", "t1", Position::Forward);
        let birthday = player.birthday;

        // day before 26th birthday
        let before = birthday.with_year(2024).unwrap().pred_opt().unwrap();
        assert_eq!(player.age_at(before), 25);

        // on 26th birthday
        assert_eq!(player.age_at(birthday.with_year(2024).unwrap()), 26);

        // before birth
        assert_eq!(player.age_at(NaiveDate::from_ymd_opt(1990, 1, 1).unwrap()), 0);
    }
}
