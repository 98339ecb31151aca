//! 实体标识符模块
//!
//! 所有标识符都是基于 [`SmolStr`] 的新类型，克隆开销低，并以透明字符串形式序列化。

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

macro_rules! identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default, Deserialize, Serialize,
            Display, From,
        )]
        #[serde(transparent)]
        pub struct $name(pub SmolStr);

        impl $name {
            pub fn new<S>(id: S) -> Self
            where
                S: Into<SmolStr>,
            {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(SmolStr::new(value))
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(SmolStr::from(value))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }
    };
}

identifier!(
    /// 球员唯一标识符。
    PlayerId
);

identifier!(
    /// 球队唯一标识符。
    TeamId
);

identifier!(
    /// 比赛唯一标识符。
    MatchId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_serde_is_transparent() {
        let id = PlayerId::from("p-10");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"p-10\"");
        assert_eq!(
            serde_json::from_str::<PlayerId>("\"p-10\"").unwrap(),
            PlayerId::new("p-10")
        );
        assert_eq!(id.to_string(), "p-10");
    }
}
