use std::fmt;

use serde::Serialize;

use crate::Error;

/// 5段階のリスク評価
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(into = "u8")]
pub struct RiskRating(u8);

impl RiskRating {
    pub const LOWEST: RiskRating = RiskRating(1);
    pub const HIGHEST: RiskRating = RiskRating(5);

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn label(self) -> &'static str {
        match self.0 {
            1 => "Lower",
            2 => "Lower-Medium",
            3 => "Medium",
            4 => "Medium-Higher",
            _ => "Higher",
        }
    }

    pub fn description(self) -> &'static str {
        match self.0 {
            1 => "Conservative, short-term changes for modest/stable returns",
            2 => "Cautious, reasonable long-term returns, accept some risk",
            3 => "Balanced, accepts fluctuations for better long-term returns",
            4 => "Comfortable with risk for higher long-term returns",
            _ => "Very comfortable, aiming for high long-term returns",
        }
    }
}

impl TryFrom<u8> for RiskRating {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1..=5 => Ok(RiskRating(value)),
            _ => Err(Error::IllegalRating(value.into())),
        }
    }
}

impl From<RiskRating> for u8 {
    fn from(rating: RiskRating) -> Self {
        rating.0
    }
}

impl fmt::Display for RiskRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.0, self.label())
    }
}
