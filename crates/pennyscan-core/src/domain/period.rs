use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Supported history lookback windows for daily bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "1y")]
    OneYear,
    #[serde(rename = "6mo")]
    SixMonths,
    #[serde(rename = "3mo")]
    ThreeMonths,
}

impl Period {
    pub const ALL: [Self; 3] = [Self::OneYear, Self::SixMonths, Self::ThreeMonths];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneYear => "1y",
            Self::SixMonths => "6mo",
            Self::ThreeMonths => "3mo",
        }
    }

    /// Approximate number of daily bars a full period yields.
    ///
    /// Used to size deterministic offline series; live data may return
    /// fewer bars for thinly traded or recently listed symbols.
    pub const fn approx_trading_days(self) -> usize {
        match self {
            Self::OneYear => 250,
            Self::SixMonths => 126,
            Self::ThreeMonths => 63,
        }
    }
}

impl Display for Period {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "1y" => Ok(Self::OneYear),
            "6mo" => Ok(Self::SixMonths),
            "3mo" => Ok(Self::ThreeMonths),
            other => Err(ValidationError::InvalidPeriod {
                value: other.to_owned(),
            }),
        }
    }
}
