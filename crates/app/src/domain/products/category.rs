//! Product Categories

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::domain::products::errors::DataValidationError;

/// Product Category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    /// Not yet categorised.
    #[default]
    Unknown,

    /// Clothing and accessories.
    Cloths,

    /// Groceries and other consumables.
    Food,

    /// Kitchen and household goods.
    Housewares,

    /// Vehicle parts and supplies.
    Automotive,

    /// Hand and power tools.
    Tools,
}

impl Category {
    pub const ALL: [Self; 6] = [
        Self::Unknown,
        Self::Cloths,
        Self::Food,
        Self::Housewares,
        Self::Automotive,
        Self::Tools,
    ];

    /// Name used on the wire and in storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "UNKNOWN",
            Self::Cloths => "CLOTHS",
            Self::Food => "FOOD",
            Self::Housewares => "HOUSEWARES",
            Self::Automotive => "AUTOMOTIVE",
            Self::Tools => "TOOLS",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DataValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| DataValidationError::UnknownCategory(s.to_string()))
    }
}
