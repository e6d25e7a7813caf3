//! Common domain type definitions
//!
//! This module contains the enum types shared by the pedigree models and
//! their file representations.

use serde::{Deserialize, Serialize};

/// Sex of an individual
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Sex {
    /// Unknown or not specified
    #[default]
    Unknown,
    /// Male
    Male,
    /// Female
    Female,
}

impl Sex {
    /// Integer code used in pedigree files and matrices
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Unknown => 0,
            Self::Male => 1,
            Self::Female => 2,
        }
    }

    /// Whether this sex can be recorded for a father
    #[must_use]
    pub const fn can_be_father(self) -> bool {
        !matches!(self, Self::Female)
    }

    /// Whether this sex can be recorded for a mother
    #[must_use]
    pub const fn can_be_mother(self) -> bool {
        !matches!(self, Self::Male)
    }
}

impl From<&str> for Sex {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" | "h" | "1" => Self::Male,
            "f" | "female" | "2" => Self::Female,
            _ => Self::Unknown,
        }
    }
}

impl From<i32> for Sex {
    fn from(value: i32) -> Self {
        match value {
            1 => Self::Male,
            2 => Self::Female,
            _ => Self::Unknown,
        }
    }
}

impl From<Sex> for i32 {
    fn from(sex: Sex) -> Self {
        sex.code()
    }
}
