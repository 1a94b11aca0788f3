use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed reader age bands used by the age distribution.
///
/// The bands are contiguous: every non-NaN age lands in exactly one of them.
/// Integer boundaries are upper-inclusive (`10 < age <= 19` is `Teens`) and
/// the last band is open above, starting at 60.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeBucket {
    UpTo10,
    From11To19,
    From20To29,
    From30To39,
    From40To49,
    From50To59,
    From60,
}

impl AgeBucket {
    pub const ALL: [AgeBucket; 7] = [
        AgeBucket::UpTo10,
        AgeBucket::From11To19,
        AgeBucket::From20To29,
        AgeBucket::From30To39,
        AgeBucket::From40To49,
        AgeBucket::From50To59,
        AgeBucket::From60,
    ];

    /// Classify an age. Returns `None` only for NaN.
    pub fn classify(age: f64) -> Option<Self> {
        if age.is_nan() {
            return None;
        }

        let bucket = if age <= 10.0 {
            AgeBucket::UpTo10
        } else if age <= 19.0 {
            AgeBucket::From11To19
        } else if age <= 29.0 {
            AgeBucket::From20To29
        } else if age <= 39.0 {
            AgeBucket::From30To39
        } else if age <= 49.0 {
            AgeBucket::From40To49
        } else if age < 60.0 {
            AgeBucket::From50To59
        } else {
            AgeBucket::From60
        };
        Some(bucket)
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgeBucket::UpTo10 => "age group 0-10",
            AgeBucket::From11To19 => "age group 11-19",
            AgeBucket::From20To29 => "age group 20-29",
            AgeBucket::From30To39 => "age group 30-39",
            AgeBucket::From40To49 => "age group 40-49",
            AgeBucket::From50To59 => "age group 50-59",
            AgeBucket::From60 => "age group 60+",
        }
    }
}

impl fmt::Display for AgeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AgeBucket {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        AgeBucket::ALL
            .into_iter()
            .find(|bucket| bucket.label() == s)
            .ok_or_else(|| Error::UnknownAgeBucket(s.to_string()))
    }
}
