use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Server-side subset selector. Each category has its own ordered index list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterCategory {
    #[default]
    All,
    Normal,
    Abnormal,
}

impl FilterCategory {
    pub const ALL: [FilterCategory; 3] = [
        FilterCategory::All,
        FilterCategory::Normal,
        FilterCategory::Abnormal,
    ];

    /// Path segment used by the `/api/filter/{category}` family of endpoints.
    pub fn as_str(self) -> &'static str {
        match self {
            FilterCategory::All => "all",
            FilterCategory::Normal => "normal",
            FilterCategory::Abnormal => "abnormal",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterCategory::All => "All",
            FilterCategory::Normal => "Normal",
            FilterCategory::Abnormal => "Abnormal",
        }
    }

    /// Keyboard shortcut digit.
    pub fn shortcut(self) -> char {
        match self {
            FilterCategory::All => '1',
            FilterCategory::Normal => '2',
            FilterCategory::Abnormal => '3',
        }
    }

    pub fn from_shortcut(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.shortcut() == c)
    }
}

impl fmt::Display for FilterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(FilterCategory::All),
            "normal" => Ok(FilterCategory::Normal),
            "abnormal" => Ok(FilterCategory::Abnormal),
            other => Err(format!(
                "Invalid filter type '{other}'. Use: all, normal, abnormal"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_segments_round_trip() {
        for f in FilterCategory::ALL {
            assert_eq!(f.as_str().parse::<FilterCategory>(), Ok(f));
        }
        assert!("Normal".parse::<FilterCategory>().is_err());
        assert!("".parse::<FilterCategory>().is_err());
    }

    #[test]
    fn test_shortcuts() {
        assert_eq!(FilterCategory::from_shortcut('1'), Some(FilterCategory::All));
        assert_eq!(FilterCategory::from_shortcut('2'), Some(FilterCategory::Normal));
        assert_eq!(FilterCategory::from_shortcut('3'), Some(FilterCategory::Abnormal));
        assert_eq!(FilterCategory::from_shortcut('4'), None);
    }

    #[test]
    fn test_serde_uses_lowercase() {
        let json = serde_json::to_string(&FilterCategory::Abnormal).unwrap();
        assert_eq!(json, "\"abnormal\"");
    }
}
