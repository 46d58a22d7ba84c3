use log::LevelFilter;

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Settings the host page can provide: the config key (also the query
/// parameter name) and the matching `<meta name>`.
pub const PAGE_KEYS: [(&str, &str); 2] = [
    ("api_base", "ecg-viewer:api-base"),
    ("log", "ecg-viewer:log"),
];

/// Page-level settings. The browser crate gathers raw pairs from `<meta>`
/// tags and the query string; parsing lives here so it runs natively.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewerConfig {
    /// Prefix for every API path. Empty means same origin.
    pub api_base: String,
    pub log_level: LevelFilter,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl ViewerConfig {
    /// Apply `key=value` pairs in order; later pairs override earlier ones.
    /// Returns the config and a warning for every value that was rejected.
    pub fn from_pairs<'a, I>(pairs: I) -> (Self, Vec<String>)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut config = Self::default();
        let mut warnings = Vec::new();

        for (key, value) in pairs {
            match key {
                "api_base" => config.api_base = normalize_base(value),
                "log" => match value.trim().parse::<LevelFilter>() {
                    Ok(level) => config.log_level = level,
                    Err(_) => warnings.push(format!(
                        "Unknown log level '{value}', using {DEFAULT_LOG_LEVEL}"
                    )),
                },
                _ => {}
            }
        }

        (config, warnings)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}

fn normalize_base(value: &str) -> String {
    value.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let (config, warnings) = ViewerConfig::from_pairs(Vec::<(&str, &str)>::new());
        assert_eq!(config, ViewerConfig::default());
        assert!(warnings.is_empty());
        assert_eq!(config.url("/api/info"), "/api/info");
    }

    #[test]
    fn test_later_pairs_win() {
        let (config, _) = ViewerConfig::from_pairs([
            ("api_base", "http://meta.example"),
            ("api_base", "http://localhost:5001/"),
        ]);
        assert_eq!(config.api_base, "http://localhost:5001");
        assert_eq!(
            config.url("/api/filter/all"),
            "http://localhost:5001/api/filter/all"
        );
    }

    #[test]
    fn test_log_level() {
        let (config, warnings) = ViewerConfig::from_pairs([("log", "debug")]);
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert!(warnings.is_empty());

        let (config, warnings) = ViewerConfig::from_pairs([("log", "chatty")]);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_page_keys_are_recognized() {
        for (key, _) in PAGE_KEYS {
            let (config, warnings) = ViewerConfig::from_pairs([(key, "trace")]);
            assert!(warnings.is_empty(), "{key} rejected");
            assert_ne!(config, ViewerConfig::default(), "{key} ignored");
        }
    }
}
