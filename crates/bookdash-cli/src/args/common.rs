use clap::Args;

#[derive(Debug, Clone, Default, Args)]
pub struct ViewModeArgs {
    #[arg(long, global = true, help = "Compact output (fewer sections and columns)")]
    pub compact: bool,
}

impl ViewModeArgs {
    pub fn resolve(&self) -> crate::presentation::ViewMode {
        use crate::presentation::ViewMode;

        if self.compact {
            ViewMode::Compact
        } else {
            ViewMode::default()
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct CountryArgs {
    #[arg(
        long = "country",
        value_delimiter = ',',
        help = "Country to include (repeatable; defaults to the first country in the dataset)"
    )]
    pub countries: Vec<String>,

    #[arg(long, conflicts_with = "countries", help = "Select every country")]
    pub all_countries: bool,
}

impl CountryArgs {
    /// Explicit countries, every country, or the first one in the dataset.
    pub fn resolve(&self, available: &[String]) -> Vec<String> {
        if self.all_countries {
            available.to_vec()
        } else if !self.countries.is_empty() {
            self.countries.clone()
        } else {
            available.iter().take(1).cloned().collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn available() -> Vec<String> {
        vec!["usa".to_string(), "canada".to_string()]
    }

    #[test]
    fn test_default_is_first_country() {
        assert_eq!(CountryArgs::default().resolve(&available()), vec!["usa"]);
        assert!(CountryArgs::default().resolve(&[]).is_empty());
    }

    #[test]
    fn test_explicit_and_all() {
        let explicit = CountryArgs {
            countries: vec!["spain".to_string()],
            all_countries: false,
        };
        assert_eq!(explicit.resolve(&available()), vec!["spain"]);

        let all = CountryArgs {
            countries: Vec::new(),
            all_countries: true,
        };
        assert_eq!(all.resolve(&available()), available());
    }
}
