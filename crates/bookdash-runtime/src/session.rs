use crate::config::{resolve_config_path, Config};
use crate::loader::{check_image_asset, load_records};
use crate::Result;
use bookdash_engine::{RecordSet, ReportGenerator};
use std::path::{Path, PathBuf};

/// Startup overrides, usually taken from command-line flags.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    pub config_path: Option<String>,
    pub data_path: Option<PathBuf>,
    pub image_path: Option<PathBuf>,
    pub skip_image_check: bool,
}

impl SessionOptions {
    /// Replace config values with the paths given on the command line.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(data_path) = &self.data_path {
            config.data_path = data_path.clone();
        }
        if let Some(image_path) = &self.image_path {
            config.image_path = image_path.clone();
        }
    }
}

/// Everything a dashboard run needs: resolved configuration and the
/// dataset, loaded once and never modified.
#[derive(Debug)]
pub struct Session {
    config: Config,
    records: RecordSet,
}

impl Session {
    /// Resolve configuration, check the image asset and load the dataset.
    ///
    /// Any failure here is a startup failure; callers should report it and
    /// exit before rendering.
    pub fn open(options: SessionOptions) -> Result<Self> {
        let config = Self::resolve_config(&options)?;

        if options.skip_image_check {
            tracing::debug!("image asset check disabled");
        } else {
            check_image_asset(&config.image_path)?;
        }

        let records = load_records(&config.data_path)?;
        Ok(Self { config, records })
    }

    /// Configuration with command-line overrides applied.
    pub fn resolve_config(options: &SessionOptions) -> Result<Config> {
        let config_path = resolve_config_path(options.config_path.as_deref())?;
        let mut config = Config::load_from(&config_path)?;
        options.apply_overrides(&mut config);
        Ok(config)
    }

    /// Build a session around records that are already in memory.
    pub fn from_parts(config: Config, records: RecordSet) -> Self {
        Self { config, records }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn records(&self) -> &RecordSet {
        &self.records
    }

    pub fn report(&self) -> ReportGenerator<'_> {
        self.records.report()
    }

    pub fn image_path(&self) -> &Path {
        &self.config.image_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use tempfile::TempDir;

    const CSV: &str = "Book-Title,Book-Author,ISBN,Year-Of-Publication,Publisher,Country,Age,Book-Rating,Image-URL-L\n\
                       Carrie,Stephen King,0385086954,1974,Doubleday,usa,34,9,\n";

    fn options(dir: &TempDir) -> SessionOptions {
        SessionOptions {
            config_path: Some(dir.path().join("config.toml").display().to_string()),
            data_path: Some(dir.path().join("dataviz.csv")),
            image_path: Some(dir.path().join("book.png")),
            skip_image_check: false,
        }
    }

    #[test]
    fn test_open_loads_dataset() -> Result<()> {
        let dir = TempDir::new()?;
        std::fs::write(dir.path().join("dataviz.csv"), CSV)?;
        std::fs::write(dir.path().join("book.png"), b"png")?;

        let session = Session::open(options(&dir))?;
        assert_eq!(session.records().len(), 1);
        assert_eq!(session.report().total_count(), 1);
        assert_eq!(session.image_path(), dir.path().join("book.png"));
        Ok(())
    }

    #[test]
    fn test_missing_image_fails_before_loading() -> Result<()> {
        let dir = TempDir::new()?;

        let err = Session::open(options(&dir)).unwrap_err();
        assert!(matches!(err, Error::MissingAsset(_)));
        Ok(())
    }

    #[test]
    fn test_skip_image_check() -> Result<()> {
        let dir = TempDir::new()?;
        std::fs::write(dir.path().join("dataviz.csv"), CSV)?;

        let session = Session::open(SessionOptions {
            skip_image_check: true,
            ..options(&dir)
        })?;
        assert_eq!(session.records().len(), 1);
        Ok(())
    }

    #[test]
    fn test_flags_override_config_file() -> Result<()> {
        let dir = TempDir::new()?;
        std::fs::write(
            dir.path().join("config.toml"),
            "data_path = \"from-config.csv\"\nimage_path = \"from-config.png\"\n",
        )?;

        let config = Session::resolve_config(&SessionOptions {
            config_path: Some(dir.path().join("config.toml").display().to_string()),
            data_path: Some(PathBuf::from("from-flag.csv")),
            ..SessionOptions::default()
        })?;
        assert_eq!(config.data_path, PathBuf::from("from-flag.csv"));
        assert_eq!(config.image_path, PathBuf::from("from-config.png"));
        Ok(())
    }
}
