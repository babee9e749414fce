use crate::analysis::MiningParams;
use crate::dataset::{ColumnFilter, CsvLoader};
use crate::error::{AssocError, Result};
use crate::mining::{CountingStrategy, MinerOptions, Redundancy, RuleOptions};
use crate::report::ReportFormat;
use crate::transaction::{TransactionBuilder, DEFAULT_ITEM_SEPARATOR, DEFAULT_MISSING_VALUES};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use xdg::BaseDirectories;

pub const CONFIG_ENV: &str = "ASSOCMINE_CONFIG";
pub const CONFIG_FILE: &str = "assocmine.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dataset: DatasetSettings,
    pub mining: MiningSettings,
    pub rules: RuleSettings,
    pub output: OutputSettings,
    /// File the settings were read from, if any.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetSettings {
    pub delimiter: String,
    pub item_separator: String,
    pub missing_values: Vec<String>,
    pub include_columns: Vec<String>,
    pub exclude_columns: Vec<String>,
    pub trim_values: bool,
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            delimiter: ",".to_string(),
            item_separator: DEFAULT_ITEM_SEPARATOR.to_string(),
            missing_values: DEFAULT_MISSING_VALUES.iter().map(|s| s.to_string()).collect(),
            include_columns: Vec::new(),
            exclude_columns: Vec::new(),
            trim_values: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MiningSettings {
    pub max_len: Option<usize>,
    pub counting: CountingStrategy,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSettings {
    pub redundancy: Redundancy,
    pub max_consequent_len: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub path: PathBuf,
    pub format: ReportFormat,
    pub summary_rows: usize,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("output.txt"),
            format: ReportFormat::Text,
            summary_rows: 10,
        }
    }
}

impl Config {
    /// Resolves the config file from the override, then `ASSOCMINE_CONFIG`,
    /// then the XDG config directory. No file means defaults.
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let explicit = config_override.or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));

        if let Some(path) = explicit {
            if !path.exists() {
                return Err(AssocError::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            return Self::from_file(path);
        }

        let discovered = BaseDirectories::with_prefix("assocmine")
            .ok()
            .and_then(|xdg| xdg.find_config_file(CONFIG_FILE));

        match discovered {
            Some(path) => Self::from_file(path),
            None => {
                log::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(&path)
            .map_err(|e| AssocError::Config(format!("Failed to read config file: {}", e)))?;
        let mut config = Self::from_toml(&contents)?;
        config.source = Some(path.as_ref().to_path_buf());
        log::debug!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Config = toml::from_str(toml_str)
            .map_err(|e| AssocError::Config(format!("Failed to parse config TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.delimiter()?;
        if self.dataset.item_separator.is_empty() {
            return Err(AssocError::Config("item_separator cannot be empty".to_string()));
        }
        if self.mining.max_len == Some(0) {
            return Err(AssocError::Config("max_len must be at least 1".to_string()));
        }
        if self.rules.max_consequent_len == Some(0) {
            return Err(AssocError::Config(
                "max_consequent_len must be at least 1".to_string(),
            ));
        }
        if self.output.path.as_os_str().is_empty() {
            return Err(AssocError::Config("output path cannot be empty".to_string()));
        }
        Ok(())
    }

    pub fn delimiter(&self) -> Result<u8> {
        match self.dataset.delimiter.as_bytes() {
            [byte] => Ok(*byte),
            _ => Err(AssocError::Config(format!(
                "delimiter must be a single byte, got '{}'",
                self.dataset.delimiter
            ))),
        }
    }

    pub fn column_filter(&self) -> Result<ColumnFilter> {
        ColumnFilter::new(&self.dataset.include_columns, &self.dataset.exclude_columns)
    }

    pub fn loader<P: AsRef<Path>>(&self, dataset: P) -> Result<CsvLoader> {
        Ok(CsvLoader::new(dataset)
            .with_delimiter(self.delimiter()?)
            .with_item_separator(self.dataset.item_separator.clone())
            .with_columns(self.column_filter()?))
    }

    pub fn transaction_builder(&self) -> TransactionBuilder {
        TransactionBuilder::new()
            .with_separator(self.dataset.item_separator.clone())
            .with_missing_values(self.dataset.missing_values.iter().cloned())
            .trim_values(self.dataset.trim_values)
    }

    pub fn mining_params(&self, min_support: f64, min_confidence: f64) -> MiningParams {
        MiningParams {
            min_support,
            miner: MinerOptions {
                max_len: self.mining.max_len,
                counting: self.mining.counting,
            },
            rules: RuleOptions {
                min_confidence,
                redundancy: self.rules.redundancy,
                max_consequent_len: self.rules.max_consequent_len,
            },
        }
    }
}
