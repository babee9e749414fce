pub mod analysis;
pub mod config;
pub mod dataset;
pub mod error;
pub mod itemset;
pub mod mining;
pub mod report;
pub mod transaction;
pub mod util;

pub use analysis::{Analysis, MiningParams};
pub use config::Config;
pub use dataset::{ColumnFilter, CsvLoader};
pub use error::{AssocError, Result};
pub use itemset::{Item, Itemset};
pub use mining::{
    derive, mine, Apriori, CountingStrategy, FrequentItemsets, MinerOptions, Redundancy, Rule,
    RuleDeriver, RuleOptions,
};
pub use report::{render_report, write_report, ReportFormat};
pub use transaction::{Record, Transaction, TransactionBuilder};
