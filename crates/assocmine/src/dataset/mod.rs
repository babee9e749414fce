pub mod columns;
pub mod loader;

pub use columns::ColumnFilter;
pub use loader::CsvLoader;
