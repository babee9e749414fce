use crate::error::{AssocError, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};

/// Selects which columns contribute items, by glob over column names.
#[derive(Debug, Clone, Default)]
pub struct ColumnFilter {
    include: Option<GlobSet>,
    exclude: Option<GlobSet>,
}

impl ColumnFilter {
    /// Keeps every column.
    pub fn all() -> Self {
        Self::default()
    }

    /// An empty `include` list keeps every column not matched by `exclude`.
    pub fn new(include: &[String], exclude: &[String]) -> Result<Self> {
        Ok(Self {
            include: build_globset(include)?,
            exclude: build_globset(exclude)?,
        })
    }

    pub fn allows(&self, column: &str) -> bool {
        let included = self
            .include
            .as_ref()
            .map_or(true, |globs| globs.is_match(column));
        let excluded = self
            .exclude
            .as_ref()
            .is_some_and(|globs| globs.is_match(column));
        included && !excluded
    }
}

fn build_globset(patterns: &[String]) -> Result<Option<GlobSet>> {
    if patterns.is_empty() {
        return Ok(None);
    }

    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| AssocError::InvalidPattern {
            pattern: pattern.clone(),
            message: e.to_string(),
        })?;
        builder.add(glob);
    }
    let globset = builder
        .build()
        .map_err(|e| AssocError::Config(format!("Failed to build column filter: {}", e)))?;
    Ok(Some(globset))
}
