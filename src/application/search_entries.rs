//! Search use case

use crate::domain::{filter, DiaryEntry, SearchResults};
use crate::error::{DiaristError, Result};
use chrono::NaiveDate;

/// A keyword plus optional inclusive date bounds, as given on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub keyword: String,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl SearchQuery {
    /// Build a query from raw arguments; dates use DD-MM-YYYY
    pub fn from_args(keyword: Option<&str>, from: Option<&str>, to: Option<&str>) -> Result<Self> {
        Ok(SearchQuery {
            keyword: keyword.unwrap_or_default().to_string(),
            from: from.map(parse_date_arg).transpose()?,
            to: to.map(parse_date_arg).transpose()?,
        })
    }

    /// Run the query over an entry collection
    pub fn run<'a>(&self, entries: &'a [DiaryEntry]) -> SearchResults<'a> {
        filter(entries, &self.keyword, self.from, self.to)
    }
}

/// Parse a DD-MM-YYYY command-line date
pub fn parse_date_arg(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%d-%m-%Y")
        .map_err(|_| DiaristError::InvalidDate(input.to_string()))
}
