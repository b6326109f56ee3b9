//! diarist - Insights for a local journal
//!
//! Reads a journal's JSON entry collection and derives views from it: keyword
//! and date-range search, mood distribution, posting frequency, writing-volume
//! trend, and consecutive-day streaks. The analytics in [`domain`] are pure
//! functions over `&[DiaryEntry]`; they never mutate or persist entries.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::DiaryEntry;
pub use error::DiaristError;
