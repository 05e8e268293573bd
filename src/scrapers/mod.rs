//! The three extraction stages: league page to teams, team page to roster,
//! player page to profile and career statistics.
//!
//! Each stage consumes one parsed document and produces typed records,
//! best-effort per item. Only the page fetch itself is allowed to fail a
//! whole stage; that boundary lives in the pipeline.

pub mod profile;
pub mod roster;
pub mod teams;

pub use profile::StatsOutcome;
