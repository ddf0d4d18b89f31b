//! Substring filtering for searchable lists.
//!
//! Each list owns one worker thread. The worker loads the list's items once
//! and answers filter queries against that full set. Queries carry ids and
//! the worker drops any query that was superseded before it started.

mod commands;
mod matcher;
mod worker;

pub(crate) use commands::{FilterCommand, FilterResult};
pub use matcher::{filter_indices, normalize_query};
pub(crate) use worker::spawn;
