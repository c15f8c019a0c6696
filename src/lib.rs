//! track-submission - commit message submission tracking
//!
//! Parses commit messages of the form
//! `[type] title year:N phase:P week:W status:S` into a [`types::SubmissionRecord`]
//! and delivers the record to an ingestion endpoint.
//!
//! The parser is pure: [`parse::parse_commit_message`] returns `None` for
//! anything that doesn't follow the grammar. Delivery lives in [`submit`].

pub mod config;
pub mod error;
pub mod parse;
pub mod submit;
pub mod types;
