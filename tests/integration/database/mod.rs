//! Postgres store tests
//!
//! All `#[ignore]`d: they need a live database (see `common::database`).
