// Shared helpers for integration tests. Each aggregator pulls this in via
// `#[path]`, so not every helper is used by every test crate.
#![allow(dead_code)]

pub mod helpers;
