// Library target backs the `termdots` binary, the integration tests under
// tests/ and the criterion benchmarks.

pub mod app;
pub mod clock;
pub mod config;
pub mod engine;
pub mod event;
pub mod feed;
pub mod ui;
pub mod widget;
