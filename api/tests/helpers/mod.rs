#![allow(dead_code, unused_imports)]

pub mod app;

pub use app::{StubGenerator, StubScorer, make_test_app, post_json, read_json};
