//! Browser-only suites, run with `wasm-pack test --headless`.

#![cfg(target_arch = "wasm32")]

#[path = "wasm/storage_tests.rs"]
mod storage_tests;
