//! Single test binary entry point.
//!
//! This consolidates all tests into a single binary following matklad's best
//! practices, reducing linking overhead from 3x to 1x.
//!
//! Structure:
//! - store: reducer and history wrapper tests
//! - integration: multi-component workflow tests
//! - unit: single-component unit tests

mod integration;
mod unit;
