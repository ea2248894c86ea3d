//! CLI-level integration tests.

mod helpers;

mod completions_test;
mod convert_test;
