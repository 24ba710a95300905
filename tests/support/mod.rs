// tests/support/mod.rs
// Shared support code for the integration test binaries. Not every binary
// uses every helper, so silence dead_code at the module level.
#[allow(dead_code, unused_imports)]
pub mod helpers;

#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(unused_imports)]
pub use helpers::*;
#[allow(unused_imports)]
pub use mocks::*;
