//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises a full machine flow
//! against the simulated hardware. All tests run on the host with no
//! real machine required.

mod brewing_flow_tests;
mod warming_flow_tests;
