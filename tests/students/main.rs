//! Student API integration tests.
//!
//! Each test starts the axum router on a random port over a scratch data
//! directory and drives it with reqwest.


mod assets;
mod routing;
