//! blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates under short names and hosts the pieces the
//! binary needs on top of them: CLI configuration, logging setup and the
//! headless runner.

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;

pub mod config;
pub mod headless;
pub mod logging;
