//! push-pon (workspace facade crate).
//!
//! This package keeps the `push_pon::{core,input,term,types}` public API in
//! one place while the implementation lives in dedicated crates under
//! `crates/`.

pub use push_pon_core as core;
pub use push_pon_input as input;
pub use push_pon_term as term;
pub use push_pon_types as types;
