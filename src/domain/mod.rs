//! Domain layer - Core business entities
//!
//! Plain records that represent business concepts independent of
//! infrastructure concerns. No database or transport types live here.

pub mod category;

pub use category::{Category, NewCategory};
