//! Request handlers, one module per resource.

pub mod duties;
pub mod families;
pub mod health;
pub mod members;
pub mod stats;
