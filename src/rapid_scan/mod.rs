//! Rapid scan domain - policy violation records, Black Duck catalog records,
//! the normalized report model and the pure builders that fold them together.
pub mod domain;
pub mod services;
