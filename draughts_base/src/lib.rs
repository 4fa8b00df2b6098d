//! # Base types for draughts
//!
//! This is an auxiliary crate for `draughts`, which contains some core stuff: square coordinates,
//! colors, piece kinds and board geometry helpers.
//!
//! Normally you don't want to use this crate directly. Use the `draughts` crate instead.

pub mod geometry;
pub mod types;
