//! # Base types for gridchess
//!
//! This is an auxiliary crate for `gridchess`, which contains the plain value types: colors, piece
//! kinds, coordinates and board dimensions. It was split from the main crate so the rule engine
//! and anything that only needs to talk about squares can share the same vocabulary.
//!
//! Normally you don't want to use this crate directly. Use `gridchess` instead.

pub mod geometry;
pub mod types;
