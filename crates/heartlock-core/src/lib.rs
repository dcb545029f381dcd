//! Heartlock Core - Foundational types for the Heartlock presentation
//!
//! This crate provides the core types that all other Heartlock crates depend on:
//! - `Vec2` - Planar positions and velocities
//! - `Viewport` - Drawing surface dimensions
//! - `Color` - RGBA colors
//! - Error types and Result alias

mod error;
mod types;

pub use error::{HeartlockError, Result};
pub use types::{Color, Vec2, Viewport};
