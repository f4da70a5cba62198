//! Easel Core Types
//!
//! This crate provides the foundational types for building Easel visual
//! models. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Symbols**: Drawable primitives and the group container ([`symbol`] module)
//!
//! Symbols serialize themselves to ordered JSON field maps; the compact
//! encoding of those maps is what the visualization backend consumes.

pub mod color;
pub mod geometry;
pub mod symbol;
