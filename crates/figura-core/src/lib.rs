//! Figura Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Figura diagram
//! resolvers and renderers. It includes:
//!
//! - **Geometry**: Points, sizes, bounds and segments ([`geometry`] module)
//! - **Path**: The vector path mini-language with circular arcs ([`path`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Draw**: Stroke styles and layered SVG output ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod path;
