//! View derivation for the presentation layer.

pub mod render;
