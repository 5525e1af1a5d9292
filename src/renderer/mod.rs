//! Rendering module
//!
//! Turns views into styled text lines; front ends decide how to draw them.

pub mod text;

pub use text::{Line, Tone, render_lines};
