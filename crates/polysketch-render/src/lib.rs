//! PolySketch Render Library
//!
//! Renderer abstraction and implementations for PolySketch.
//! The default implementation uses Vello for GPU-accelerated rendering.

mod renderer;

#[cfg(feature = "vello-renderer")]
mod vello_impl;

pub use renderer::{RenderContext, Renderer, RendererError, ShapeRenderer};

#[cfg(feature = "vello-renderer")]
pub use vello_impl::VelloRenderer;
