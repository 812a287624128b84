//! UI building blocks for the watchface screen
//!
//! This module provides:
//! - The [`Drawable`] trait with dirty tracking
//! - [`TextRegion`], a single styled block of text
//! - [`WatchfaceLayout`], the region geometry derived from the config

pub mod core;
pub mod layout;
pub mod text;

pub use self::core::Drawable;
pub use layout::WatchfaceLayout;
pub use text::{FontWeight, TEXT_REGION_CAPACITY, TextRegion};
