//! The components module contains the page shell and the feed controller.

mod app;
pub mod feed_controller;

pub use app::*;
