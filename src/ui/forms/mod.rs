//! Form rendering module
//!
//! This module contains UI components for rendering forms:
//! - `field_renderer`: Field rendering utilities
//! - `registration_form`: The registration screen

mod field_renderer;
mod registration_form;

pub use registration_form::draw as draw_registration_form;
