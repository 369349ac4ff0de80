//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `diet_form`: Patient details form

mod diet_form;
mod field_renderer;

pub use diet_form::draw_diet_form;
