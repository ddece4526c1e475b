//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `car_price_form`: The car price form

mod car_price_form;
mod field_renderer;

pub use car_price_form::draw_form;
