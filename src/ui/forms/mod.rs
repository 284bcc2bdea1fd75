//! Form rendering module
//!
//! - `field_renderer`: text field and inline error rendering
//! - `sign_in_form`: the sign-in card

mod field_renderer;
mod sign_in_form;

pub use sign_in_form::{card_area, draw_sign_in};
