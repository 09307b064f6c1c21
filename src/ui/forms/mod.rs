//! Form rendering

mod field_renderer;
mod register_form;

pub use register_form::draw_register_form;
