//! Form rendering module
//!
//! This module contains UI components for rendering the profile form:
//! - `field_renderer`: Single-line field rendering
//! - `checkbox_group`: Checkbox group for set-valued fields
//! - `profile_form`: Layout of the whole form

mod checkbox_group;
mod field_renderer;
mod profile_form;

pub use profile_form::draw_profile_form;
