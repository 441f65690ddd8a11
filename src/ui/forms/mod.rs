//! Form rendering

mod create_asset_form;
mod field_renderer;

pub use create_asset_form::draw as draw_create_asset;
