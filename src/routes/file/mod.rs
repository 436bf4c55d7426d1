mod handler;
mod model;

pub use handler::{convert_html, convert_image, pdf_extract};
