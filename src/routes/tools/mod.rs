mod handler;
mod model;

pub use handler::{expand, qr, shorten, weather};
