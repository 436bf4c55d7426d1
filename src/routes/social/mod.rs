mod handler;
mod model;

pub use handler::{instagram, tiktok, twitter};
