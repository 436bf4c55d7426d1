mod handler;
mod model;

pub use handler::{random_joke, random_news, random_quote};
