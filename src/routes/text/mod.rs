mod handler;
mod model;

pub use handler::{analyze, sentiment, summarize, translate};
