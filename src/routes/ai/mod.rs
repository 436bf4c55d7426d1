mod handler;
mod model;

pub use handler::{ai_chat, ai_image, ai_text};
