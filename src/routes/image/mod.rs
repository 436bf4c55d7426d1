mod handler;
mod model;

pub use handler::{bgremove, filters, lyrics, meme, resize};
