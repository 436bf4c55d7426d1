mod handler;
mod model;

pub use handler::{ytdl, ytmp3, ytmp4, ytsearch};
