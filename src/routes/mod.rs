pub mod ai;
pub mod anime;
pub mod file;
pub mod fun;
pub mod image;
pub mod social;
pub mod system;
pub mod text;
pub mod tools;
pub mod validate;
pub mod youtube;

mod params;
mod pipeline;

pub use params::Params;
pub use pipeline::{Fetched, get_or_fetch};
