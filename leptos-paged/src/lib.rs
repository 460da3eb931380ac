#![warn(missing_docs)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

mod error;
mod loader;
mod page;
mod permit;
mod scroll;

pub use error::*;
pub use loader::*;
pub use page::*;
pub use permit::*;
pub use scroll::*;
