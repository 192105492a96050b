//! Persistence of generated texts to writers and files.

#[cfg(feature = "async")]
mod r#async;
mod sync;

#[cfg(feature = "async")]
pub use r#async::{write_file_async, write_to_async};
pub use sync::{write_file, write_to};
