pub use errors::*;

mod errors;
mod macros;
