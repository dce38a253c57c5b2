pub use functions::*;
pub use page::*;

mod functions;
mod page;
