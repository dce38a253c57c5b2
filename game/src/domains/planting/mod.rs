pub use commands::*;
pub use domain::*;
pub use growth::*;
pub use layout::*;

mod commands;
mod domain;
mod growth;
mod layout;
mod loading;
mod queries;
mod update;
