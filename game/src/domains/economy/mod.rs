pub use domain::*;

mod commands;
mod domain;
