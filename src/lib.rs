pub mod args;
pub mod commands;
mod error;
mod ledger;
pub mod model;
mod web;


pub use error::Error;
pub use error::Result;
pub use ledger::Ledger;
