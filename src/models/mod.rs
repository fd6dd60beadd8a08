//! Data models

pub mod account;
pub mod book;

pub use account::{Account, Role};
pub use book::Book;
