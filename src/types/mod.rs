pub mod check;
pub mod common;
pub mod health;
pub mod info;
