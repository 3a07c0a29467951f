pub mod args;
pub mod check;
