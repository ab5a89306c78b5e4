mod args;
mod ops;

pub use args::{Args, Op, Parser};
