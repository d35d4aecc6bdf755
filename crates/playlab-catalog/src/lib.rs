#![doc = include_str!("../README.md")]

mod catalog;
mod category;
mod content;
mod explanation;
mod lab;

pub use catalog::Catalog;
pub use category::Category;
pub use explanation::{CodeExample, Explanation, KeyPoint};
pub use lab::{Difficulty, Lab, LabCategory};
