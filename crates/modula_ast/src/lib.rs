#![doc = include_str!("../README.md")]

pub mod labels;
pub mod node;
pub mod render;

pub use node::TreeNode;
