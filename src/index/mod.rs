pub mod bst;
pub mod tree;
