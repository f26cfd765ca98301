pub mod catalog;
pub mod filter;
pub mod fs_ops;
