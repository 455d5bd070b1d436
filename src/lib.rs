#![doc = include_str!("../README.md")]

pub mod args;
pub mod files;
pub mod filter;
pub mod line;
