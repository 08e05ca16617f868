//! bid-attach
//!
//! 标书人员附件自动生成：按人名找资料文件夹，按关键字挑图片，生成 Word。

pub mod cli;
pub mod config;
pub mod error;
pub mod scanner;
pub mod assembler;
pub mod export;
pub mod web;
