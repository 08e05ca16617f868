//! 错误类型定义

use thiserror::Error;

/// 共通错误类型
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid person name: {0}")]
    InvalidName(String),
}

/// Result类型别名
pub type Result<T> = std::result::Result<T, Error>;
