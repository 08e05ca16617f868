use thiserror::Error;

#[derive(Error, Debug)]
pub enum BidAttachError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("人名不合法: {0}")]
    InvalidName(String),

    #[error("文件名不合法: {0}")]
    InvalidFileName(String),

    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件夹不存在: {0}")]
    FolderNotFound(String),

    #[error("图片读取失败: {0}")]
    ImageLoad(String),

    #[error("Word生成失败: {0}")]
    DocxGeneration(String),

    #[error("JSON解析错误: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),
}

impl From<bid_attach_common::Error> for BidAttachError {
    fn from(err: bid_attach_common::Error) -> Self {
        match err {
            bid_attach_common::Error::InvalidName(name) => BidAttachError::InvalidName(name),
        }
    }
}

pub type Result<T> = std::result::Result<T, BidAttachError>;
