//! 附件文档的内存模型
//!
//! 文档 = 标题 + 若干块。每个 Page 是"一段标题文字 + 一张图片 + 分页符"，
//! Notice 只有一段文字，不分页。模型与具体的 docx 库无关。

use serde::Serialize;
use std::path::PathBuf;

/// 文档标题
pub const DOCUMENT_TITLE: &str = "班子人员资料（自动生成）";

/// 过期提示（追加在标题文字后面）
pub const EXPIRED_MARK: &str = " ⚠️ 有效期已过";

/// 资料文件夹不存在时的提示文字
pub fn missing_folder_notice(name: &str) -> String {
    format!("⚠️ 未找到 {} 的资料文件夹", name)
}

/// 一页：标题 + 图片
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub caption: String,
    pub expired: bool,
    pub image: PathBuf,
}

impl Page {
    /// 含过期提示的完整标题
    pub fn caption_text(&self) -> String {
        if self.expired {
            format!("{}{}", self.caption, EXPIRED_MARK)
        } else {
            self.caption.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Title { text: String },
    Notice { text: String },
    Page(Page),
}

/// 按顺序追加、最后一次性保存的文档
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttachmentDocument {
    blocks: Vec<Block>,
}

impl Default for AttachmentDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl AttachmentDocument {
    /// 带标题的空文档
    pub fn new() -> Self {
        Self {
            blocks: vec![Block::Title {
                text: DOCUMENT_TITLE.to_string(),
            }],
        }
    }

    pub fn add_notice(&mut self, text: impl Into<String>) {
        self.blocks.push(Block::Notice { text: text.into() });
    }

    pub fn add_page(&mut self, page: Page) {
        self.blocks.push(Block::Page(page));
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn pages(&self) -> impl Iterator<Item = &Page> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Page(page) => Some(page),
            _ => None,
        })
    }

    pub fn notices(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Notice { text } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn page_count(&self) -> usize {
        self.pages().count()
    }

    pub fn expired_count(&self) -> usize {
        self.pages().filter(|p| p.expired).count()
    }
}
