use crate::error::{BidAttachError, Result};
use bid_attach_common::layout::{DEFAULT_IMAGE_WIDTH_INCHES, DEFAULT_MAX_IMAGE_PX};
use bid_attach_common::ImageLayout;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 人员资料根目录（person_docs/<姓名>/）
    pub person_docs_dir: PathBuf,
    /// 生成文件输出目录
    pub output_dir: PathBuf,
    pub port: u16,
    /// 图片显示宽度（英寸）
    pub image_width_inches: f32,
    /// 嵌入前缩放的最大像素宽度（0 表示不缩放）
    pub max_image_px: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            person_docs_dir: PathBuf::from("person_docs"),
            output_dir: PathBuf::from("output"),
            port: DEFAULT_PORT,
            image_width_inches: DEFAULT_IMAGE_WIDTH_INCHES,
            max_image_px: DEFAULT_MAX_IMAGE_PX,
        }
    }
}

impl Config {
    /// 配置文件 → 环境变量 的顺序合并
    pub fn load() -> Result<Self> {
        let config = Self::load_from(&Self::config_path()?)?;
        Ok(config.with_env_overrides(|key| std::env::var(key).ok()))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| BidAttachError::Config("找不到用户主目录".into()))?;
        Ok(home.join(".config").join("bid-attach").join("config.json"))
    }

    /// PERSON_DOCS_DIR / OUTPUT_DIR / PORT
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup("PERSON_DOCS_DIR").filter(|v| !v.is_empty()) {
            self.person_docs_dir = PathBuf::from(dir);
        }
        if let Some(dir) = lookup("OUTPUT_DIR").filter(|v| !v.is_empty()) {
            self.output_dir = PathBuf::from(dir);
        }
        match lookup("PORT").map(|p| p.parse::<u16>()) {
            Some(Ok(port)) => self.port = port,
            Some(Err(_)) => tracing::warn!("PORT 无法解析，使用 {}", self.port),
            None => {}
        }
        self
    }

    pub fn image_layout(&self) -> ImageLayout {
        ImageLayout {
            width_inches: self.image_width_inches,
            max_px: self.max_image_px,
        }
    }

    /// 启动时创建输出目录
    pub fn ensure_output_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.output_dir)?;
        Ok(())
    }
}
