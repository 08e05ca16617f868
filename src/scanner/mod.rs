use crate::error::{BidAttachError, Result};
use bid_attach_common::extract_expiry_date;
use chrono::NaiveDate;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct ImageInfo {
    pub path: PathBuf,
    pub file_name: String,
    /// 文件名中的有效期
    pub expiry: Option<NaiveDate>,
}

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "gif", "webp", "tif", "tiff"];

/// 人员资料文件夹直下的图片（按文件名字典序）
pub fn scan_folder(folder: &Path) -> Result<Vec<ImageInfo>> {
    match std::fs::metadata(folder) {
        Ok(metadata) if metadata.is_dir() => {}
        Ok(_) => return Err(BidAttachError::FolderNotFound(folder.display().to_string())),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(BidAttachError::FolderNotFound(folder.display().to_string()));
        }
        Err(e) => return Err(e.into()),
    }

    let mut images = Vec::new();

    for entry in WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)  // 不递归子目录
    {
        // 列举失败不能当作"没有图片"
        let entry = entry.map_err(std::io::Error::from)?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let is_image = path
            .extension()
            .map(|ext| is_image_extension(&ext.to_string_lossy()))
            .unwrap_or(false);
        if !is_image {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().to_string();
        let expiry = extract_expiry_date(&file_name);

        images.push(ImageInfo {
            path: path.to_path_buf(),
            file_name,
            expiry,
        });
    }

    // 文件名排序
    images.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(images)
}

fn is_image_extension(ext: &str) -> bool {
    let ext = ext.to_ascii_lowercase();
    IMAGE_EXTENSIONS.contains(&ext.as_str())
}
