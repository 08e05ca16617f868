pub mod docx;

use crate::assembler;
use crate::config::Config;
use crate::error::{BidAttachError, Result};
use bid_attach_common::Staffing;
use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// 输出文件名前缀
pub const OUTPUT_PREFIX: &str = "标书人员附件";

/// 一次生成的结果
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedFile {
    pub file_name: String,
    pub path: PathBuf,
    pub page_count: usize,
    pub expired_count: usize,
    pub notice_count: usize,
}

/// 标书人员附件_YYYYmmdd_HHMMSS.docx
pub fn output_file_name(now: NaiveDateTime) -> String {
    format!("{}_{}.docx", OUTPUT_PREFIX, now.format("%Y%m%d_%H%M%S"))
}

/// 下载链接只接受输出目录直下的 docx 文件名
pub fn is_safe_file_name(file_name: &str) -> bool {
    !file_name.is_empty()
        && file_name != "."
        && file_name != ".."
        && !file_name.contains(|c: char| matches!(c, '/' | '\\' | '\0'))
        && Path::new(file_name)
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("docx"))
            .unwrap_or(false)
}

/// 同一秒内最多生成的文件数
const MAX_SAME_NAME: u32 = 100;

/// 以 create_new 写入，同名时追加 _2, _3, ...
fn write_unique(output_dir: &Path, base_name: &str, bytes: &[u8]) -> Result<(String, PathBuf)> {
    let stem = base_name.strip_suffix(".docx").unwrap_or(base_name);

    for n in 1..=MAX_SAME_NAME {
        let file_name = if n == 1 {
            format!("{}.docx", stem)
        } else {
            format!("{}_{}.docx", stem, n)
        };
        let path = output_dir.join(&file_name);

        match std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
        {
            Ok(mut file) => {
                file.write_all(bytes)?;
                return Ok((file_name, path));
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(e.into()),
        }
    }

    Err(BidAttachError::DocxGeneration(format!(
        "无法确定输出文件名: {}",
        base_name
    )))
}

/// 组装 → 生成 docx → 保存到输出目录（当前时间）
pub fn generate(config: &Config, staffing: &Staffing) -> Result<GeneratedFile> {
    generate_at(config, staffing, Local::now().naive_local())
}

/// 指定时间的生成（时间同时决定文件名和有效期基准日）
pub fn generate_at(config: &Config, staffing: &Staffing, now: NaiveDateTime) -> Result<GeneratedFile> {
    let doc = assembler::assemble(&config.person_docs_dir, staffing, now.date())?;
    let bytes = docx::render_docx(&doc, &config.image_layout())?;

    std::fs::create_dir_all(&config.output_dir)?;
    let (file_name, path) = write_unique(&config.output_dir, &output_file_name(now), &bytes)?;

    tracing::info!(
        file = %file_name,
        pages = doc.page_count(),
        expired = doc.expired_count(),
        "附件文档已生成"
    );

    Ok(GeneratedFile {
        file_name,
        path,
        page_count: doc.page_count(),
        expired_count: doc.expired_count(),
        notice_count: doc.notices().count(),
    })
}
