//! Word(docx) 生成
//!
//! 文档模型 → docx-rs。图片先用 image 解码、按需缩小、统一转为 PNG 再嵌入。

use crate::error::{BidAttachError, Result};
use bid_attach_common::document::EXPIRED_MARK;
use bid_attach_common::layout::{CAPTION_SIZE_HALF_PT, TITLE_SIZE_HALF_PT};
use bid_attach_common::{AttachmentDocument, Block, ImageLayout, Page};
use docx_rs::{AlignmentType, BreakType, Docx, Paragraph, Pic, Run, RunFonts};
use image::imageops::FilterType;
use image::{GenericImageView, ImageFormat};
use std::io::{Cursor, Seek, Write};
use std::path::Path;

const EAST_ASIA_FONT: &str = "宋体";
const WARNING_COLOR: &str = "C00000";

/// 文档模型写入任意 Write + Seek
pub fn write_docx<W: Write + Seek>(
    doc: &AttachmentDocument,
    layout: &ImageLayout,
    writer: W,
) -> Result<()> {
    let mut docx = Docx::new();

    for block in doc.blocks() {
        docx = match block {
            Block::Title { text } => docx.add_paragraph(title_paragraph(text)),
            Block::Notice { text } => docx.add_paragraph(
                Paragraph::new().add_run(text_run(text).size(CAPTION_SIZE_HALF_PT)),
            ),
            Block::Page(page) => {
                let pic = load_picture(&page.image, layout)?;
                docx.add_paragraph(caption_paragraph(page))
                    .add_paragraph(Paragraph::new().add_run(Run::new().add_image(pic)))
                    .add_paragraph(Paragraph::new().add_run(Run::new().add_break(BreakType::Page)))
            }
        };
    }

    docx.build()
        .pack(writer)
        .map_err(|e| BidAttachError::DocxGeneration(format!("保存失败: {:?}", e)))?;

    Ok(())
}

/// 在内存中生成 docx
pub fn render_docx(doc: &AttachmentDocument, layout: &ImageLayout) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    write_docx(doc, layout, &mut buffer)?;
    Ok(buffer.into_inner())
}

fn text_run(text: &str) -> Run {
    Run::new()
        .add_text(text)
        .fonts(RunFonts::new().east_asia(EAST_ASIA_FONT))
}

fn title_paragraph(text: &str) -> Paragraph {
    Paragraph::new()
        .align(AlignmentType::Center)
        .add_run(text_run(text).size(TITLE_SIZE_HALF_PT).bold())
}

fn caption_paragraph(page: &Page) -> Paragraph {
    let paragraph = Paragraph::new().add_run(text_run(&page.caption).size(CAPTION_SIZE_HALF_PT));
    if page.expired {
        paragraph.add_run(
            text_run(EXPIRED_MARK)
                .size(CAPTION_SIZE_HALF_PT)
                .bold()
                .color(WARNING_COLOR),
        )
    } else {
        paragraph
    }
}

/// 图片解码 → 缩小 → PNG → Pic（固定显示宽度）
fn load_picture(path: &Path, layout: &ImageLayout) -> Result<Pic> {
    let bytes = std::fs::read(path)?;
    let img = image::load_from_memory(&bytes)
        .map_err(|e| BidAttachError::ImageLoad(format!("{}: {}", path.display(), e)))?;

    let (width, height) = img.dimensions();
    let img = match layout.downscale_target(width, height) {
        Some((w, h)) => img.resize_exact(w, h, FilterType::Triangle),
        None => img,
    };

    let mut png = Vec::new();
    img.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|e| BidAttachError::ImageLoad(format!("{}: {}", path.display(), e)))?;

    let (width, height) = img.dimensions();
    let (width_emu, height_emu) = layout.display_size_emu(width, height);
    Ok(Pic::new(&png).size(width_emu, height_emu))
}
