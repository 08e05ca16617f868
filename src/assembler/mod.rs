//! 附件文档组装
//!
//! 人员 × 岗位 → 定位 person_docs/<姓名>/ → 按关键字规则挑选图片 → 追加页面

use crate::error::Result;
use crate::scanner::{self, ImageInfo};
use bid_attach_common::document::missing_folder_notice;
use bid_attach_common::{
    is_expired, select_attachments, validate_person_name, AttachmentDocument, Page, Role, Staffing,
};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::Path;

/// 追加一个人的全部附件页，返回追加的页数
///
/// 文件夹不存在时只追加一段提示文字（返回 0）。
pub fn append_person(
    doc: &mut AttachmentDocument,
    person_docs_dir: &Path,
    name: &str,
    role: Role,
    today: NaiveDate,
) -> Result<usize> {
    let name = validate_person_name(name)?;
    let folder = person_docs_dir.join(&name);

    // 只有"不存在"才降级为提示，其他 I/O 错误照常返回
    let is_dir = match std::fs::metadata(&folder) {
        Ok(metadata) => metadata.is_dir(),
        Err(e) if e.kind() == ErrorKind::NotFound => false,
        Err(e) => return Err(e.into()),
    };
    if !is_dir {
        tracing::warn!(person = %name, role = %role, folder = %folder.display(), "资料文件夹不存在");
        doc.add_notice(missing_folder_notice(&name));
        return Ok(0);
    }

    let images = scanner::scan_folder(&folder)?;
    let file_names: Vec<String> = images.iter().map(|i| i.file_name.clone()).collect();
    let by_name: HashMap<&str, &ImageInfo> =
        images.iter().map(|i| (i.file_name.as_str(), i)).collect();

    let mut appended = 0;
    for selection in select_attachments(role, &file_names) {
        let Some(image) = by_name.get(selection.file_name) else {
            continue;
        };

        let expired = selection.category.checks_expiry() && is_expired(image.expiry, today);
        if expired {
            tracing::info!(person = %name, file = %image.file_name, "证件已过有效期");
        }

        doc.add_page(Page {
            caption: selection.caption(&name, role),
            expired,
            image: image.path.clone(),
        });
        appended += 1;
    }

    tracing::debug!(person = %name, role = %role, pages = appended, "附件追加完成");
    Ok(appended)
}

/// 四个岗位按表单顺序组装成一份文档
pub fn assemble(
    person_docs_dir: &Path,
    staffing: &Staffing,
    today: NaiveDate,
) -> Result<AttachmentDocument> {
    let staffing = staffing.normalized()?;
    let mut doc = AttachmentDocument::new();

    for (role, name) in staffing.assignments() {
        append_person(&mut doc, person_docs_dir, name, role, today)?;
    }

    Ok(doc)
}
