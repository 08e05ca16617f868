//! 附件分类规则
//!
//! 文件名按关键字（子串包含）分类。分类顺序固定：
//! 1. 身份证（只取第一张，检查有效期）
//! 2. 中级/高级工程师证（全部，不检查有效期）
//! 3. 岗位必需证书（按岗位表，全部，检查有效期）
//! 4. 劳动合同、社保（全部，不检查有效期）

use crate::types::Role;

/// 身份证关键字
pub const ID_CARD_KEYWORD: &str = "身份证";

/// 职称关键字（插入顺序）
pub const ENGINEER_LEVELS: &[&str] = &["中级工程师", "高级工程师"];

/// 劳动关系材料关键字（插入顺序）
pub const EMPLOYMENT_TAGS: &[&str] = &["劳动合同", "社保"];

/// 附件类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    IdCard,
    EngineerLevel,
    RoleCertificate,
    Employment,
}

impl Category {
    /// 是否根据文件名日期检查有效期
    pub fn checks_expiry(&self) -> bool {
        matches!(self, Category::IdCard | Category::RoleCertificate)
    }

    /// 标题是否带岗位名
    pub fn caption_has_role(&self) -> bool {
        matches!(self, Category::IdCard | Category::RoleCertificate)
    }
}

/// 一个文件被某个关键字选中的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<'a> {
    pub category: Category,
    pub keyword: &'static str,
    pub file_name: &'a str,
}

impl Selection<'_> {
    /// 图片上方的标题（不含过期提示）
    pub fn caption(&self, name: &str, role: Role) -> String {
        if self.category.caption_has_role() {
            format!("{} {} - {}", role.label(), name, self.keyword)
        } else {
            format!("{} - {}", name, self.keyword)
        }
    }
}

/// 按固定顺序从文件名列表中选出要插入的附件
///
/// `file_names` 需已按字典序排序。同一文件命中多个关键字时，
/// 每个关键字各插入一次。
pub fn select_attachments(role: Role, file_names: &[String]) -> Vec<Selection<'_>> {
    let mut selections = Vec::new();

    // 身份证只取第一张
    if let Some(file_name) = file_names.iter().find(|f| f.contains(ID_CARD_KEYWORD)) {
        selections.push(Selection {
            category: Category::IdCard,
            keyword: ID_CARD_KEYWORD,
            file_name,
        });
    }

    push_all_matches(&mut selections, Category::EngineerLevel, ENGINEER_LEVELS, file_names);
    push_all_matches(
        &mut selections,
        Category::RoleCertificate,
        role.required_keywords(),
        file_names,
    );
    push_all_matches(&mut selections, Category::Employment, EMPLOYMENT_TAGS, file_names);

    selections
}

fn push_all_matches<'a>(
    selections: &mut Vec<Selection<'a>>,
    category: Category,
    keywords: &'static [&'static str],
    file_names: &'a [String],
) {
    for &keyword in keywords {
        for file_name in file_names.iter().filter(|f| f.contains(keyword)) {
            selections.push(Selection {
                category,
                keyword,
                file_name,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        let mut v: Vec<String> = list.iter().map(|s| s.to_string()).collect();
        v.sort();
        v
    }

    fn picked<'a>(selections: &'a [Selection<'a>]) -> Vec<&'a str> {
        selections.iter().map(|s| s.file_name).collect()
    }

    #[test]
    fn test_id_card_only_first() {
        let files = names(&["身份证_正面.jpg", "身份证_反面.jpg"]);
        let selections = select_attachments(Role::TechLead, &files);
        assert_eq!(selections.len(), 1);
        assert_eq!(selections[0].category, Category::IdCard);
        assert_eq!(selections[0].file_name, files[0]);
    }

    #[test]
    fn test_fixed_category_order() {
        let files = names(&[
            "社保_2023.jpg",
            "劳动合同.jpg",
            "C证_2030-01-01.jpg",
            "高级工程师.jpg",
            "中级工程师.jpg",
            "身份证.jpg",
        ]);
        let selections = select_attachments(Role::SafetyOfficer, &files);
        assert_eq!(
            picked(&selections),
            vec![
                "身份证.jpg",
                "中级工程师.jpg",
                "高级工程师.jpg",
                "C证_2030-01-01.jpg",
                "劳动合同.jpg",
                "社保_2023.jpg",
            ]
        );
    }

    #[test]
    fn test_all_social_security_files_inserted() {
        let files = names(&["社保_1.jpg", "社保_2.jpg", "社保_3.jpg"]);
        let selections = select_attachments(Role::QualityOfficer, &files);
        assert_eq!(selections.len(), 3);
        assert!(selections.iter().all(|s| s.keyword == "社保"));
    }

    #[test]
    fn test_role_keywords_honored() {
        let files = names(&["建造师.jpg", "B证.jpg", "C证.jpg", "质量员证.jpg"]);

        let safety = select_attachments(Role::SafetyOfficer, &files);
        assert_eq!(picked(&safety), vec!["C证.jpg"]);

        let quality = select_attachments(Role::QualityOfficer, &files);
        assert_eq!(picked(&quality), vec!["质量员证.jpg"]);

        let pm = select_attachments(Role::ProjectManager, &files);
        assert_eq!(picked(&pm), vec!["建造师.jpg", "B证.jpg"]);

        let tech = select_attachments(Role::TechLead, &files);
        assert!(tech.is_empty());
    }

    #[test]
    fn test_file_matching_several_keywords() {
        let files = names(&["劳动合同及社保.jpg"]);
        let selections = select_attachments(Role::TechLead, &files);
        assert_eq!(selections.len(), 2);
        assert_eq!(selections[0].keyword, "劳动合同");
        assert_eq!(selections[1].keyword, "社保");
    }

    #[test]
    fn test_no_matches() {
        let files = names(&["照片.jpg", "简历.png"]);
        assert!(select_attachments(Role::ProjectManager, &files).is_empty());
    }

    #[test]
    fn test_caption_format() {
        let id = Selection {
            category: Category::IdCard,
            keyword: ID_CARD_KEYWORD,
            file_name: "身份证.jpg",
        };
        assert_eq!(id.caption("张三", Role::ProjectManager), "项目经理 张三 - 身份证");

        let level = Selection {
            category: Category::EngineerLevel,
            keyword: "中级工程师",
            file_name: "中级工程师.jpg",
        };
        assert_eq!(level.caption("张三", Role::ProjectManager), "张三 - 中级工程师");
    }

    #[test]
    fn test_expiry_check_flags() {
        assert!(Category::IdCard.checks_expiry());
        assert!(Category::RoleCertificate.checks_expiry());
        assert!(!Category::EngineerLevel.checks_expiry());
        assert!(!Category::Employment.checks_expiry());
    }
}
