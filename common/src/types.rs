//! 人员、岗位的类型定义
//!
//! - Role: 表单收集的四个固定岗位
//! - Staffing: 一次提交的四个人名（按岗位顺序）

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// 班子岗位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// 项目经理
    ProjectManager,
    /// 技术负责人
    TechLead,
    /// 质量员
    QualityOfficer,
    /// 安全员
    SafetyOfficer,
}

impl Role {
    /// 表单顺序
    pub const ALL: [Role; 4] = [
        Role::ProjectManager,
        Role::TechLead,
        Role::QualityOfficer,
        Role::SafetyOfficer,
    ];

    /// 文档里使用的中文名称
    pub fn label(&self) -> &'static str {
        match self {
            Role::ProjectManager => "项目经理",
            Role::TechLead => "技术负责人",
            Role::QualityOfficer => "质量员",
            Role::SafetyOfficer => "安全员",
        }
    }

    /// HTML表单字段名
    pub fn form_field(&self) -> &'static str {
        match self {
            Role::ProjectManager => "pm",
            Role::TechLead => "tech",
            Role::QualityOfficer => "quality",
            Role::SafetyOfficer => "safety",
        }
    }

    /// 岗位必需证书关键字（按插入顺序）
    pub fn required_keywords(&self) -> &'static [&'static str] {
        match self {
            Role::ProjectManager => &["建造师", "B证"],
            Role::TechLead => &[],
            Role::QualityOfficer => &["质量员"],
            Role::SafetyOfficer => &["C证"],
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// 一次提交的班子人员
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staffing {
    pub pm: String,
    pub tech: String,
    pub quality: String,
    pub safety: String,
}

impl Staffing {
    pub fn new(
        pm: impl Into<String>,
        tech: impl Into<String>,
        quality: impl Into<String>,
        safety: impl Into<String>,
    ) -> Self {
        Self {
            pm: pm.into(),
            tech: tech.into(),
            quality: quality.into(),
            safety: safety.into(),
        }
    }

    pub fn name_for(&self, role: Role) -> &str {
        match role {
            Role::ProjectManager => &self.pm,
            Role::TechLead => &self.tech,
            Role::QualityOfficer => &self.quality,
            Role::SafetyOfficer => &self.safety,
        }
    }

    /// (岗位, 人名) 按表单顺序
    pub fn assignments(&self) -> impl Iterator<Item = (Role, &str)> + '_ {
        Role::ALL.into_iter().map(move |role| (role, self.name_for(role)))
    }

    /// 去掉首尾空白并校验全部人名
    pub fn normalized(&self) -> Result<Self> {
        Ok(Self {
            pm: validate_person_name(&self.pm)?,
            tech: validate_person_name(&self.tech)?,
            quality: validate_person_name(&self.quality)?,
            safety: validate_person_name(&self.safety)?,
        })
    }
}

/// 人名会作为目录名使用，不能跳出资料根目录
pub fn validate_person_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty()
        || trimmed == "."
        || trimmed == ".."
        || trimmed.contains(|c: char| matches!(c, '/' | '\\' | '\0'))
    {
        return Err(Error::InvalidName(name.to_string()));
    }
    Ok(trimmed.to_string())
}
