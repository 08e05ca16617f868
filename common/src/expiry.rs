//! 有效期判定
//!
//! 文件名中嵌入的 `YYYY-MM-DD` 视为证件有效期。
//! 没有日期或日期无法解析时视为"有效期未知"，不会标记为过期。

use chrono::NaiveDate;
use regex::Regex;

/// 从文件名提取有效期（只看第一个匹配）
pub fn extract_expiry_date(file_name: &str) -> Option<NaiveDate> {
    lazy_static::lazy_static! {
        static ref DATE_RE: Regex = Regex::new(r"(\d{4}-\d{2}-\d{2})").unwrap();
    }

    let cap = DATE_RE.captures(file_name)?;
    NaiveDate::parse_from_str(&cap[1], "%Y-%m-%d").ok()
}

/// 有效期严格早于今天才算过期
pub fn is_expired(expiry: Option<NaiveDate>, today: NaiveDate) -> bool {
    match expiry {
        Some(date) => date < today,
        None => false,
    }
}
