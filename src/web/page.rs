//! 表单页面 HTML

use bid_attach_common::{Role, Staffing};

/// 页面渲染所需的数据
#[derive(Debug, Clone, Default)]
pub struct IndexView {
    /// 回填到输入框的人名
    pub staffing: Staffing,
    pub result: Option<ResultView>,
    pub error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ResultView {
    pub file_name: String,
    pub link: String,
    pub page_count: usize,
    pub expired_count: usize,
}

pub fn download_link(file_name: &str) -> String {
    format!("/download/{}", urlencoding::encode(file_name))
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_index(view: &IndexView) -> String {
    let mut fields = String::new();
    for role in Role::ALL {
        fields.push_str(&format!(
            r#"      <label>{label}：<input type="text" name="{field}" value="{value}" required></label><br>
"#,
            label = role.label(),
            field = role.form_field(),
            value = escape_html(view.staffing.name_for(role)),
        ));
    }

    let error = view
        .error
        .as_deref()
        .map(|msg| format!(r#"    <p class="error">❌ {}</p>
"#, escape_html(msg)))
        .unwrap_or_default();

    let result = view
        .result
        .as_ref()
        .map(|r| {
            let expired = if r.expired_count > 0 {
                format!("，其中 {} 项证件已过有效期", r.expired_count)
            } else {
                String::new()
            };
            format!(
                r#"    <p class="result">✅ 已生成 {pages} 页{expired}：<a href="{link}">{name}</a></p>
"#,
                pages = r.page_count,
                expired = expired,
                link = escape_html(&r.link),
                name = escape_html(&r.file_name),
            )
        })
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="zh-CN">
  <head>
    <meta charset="utf-8">
    <title>标书人员附件生成</title>
  </head>
  <body>
    <h1>标书人员附件生成</h1>
{error}    <form method="post" action="/">
{fields}      <button type="submit">生成 Word</button>
    </form>
{result}  </body>
</html>
"#
    )
}
