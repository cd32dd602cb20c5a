//! Board Context - 备份导入导出

use chrono::NaiveDate;
use serde_json::Value;

use super::Dataset;

/// 导出的备份文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupFile {
    pub file_name: String,
    pub contents: String,
}

/// 备份文件名，带导出日期
pub fn backup_file_name(date: NaiveDate) -> String {
    format!("links-backup-{}.json", date.format("%Y-%m-%d"))
}

/// 导出为格式化 JSON `{categories, links}`
pub fn export_backup(dataset: &Dataset, date: NaiveDate) -> Result<BackupFile, serde_json::Error> {
    Ok(BackupFile {
        file_name: backup_file_name(date),
        contents: serde_json::to_string_pretty(dataset)?,
    })
}

/// 解析备份文件
///
/// 只有同时包含 `categories` 与 `links` 字段且能解析为数据集时才返回，
/// 其余情况一律忽略（返回 None）。
pub fn parse_backup(bytes: &[u8]) -> Option<Dataset> {
    let value: Value = match serde_json::from_slice(bytes) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!(error = %e, "Ignoring backup: not valid JSON");
            return None;
        }
    };

    let has_fields = value
        .as_object()
        .map(|o| o.contains_key("categories") && o.contains_key("links"))
        .unwrap_or(false);
    if !has_fields {
        tracing::debug!("Ignoring backup: categories/links missing");
        return None;
    }

    match serde_json::from_value(value) {
        Ok(dataset) => Some(dataset),
        Err(e) => {
            tracing::debug!(error = %e, "Ignoring backup: malformed dataset");
            None
        }
    }
}
