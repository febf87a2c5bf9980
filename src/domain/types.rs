// ==========================================
// 绩效评分报表引擎 - 领域类型定义
// ==========================================
// 职责: 指标枚举、导出格式枚举
// 红线: 指标集合固定为三项,不允许动态增删
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 评分指标 (Metric)
// ==========================================
// 序列化格式: camelCase (与导入表头/权重键一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    Productivity, // 生产率
    Quality,      // 质量
    Timeliness,   // 及时性
}

impl Metric {
    /// 全部指标（固定顺序，导出列顺序同此）
    pub const ALL: [Metric; 3] = [Metric::Productivity, Metric::Quality, Metric::Timeliness];

    /// 权重键 / 表头列名
    pub fn key(&self) -> &'static str {
        match self {
            Metric::Productivity => "productivity",
            Metric::Quality => "quality",
            Metric::Timeliness => "timeliness",
        }
    }

    /// 按键名查找指标（大小写敏感，与原始表头一致）
    pub fn from_key(key: &str) -> Option<Metric> {
        Metric::ALL.into_iter().find(|m| m.key() == key)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

// ==========================================
// 导出格式 (Export Format)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,  // 分隔文本
    Pdf,  // 分页文档
    Xlsx, // 工作簿
}

impl ExportFormat {
    /// 媒体类型（供传输层设置 Content-Type）
    pub fn media_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
        }
    }

    /// 文件扩展名
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "CSV"),
            ExportFormat::Pdf => write!(f, "PDF"),
            ExportFormat::Xlsx => write!(f, "XLSX"),
        }
    }
}
