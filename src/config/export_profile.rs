use serde::{Deserialize, Serialize};

/// 导出配置（报表标题、工作表名称、文件名前缀）
///
/// 所有字段均有默认值，可从 JSON 局部覆盖
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportProfile {
    /// PDF 报表标题
    #[serde(default = "default_document_title")]
    pub document_title: String,

    /// 工作簿中的工作表名称
    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,

    /// 导出文件名前缀（不含扩展名）
    #[serde(default = "default_file_stem")]
    pub file_stem: String,
}

fn default_document_title() -> String {
    "Score Report".to_string()
}

fn default_sheet_name() -> String {
    "Scores".to_string()
}

fn default_file_stem() -> String {
    "scores_export".to_string()
}

impl Default for ExportProfile {
    fn default() -> Self {
        Self {
            document_title: default_document_title(),
            sheet_name: default_sheet_name(),
            file_stem: default_file_stem(),
        }
    }
}

impl ExportProfile {
    /// 从 JSON 读取配置（缺失字段取默认值）
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// 指定扩展名的导出文件名
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{}", self.file_stem, extension)
    }
}
