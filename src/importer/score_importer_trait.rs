// ==========================================
// 绩效评分报表引擎 - 导入接口与中间结构
// ==========================================
// 职责: 定义文件解析接口（不包含实现）
// ==========================================

use crate::importer::error::ImportResult;
use std::collections::HashMap;
use std::path::Path;

/// 原始数据行（列名 → 去空白后的单元格文本）
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawRow {
    /// 源数据中的行号（表头为第 1 行）
    pub row_number: usize,
    pub cells: HashMap<String, String>,
}

/// 解析后的表格
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedTable {
    /// 表头（去空白，保持源顺序）
    pub headers: Vec<String>,
    /// 非空白数据行
    pub rows: Vec<RawRow>,
    /// 跳过的空白行数
    pub blank_rows: usize,
}

impl ParsedTable {
    /// 由表头与行单元格构建（同名列取第一列；超出表头的单元格忽略）
    pub fn push_row<'a, I>(&mut self, row_number: usize, values: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut cells = HashMap::new();
        for (col_idx, value) in values.into_iter().enumerate() {
            if let Some(header) = self.headers.get(col_idx) {
                if header.is_empty() {
                    continue;
                }
                cells
                    .entry(header.clone())
                    .or_insert_with(|| value.trim().to_string());
            }
        }

        // 跳过完全空白的行
        if cells.values().all(|v: &String| v.is_empty()) {
            self.blank_rows += 1;
            return;
        }

        self.rows.push(RawRow { row_number, cells });
    }
}

// ==========================================
// FileParser Trait
// ==========================================
// 用途: 文件解析接口
// 实现者: CsvParser, ExcelParser
pub trait FileParser: Send + Sync {
    /// 解析文件为表头 + 原始行记录
    ///
    /// # 返回
    /// - Ok(ParsedTable): 表格
    /// - Err: 文件读取错误（IO）、格式错误（Parse）
    fn parse_to_raw_records(&self, file_path: &Path) -> ImportResult<ParsedTable>;
}
