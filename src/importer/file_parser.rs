// ==========================================
// 绩效评分报表引擎 - 文件解析器实现
// ==========================================
// 支持: CSV 文本 / CSV 文件 (.csv) / Excel (.xlsx/.xls)
// 约定: 第一行为表头,其余为数据行
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use crate::importer::score_importer_trait::{FileParser, ParsedTable};
use calamine::{open_workbook_auto, Reader};
use csv::ReaderBuilder;
use std::fs;
use std::path::Path;

fn clean_header(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}').trim().to_string()
}

fn ensure_exists(path: &Path) -> ImportResult<()> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }
    Ok(())
}

// ==========================================
// CSV Parser 实现
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvParser;

impl CsvParser {
    /// 解析内存中的 CSV 文本
    pub fn parse_str(&self, text: &str) -> ImportResult<ParsedTable> {
        if text.trim().is_empty() {
            return Err(ImportError::EmptyInput);
        }

        // 转义引号成对出现，总数为奇数说明存在未闭合的引号字段
        if text.matches('"').count() % 2 != 0 {
            return Err(ImportError::CsvParseError(
                "存在未闭合的引号字段".to_string(),
            ));
        }

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(text.as_bytes());

        // 读取表头
        let headers: Vec<String> = reader.headers()?.iter().map(clean_header).collect();
        if headers.iter().all(|h| h.is_empty()) {
            return Err(ImportError::EmptyInput);
        }

        let mut table = ParsedTable {
            headers,
            ..ParsedTable::default()
        };

        // 读取所有行
        for (row_idx, result) in reader.records().enumerate() {
            let record = result?;
            let row_number = record
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or(row_idx + 2);
            table.push_row(row_number, record.iter());
        }

        Ok(table)
    }
}

impl FileParser for CsvParser {
    fn parse_to_raw_records(&self, file_path: &Path) -> ImportResult<ParsedTable> {
        ensure_exists(file_path)?;
        let text = fs::read_to_string(file_path)?;
        self.parse_str(&text)
    }
}

// ==========================================
// Excel Parser 实现
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct ExcelParser;

impl FileParser for ExcelParser {
    fn parse_to_raw_records(&self, file_path: &Path) -> ImportResult<ParsedTable> {
        ensure_exists(file_path)?;

        let mut workbook = open_workbook_auto(file_path)?;

        // 读取第一个 sheet
        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| ImportError::ExcelParseError("Excel 文件无工作表".to_string()))?;

        let range = workbook.worksheet_range(&sheet_name)?;
        let start_row = range.start().map(|(row, _)| row as usize).unwrap_or(0);

        // 提取表头（第一行）
        let mut rows = range.rows();
        let header_row = rows.next().ok_or(ImportError::EmptyInput)?;
        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| clean_header(&cell.to_string()))
            .collect();
        if headers.iter().all(|h| h.is_empty()) {
            return Err(ImportError::EmptyInput);
        }

        let mut table = ParsedTable {
            headers,
            ..ParsedTable::default()
        };

        // 读取数据行（行号从 1 开始，表头所在行为 start_row + 1）
        for (idx, data_row) in rows.enumerate() {
            let values: Vec<String> = data_row.iter().map(|cell| cell.to_string()).collect();
            table.push_row(start_row + idx + 2, values.iter().map(String::as_str));
        }

        Ok(table)
    }
}

// ==========================================
// 通用文件解析器（根据扩展名自动选择）
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct UniversalFileParser;

impl UniversalFileParser {
    pub fn parse<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<ParsedTable> {
        let path = file_path.as_ref();
        ensure_exists(path)?;

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" | "txt" => CsvParser.parse_to_raw_records(path),
            "xlsx" | "xls" => ExcelParser.parse_to_raw_records(path),
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }
}
