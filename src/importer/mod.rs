// ==========================================
// 绩效评分报表引擎 - 导入层
// ==========================================
// 职责: 外部表格数据导入,生成评分记录
// 支持: CSV 文本, CSV 文件, Excel
// ==========================================

// 模块声明
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod score_importer;
pub mod score_importer_trait;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use field_mapper::{FieldMapper, RawScoreRow, ENTITY_ID_COLUMNS};
pub use file_parser::{CsvParser, ExcelParser, UniversalFileParser};
pub use score_importer::ScoreImporter;

// 重导出 Trait 接口
pub use score_importer_trait::{FileParser, ParsedTable, RawRow};
