//! # 统一错误处理模块
//!
//! 定义 cpfs 的所有错误类型，使用 `thiserror` 派生。
//!
//! 核心的解析与查表（`formula`, `resolver`）不会失败，
//! 错误只出现在文件读写、存档 (archive) 序列化和模板导入环节。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// cpfs 统一错误类型
#[derive(Error, Debug)]
pub enum CpfsError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 存档错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse archive: {path}\nReason: {source}")]
    ArchiveError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 模板导入错误
    // ─────────────────────────────────────────────────────────────
    #[error("Not a valid {expected} template: {path}")]
    InvalidTemplate { expected: String, path: String },

    #[error("Invalid template cell at row {row}, column {col}: {reason}")]
    TemplateCell { row: usize, col: usize, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("No matching files found with pattern: {pattern}")]
    NoFilesFound { pattern: String },
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, CpfsError>;
