//! # cpfs - 晶体生长合成记录
//!
//! 电子实验记录本中晶体生长实验的数据 schema 与规范化逻辑。
//!
//! ## 模块
//! - `formula`  - 化学式 -> 元素原子分数
//! - `resolver` - 型号名 -> 静态属性表 -> 就地赋值
//! - `models`   - 仪器、样品、生长工艺记录及其规范化钩子
//! - `archive`  - JSON 存档读写
//! - `ingest`   - 表格模板导入
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── archive.rs (存档读写)
//!   │     ├── ingest/    (模板导入)
//!   │     ├── batch/     (批量并行处理)
//!   │     └── models/    (数据模型)
//!   │           ├── resolver.rs
//!   │           └── formula.rs
//!   ├── utils/      (输出、进度条、日志)
//!   └── error.rs    (错误处理)
//! ```

pub mod archive;
pub mod batch;
pub mod cli;
pub mod commands;
pub mod error;
pub mod formula;
pub mod ingest;
pub mod models;
pub mod resolver;
pub mod utils;

pub use error::{CpfsError, Result};
pub use formula::ElementalComposition;
