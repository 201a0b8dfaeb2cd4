//! # cpfs 命令行入口
//!
//! ## 子命令
//! - `normalize` - 规范化存档文件
//! - `formula`   - 化学式分解
//! - `catalog`   - 打印仪器属性表
//! - `import`    - 导入浮区法表格模板

use clap::Parser;
use cpfs_synthesis::cli::Cli;
use cpfs_synthesis::{commands, utils};

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();
    utils::logging::init_logging(cli.verbose);

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
