use clap::Parser;

use extract_country_mask::{cli::Cli, handler::handle_extract};

/// 程序的主入口点
///
/// 解析命令行参数并交给处理函数。参数数量不对时由 clap 打印用法并以非零状态退出。
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    handle_extract(cli)
}
