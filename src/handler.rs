//! # 命令处理逻辑模块
//!
//! 负责协调文件 I/O、调用掩码提取核心函数以及向用户报告结果。

use crate::cli::Cli;
use crate::mask::extract;
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// 处理一次掩码提取。
///
/// 读取压缩的输入位图，按阈值把像素改写成黑/白，再把压缩后的结果写入输出路径。
///
/// # Arguments
///
/// * `args` - 解析好的命令行参数。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取输入文件。
/// * 输入无法解压，或位图头部/像素数据越界。
/// * 无法写入输出文件。
///
/// 任何错误发生时都不会留下输出文件。
pub fn handle_extract(args: Cli) -> Result<()> {
    let input = fs::read(&args.input).with_context(|| {
        format!(
            "Unable to read input file: {}",
            args.input.to_string_lossy().red().bold()
        )
    })?;

    let mask = extract(&input, args.thresholds()).with_context(|| {
        format!(
            "Failed to extract the mask from '{}'. \nThe file must be a zlib-compressed 16-bit BMP.",
            args.input.to_string_lossy().red().bold()
        )
    })?;

    write_atomically(&args.output, &mask.data).with_context(|| {
        format!(
            "Unable to write to output file: {}",
            args.output.to_string_lossy().red().bold()
        )
    })?;

    println!("{}", status_line(&args.output, mask.kept));

    Ok(())
}

/// 成功后输出到标准输出的单行状态：输出路径与白色像素数。
pub fn status_line(output: &Path, kept: usize) -> String {
    format!(
        "OK: {}   white_pixels={}",
        output.to_string_lossy().green().bold(),
        kept.to_string().green().bold()
    )
}

/// 先写入同目录下的临时文件，再重命名覆盖目标，写入失败时不会留下残缺的输出。
fn write_atomically(dest: &Path, data: &[u8]) -> std::io::Result<()> {
    let dir = match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(data)?;
    tmp.as_file().sync_all()?;
    tmp.persist(dest).map_err(|e| e.error)?;

    Ok(())
}
