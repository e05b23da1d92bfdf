//! # 命令行接口模块
//!
//! 使用 `clap` 定义程序的命令行结构：两个位置参数，以及两个可选的阈值参数。

use crate::color::Thresholds;
use crate::constants::{BRIGHT_THRESH, SAT_THRESH};
use clap::Parser;
use std::path::PathBuf;

/// 从 zlib 压缩的 RGB565 BMP 中提取明亮、接近中性色的国界线，输出黑白掩码。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "读取 zlib 压缩的 16 位 (RGB565) BMP，把明亮且接近中性色的像素改为白色，其余改为黑色，再以 zlib 压缩写出结果。"
)]
pub struct Cli {
    /// 输入文件 (zlib 压缩的 BMP)。
    pub input: PathBuf,

    /// 输出文件，已存在时会被覆盖。
    pub output: PathBuf,

    /// 平均亮度必须严格大于该值。
    #[arg(long, default_value_t = BRIGHT_THRESH)]
    pub bright_thresh: u8,

    /// max(R,G,B) - min(R,G,B) 必须严格小于该值。
    #[arg(long, default_value_t = SAT_THRESH)]
    pub sat_thresh: u8,
}

impl Cli {
    pub fn thresholds(&self) -> Thresholds {
        Thresholds::new(self.bright_thresh, self.sat_thresh)
    }
}
