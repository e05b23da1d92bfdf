//! # 颜色换算与像素分类
//!
//! RGB565 像素到 RGB888 的位复制扩展，以及基于亮度/饱和度的边界线判定。

use crate::constants::{BRIGHT_THRESH, SAT_THRESH};

/// 将 5 位分量扩展到 8 位：高位左移到最高位，再用自身的高 3 位填充低 3 位。
#[inline]
pub const fn expand5(v: u8) -> u8 {
    let v = v & 0b1_1111;
    (v << 3) | (v >> 2)
}

/// 将 6 位分量扩展到 8 位，低 2 位由自身的高 2 位填充。
#[inline]
pub const fn expand6(v: u8) -> u8 {
    let v = v & 0b11_1111;
    (v << 2) | (v >> 4)
}

/// 把一个打包的 RGB565 像素拆分并扩展为 `[r, g, b]` 三个 8 位分量。
#[inline]
pub const fn rgb565_to_rgb888(pixel: u16) -> [u8; 3] {
    let r = ((pixel >> 11) & 0b1_1111) as u8;
    let g = ((pixel >> 5) & 0b11_1111) as u8;
    let b = (pixel & 0b1_1111) as u8;

    [expand5(r), expand6(g), expand5(b)]
}

/// 三个分量的整数平均值 (向下取整)。
#[inline]
pub const fn luminance([r, g, b]: [u8; 3]) -> u8 {
    ((r as u16 + g as u16 + b as u16) / 3) as u8
}

/// 最大分量与最小分量之差。
#[inline]
pub fn saturation(rgb: [u8; 3]) -> u8 {
    let max = rgb.iter().copied().max().unwrap_or(0);
    let min = rgb.iter().copied().min().unwrap_or(0);
    max - min
}

/// 分类所用的两个阈值。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    /// 亮度必须严格大于此值。
    pub bright: u8,
    /// 饱和度必须严格小于此值。
    pub sat: u8,
}

impl Thresholds {
    pub const fn new(bright: u8, sat: u8) -> Self {
        Self { bright, sat }
    }

    /// 判断一个 RGB888 像素是否属于 "明亮且接近中性色" 的边界线。
    #[inline]
    pub fn classify(&self, rgb: [u8; 3]) -> bool {
        luminance(rgb) > self.bright && saturation(rgb) < self.sat
    }

    /// 直接对打包的 RGB565 像素进行分类。
    #[inline]
    pub fn classify_565(&self, pixel: u16) -> bool {
        self.classify(rgb565_to_rgb888(pixel))
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::new(BRIGHT_THRESH, SAT_THRESH)
    }
}
