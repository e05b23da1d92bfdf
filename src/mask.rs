//! # 掩码提取核心
//!
//! 解压位图、逐像素改写为黑/白，再以最高级别重新压缩。

use crate::bitmap::BitmapLayout;
use crate::color::Thresholds;
use crate::constants::{BLACK, COMPRESSION_LEVEL, WHITE};
use crate::error::{DecompressionSnafu, MaskError};
use byteorder::{ByteOrder, LittleEndian};
use miniz_oxide::deflate::compress_to_vec_zlib;
use miniz_oxide::inflate::decompress_to_vec_zlib;

/// 一次提取的结果。
#[derive(Debug, Clone)]
pub struct MaskOutput {
    /// 重新压缩后的位图。
    pub data: Vec<u8>,
    /// 被保留为白色的像素数。
    pub kept: usize,
    /// 处理过的像素总数。
    pub total: usize,
}

/// 解压 zlib 数据流。
pub fn decompress(input: &[u8]) -> Result<Vec<u8>, MaskError> {
    decompress_to_vec_zlib(input).map_err(|e| {
        DecompressionSnafu {
            status: format!("{:?}", e.status),
        }
        .build()
    })
}

/// 以最高压缩级别压缩为 zlib 数据流。
pub fn compress(raw: &[u8]) -> Vec<u8> {
    compress_to_vec_zlib(raw, COMPRESSION_LEVEL)
}

/// 对已解压的位图原地应用掩码，返回头部布局与保留像素数。
///
/// 每个像素被改写为 `0xFFFF` (保留) 或 `0x0000` (丢弃)，像素数据之外的字节保持不变。
pub fn apply_mask(buf: &mut [u8], thresholds: Thresholds) -> Result<(BitmapLayout, usize), MaskError> {
    let layout = BitmapLayout::parse(buf)?;
    let len = buf.len();
    let mut kept = 0;

    for y in 0..layout.height {
        for x in 0..layout.width {
            let offset = layout.pixel_at(x, y, len)?;
            let pixel = &mut buf[offset..offset + 2];

            if thresholds.classify_565(LittleEndian::read_u16(pixel)) {
                LittleEndian::write_u16(pixel, WHITE);
                kept += 1;
            } else {
                LittleEndian::write_u16(pixel, BLACK);
            }
        }
    }

    Ok((layout, kept))
}

/// 解压 -> 分类 -> 重新压缩。
///
/// # Errors
///
/// * 输入不是合法 zlib 流：[`MaskError::Decompression`]。
/// * 头部字段越界：[`MaskError::MalformedHeader`]。
/// * 宽度为负或行跨度溢出：[`MaskError::InvalidDimensions`]。
/// * 像素位置越界：[`MaskError::PixelOutOfBounds`]。
pub fn extract(input: &[u8], thresholds: Thresholds) -> Result<MaskOutput, MaskError> {
    let mut buf = decompress(input)?;
    let (layout, kept) = apply_mask(&mut buf, thresholds)?;

    Ok(MaskOutput {
        data: compress(&buf),
        kept,
        total: layout.pixel_count(),
    })
}
