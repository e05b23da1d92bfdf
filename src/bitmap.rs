//! # BMP 头部解析
//!
//! 只读取像素偏移、宽度和高度三个字段，其余头部内容原样保留。

use crate::constants::{BYTES_PER_PIXEL, HEIGHT_FIELD, PIXEL_OFFSET_FIELD, WIDTH_FIELD};
use crate::error::{InvalidDimensionsSnafu, MalformedHeaderSnafu, MaskError, PixelOutOfBoundsSnafu};
use byteorder::{ByteOrder, LittleEndian};
use snafu::{OptionExt, ensure};

/// 从头部推导出的像素阵列布局。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapLayout {
    /// 像素数据在缓冲区中的起始位置。
    pub pixel_offset: usize,
    pub width: usize,
    pub height: usize,
    /// 高度字段为负时，第一行是视觉上的顶行。
    pub top_down: bool,
    /// 每行字节数，按 4 字节对齐。
    pub row_stride: usize,
}

fn field<'a>(buf: &'a [u8], name: &'static str, start: usize) -> Result<&'a [u8], MaskError> {
    let end = start + 4;
    buf.get(start..end).context(MalformedHeaderSnafu {
        field: name,
        start,
        end,
        len: buf.len(),
    })
}

/// 行跨度：`ceil(width * 2 / 4) * 4`，溢出时返回 `None`。
pub const fn row_stride(width: usize) -> Option<usize> {
    match width.checked_mul(BYTES_PER_PIXEL) {
        Some(bytes) => bytes.div_ceil(4).checked_mul(4),
        None => None,
    }
}

impl BitmapLayout {
    /// 从解压后的缓冲区中读取头部字段。
    ///
    /// # Errors
    ///
    /// * 缓冲区不足以包含某个字段时返回 [`MaskError::MalformedHeader`]。
    /// * 宽度为负，或行跨度超出地址范围时返回 [`MaskError::InvalidDimensions`]。
    pub fn parse(buf: &[u8]) -> Result<Self, MaskError> {
        let pixel_offset = LittleEndian::read_u32(field(buf, "pixel_offset", PIXEL_OFFSET_FIELD)?);
        let width = LittleEndian::read_i32(field(buf, "width", WIDTH_FIELD)?);
        let signed_height = LittleEndian::read_i32(field(buf, "height", HEIGHT_FIELD)?);

        ensure!(width >= 0, InvalidDimensionsSnafu { width });
        let stride = row_stride(width as usize).context(InvalidDimensionsSnafu { width })?;
        let width = width as usize;

        Ok(Self {
            pixel_offset: pixel_offset as usize,
            width,
            height: signed_height.unsigned_abs() as usize,
            top_down: signed_height < 0,
            row_stride: stride,
        })
    }

    /// 视觉行号 `y` 对应的缓冲区行号。
    #[inline]
    pub fn buffer_row(&self, y: usize) -> usize {
        if self.top_down {
            y
        } else {
            self.height - 1 - y
        }
    }

    /// 视觉坐标 `(x, y)` 处像素的字节偏移，并确认两个字节都落在长度为 `len` 的缓冲区内。
    pub fn pixel_at(&self, x: usize, y: usize, len: usize) -> Result<usize, MaskError> {
        let ry = self.buffer_row(y);
        let offset = ry
            .checked_mul(self.row_stride)
            .and_then(|row| row.checked_add(self.pixel_offset))
            .and_then(|base| {
                x.checked_mul(BYTES_PER_PIXEL)
                    .and_then(|col| base.checked_add(col))
            });

        match offset {
            Some(offset) if offset.checked_add(BYTES_PER_PIXEL).is_some_and(|end| end <= len) => {
                Ok(offset)
            }
            _ => PixelOutOfBoundsSnafu {
                x,
                y,
                offset: offset.unwrap_or(usize::MAX),
                len,
            }
            .fail(),
        }
    }

    /// 像素总数。
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }
}
