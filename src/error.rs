//! # 错误类型
//!
//! 掩码提取过程中可能出现的所有错误。任何错误都会立即中止处理，不做重试。

use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum MaskError {
    /// 输入不是合法的 zlib 压缩流。
    #[snafu(display("Failed to decompress the input stream: {status}"))]
    Decompression { status: String },

    /// 解压后的数据太短，无法包含所需的头部字段。
    #[snafu(display(
        "Bitmap header is truncated: field `{field}` needs bytes {start}..{end}, but the buffer has only {len} bytes"
    ))]
    MalformedHeader {
        field: &'static str,
        start: usize,
        end: usize,
        len: usize,
    },

    /// 头部声明了无法描述像素阵列的尺寸。
    #[snafu(display("Bitmap declares an invalid width: {width}"))]
    InvalidDimensions { width: i32 },

    /// 根据宽/高/行跨度算出的像素位置超出了缓冲区。
    #[snafu(display(
        "Pixel ({x}, {y}) at byte offset {offset} lies outside the {len}-byte bitmap buffer"
    ))]
    PixelOutOfBounds {
        x: usize,
        y: usize,
        offset: usize,
        len: usize,
    },
}
