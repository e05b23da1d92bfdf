/// 亮度阈值：像素的平均亮度必须严格大于该值才会被保留为边界线。
pub const BRIGHT_THRESH: u8 = 40;

/// 饱和度阈值：max(R,G,B) - min(R,G,B) 必须严格小于该值。
/// 用于滤除极光之类的彩色背景噪声。
pub const SAT_THRESH: u8 = 20;

/// 输出使用的 zlib 压缩级别 (最高)。
pub const COMPRESSION_LEVEL: u8 = 9;

/// BMP 头部中像素数据偏移量 (u32 LE) 所在的字节位置。
pub const PIXEL_OFFSET_FIELD: usize = 10;

/// 图像宽度 (i32 LE) 所在的字节位置。
pub const WIDTH_FIELD: usize = 18;

/// 图像高度 (i32 LE) 所在的字节位置。负值表示自上而下存储。
pub const HEIGHT_FIELD: usize = 22;

/// 每个像素占用的字节数 (RGB565)。
pub const BYTES_PER_PIXEL: usize = 2;

/// 保留像素写回的值 (白色)。
pub const WHITE: u16 = 0xFFFF;

/// 丢弃像素写回的值 (黑色)。
pub const BLACK: u16 = 0x0000;
