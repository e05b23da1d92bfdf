//! # extract_country_mask 库
//!
//! 本库包含国界线掩码提取工具的核心逻辑。

// 声明库包含的所有模块。

pub mod bitmap;
pub mod cli;
pub mod color;
pub mod constants;
pub mod error;
pub mod handler;
pub mod mask;

pub use color::Thresholds;
pub use error::MaskError;
pub use mask::{MaskOutput, extract};
