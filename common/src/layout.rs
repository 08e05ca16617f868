//! 版面设置
//!
//! docx 中图片尺寸以 EMU 表示（1 inch = 914400 EMU）

// ============================================
// 换算系数
// ============================================

pub const EMU_PER_INCH: f32 = 914_400.0;

/// 默认显示宽度（英寸）
pub const DEFAULT_IMAGE_WIDTH_INCHES: f32 = 6.0;

/// 嵌入前缩放的最大像素宽度
pub const DEFAULT_MAX_IMAGE_PX: u32 = 1600;

/// 字号（半磅）
pub const TITLE_SIZE_HALF_PT: usize = 52;
pub const CAPTION_SIZE_HALF_PT: usize = 24;

pub fn inches_to_emu(inches: f32) -> u32 {
    (inches * EMU_PER_INCH).round() as u32
}

// ============================================
// 图片版面
// ============================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageLayout {
    /// 显示宽度（英寸）
    pub width_inches: f32,
    /// 像素宽度上限
    pub max_px: u32,
}

impl Default for ImageLayout {
    fn default() -> Self {
        Self {
            width_inches: DEFAULT_IMAGE_WIDTH_INCHES,
            max_px: DEFAULT_MAX_IMAGE_PX,
        }
    }
}

impl ImageLayout {
    /// 固定宽度，高度按原图比例（EMU）
    pub fn display_size_emu(&self, px_width: u32, px_height: u32) -> (u32, u32) {
        let width = inches_to_emu(self.width_inches);
        if px_width == 0 {
            return (width, width);
        }
        let height = (width as f64 * px_height as f64 / px_width as f64).round() as u32;
        (width, height)
    }

    /// 超过上限时的缩放目标尺寸，不需要缩放时返回 None
    pub fn downscale_target(&self, px_width: u32, px_height: u32) -> Option<(u32, u32)> {
        if self.max_px == 0 || px_width <= self.max_px {
            return None;
        }
        let height = (self.max_px as f64 * px_height as f64 / px_width as f64).round() as u32;
        Some((self.max_px, height.max(1)))
    }
}
