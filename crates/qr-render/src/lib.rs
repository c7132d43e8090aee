//! QR bitmap rendering.
//!
//! Takes a payload string plus display options (size, colors, error
//! correction) and produces an RGB image. Symbol computation is
//! delegated to the `qrcode` crate; this layer only scales modules
//! into pixels and applies colors.

pub mod color;

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use qrcode::{EcLevel, QrCode};
use serde::{Deserialize, Serialize};

pub use color::parse_hex_color;

/// Error correction level, as selected in the customization panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCorrection {
    L,
    #[default]
    M,
    Q,
    H,
}

impl ErrorCorrection {
    pub fn label(&self) -> &'static str {
        match self {
            ErrorCorrection::L => "L",
            ErrorCorrection::M => "M",
            ErrorCorrection::Q => "Q",
            ErrorCorrection::H => "H",
        }
    }

    /// Parse a stored level label. Unknown values fall back to `M`.
    pub fn from_label(s: &str) -> Self {
        match s {
            "L" => ErrorCorrection::L,
            "Q" => ErrorCorrection::Q,
            "H" => ErrorCorrection::H,
            _ => ErrorCorrection::M,
        }
    }

    fn ec_level(&self) -> EcLevel {
        match self {
            ErrorCorrection::L => EcLevel::L,
            ErrorCorrection::M => EcLevel::M,
            ErrorCorrection::Q => EcLevel::Q,
            ErrorCorrection::H => EcLevel::H,
        }
    }
}

/// Display options for one rendered code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Target edge length in pixels. Modules are scaled by an integer
    /// factor, so the output may come out slightly smaller.
    pub size: u32,
    pub foreground: [u8; 3],
    pub background: [u8; 3],
    pub error_correction: ErrorCorrection,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            size: 256,
            foreground: [0, 0, 0],
            background: [255, 255, 255],
            error_correction: ErrorCorrection::M,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("QR encode error: {0}")]
    Encode(#[from] qrcode::types::QrError),

    #[error("invalid color '{0}': expected #rrggbb")]
    InvalidColor(String),

    #[error("PNG encode error: {0}")]
    Png(#[from] image::ImageError),
}

/// Render a payload string into a QR image.
pub fn render(payload: &str, opts: &RenderOptions) -> Result<DynamicImage, RenderError> {
    let code = QrCode::with_error_correction_level(
        payload.as_bytes(),
        opts.error_correction.ec_level(),
    )?;
    let modules = code.to_colors();
    let module_count = code.width() as u32;

    let scale = (opts.size / module_count).max(1);
    let img_size = module_count * scale;

    let fg = Rgb(opts.foreground);
    let bg = Rgb(opts.background);
    let mut img = RgbImage::from_pixel(img_size, img_size, bg);

    for (i, color) in modules.iter().enumerate() {
        if *color != qrcode::Color::Dark {
            continue;
        }
        let x = (i as u32) % module_count;
        let y = (i as u32) / module_count;
        for dx in 0..scale {
            for dy in 0..scale {
                img.put_pixel(x * scale + dx, y * scale + dy, fg);
            }
        }
    }

    tracing::debug!(
        modules = module_count,
        scale,
        px = img_size,
        "Rendered QR code"
    );

    Ok(DynamicImage::ImageRgb8(img))
}

/// Render straight to PNG bytes, for HTTP responses and downloads.
pub fn render_png(payload: &str, opts: &RenderOptions) -> Result<Vec<u8>, RenderError> {
    let img = render(payload, opts)?;
    let mut buf = std::io::Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}
