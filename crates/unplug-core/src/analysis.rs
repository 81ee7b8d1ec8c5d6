//! Image focus analysis.
//!
//! Converts an image to 8-bit luminance, averages it and turns the result
//! into a short report with lighting and resolution recommendations.

use std::path::Path;

use crate::error::Result;

/// Below this mean luminance the image counts as dark.
pub const DARK_THRESHOLD: f64 = 128.0;
pub const MIN_WIDTH: u32 = 800;
pub const MIN_HEIGHT: u32 = 600;

const LIGHTING_RECOMMENDATION: &str =
    "🔆 Image appears dark - consider better lighting for reduced eye strain";
const RESOLUTION_RECOMMENDATION: &str =
    "📏 Image resolution is low - viewing smaller images may require more focus";
const BREAK_TIP: &str = "\n💡 Tip: Take a 20-second break every 20 minutes when viewing images";

#[derive(Debug, Clone, PartialEq)]
pub struct FocusReport {
    pub width: u32,
    pub height: u32,
    /// Mean luminance on a 0-255 scale.
    pub average_brightness: f64,
}

impl FocusReport {
    /// Analyse a decoded image.
    pub fn from_image(img: &image::DynamicImage) -> Self {
        let luma = img.to_luma8();
        let (width, height) = luma.dimensions();
        let pixels = luma.as_raw();
        let average_brightness = if pixels.is_empty() {
            0.0
        } else {
            let total: u64 = pixels.iter().map(|&p| u64::from(p)).sum();
            total as f64 / pixels.len() as f64
        };

        Self {
            width,
            height,
            average_brightness,
        }
    }

    /// Open, decode and analyse the image at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let img = image::ImageReader::open(path.as_ref())?
            .with_guessed_format()?
            .decode()?;
        Ok(Self::from_image(&img))
    }

    pub fn is_dark(&self) -> bool {
        self.average_brightness < DARK_THRESHOLD
    }

    pub fn is_low_resolution(&self) -> bool {
        self.width < MIN_WIDTH || self.height < MIN_HEIGHT
    }

    pub fn recommendations(&self) -> Vec<&'static str> {
        let mut recommendations = Vec::new();
        if self.is_dark() {
            recommendations.push(LIGHTING_RECOMMENDATION);
        }
        if self.is_low_resolution() {
            recommendations.push(RESOLUTION_RECOMMENDATION);
        }
        recommendations
    }

    pub fn render(&self) -> String {
        let mut lines = vec![
            "📸 Image Analysis for Focus:".to_string(),
            format!("• Size: {}x{}", self.width, self.height),
            format!("• Average Brightness: {:.1}/255", self.average_brightness),
            "\n🎯 Focus Recommendations:".to_string(),
        ];
        lines.extend(self.recommendations().into_iter().map(String::from));
        lines.push(BREAK_TIP.to_string());
        lines.join("\n")
    }
}

/// Analyse the image at `path`, reporting failures inline instead of
/// returning an error.
pub fn analyze_image(path: impl AsRef<Path>) -> String {
    let path = path.as_ref();
    match FocusReport::from_path(path) {
        Ok(report) => report.render(),
        Err(e) => {
            tracing::debug!(path = %path.display(), "image analysis failed: {e}");
            format!("⚠️ Could not process image: {e}")
        }
    }
}
