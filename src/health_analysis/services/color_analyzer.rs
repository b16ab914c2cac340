use crate::health_analysis::domain::{ContrastResult, Rgb, ThumbnailImage};
use crate::shared::error::ContrastError;

/// Pixels at or below this alpha are treated as background
const ALPHA_CUTOFF: u8 = 128;
/// Width of one quantization step per channel
const BUCKET_STEP: u8 = 32;
/// 8 levels per channel
const LEVELS: usize = 256 / BUCKET_STEP as usize;
const BUCKET_COUNT: usize = LEVELS * LEVELS * LEVELS;
/// Number of dominant colors kept for contrast analysis
pub const MAX_DOMINANT_COLORS: usize = 5;

/// Extracts dominant colors from decoded thumbnails and measures their contrast.
///
/// All counting state is local to a call; the analyzer holds nothing between
/// thumbnails.
pub struct ColorContrastAnalyzer;

impl ColorContrastAnalyzer {
    pub fn analyze(image: &ThumbnailImage) -> Result<ContrastResult, ContrastError> {
        let colors = Self::dominant_colors(image.pixels());
        let distinct_colors = colors.len();
        ContrastResult::from_dominant_colors(colors)
            .ok_or(ContrastError::Analysis { distinct_colors })
    }

    /// Up to five quantized colors from an RGBA buffer, most frequent first.
    ///
    /// Buckets with equal counts keep their grid order (darker red channel
    /// first) so results are reproducible.
    pub fn dominant_colors(rgba: &[u8]) -> Vec<Rgb> {
        let mut counts = [0u32; BUCKET_COUNT];

        for pixel in rgba.chunks_exact(4) {
            if pixel[3] <= ALPHA_CUTOFF {
                continue;
            }
            counts[bucket_index(pixel[0], pixel[1], pixel[2])] += 1;
        }

        let mut occupied: Vec<usize> = (0..BUCKET_COUNT).filter(|&i| counts[i] > 0).collect();
        occupied.sort_by(|a, b| counts[*b].cmp(&counts[*a]));

        occupied
            .into_iter()
            .take(MAX_DOMINANT_COLORS)
            .map(bucket_color)
            .collect()
    }
}

fn bucket_index(r: u8, g: u8, b: u8) -> usize {
    let level = |c: u8| usize::from(c / BUCKET_STEP);
    (level(r) * LEVELS + level(g)) * LEVELS + level(b)
}

fn bucket_color(index: usize) -> Rgb {
    let step = usize::from(BUCKET_STEP);
    let channel = |level: usize| (level * step) as u8;
    Rgb::new(
        channel(index / (LEVELS * LEVELS)),
        channel((index / LEVELS) % LEVELS),
        channel(index % LEVELS),
    )
}
