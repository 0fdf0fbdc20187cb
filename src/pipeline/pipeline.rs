use std::time::Duration;
use tower::{Service, ServiceExt};

use crate::config::Settings;
use crate::error::VibeError;
use crate::pipeline::services::image::color_sampler::sample_pixels;
use crate::pipeline::services::image::decode_service::{
    into_decode_error, timed_decoder, BoxedDecoder,
};
use crate::pipeline::services::songs::SongPicker;
use crate::pipeline::services::vibe_classifier::classify_vibe;
use crate::pipeline::types::AnalysisResult;

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Pause before analysis starts.
    pub analysis_delay: Duration,
    pub decode_timeout: Duration,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig::from(&Settings::default())
    }
}

impl From<&Settings> for PipelineConfig {
    fn from(settings: &Settings) -> Self {
        Self {
            analysis_delay: settings.analysis_delay(),
            decode_timeout: settings.decode_timeout(),
        }
    }
}

/// Photo bytes in, vibe and song out.
pub struct VibePipeline {
    config: PipelineConfig,
    decoder: BoxedDecoder,
    song_picker: SongPicker,
}

impl VibePipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self::with_song_picker(config, SongPicker::default())
    }

    pub fn with_song_picker(config: PipelineConfig, song_picker: SongPicker) -> Self {
        let decoder = timed_decoder(config.decode_timeout);
        Self {
            config,
            decoder,
            song_picker,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Runs sampler, classifier and picker over an already decoded RGBA buffer.
    pub fn analyze_pixels(&mut self, buffer: &[u8]) -> Result<AnalysisResult, VibeError> {
        let sample = sample_pixels(buffer)?;
        let stats = sample.stats;
        let category = classify_vibe(&stats);
        let song = self.song_picker.pick_for(category.mood());
        tracing::debug!(
            "Sampled {} pixels: brightness={:.1} saturation={:.1} -> {:?}",
            sample.sample_count,
            stats.avg_brightness,
            stats.avg_saturation,
            category
        );
        Ok(AnalysisResult::new(category, song, stats))
    }

    /// Full flow for a user-supplied photo: delay, decode, then analyze.
    pub async fn analyze_photo(
        &mut self,
        photo: Option<Vec<u8>>,
    ) -> Result<AnalysisResult, VibeError> {
        let bytes = photo.ok_or(VibeError::NoImage)?;

        if !self.config.analysis_delay.is_zero() {
            tracing::debug!("Waiting {:?} before analysis", self.config.analysis_delay);
            tokio::time::sleep(self.config.analysis_delay).await;
        }

        let timeout = self.config.decode_timeout;
        let decoded = match self.decoder.ready().await {
            Ok(decoder) => decoder.call(bytes).await,
            Err(e) => Err(e),
        };
        let photo = decoded.map_err(|e| {
            let error = into_decode_error(e, timeout);
            tracing::warn!("Photo could not be decoded: {}", error);
            error
        })?;
        tracing::debug!(
            "Decoded photo {} ({}x{}) at {}",
            photo.get_id(),
            photo.width(),
            photo.height(),
            photo.get_decoded_at()
        );

        let result = self.analyze_pixels(&photo.pixel_buffer())?;
        tracing::info!(
            "Photo {} has vibe '{}' ({}), recommending '{}' by {}",
            photo.get_id(),
            result.category.display_name(),
            result.category.mood(),
            result.song.title,
            result.song.artist
        );
        Ok(result)
    }
}

impl Default for VibePipeline {
    fn default() -> Self {
        Self::new(PipelineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;
    use crate::pipeline::services::songs::song_picker::tests::FixedIndex;
    use crate::pipeline::types::VibeCategory;
    use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb};
    use std::io::Cursor;

    fn no_delay() -> PipelineConfig {
        PipelineConfig {
            analysis_delay: Duration::ZERO,
            decode_timeout: Duration::from_secs(5),
        }
    }

    fn encoded_png(width: u32, height: u32, color: Rgb<u8>) -> Vec<u8> {
        let img = DynamicImage::ImageRgb8(ImageBuffer::<Rgb<u8>, Vec<u8>>::from_pixel(
            width, height, color,
        ));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn red_buffer_is_moody_dark() {
        let buffer: Vec<u8> = [255u8, 0, 0, 255].repeat(100);
        let mut pipeline =
            VibePipeline::with_song_picker(no_delay(), SongPicker::new(Box::new(FixedIndex(0))));

        let result = pipeline.analyze_pixels(&buffer).unwrap();

        assert_eq!(result.stats.avg_brightness, 85.0);
        assert_eq!(result.category, VibeCategory::MoodyDark);
        assert_eq!(result.song.title, "Skinny Love");
    }

    #[test]
    fn empty_buffer_aborts_before_classification() {
        let mut pipeline = VibePipeline::new(no_delay());
        assert!(matches!(
            pipeline.analyze_pixels(&[]),
            Err(VibeError::InvalidInput(_))
        ));
    }

    #[test]
    fn keeps_the_config_it_was_built_with() {
        let pipeline = VibePipeline::new(no_delay());
        assert_eq!(pipeline.config(), &no_delay());
    }

    #[test]
    fn default_config_uses_default_settings() {
        let config = PipelineConfig::default();
        assert_eq!(config.analysis_delay, Duration::from_millis(1500));
        assert_eq!(config.decode_timeout, Duration::from_millis(5000));
    }

    #[tokio::test]
    async fn missing_photo_is_rejected() {
        let mut pipeline = VibePipeline::new(no_delay());
        let result = pipeline.analyze_photo(None).await;
        assert!(matches!(result, Err(VibeError::NoImage)));
    }

    #[tokio::test]
    async fn analyzes_encoded_photo() {
        let mut pipeline = VibePipeline::new(no_delay());
        let photo = encoded_png(20, 20, Rgb([40, 90, 200]));

        let result = pipeline.analyze_photo(Some(photo)).await.unwrap();

        assert_eq!(result.category, VibeCategory::CoolCalm);
        assert_eq!(result.stats.avg_blue, 200.0);
    }

    #[tokio::test]
    async fn bright_saturated_photo_is_energetic() {
        let mut pipeline = VibePipeline::new(no_delay());
        let photo = encoded_png(10, 10, Rgb([255, 255, 60]));

        let result = pipeline.analyze_photo(Some(photo)).await.unwrap();

        assert_eq!(result.category, VibeCategory::EnergeticBright);
    }

    #[tokio::test]
    async fn undecodable_photo_is_a_decode_error() {
        let mut pipeline = VibePipeline::new(no_delay());
        let result = pipeline.analyze_photo(Some(b"GIF89a".to_vec())).await;
        assert!(matches!(result, Err(VibeError::Decode(_))));
    }

    #[tokio::test]
    async fn unknown_bytes_are_unsupported() {
        let mut pipeline = VibePipeline::new(no_delay());
        let result = pipeline
            .analyze_photo(Some(b"plain text, not a photo".to_vec()))
            .await;
        assert!(matches!(
            result,
            Err(VibeError::Decode(DecodeError::UnsupportedFormat(_)))
        ));
    }

    #[tokio::test]
    async fn waits_for_the_configured_delay() {
        let config = PipelineConfig {
            analysis_delay: Duration::from_millis(50),
            ..no_delay()
        };
        let mut pipeline = VibePipeline::new(config);
        let started = std::time::Instant::now();

        pipeline
            .analyze_photo(Some(encoded_png(4, 4, Rgb([10, 10, 10]))))
            .await
            .unwrap();

        assert!(started.elapsed() >= Duration::from_millis(50));
    }
}
