use chrono::{DateTime, Utc};
use image::DynamicImage;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::DecodeError;

/// A decoded photo, ready to be handed to the color sampler.
#[derive(Clone)]
pub struct Photo {
    id: Uuid,
    image: Arc<DynamicImage>,
    decoded_at: DateTime<Utc>,
}

impl Photo {
    pub fn new(image: DynamicImage) -> Self {
        Self {
            id: Uuid::new_v4(),
            image: Arc::new(image),
            decoded_at: Utc::now(),
        }
    }

    /// Decodes raw file bytes. The format is sniffed from the content, so
    /// anything that is not a recognised image is rejected before decoding.
    pub fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        if bytes.is_empty() {
            return Err(DecodeError::Empty);
        }
        let format = image::guess_format(bytes)
            .map_err(|e| DecodeError::UnsupportedFormat(e.to_string()))?;
        let image = image::load_from_memory_with_format(bytes, format)?;
        Ok(Self::new(image))
    }

    pub fn get_id(&self) -> Uuid {
        self.id
    }

    pub fn get_decoded_at(&self) -> DateTime<Utc> {
        self.decoded_at
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// RGBA8 bytes in row-major order, four bytes per pixel.
    pub fn pixel_buffer(&self) -> Vec<u8> {
        self.image.to_rgba8().into_raw()
    }
}
