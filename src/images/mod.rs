/// Plant photo loading module
///
/// This module handles:
/// - Fetching photos over HTTP and decoding them off the UI thread (loader.rs)
/// - Decoding blurhash placeholders (blurhash.rs)
/// - Tracking per-plant load state and the placeholder cross-fade (this file)
use iced::widget::image::Handle;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use thiserror::Error;

use crate::state::data::PlantId;

pub mod blurhash;
pub mod loader;

use loader::LoadedImage;

/// Size of the decoded placeholder buffer (it is stretched when drawn)
const PLACEHOLDER_SIZE: u32 = 32;

/// Why a photo could not be shown. Cloneable so it can travel in messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("invalid image URI {uri:?}: {reason}")]
    InvalidUri { uri: String, reason: String },
    #[error("request failed: {0}")]
    Http(String),
    #[error("server answered with status {0}")]
    Status(u16),
    #[error("could not decode image: {0}")]
    Decode(String),
    #[error("decode worker failed: {0}")]
    Task(String),
}

/// Load state of one plant's photo
#[derive(Debug, Clone)]
pub enum ImageSlot {
    Loading,
    Ready { image: LoadedImage, arrived: Instant },
    Failed(LoadError),
}

/// Fraction of the cross-fade completed at `now`, in `0.0..=1.0`
pub fn fade_progress(arrived: Instant, now: Instant, transition: Duration) -> f32 {
    if transition.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(arrived);
    (elapsed.as_secs_f32() / transition.as_secs_f32()).min(1.0)
}

/// In-memory photo cache keyed by plant id.
/// Each photo is requested at most once per session.
#[derive(Debug)]
pub struct ImageCache {
    slots: HashMap<PlantId, ImageSlot>,
    placeholder: Handle,
    transition: Duration,
}

impl ImageCache {
    pub fn new(placeholder_hash: &str, transition: Duration) -> Self {
        Self {
            slots: HashMap::new(),
            placeholder: placeholder_handle(placeholder_hash),
            transition,
        }
    }

    pub fn placeholder(&self) -> &Handle {
        &self.placeholder
    }

    #[cfg(test)]
    pub fn get(&self, id: PlantId) -> Option<&ImageSlot> {
        self.slots.get(&id)
    }

    /// Mark a photo as requested. Returns false if it was already
    /// requested, so the caller does not fetch it twice.
    pub fn begin(&mut self, id: PlantId) -> bool {
        if self.slots.contains_key(&id) {
            return false;
        }
        self.slots.insert(id, ImageSlot::Loading);
        true
    }

    pub fn finish(&mut self, id: PlantId, result: Result<LoadedImage, LoadError>, now: Instant) {
        let slot = match result {
            Ok(image) => {
                tracing::debug!("🖼️  Photo for plant {} ready ({}x{})", id, image.width, image.height);
                ImageSlot::Ready { image, arrived: now }
            }
            Err(err) => {
                tracing::warn!("⚠️  Photo for plant {} unavailable: {}", id, err);
                ImageSlot::Failed(err)
            }
        };
        self.slots.insert(id, slot);
    }

    /// The loaded photo and its current opacity, if it has arrived
    pub fn photo(&self, id: PlantId, now: Instant) -> Option<(&Handle, f32)> {
        match self.slots.get(&id)? {
            ImageSlot::Ready { image, arrived } => {
                Some((&image.handle, fade_progress(*arrived, now, self.transition)))
            }
            _ => None,
        }
    }

    /// Why the photo for `id` could not be loaded, if it failed
    pub fn error(&self, id: PlantId) -> Option<&LoadError> {
        match self.slots.get(&id)? {
            ImageSlot::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// True while any photo is still fading in
    pub fn is_animating(&self, now: Instant) -> bool {
        self.slots.values().any(|slot| match slot {
            ImageSlot::Ready { arrived, .. } => fade_progress(*arrived, now, self.transition) < 1.0,
            _ => false,
        })
    }
}

/// Decode the configured blurhash, falling back to a flat neutral tile
fn placeholder_handle(hash: &str) -> Handle {
    let pixels = blurhash::decode(hash, PLACEHOLDER_SIZE, PLACEHOLDER_SIZE).unwrap_or_else(|err| {
        tracing::warn!("Placeholder blurhash {:?} rejected: {}", hash, err);
        image::RgbaImage::from_pixel(
            PLACEHOLDER_SIZE,
            PLACEHOLDER_SIZE,
            image::Rgba([0xE5, 0xE7, 0xEB, 0xFF]),
        )
    });
    let (width, height) = pixels.dimensions();
    Handle::from_rgba(width, height, pixels.into_raw())
}
