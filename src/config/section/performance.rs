//! `performance` section: loading and image optimization.

use super::common::default_true;
use crate::config::schema::{Rule, Schema, array, boolean, nested, number, object, one_of};
use crate::config::types::literal_enum;
use serde::{Deserialize, Serialize};

literal_enum! {
    pub enum ImageFormat("image format") {
        Webp => "webp",
        Avif => "avif",
        Jpg => "jpg",
        Png => "png",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSection {
    #[serde(default = "default_true")]
    pub lazy_load_images: bool,
    #[serde(default = "default_true")]
    pub preload_critical: bool,
    #[serde(default)]
    pub enable_service_worker: bool,
    pub image_optimization: ImageOptimization,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageOptimization {
    /// Encoder quality in `[1, 100]`.
    #[serde(default = "default_quality")]
    pub quality: f64,
    /// Output formats, preferred first.
    pub formats: Vec<ImageFormat>,
}

fn default_quality() -> f64 {
    80.0
}

impl Schema for PerformanceSection {
    fn schema() -> Rule {
        object()
            .defaulted("lazyLoadImages", boolean())
            .defaulted("preloadCritical", boolean())
            .defaulted("enableServiceWorker", boolean())
            .required("imageOptimization", nested::<ImageOptimization>())
            .into()
    }
}

impl Schema for ImageOptimization {
    fn schema() -> Rule {
        object()
            .defaulted("quality", number().range(1.0, 100.0))
            .required("formats", array(one_of(ImageFormat::NAMES)))
            .into()
    }
}
