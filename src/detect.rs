//! Food detection boundary.
//!
//! Detection is a capability: anything that can turn a meal photo into a
//! list of catalog foods. The shipped [`DemoDetector`] is a stand-in that
//! picks random candidates; a real vision-service client would implement
//! the same trait.

use std::path::{Path, PathBuf};

use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;

use crate::catalog;
use crate::models::FoodDefinition;

/// Opaque handle to a meal photo.
///
/// The pixel content is never inspected here; only a detector
/// implementation backed by a real vision service would read the file.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageHandle {
    path: PathBuf,
}

impl ImageHandle {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Display name for prompts and rendering.
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Turns a meal photo into candidate foods for the ledger.
pub trait FoodDetector {
    fn detect(&mut self, image: &ImageHandle) -> Vec<FoodDefinition>;
}

/// Candidate names the demo detector draws from.
const DEMO_CANDIDATES: [&str; 7] = [
    "Manzana",
    "Banana",
    "Pizza (porción)",
    "Pollo a la plancha",
    "Arroz cocido",
    "Tomate",
    "Pan rebanada",
];

/// Demo detector: ignores the image and returns 1-3 random candidates.
///
/// Candidate names that fail to resolve against the catalog are dropped
/// silently.
pub struct DemoDetector<R: Rng> {
    rng: R,
}

impl DemoDetector<ThreadRng> {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for DemoDetector<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> DemoDetector<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> FoodDetector for DemoDetector<R> {
    fn detect(&mut self, _image: &ImageHandle) -> Vec<FoodDefinition> {
        let count = self.rng.gen_range(1..=3);
        DEMO_CANDIDATES
            .choose_multiple(&mut self.rng, count)
            .filter_map(|name| catalog::find_exact(name))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn photo() -> ImageHandle {
        ImageHandle::new(PathBuf::from("plato.jpg"))
    }

    #[test]
    fn test_detects_between_one_and_three_foods() {
        for seed in 0..20 {
            let mut detector = DemoDetector::with_rng(StdRng::seed_from_u64(seed));
            let found = detector.detect(&photo());
            assert!((1..=3).contains(&found.len()), "seed {}: {}", seed, found.len());
        }
    }

    #[test]
    fn test_detected_foods_come_from_catalog() {
        let mut detector = DemoDetector::with_rng(StdRng::seed_from_u64(7));
        for food in detector.detect(&photo()) {
            let entry = catalog::find_exact(&food.name).unwrap();
            assert_eq!(entry.pricing, food.pricing);
        }
    }

    #[test]
    fn test_no_duplicate_picks_in_one_detection() {
        for seed in 0..20 {
            let mut detector = DemoDetector::with_rng(StdRng::seed_from_u64(seed));
            let found = detector.detect(&photo());
            for (i, a) in found.iter().enumerate() {
                for b in &found[i + 1..] {
                    assert_ne!(a.name, b.name);
                }
            }
        }
    }

    #[test]
    fn test_display_name() {
        let handle = ImageHandle::new(PathBuf::from("/tmp/fotos/plato.jpg"));
        assert_eq!(handle.display_name(), "plato.jpg");
    }
}
