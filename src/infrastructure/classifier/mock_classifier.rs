use super::traits::FallbackClassifier;
use crate::domain::classification::entity::Classification;
use async_trait::async_trait;
use rand::Rng;
use std::time::Duration;

// Range spanned by the sample confidences of the original demo data.
const CONFIDENCE_LOW: f64 = 85.0;
const CONFIDENCE_HIGH: f64 = 99.0;

/// Mock classifier: a uniformly random label from a fixed set, returned after
/// a simulated processing delay. The image content is never inspected.
pub struct SampleSetClassifier {
    labels: Vec<String>,
    delay: Duration,
}

impl SampleSetClassifier {
    /// `labels` must be non-empty; `Config::from_env` guarantees this for the
    /// configured set.
    pub fn new(labels: Vec<String>, delay_ms: u64) -> Self {
        Self {
            labels,
            delay: Duration::from_millis(delay_ms),
        }
    }

    async fn draw(&self) -> Classification {
        tokio::time::sleep(self.delay).await;
        let (index, confidence) = {
            let mut rng = rand::rng();
            (
                rng.random_range(0..self.labels.len()),
                rng.random_range(CONFIDENCE_LOW..=CONFIDENCE_HIGH),
            )
        };
        Classification {
            class: self.labels[index].clone(),
            confidence: (confidence * 10.0).round() / 10.0,
            note: None,
        }
    }
}

#[async_trait]
impl FallbackClassifier for SampleSetClassifier {
    async fn classify_image(&self, _bytes: &[u8]) -> anyhow::Result<Classification> {
        Ok(self.draw().await)
    }

    async fn classify_url(&self, _url: &str) -> anyhow::Result<Classification> {
        Ok(self.draw().await)
    }
}
