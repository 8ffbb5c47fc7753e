//! Generation requests and the content generator.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::assemble::{assemble_heading, assemble_list, assemble_paragraph};
use crate::config::GeneratorConfig;
use crate::count::{count_list_items, count_sentences, count_words};
use crate::direction::resolve_direction;
use crate::{Category, Direction, FillError, FillResult, Language, SamplePool, Shape, TextAlign};

/// What to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Structural type.
    pub shape: Shape,
    /// Topic of the sample sentences.
    pub category: Category,
    /// Language of the sample sentences.
    pub language: Language,
    /// Words, sentences or items, depending on the shape.
    pub target_size: usize,
    /// Forces a direction instead of deriving it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction_override: Option<Direction>,
}

impl GenerationRequest {
    /// Create a request without a direction override.
    #[must_use]
    pub fn new(shape: Shape, category: Category, language: Language, target_size: usize) -> Self {
        Self {
            shape,
            category,
            language,
            target_size,
            direction_override: None,
        }
    }

    /// Force the direction.
    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction_override = Some(direction);
        self
    }

    /// Check the target against the shape minimum.
    ///
    /// # Errors
    ///
    /// Returns [`FillError::TargetTooSmall`] if the target is below the minimum.
    pub fn validate(&self) -> FillResult<()> {
        let minimum = self.shape.min_target();
        if self.target_size < minimum {
            return Err(FillError::TargetTooSmall {
                shape: self.shape,
                target: self.target_size,
                minimum,
            });
        }
        Ok(())
    }
}

/// Generated text and its measurements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedContent {
    /// The text.
    pub text: String,
    /// Structural type it was generated as.
    pub shape: Shape,
    /// Size requested.
    pub target_size: usize,
    /// Size measured with the counting utilities.
    pub measured_size: usize,
    /// Layout direction.
    pub direction: Direction,
}

impl GeneratedContent {
    /// Horizontal alignment for the direction.
    #[must_use]
    pub const fn alignment(&self) -> TextAlign {
        self.direction.alignment()
    }

    /// Whether the measured size equals the target.
    #[must_use]
    pub const fn is_exact(&self) -> bool {
        self.measured_size == self.target_size
    }
}

/// Measure `text` the way the validator does for `shape`.
#[must_use]
pub fn measure(shape: Shape, text: &str) -> usize {
    match shape {
        Shape::Heading => count_words(text),
        Shape::Paragraph => count_sentences(text),
        Shape::List => count_list_items(text),
    }
}

/// Builds text from an injected sample pool and random source.
#[derive(Debug)]
pub struct ContentGenerator<R = StdRng> {
    pool: Arc<SamplePool>,
    config: GeneratorConfig,
    rng: R,
}

impl ContentGenerator<StdRng> {
    /// Generator over `pool` seeded from the operating system.
    #[must_use]
    pub fn new(pool: Arc<SamplePool>) -> Self {
        Self::with_rng(pool, GeneratorConfig::default(), StdRng::from_os_rng())
    }

    /// Generator with a fixed seed, for reproducible output.
    #[must_use]
    pub fn seeded(pool: Arc<SamplePool>, seed: u64) -> Self {
        Self::with_rng(pool, GeneratorConfig::default(), StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ContentGenerator<R> {
    /// Generator with explicit config and random source.
    #[must_use]
    pub fn with_rng(pool: Arc<SamplePool>, config: GeneratorConfig, rng: R) -> Self {
        Self { pool, config, rng }
    }

    /// Replace the assembler settings.
    pub fn set_config(&mut self, config: GeneratorConfig) {
        self.config = config;
    }

    /// The sample pool in use.
    #[must_use]
    pub fn pool(&self) -> &SamplePool {
        &self.pool
    }

    /// Generate text for a request.
    ///
    /// # Errors
    ///
    /// Returns [`FillError::TargetTooSmall`] for a target below the shape
    /// minimum and [`FillError::EmptyPool`] if the pool has no sentences for
    /// the category and language.
    pub fn generate(&mut self, request: &GenerationRequest) -> FillResult<GeneratedContent> {
        request.validate()?;
        let sentences = self.pool.pool_for(request.category, request.language)?;
        let target = request.target_size;
        let min_chars = self.config.min_fragment_chars;

        let text = match request.shape {
            Shape::Heading => assemble_heading(sentences, target, &mut self.rng),
            Shape::Paragraph => assemble_paragraph(sentences, target, min_chars, &mut self.rng),
            Shape::List => {
                let split_direction = request
                    .direction_override
                    .unwrap_or_else(|| Direction::for_language(request.language));
                assemble_list(sentences, target, split_direction, min_chars, &mut self.rng)
            }
        };

        let direction = request.direction_override.unwrap_or_else(|| {
            resolve_direction(request.language, &text, self.config.rtl_threshold)
        });
        let measured_size = measure(request.shape, &text);

        tracing::debug!(
            shape = %request.shape,
            category = %request.category,
            language = %request.language,
            target,
            measured_size,
            %direction,
            "Generated content"
        );

        Ok(GeneratedContent {
            text,
            shape: request.shape,
            target_size: target,
            measured_size,
            direction,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator() -> ContentGenerator {
        ContentGenerator::seeded(SamplePool::builtin(), 17)
    }

    #[test]
    fn test_heading_scenario() {
        let request =
            GenerationRequest::new(Shape::Heading, Category::Technology, Language::English, 5);
        let content = generator().generate(&request).expect("generate");
        assert_eq!(count_words(&content.text), 5);
        assert!(content.text.ends_with(['.', '!', '?']));
        assert_eq!(content.direction, Direction::Ltr);
        assert!(content.is_exact());
    }

    #[test]
    fn test_arabic_list_scenario() {
        let request = GenerationRequest::new(Shape::List, Category::Health, Language::Arabic, 3);
        let content = generator().generate(&request).expect("generate");
        let lines: Vec<&str> = content.text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("1. "));
        assert!(lines[1].starts_with("2. "));
        assert!(lines[2].starts_with("3. "));
        assert_eq!(content.direction, Direction::Rtl);
        assert_eq!(content.alignment(), TextAlign::Right);
    }

    #[test]
    fn test_rejects_short_list() {
        let request = GenerationRequest::new(Shape::List, Category::Health, Language::English, 2);
        let err = generator().generate(&request).expect_err("too small");
        assert!(matches!(
            err,
            FillError::TargetTooSmall {
                minimum: 3,
                target: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_zero_heading() {
        let request =
            GenerationRequest::new(Shape::Heading, Category::Gaming, Language::English, 0);
        assert!(generator().generate(&request).is_err());
    }

    #[test]
    fn test_empty_pool_error() {
        let pool = Arc::new(SamplePool::default());
        let mut generator = ContentGenerator::seeded(pool, 1);
        let request =
            GenerationRequest::new(Shape::Paragraph, Category::Finance, Language::English, 2);
        assert!(matches!(
            generator.generate(&request),
            Err(FillError::EmptyPool { .. })
        ));
    }

    #[test]
    fn test_direction_override_wins() {
        let request =
            GenerationRequest::new(Shape::Paragraph, Category::Social, Language::Arabic, 2)
                .with_direction(Direction::Ltr);
        let content = generator().generate(&request).expect("generate");
        assert_eq!(content.direction, Direction::Ltr);
    }

    #[test]
    fn test_paragraph_is_exact() {
        for target in 1..=30 {
            let request = GenerationRequest::new(
                Shape::Paragraph,
                Category::Environment,
                Language::Arabic,
                target,
            );
            let content = generator().generate(&request).expect("generate");
            assert_eq!(content.measured_size, target);
            assert_eq!(count_sentences(&content.text), target);
        }
    }
}
