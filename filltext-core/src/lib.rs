//! # Filltext Core
//!
//! Placeholder text generation for canvas design tools: headings, paragraphs
//! and numbered lists in English and Arabic, sized exactly to a word,
//! sentence or item count.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                filltext-core                │
//! ├─────────────────────────────────────────────┤
//! │  Generation      │  Session                 │
//! │  - Sample pools  │  - Control events        │
//! │  - Assemblers    │  - List validation       │
//! │  - Direction     │  - Retry scheduling      │
//! ├─────────────────────────────────────────────┤
//! │  Canvas boundary                            │
//! │  - Style hints   │  - CanvasHost / Scene    │
//! └─────────────────────────────────────────────┘
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod assemble;
pub mod config;
pub mod count;
pub mod direction;
pub mod element;
pub mod error;
pub mod event;
pub mod generator;
pub mod pool;
pub mod scene;
pub mod schedule;
pub mod session;
pub mod validation;

pub use assemble::Shape;
pub use config::FillConfig;
pub use direction::{detect_direction, Direction, TextAlign};
pub use element::{ListFormatting, Node, NodeId, StyleHints};
pub use error::{CommitError, FillError, FillResult};
pub use event::{ControlEvent, Notice, NoticeLevel};
pub use generator::{ContentGenerator, GeneratedContent, GenerationRequest};
pub use pool::{Category, Language, SamplePool};
pub use scene::{CanvasHost, Scene};
pub use schedule::{ManualScheduler, RetryScheduler, RetryTicket, RetryTimer};
pub use session::{ContentSource, Session};
pub use validation::{ListValidator, ValidationOutcome, ValidationState};

/// Filltext core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
