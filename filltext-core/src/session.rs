//! Generator session state.
//!
//! A [`Session`] holds the panel controls, the current content, the list
//! validator and the pending regeneration, and commits content to a
//! [`CanvasHost`]. Every control change starts a new request and supersedes
//! whatever was in flight.

use rand::Rng;
use tokio::sync::mpsc;

use crate::config::FillConfig;
use crate::count::estimate_lines;
use crate::schedule::{RetryScheduler, RetryTicket};
use crate::validation::{ListValidator, ValidationOutcome, ValidationState};
use crate::{
    CanvasHost, Category, ContentGenerator, ControlEvent, Direction, FillResult, GeneratedContent,
    GenerationRequest, Language, Notice, Shape, StyleHints,
};

/// Anything that turns a request into content.
pub trait ContentSource {
    /// Generate content for `request`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be served.
    fn generate(&mut self, request: &GenerationRequest) -> FillResult<GeneratedContent>;
}

impl<R: Rng> ContentSource for ContentGenerator<R> {
    fn generate(&mut self, request: &GenerationRequest) -> FillResult<GeneratedContent> {
        ContentGenerator::generate(self, request)
    }
}

/// Controls, current content and regeneration state for one panel.
#[derive(Debug)]
pub struct Session<G, S> {
    source: G,
    scheduler: S,
    validator: ListValidator,
    config: FillConfig,
    shape: Shape,
    category: Category,
    language: Language,
    length: usize,
    direction_override: Option<Direction>,
    content: Option<GeneratedContent>,
    /// Bumped on every new request; retries from older epochs are stale.
    epoch: u64,
    pending_retry: Option<RetryTicket>,
}

impl<G: ContentSource, S: RetryScheduler> Session<G, S> {
    /// Create a session with paragraph, technology, English defaults.
    ///
    /// Nothing is generated until the first event.
    #[must_use]
    pub fn new(source: G, scheduler: S, config: FillConfig) -> Self {
        let length = config.lengths.paragraph.default;
        Self {
            source,
            scheduler,
            validator: ListValidator::new(config.validation.clone()),
            config,
            shape: Shape::Paragraph,
            category: Category::Technology,
            language: Language::English,
            length,
            direction_override: None,
            content: None,
            epoch: 0,
            pending_retry: None,
        }
    }

    /// Current shape.
    #[must_use]
    pub const fn shape(&self) -> Shape {
        self.shape
    }

    /// Current category.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Current language.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Current length control value.
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Latest generated content.
    #[must_use]
    pub fn content(&self) -> Option<&GeneratedContent> {
        self.content.as_ref()
    }

    /// Validator state.
    #[must_use]
    pub const fn validation_state(&self) -> ValidationState {
        self.validator.state()
    }

    /// Whether a regeneration is scheduled.
    #[must_use]
    pub const fn has_pending_retry(&self) -> bool {
        self.pending_retry.is_some()
    }

    /// The scheduler.
    #[must_use]
    pub const fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Mutable access to the scheduler.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// The request the current controls describe.
    #[must_use]
    pub fn request(&self) -> GenerationRequest {
        GenerationRequest {
            shape: self.shape,
            category: self.category,
            language: self.language,
            target_size: self.length,
            direction_override: self.direction_override,
        }
    }

    /// Apply a control change and generate.
    ///
    /// # Errors
    ///
    /// Returns an error if the generator cannot serve the new request.
    pub fn process_event(&mut self, event: ControlEvent) -> FillResult<Vec<Notice>> {
        match event {
            ControlEvent::Generate => {}
            ControlEvent::SetShape(shape) => {
                self.shape = shape;
                self.reset_length();
            }
            ControlEvent::SetCategory(category) => {
                self.category = category;
                self.reset_length();
            }
            ControlEvent::SetLanguage(language) => {
                self.language = language;
                self.direction_override = None;
                self.reset_length();
            }
            ControlEvent::SetLength(length) => {
                self.length = self.config.lengths.for_shape(self.shape).clamp(length);
            }
            ControlEvent::SetDirection(direction) => self.direction_override = direction,
        }
        tracing::debug!(?event, "Control changed");
        self.start_request()
    }

    /// Handle a delivered retry ticket.
    ///
    /// Tickets from superseded requests are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if regeneration fails.
    pub fn on_retry(&mut self, ticket: RetryTicket) -> FillResult<Vec<Notice>> {
        if self.pending_retry != Some(ticket) {
            tracing::debug!(?ticket, epoch = self.epoch, "Ignoring stale retry");
            return Ok(Vec::new());
        }
        self.pending_retry = None;
        self.generate_and_validate()
    }

    /// Wait for scheduled retries until the validator settles.
    ///
    /// `tickets` must be the receiver paired with this session's scheduler.
    ///
    /// # Errors
    ///
    /// Returns an error if a regeneration fails.
    pub async fn settle(
        &mut self,
        tickets: &mut mpsc::UnboundedReceiver<RetryTicket>,
    ) -> FillResult<Vec<Notice>> {
        let mut notices = Vec::new();
        while self.has_pending_retry() {
            let Some(ticket) = tickets.recv().await else {
                break;
            };
            notices.extend(self.on_retry(ticket)?);
        }
        Ok(notices)
    }

    /// Commit the current content.
    ///
    /// Selected text nodes are updated in place and a fresh text is generated
    /// afterwards; with no selection a new node is created. Commit failures
    /// are reported as notices and leave the content available.
    ///
    /// # Errors
    ///
    /// Returns an error only if generating content fails.
    pub fn add_to_canvas<H: CanvasHost + ?Sized>(
        &mut self,
        host: &mut H,
    ) -> FillResult<Vec<Notice>> {
        let mut notices = Vec::new();
        let content = match &self.content {
            Some(content) => content.clone(),
            None => {
                notices.extend(self.start_request()?);
                match &self.content {
                    Some(content) => content.clone(),
                    None => return Ok(notices),
                }
            }
        };
        let style = StyleHints::for_content(&content, &self.config.layout);
        let selected = host.selected_text_nodes();

        if selected.is_empty() {
            let layout = &self.config.layout;
            let estimated_lines =
                estimate_lines(&content.text, layout.max_width, layout.px_per_char);
            if estimated_lines > layout.long_content_lines {
                notices.push(Notice::LongContent { estimated_lines });
            }
            match host.commit_text(&content.text, &style) {
                Ok(_) => notices.push(Notice::Committed { nodes: 1 }),
                Err(err) => {
                    tracing::warn!(error = %err, "Failed to add text to canvas");
                    notices.push(Notice::CommitFailed {
                        reason: err.to_string(),
                    });
                }
            }
            return Ok(notices);
        }

        let mut updated = 0;
        for id in selected {
            match host.update_text(id, &content.text, &style) {
                Ok(()) => updated += 1,
                Err(err) => {
                    tracing::warn!(node = %id, error = %err, "Failed to update text node");
                    notices.push(Notice::CommitFailed {
                        reason: err.to_string(),
                    });
                }
            }
        }
        if updated > 0 {
            notices.push(Notice::Committed { nodes: updated });
        }
        notices.extend(self.start_request()?);
        Ok(notices)
    }

    fn reset_length(&mut self) {
        self.length = self.config.lengths.for_shape(self.shape).default;
    }

    fn start_request(&mut self) -> FillResult<Vec<Notice>> {
        self.epoch += 1;
        if self.pending_retry.take().is_some() {
            self.scheduler.cancel();
        }
        self.validator.reset();
        self.generate_and_validate()
    }

    fn generate_and_validate(&mut self) -> FillResult<Vec<Notice>> {
        let content = self.source.generate(&self.request())?;
        let outcome = self.validator.validate(&content);
        self.content = Some(content);

        match outcome {
            ValidationOutcome::Accepted { .. } => Ok(Vec::new()),
            ValidationOutcome::Retry { attempt, delay } => {
                let ticket = RetryTicket {
                    epoch: self.epoch,
                    attempt,
                };
                self.pending_retry = Some(ticket);
                self.scheduler.schedule(ticket, delay);
                Ok(Vec::new())
            }
            ValidationOutcome::GaveUp { notice } => Ok(vec![notice]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::count::{count_list_items, count_words};
    use crate::schedule::ManualScheduler;
    use crate::{CommitError, NodeId, SamplePool, Scene};

    fn session() -> Session<ContentGenerator, ManualScheduler> {
        Session::new(
            ContentGenerator::seeded(SamplePool::builtin(), 5),
            ManualScheduler::new(),
            FillConfig::default(),
        )
    }

    /// Always returns a one-item list, whatever was asked for.
    struct ShortLists {
        calls: usize,
    }

    impl ContentSource for ShortLists {
        fn generate(&mut self, request: &GenerationRequest) -> FillResult<GeneratedContent> {
            self.calls += 1;
            let text = format!("1. attempt {}", self.calls);
            Ok(GeneratedContent {
                measured_size: count_list_items(&text),
                text,
                shape: request.shape,
                target_size: request.target_size,
                direction: Direction::Ltr,
            })
        }
    }

    struct RejectingHost;

    impl CanvasHost for RejectingHost {
        fn commit_text(&mut self, _: &str, _: &StyleHints) -> Result<NodeId, CommitError> {
            Err(CommitError::Rejected("read-only document".into()))
        }

        fn update_text(&mut self, id: NodeId, _: &str, _: &StyleHints) -> Result<(), CommitError> {
            Err(CommitError::NodeNotFound(id))
        }

        fn selected_text_nodes(&self) -> Vec<NodeId> {
            Vec::new()
        }
    }

    #[test]
    fn test_shape_change_resets_length() {
        let mut session = session();
        session
            .process_event(ControlEvent::SetShape(Shape::List))
            .expect("generate");
        assert_eq!(session.length(), 5);
        let content = session.content().expect("content");
        assert_eq!(count_list_items(&content.text), 5);

        session
            .process_event(ControlEvent::SetShape(Shape::Paragraph))
            .expect("generate");
        assert_eq!(session.length(), 1);
    }

    #[test]
    fn test_category_and_language_reset_length() {
        let mut session = session();
        session
            .process_event(ControlEvent::SetShape(Shape::List))
            .expect("generate");
        session
            .process_event(ControlEvent::SetLength(9))
            .expect("generate");
        session
            .process_event(ControlEvent::SetCategory(Category::Gaming))
            .expect("generate");
        assert_eq!(session.length(), 5);

        session
            .process_event(ControlEvent::SetLength(8))
            .expect("generate");
        session
            .process_event(ControlEvent::SetLanguage(Language::Arabic))
            .expect("generate");
        assert_eq!(session.length(), 5);
        assert_eq!(
            count_list_items(&session.content().expect("content").text),
            5
        );
    }

    #[test]
    fn test_length_is_clamped() {
        let mut session = session();
        session
            .process_event(ControlEvent::SetShape(Shape::Heading))
            .expect("generate");
        session
            .process_event(ControlEvent::SetLength(50))
            .expect("generate");
        assert_eq!(session.length(), 10);
        assert_eq!(count_words(&session.content().expect("content").text), 10);
    }

    #[test]
    fn test_arabic_language_sets_rtl() {
        let mut session = session();
        session
            .process_event(ControlEvent::SetDirection(Some(Direction::Ltr)))
            .expect("generate");
        session
            .process_event(ControlEvent::SetLanguage(Language::Arabic))
            .expect("generate");
        assert_eq!(
            session.content().expect("content").direction,
            Direction::Rtl
        );
    }

    #[test]
    fn test_gives_up_after_three_attempts_with_one_notice() {
        let mut session = Session::new(
            ShortLists { calls: 0 },
            ManualScheduler::new(),
            FillConfig::default(),
        );
        let mut notices = session
            .process_event(ControlEvent::SetShape(Shape::List))
            .expect("generate");
        while let Some(ticket) = session.scheduler_mut().fire() {
            notices.extend(session.on_retry(ticket).expect("retry"));
        }

        assert_eq!(session.source.calls, 3);
        assert_eq!(session.scheduler().scheduled(), 2);
        assert_eq!(
            notices,
            vec![Notice::ListBestEffort {
                expected: 5,
                found: 1
            }]
        );
        assert_eq!(session.validation_state(), ValidationState::GivenUp);
        assert!(!session.has_pending_retry());
        assert_eq!(
            session.content().expect("content").text,
            "1. attempt 3".to_string()
        );
    }

    #[test]
    fn test_new_request_cancels_pending_retry() {
        let mut session = Session::new(
            ShortLists { calls: 0 },
            ManualScheduler::new(),
            FillConfig::default(),
        );
        session
            .process_event(ControlEvent::SetShape(Shape::List))
            .expect("generate");
        let (stale, _) = session.scheduler().pending().expect("retry scheduled");

        session
            .process_event(ControlEvent::SetCategory(Category::Gaming))
            .expect("generate");
        assert_eq!(session.scheduler().cancelled(), 1);

        // A ticket that slipped through before the cancel does nothing.
        let calls = session.source.calls;
        let notices = session.on_retry(stale).expect("stale retry");
        assert!(notices.is_empty());
        assert_eq!(session.source.calls, calls);
    }

    #[test]
    fn test_add_to_canvas_creates_node() {
        let mut session = session();
        let mut scene = Scene::new();
        let notices = session.add_to_canvas(&mut scene).expect("commit");
        assert_eq!(notices, vec![Notice::Committed { nodes: 1 }]);
        assert_eq!(scene.node_count(), 1);
        let node = scene.nodes().next().expect("node");
        assert_eq!(node.content, session.content().expect("content").text);
    }

    #[test]
    fn test_add_to_canvas_updates_selection_and_regenerates() {
        let mut session = session();
        let mut scene = Scene::new();
        session
            .process_event(ControlEvent::SetShape(Shape::Heading))
            .expect("generate");
        let committed = session.content().expect("content").text.clone();

        let id = scene
            .commit_text(
                "placeholder",
                &StyleHints::for_content(
                    session.content().expect("content"),
                    &FillConfig::default().layout,
                ),
            )
            .expect("commit");
        scene.select(id).expect("select");

        let notices = session.add_to_canvas(&mut scene).expect("commit");
        assert_eq!(notices, vec![Notice::Committed { nodes: 1 }]);
        assert_eq!(scene.node_count(), 1);
        assert_eq!(
            scene.get_node(id).map(|node| node.content.as_str()),
            Some(committed.as_str())
        );
        assert!(session.content().is_some());
    }

    #[test]
    fn test_commit_failure_is_a_notice() {
        let mut session = session();
        session.process_event(ControlEvent::Generate).expect("generate");
        let before = session.content().cloned();

        let notices = session.add_to_canvas(&mut RejectingHost).expect("no error");
        assert_eq!(
            notices,
            vec![Notice::CommitFailed {
                reason: "Canvas rejected the operation: read-only document".into()
            }]
        );
        assert_eq!(session.content().cloned(), before);
    }

    #[test]
    fn test_long_content_warning() {
        let mut session = session();
        session
            .process_event(ControlEvent::SetLength(30))
            .expect("generate");
        let notices = session.add_to_canvas(&mut Scene::new()).expect("commit");
        assert!(notices
            .iter()
            .any(|notice| matches!(notice, Notice::LongContent { .. })));
    }

    #[tokio::test(start_paused = true)]
    async fn test_settle_with_timer() {
        let (timer, mut tickets) = crate::RetryTimer::new();
        let mut session = Session::new(ShortLists { calls: 0 }, timer, FillConfig::default());
        session
            .process_event(ControlEvent::SetShape(Shape::List))
            .expect("generate");
        assert!(session.has_pending_retry());

        let notices = session.settle(&mut tickets).await.expect("settle");
        assert_eq!(notices.len(), 1);
        assert_eq!(session.source.calls, 3);
        assert_eq!(session.validation_state(), ValidationState::GivenUp);
    }
}
