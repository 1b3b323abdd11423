//! Composition session: one explicit state record instead of scattered flags.
//!
//! The session tracks what the user has assembled (category, draft text,
//! attached media) and where the current request stands. Keeping the
//! in-flight exclusion and the input-derived phases in one place makes the
//! "never two requests at once" rule a unit test instead of a UI convention.

use crate::error::{ArchitectError, Result};
use crate::types::{ArchitectResult, Category, MediaAttachment};

/// Where the current composition stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing entered yet.
    Idle,
    /// Draft text or media present, no request running.
    AwaitingInput,
    /// Exactly one request in flight.
    Generating,
    /// Last request produced a blueprint.
    Success,
    /// Last request failed; the error is retained for display.
    Failed,
}

/// Mutable composition state for one user sitting.
pub struct Session {
    category: Category,
    draft: String,
    media: Option<MediaAttachment>,
    phase: Phase,
    result: Option<ArchitectResult>,
    failure: Option<ArchitectError>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            category: Category::Image,
            draft: String::new(),
            media: None,
            phase: Phase::Idle,
            result: None,
            failure: None,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn media(&self) -> Option<&MediaAttachment> {
        self.media.as_ref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn result(&self) -> Option<&ArchitectResult> {
        self.result.as_ref()
    }

    pub fn failure(&self) -> Option<&ArchitectError> {
        self.failure.as_ref()
    }

    /// Whether enough input exists to generate: non-blank text or media.
    pub fn has_input(&self) -> bool {
        !self.draft.trim().is_empty() || self.media.is_some()
    }

    /// Switch the active category. Only user-selectable categories apply;
    /// the media-analysis category is entered by attaching media, never
    /// picked directly.
    pub fn select_category(&mut self, category: Category) {
        if Category::selectable().contains(&category) {
            self.category = category;
        }
    }

    /// Replace the draft text, keeping the idle/awaiting phases honest.
    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
        self.refresh_input_phase();
    }

    /// Attach media, switching the session into media-analysis mode and
    /// clearing any stale failure.
    pub fn attach_media(&mut self, media: MediaAttachment) {
        self.media = Some(media);
        self.category = Category::MediaAnalysis;
        self.failure = None;
        self.refresh_input_phase();
    }

    /// Drop the attachment without touching the draft. Leaves media-analysis
    /// mode since there is nothing left to analyze.
    pub fn clear_media(&mut self) {
        self.media = None;
        if self.category == Category::MediaAnalysis {
            self.category = Category::Image;
        }
        self.refresh_input_phase();
    }

    /// Claim the single in-flight slot.
    ///
    /// Fails with [`ArchitectError::Busy`] while a request is already
    /// running and with [`ArchitectError::Validation`] when there is nothing
    /// to send; in both cases the phase is left untouched.
    pub fn begin_generation(&mut self) -> Result<()> {
        if self.phase == Phase::Generating {
            return Err(ArchitectError::Busy);
        }
        if !self.has_input() {
            return Err(ArchitectError::Validation(
                "provide an idea or attach a media file".to_string(),
            ));
        }
        self.phase = Phase::Generating;
        self.failure = None;
        Ok(())
    }

    /// Settle the in-flight request with a blueprint.
    pub fn complete(&mut self, result: ArchitectResult) {
        self.result = Some(result);
        self.failure = None;
        self.phase = Phase::Success;
    }

    /// Settle the in-flight request with an error. Any previous result is
    /// discarded so a failed state never shows stale output.
    pub fn fail(&mut self, error: ArchitectError) {
        self.failure = Some(error);
        self.result = None;
        self.phase = Phase::Failed;
    }

    /// Discard everything and return to the starting state.
    pub fn reset(&mut self) {
        self.category = Category::Image;
        self.draft.clear();
        self.media = None;
        self.result = None;
        self.failure = None;
        self.phase = Phase::Idle;
    }

    fn refresh_input_phase(&mut self) {
        if matches!(self.phase, Phase::Idle | Phase::AwaitingInput) {
            self.phase = if self.has_input() {
                Phase::AwaitingInput
            } else {
                Phase::Idle
            };
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MediaKind;

    fn png_attachment() -> MediaAttachment {
        MediaAttachment {
            data: "iVBORw0KGgo=".to_string(),
            mime_type: "image/png".to_string(),
            file_name: "frame.png".to_string(),
            kind: MediaKind::Image,
        }
    }

    fn blueprint() -> ArchitectResult {
        ArchitectResult {
            analysis: "a".to_string(),
            optimized_prompt: "b".to_string(),
            pro_tip: "c".to_string(),
        }
    }

    #[test]
    fn new_session_starts_idle_on_image() {
        let session = Session::new();
        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(session.category(), Category::Image);
        assert!(!session.has_input());
    }

    #[test]
    fn draft_text_moves_idle_to_awaiting_and_back() {
        let mut session = Session::new();
        session.set_draft("a lighthouse at dusk");
        assert_eq!(session.phase(), Phase::AwaitingInput);
        session.set_draft("   ");
        assert_eq!(session.phase(), Phase::Idle);
    }

    #[test]
    fn attaching_media_switches_to_media_analysis() {
        let mut session = Session::new();
        session.attach_media(png_attachment());
        assert_eq!(session.category(), Category::MediaAnalysis);
        assert_eq!(session.phase(), Phase::AwaitingInput);
        assert!(session.has_input());
    }

    #[test]
    fn media_analysis_cannot_be_selected_directly() {
        let mut session = Session::new();
        session.select_category(Category::MediaAnalysis);
        assert_eq!(session.category(), Category::Image);
        session.select_category(Category::Seo);
        assert_eq!(session.category(), Category::Seo);
    }

    #[test]
    fn clearing_media_leaves_media_analysis_mode() {
        let mut session = Session::new();
        session.attach_media(png_attachment());
        session.clear_media();
        assert_eq!(session.category(), Category::Image);
        assert_eq!(session.phase(), Phase::Idle);
    }

    #[test]
    fn generation_requires_input() {
        let mut session = Session::new();
        let err = session.begin_generation().unwrap_err();
        assert!(matches!(err, ArchitectError::Validation(_)));
        assert_eq!(session.phase(), Phase::Idle);
    }

    #[test]
    fn second_generation_while_in_flight_is_busy() {
        let mut session = Session::new();
        session.set_draft("an idea");
        session.begin_generation().unwrap();
        assert_eq!(session.phase(), Phase::Generating);
        let err = session.begin_generation().unwrap_err();
        assert!(matches!(err, ArchitectError::Busy));
        assert_eq!(session.phase(), Phase::Generating);
    }

    #[test]
    fn whitespace_only_draft_does_not_pass_validation() {
        let mut session = Session::new();
        session.set_draft("  \n\t ");
        assert!(session.begin_generation().is_err());
    }

    #[test]
    fn media_alone_passes_validation() {
        let mut session = Session::new();
        session.attach_media(png_attachment());
        assert!(session.begin_generation().is_ok());
    }

    #[test]
    fn completion_stores_the_blueprint() {
        let mut session = Session::new();
        session.set_draft("idea");
        session.begin_generation().unwrap();
        session.complete(blueprint());
        assert_eq!(session.phase(), Phase::Success);
        assert_eq!(session.result().unwrap().analysis, "a");
        assert!(session.failure().is_none());
    }

    #[test]
    fn failure_discards_any_previous_result() {
        let mut session = Session::new();
        session.set_draft("idea");
        session.begin_generation().unwrap();
        session.complete(blueprint());
        session.begin_generation().unwrap();
        session.fail(ArchitectError::Decode("bad".to_string()));
        assert_eq!(session.phase(), Phase::Failed);
        assert!(session.result().is_none());
        assert!(session.failure().is_some());
    }

    #[test]
    fn starting_a_new_request_clears_the_old_failure() {
        let mut session = Session::new();
        session.set_draft("idea");
        session.begin_generation().unwrap();
        session.fail(ArchitectError::Decode("bad".to_string()));
        session.begin_generation().unwrap();
        assert!(session.failure().is_none());
        assert_eq!(session.phase(), Phase::Generating);
    }

    #[test]
    fn reset_restores_the_starting_state() {
        let mut session = Session::new();
        session.select_category(Category::Video);
        session.set_draft("idea");
        session.attach_media(png_attachment());
        session.begin_generation().unwrap();
        session.complete(blueprint());

        session.reset();
        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(session.category(), Category::Image);
        assert!(session.draft().is_empty());
        assert!(session.media().is_none());
        assert!(session.result().is_none());
        assert!(session.failure().is_none());
    }
}
