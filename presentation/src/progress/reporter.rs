//! Progress reporting for the questionnaire

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use maturity_application::ports::assessment_observer::{AssessmentEvent, AssessmentObserver};
use maturity_domain::Catalog;
use std::sync::{Arc, Mutex};

/// Shows overall completion as a progress bar while answers come in
pub struct ProgressReporter {
    catalog: Arc<Catalog>,
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            bar: Mutex::new(None),
        }
    }

    /// Current bar position, if a session has started
    pub fn position(&self) -> Option<u64> {
        self.bar
            .lock()
            .ok()
            .and_then(|bar| bar.as_ref().map(ProgressBar::position))
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn step_prefix(&self, step: usize) -> String {
        format!("Step {}/{}", step + 1, self.catalog.len())
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(bar) = self.bar.lock()
            && let Some(bar) = bar.as_ref()
        {
            f(bar);
        }
    }
}

impl AssessmentObserver for ProgressReporter {
    fn notify(&self, event: &AssessmentEvent) {
        match event {
            AssessmentEvent::Started { overall, restored } => {
                let bar = ProgressBar::new(overall.total as u64);
                bar.set_style(Self::style());
                bar.set_position(overall.answered as u64);
                bar.set_prefix(self.step_prefix(0));
                if *restored {
                    bar.set_message("restored saved answers");
                }
                if let Ok(mut slot) = self.bar.lock() {
                    *slot = Some(bar);
                }
            }
            AssessmentEvent::AnswerChanged {
                rating, previous, ..
            } => self.with_bar(|bar| {
                // Only transitions between answered and unanswered move the bar
                match (*previous == 0, *rating == 0) {
                    (true, false) => bar.inc(1),
                    (false, true) => bar.set_position(bar.position().saturating_sub(1)),
                    _ => {}
                }
            }),
            AssessmentEvent::AnswersLoaded { overall } => self.with_bar(|bar| {
                bar.set_length(overall.total as u64);
                bar.set_position(overall.answered as u64);
                bar.set_message("answers loaded");
            }),
            AssessmentEvent::StepChanged {
                step, category_id, ..
            } => {
                let title = self
                    .catalog
                    .find_category(category_id)
                    .map(|c| c.short_title.clone())
                    .unwrap_or_else(|| category_id.clone());
                let prefix = self.step_prefix(*step);
                self.with_bar(|bar| {
                    bar.set_prefix(prefix);
                    bar.set_message(title);
                });
            }
            AssessmentEvent::Submitted { .. } => self.with_bar(|bar| {
                bar.finish_with_message(format!("{}", "submitted".green()));
            }),
            AssessmentEvent::Reset => self.with_bar(|bar| {
                bar.set_position(0);
                bar.set_prefix(self.step_prefix(0));
                bar.set_message("reset");
            }),
            AssessmentEvent::PersistenceFailed { .. }
            | AssessmentEvent::UnknownQuestionsIgnored { .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maturity_application::{AssessmentSession, InMemorySessionStore};
    use maturity_domain::{CompletionStatus, sample_answers};

    fn answer(rating: u8, previous: u8) -> AssessmentEvent {
        AssessmentEvent::AnswerChanged {
            question_id: "q_vision_1".to_string(),
            category_id: "vision_strategy".to_string(),
            rating,
            previous,
            step: CompletionStatus::new(0, 5),
        }
    }

    #[test]
    fn test_position_follows_answered_count() {
        let reporter = ProgressReporter::new(Arc::new(Catalog::builtin()));
        assert_eq!(reporter.position(), None);

        reporter.notify(&AssessmentEvent::Started {
            restored: true,
            overall: CompletionStatus::new(3, 35),
        });
        assert_eq!(reporter.position(), Some(3));

        reporter.notify(&answer(4, 0));
        assert_eq!(reporter.position(), Some(4));

        // Changing an existing answer does not move the bar
        reporter.notify(&answer(2, 4));
        assert_eq!(reporter.position(), Some(4));

        reporter.notify(&answer(0, 2));
        assert_eq!(reporter.position(), Some(3));

        reporter.notify(&AssessmentEvent::Reset);
        assert_eq!(reporter.position(), Some(0));
    }

    #[test]
    fn test_position_tracks_bulk_loaded_answers() {
        let catalog = Arc::new(Catalog::builtin());
        let reporter = Arc::new(ProgressReporter::new(catalog.clone()));
        let mut session = AssessmentSession::start(
            catalog,
            Arc::new(InMemorySessionStore::new()),
            reporter.clone(),
        );
        assert_eq!(reporter.position(), Some(0));

        session.load_answers(sample_answers());

        assert_eq!(session.overall_status().answered, 35);
        assert_eq!(reporter.position(), Some(35));
    }
}
