//! Generic round progression shared by every game mode.
//!
//! One engine drives one game session: it presents questions from a shuffled
//! [`QuestionSet`], collects picks, checks them, shows feedback, and after
//! the feedback delay either advances, resets for a retry, or finishes.
//! Game modes differ only in their [`Question`] type and [`RoundConfig`].

use super::feedback::{FeedbackSignal, Outcome};
use super::question::Question;
use super::question_set::QuestionSet;
use super::schedule::Scheduler;
use crate::core::constants::{ADVANCE_DELAY_MS, FEEDBACK_DISPLAY_MS};
use std::time::Duration;
use thiserror::Error;

/// Receives the effect sound for each checked answer.
pub trait EffectPlayer {
    fn play_effect(&mut self, outcome: Outcome);
}

/// Effect sink that plays nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEffects;

impl EffectPlayer for NoEffects {
    fn play_effect(&mut self, _outcome: Outcome) {}
}

/// How picks turn into a checked answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// A single pick is compared to the answer right away.
    SingleChoice,
    /// Picks fill the blanks in order and are compared slot by slot once
    /// the player asks for a check.
    MultiBlank,
}

/// Delays between a check and what follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundTiming {
    /// How long feedback stays visible.
    pub feedback: Duration,
    /// Extra wait after a correct answer's feedback before moving on.
    pub advance: Duration,
}

impl Default for RoundTiming {
    fn default() -> Self {
        Self {
            feedback: Duration::from_millis(FEEDBACK_DISPLAY_MS),
            advance: Duration::from_millis(ADVANCE_DELAY_MS),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundConfig {
    pub selection: SelectionMode,
    /// Keep a score of questions answered correctly.
    pub scoring: bool,
    pub timing: RoundTiming,
}

impl RoundConfig {
    pub fn single_choice() -> Self {
        Self {
            selection: SelectionMode::SingleChoice,
            scoring: false,
            timing: RoundTiming::default(),
        }
    }

    pub fn multi_blank() -> Self {
        Self {
            selection: SelectionMode::MultiBlank,
            ..Self::single_choice()
        }
    }

    pub fn with_scoring(mut self) -> Self {
        self.scoring = true;
        self
    }

    pub fn with_timing(mut self, timing: RoundTiming) -> Self {
        self.timing = timing;
        self
    }
}

/// Where the current round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Waiting for picks. The selection may be empty or partly filled.
    Presenting,
    /// Every blank is filled; waiting for a check.
    Evaluating,
    /// Feedback for a checked answer is visible.
    Feedback(Outcome),
    /// Correct answer acknowledged; about to move to the next question.
    Advancing,
    /// The last question was answered correctly.
    Finished,
}

/// Why the engine refused an operation. State is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundRejection {
    #[error("feedback is still showing")]
    FeedbackShowing,
    #[error("all questions are finished")]
    Finished,
    #[error("every blank is already filled")]
    SelectionFull,
    #[error("that tile was already used this round")]
    AlreadySelected,
    #[error("no such option")]
    NotAnOption,
    #[error("not every blank is filled yet")]
    IncompleteSelection,
}

/// What an accepted pick led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickResult {
    /// More picks are needed.
    Picked { remaining: usize },
    /// The selection is full and can be checked.
    Ready,
    /// The pick was checked immediately (single choice).
    Checked(Outcome),
}

/// State changes fired by timers during [`RoundEngine::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEvent {
    FeedbackDismissed(Outcome),
    /// An incorrect answer was cleared; the same question is open again.
    Retry,
    Advanced { to: usize },
    Finished,
}

/// Progress-dot state for one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressMark {
    Done,
    Current,
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoundTask {
    DismissFeedback,
    Advance,
}

#[derive(Debug, Clone)]
pub struct RoundEngine<Q: Question> {
    questions: QuestionSet<Q>,
    config: RoundConfig,
    current: usize,
    /// Option indices picked this round, in pick order.
    selection: Vec<usize>,
    phase: RoundPhase,
    completed: Vec<bool>,
    score: u32,
    feedback: FeedbackSignal,
    timers: Scheduler<RoundTask>,
}

impl<Q: Question> RoundEngine<Q> {
    pub fn new(questions: QuestionSet<Q>, config: RoundConfig) -> Self {
        let len = questions.len();
        Self {
            questions,
            config,
            current: 0,
            selection: Vec::new(),
            phase: RoundPhase::Presenting,
            completed: vec![false; len],
            score: 0,
            feedback: FeedbackSignal::default(),
            timers: Scheduler::new(),
        }
    }

    // ── Picks and checks ────────────────────────────────────────────

    /// Pick the option tile at `index`.
    pub fn select_option(
        &mut self,
        index: usize,
        effects: &mut dyn EffectPlayer,
    ) -> Result<PickResult, RoundRejection> {
        self.ensure_accepting_picks()?;

        let question = &self.questions[self.current];
        let option_count = question.options().len();
        let slots = question.slots();

        if index >= option_count {
            return Err(RoundRejection::NotAnOption);
        }
        if self.selection.contains(&index) {
            return Err(RoundRejection::AlreadySelected);
        }

        self.selection.push(index);
        if self.selection.len() < slots {
            return Ok(PickResult::Picked {
                remaining: slots - self.selection.len(),
            });
        }

        self.phase = RoundPhase::Evaluating;
        match self.config.selection {
            SelectionMode::SingleChoice => self.evaluate(effects).map(PickResult::Checked),
            SelectionMode::MultiBlank => Ok(PickResult::Ready),
        }
    }

    /// Pick the first unused tile showing `value`.
    pub fn select_candidate(
        &mut self,
        value: &Q::Candidate,
        effects: &mut dyn EffectPlayer,
    ) -> Result<PickResult, RoundRejection> {
        self.ensure_accepting_picks()?;

        let options = self.questions[self.current].options();
        let mut offered = false;
        let mut free = None;
        for (i, option) in options.iter().enumerate() {
            if option == value {
                offered = true;
                if !self.selection.contains(&i) {
                    free = Some(i);
                    break;
                }
            }
        }

        match (offered, free) {
            (_, Some(index)) => self.select_option(index, effects),
            (true, None) => Err(RoundRejection::AlreadySelected),
            (false, None) => Err(RoundRejection::NotAnOption),
        }
    }

    /// Compare the full selection with the expected answer, slot by slot.
    pub fn evaluate(&mut self, effects: &mut dyn EffectPlayer) -> Result<Outcome, RoundRejection> {
        match self.phase {
            RoundPhase::Evaluating => {}
            RoundPhase::Presenting => return Err(RoundRejection::IncompleteSelection),
            RoundPhase::Feedback(_) | RoundPhase::Advancing => {
                return Err(RoundRejection::FeedbackShowing)
            }
            RoundPhase::Finished => return Err(RoundRejection::Finished),
        }

        let question = &self.questions[self.current];
        let picked: Vec<Q::Candidate> = self
            .selection
            .iter()
            .map(|&i| question.options()[i].clone())
            .collect();
        let outcome = Outcome::from_correct(picked == question.expected());

        if outcome.is_correct() && !self.completed[self.current] {
            self.completed[self.current] = true;
            if self.config.scoring {
                self.score += 1;
            }
        }

        tracing::debug!(index = self.current, ?outcome, score = self.score, "answer checked");

        effects.play_effect(outcome);
        self.feedback.show(outcome);
        self.phase = RoundPhase::Feedback(outcome);
        self.timers
            .schedule(self.config.timing.feedback, RoundTask::DismissFeedback);

        Ok(outcome)
    }

    // ── Time ────────────────────────────────────────────────────────

    /// Advance the engine clock and apply any timers that came due.
    pub fn tick(&mut self, elapsed: Duration) -> Vec<RoundEvent> {
        self.timers.advance(elapsed);

        let mut events = Vec::new();
        while let Some((due, task)) = self.timers.pop_due() {
            match task {
                RoundTask::DismissFeedback => {
                    let RoundPhase::Feedback(outcome) = self.phase else {
                        continue;
                    };
                    self.feedback.dismiss();
                    events.push(RoundEvent::FeedbackDismissed(outcome));

                    match outcome {
                        Outcome::Incorrect => {
                            self.selection.clear();
                            self.phase = RoundPhase::Presenting;
                            events.push(RoundEvent::Retry);
                        }
                        Outcome::Correct if self.current + 1 < self.questions.len() => {
                            self.phase = RoundPhase::Advancing;
                            self.timers
                                .schedule_at(due + self.config.timing.advance, RoundTask::Advance);
                        }
                        Outcome::Correct => {
                            self.phase = RoundPhase::Finished;
                            events.push(RoundEvent::Finished);
                        }
                    }
                }
                RoundTask::Advance => {
                    if self.phase != RoundPhase::Advancing {
                        continue;
                    }
                    self.current += 1;
                    self.selection.clear();
                    self.phase = RoundPhase::Presenting;
                    events.push(RoundEvent::Advanced { to: self.current });
                }
            }
        }
        events
    }

    pub fn has_pending_timers(&self) -> bool {
        self.timers.has_pending()
    }

    // ── Navigation ──────────────────────────────────────────────────

    /// Move to the next question. Returns false at the last question and
    /// leaves the round untouched; otherwise selection, feedback, and
    /// pending timers are cleared.
    pub fn go_next(&mut self) -> bool {
        if self.current + 1 >= self.questions.len() {
            return false;
        }
        self.reset_round();
        self.current += 1;
        true
    }

    /// Move to the previous question. Returns false at the first question
    /// and leaves the round untouched.
    pub fn go_previous(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.reset_round();
        self.current -= 1;
        true
    }

    fn reset_round(&mut self) {
        self.timers.cancel_all();
        self.feedback.dismiss();
        self.selection.clear();
        self.phase = RoundPhase::Presenting;
    }

    fn ensure_accepting_picks(&self) -> Result<(), RoundRejection> {
        match self.phase {
            RoundPhase::Presenting => Ok(()),
            RoundPhase::Evaluating => Err(RoundRejection::SelectionFull),
            RoundPhase::Feedback(_) | RoundPhase::Advancing => Err(RoundRejection::FeedbackShowing),
            RoundPhase::Finished => Err(RoundRejection::Finished),
        }
    }

    // ── Read access ─────────────────────────────────────────────────

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn question(&self) -> &Q {
        &self.questions[self.current]
    }

    pub fn questions(&self) -> &QuestionSet<Q> {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Option indices picked so far, in pick order.
    pub fn selected_options(&self) -> &[usize] {
        &self.selection
    }

    /// Values picked so far, in pick order.
    pub fn selection(&self) -> Vec<Q::Candidate> {
        let options = self.question().options();
        self.selection.iter().map(|&i| options[i].clone()).collect()
    }

    pub fn is_option_selected(&self, index: usize) -> bool {
        self.selection.contains(&index)
    }

    /// Outcome of the current round's check, if one is still in effect.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            RoundPhase::Feedback(outcome) => Some(outcome),
            RoundPhase::Advancing | RoundPhase::Finished => Some(Outcome::Correct),
            RoundPhase::Presenting | RoundPhase::Evaluating => None,
        }
    }

    pub fn feedback(&self) -> &FeedbackSignal {
        &self.feedback
    }

    pub fn accepts_picks(&self) -> bool {
        self.phase == RoundPhase::Presenting
    }

    pub fn can_evaluate(&self) -> bool {
        self.phase == RoundPhase::Evaluating
    }

    pub fn is_finished(&self) -> bool {
        self.phase == RoundPhase::Finished
    }

    pub fn completed(&self) -> &[bool] {
        &self.completed
    }

    pub fn is_completed(&self, index: usize) -> bool {
        self.completed.get(index).copied().unwrap_or(false)
    }

    pub fn completed_count(&self) -> usize {
        self.completed.iter().filter(|&&done| done).count()
    }

    pub fn all_completed(&self) -> bool {
        self.completed.iter().all(|&done| done)
    }

    /// Questions credited so far. Always zero when scoring is off.
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn progress(&self) -> Vec<ProgressMark> {
        self.completed
            .iter()
            .enumerate()
            .map(|(i, &done)| {
                if done {
                    ProgressMark::Done
                } else if i == self.current {
                    ProgressMark::Current
                } else {
                    ProgressMark::Pending
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Sum {
        options: Vec<u32>,
        answer: u32,
    }

    impl Question for Sum {
        type Candidate = u32;

        fn options(&self) -> &[u32] {
            &self.options
        }

        fn expected(&self) -> Vec<u32> {
            vec![self.answer]
        }
    }

    #[derive(Debug, Clone)]
    struct Blanks {
        options: Vec<char>,
        expected: Vec<char>,
    }

    impl Question for Blanks {
        type Candidate = char;

        fn options(&self) -> &[char] {
            &self.options
        }

        fn expected(&self) -> Vec<char> {
            self.expected.clone()
        }
    }

    #[derive(Default)]
    struct Recorder(Vec<Outcome>);

    impl EffectPlayer for Recorder {
        fn play_effect(&mut self, outcome: Outcome) {
            self.0.push(outcome);
        }
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn sums(n: u32) -> RoundEngine<Sum> {
        let catalog = (0..n)
            .map(|i| Sum {
                options: vec![i, i + 1, i + 2],
                answer: i + 1,
            })
            .collect();
        RoundEngine::new(
            QuestionSet::in_order(catalog).unwrap(),
            RoundConfig::single_choice(),
        )
    }

    fn blanks() -> RoundEngine<Blanks> {
        let catalog = vec![
            Blanks {
                options: vec!['f', 'a', 'p', 'h'],
                expected: vec!['f', 'h'],
            },
            Blanks {
                options: vec!['p', 'r', 'e', 'a'],
                expected: vec!['r', 'e'],
            },
        ];
        RoundEngine::new(
            QuestionSet::in_order(catalog).unwrap(),
            RoundConfig::multi_blank(),
        )
    }

    #[test]
    fn test_new_engine_state() {
        let engine = sums(3);
        assert_eq!(engine.current_index(), 0);
        assert_eq!(engine.len(), 3);
        assert_eq!(engine.phase(), RoundPhase::Presenting);
        assert_eq!(engine.outcome(), None);
        assert_eq!(engine.completed(), &[false, false, false]);
        assert_eq!(engine.score(), 0);
        assert!(!engine.feedback().is_visible());
        assert!(!engine.has_pending_timers());
    }

    #[test]
    fn test_single_choice_checks_immediately() {
        let mut engine = sums(3);
        let mut sfx = Recorder::default();

        let result = engine.select_candidate(&1, &mut sfx);
        assert_eq!(result, Ok(PickResult::Checked(Outcome::Correct)));
        assert_eq!(engine.phase(), RoundPhase::Feedback(Outcome::Correct));
        assert_eq!(engine.feedback().outcome(), Some(Outcome::Correct));
        assert_eq!(sfx.0, vec![Outcome::Correct]);
        assert!(engine.is_completed(0));
    }

    #[test]
    fn test_correct_answer_advances_after_both_delays() {
        let mut engine = sums(3);
        engine.select_candidate(&1, &mut NoEffects).unwrap();

        assert!(engine.tick(ms(1499)).is_empty());
        assert!(engine.feedback().is_visible());

        let events = engine.tick(ms(1));
        assert_eq!(events, vec![RoundEvent::FeedbackDismissed(Outcome::Correct)]);
        assert!(!engine.feedback().is_visible());
        assert_eq!(engine.phase(), RoundPhase::Advancing);
        assert_eq!(engine.current_index(), 0);
        assert_eq!(engine.selection(), vec![1]);

        assert!(engine.tick(ms(499)).is_empty());
        let events = engine.tick(ms(1));
        assert_eq!(events, vec![RoundEvent::Advanced { to: 1 }]);
        assert_eq!(engine.current_index(), 1);
        assert!(engine.selection().is_empty());
        assert_eq!(engine.outcome(), None);
    }

    #[test]
    fn test_one_large_tick_runs_whole_sequence() {
        let mut engine = sums(3);
        engine.select_candidate(&1, &mut NoEffects).unwrap();
        let events = engine.tick(ms(5000));
        assert_eq!(
            events,
            vec![
                RoundEvent::FeedbackDismissed(Outcome::Correct),
                RoundEvent::Advanced { to: 1 },
            ]
        );
    }

    #[test]
    fn test_incorrect_answer_resets_for_retry() {
        let mut engine = sums(3);
        let mut sfx = Recorder::default();

        let result = engine.select_candidate(&2, &mut sfx);
        assert_eq!(result, Ok(PickResult::Checked(Outcome::Incorrect)));
        assert_eq!(sfx.0, vec![Outcome::Incorrect]);
        assert!(!engine.is_completed(0));

        let events = engine.tick(ms(1500));
        assert_eq!(
            events,
            vec![
                RoundEvent::FeedbackDismissed(Outcome::Incorrect),
                RoundEvent::Retry
            ]
        );
        assert_eq!(engine.current_index(), 0);
        assert!(engine.selection().is_empty());
        assert_eq!(engine.outcome(), None);
        assert!(engine.accepts_picks());
        assert!(!engine.has_pending_timers());
    }

    #[test]
    fn test_picks_rejected_while_feedback_showing() {
        let mut engine = sums(2);
        engine.select_candidate(&2, &mut NoEffects).unwrap();

        assert_eq!(
            engine.select_candidate(&1, &mut NoEffects),
            Err(RoundRejection::FeedbackShowing)
        );
        assert_eq!(engine.selection(), vec![2]);
        assert_eq!(
            engine.evaluate(&mut NoEffects),
            Err(RoundRejection::FeedbackShowing)
        );
    }

    #[test]
    fn test_unknown_value_or_index_rejected() {
        let mut engine = sums(2);
        assert_eq!(
            engine.select_candidate(&99, &mut NoEffects),
            Err(RoundRejection::NotAnOption)
        );
        assert_eq!(
            engine.select_option(3, &mut NoEffects),
            Err(RoundRejection::NotAnOption)
        );
        assert!(engine.selection().is_empty());
    }

    #[test]
    fn test_last_correct_answer_finishes() {
        let mut engine = sums(2);
        engine.go_next();
        engine.select_candidate(&2, &mut NoEffects).unwrap();

        let events = engine.tick(ms(1500));
        assert_eq!(
            events,
            vec![
                RoundEvent::FeedbackDismissed(Outcome::Correct),
                RoundEvent::Finished
            ]
        );
        assert!(engine.is_finished());
        assert_eq!(engine.current_index(), 1);
        assert_eq!(
            engine.select_option(0, &mut NoEffects),
            Err(RoundRejection::Finished)
        );
    }

    #[test]
    fn test_multi_blank_waits_for_explicit_check() {
        let mut engine = blanks();
        let mut sfx = Recorder::default();

        assert_eq!(
            engine.select_candidate(&'f', &mut sfx),
            Ok(PickResult::Picked { remaining: 1 })
        );
        assert_eq!(
            engine.evaluate(&mut sfx),
            Err(RoundRejection::IncompleteSelection)
        );
        assert_eq!(engine.select_candidate(&'h', &mut sfx), Ok(PickResult::Ready));
        assert_eq!(engine.phase(), RoundPhase::Evaluating);
        assert!(sfx.0.is_empty());

        assert_eq!(
            engine.select_candidate(&'a', &mut sfx),
            Err(RoundRejection::SelectionFull)
        );
        assert_eq!(engine.evaluate(&mut sfx), Ok(Outcome::Correct));
        assert_eq!(sfx.0, vec![Outcome::Correct]);
    }

    #[test]
    fn test_multi_blank_positional_mismatch() {
        let mut engine = blanks();
        engine.select_candidate(&'h', &mut NoEffects).unwrap();
        engine.select_candidate(&'f', &mut NoEffects).unwrap();
        assert_eq!(engine.evaluate(&mut NoEffects), Ok(Outcome::Incorrect));
    }

    #[test]
    fn test_tile_consumed_once_per_round() {
        let mut engine = blanks();
        engine.select_option(0, &mut NoEffects).unwrap();
        assert_eq!(
            engine.select_option(0, &mut NoEffects),
            Err(RoundRejection::AlreadySelected)
        );
        assert_eq!(
            engine.select_candidate(&'f', &mut NoEffects),
            Err(RoundRejection::AlreadySelected)
        );
        assert_eq!(engine.selected_options(), &[0]);
    }

    #[test]
    fn test_tile_free_again_after_retry() {
        let mut engine = blanks();
        engine.select_candidate(&'a', &mut NoEffects).unwrap();
        engine.select_candidate(&'h', &mut NoEffects).unwrap();
        assert_eq!(engine.evaluate(&mut NoEffects), Ok(Outcome::Incorrect));
        engine.tick(ms(1500));

        assert!(!engine.is_option_selected(1));
        assert_eq!(
            engine.select_candidate(&'a', &mut NoEffects),
            Ok(PickResult::Picked { remaining: 1 })
        );
    }

    #[test]
    fn test_navigation_clamps_and_clears() {
        let mut engine = sums(3);

        assert!(!engine.go_previous());
        assert_eq!(engine.current_index(), 0);

        assert!(engine.go_next());
        assert!(engine.go_next());
        assert!(!engine.go_next());
        assert_eq!(engine.current_index(), 2);

        engine.select_candidate(&1, &mut NoEffects).unwrap();
        assert!(engine.feedback().is_visible());
        assert!(engine.go_previous());
        assert_eq!(engine.current_index(), 1);
        assert!(engine.selection().is_empty());
        assert_eq!(engine.outcome(), None);
        assert!(!engine.feedback().is_visible());
        assert!(!engine.has_pending_timers());
    }

    #[test]
    fn test_previous_at_first_keeps_pending_advance() {
        let mut engine = sums(3);
        engine.select_candidate(&1, &mut NoEffects).unwrap();
        assert!(engine.feedback().is_visible());

        assert!(!engine.go_previous());
        assert_eq!(engine.outcome(), Some(Outcome::Correct));
        assert!(engine.feedback().is_visible());
        assert!(engine.has_pending_timers());

        engine.tick(ms(5000));
        assert_eq!(engine.current_index(), 1);
        assert!(engine.is_completed(0));
        assert_eq!(engine.phase(), RoundPhase::Presenting);
    }

    #[test]
    fn test_next_at_last_keeps_finished() {
        let mut engine = sums(2);
        engine.go_next();
        engine.select_candidate(&2, &mut NoEffects).unwrap();
        engine.tick(ms(1500));
        assert!(engine.is_finished());

        assert!(!engine.go_next());
        assert!(engine.is_finished());
        assert_eq!(engine.phase(), RoundPhase::Finished);
        assert_eq!(engine.current_index(), 1);
        assert!(engine.is_completed(1));
    }

    #[test]
    fn test_navigation_cancels_pending_advance() {
        let mut engine = sums(3);
        engine.select_candidate(&1, &mut NoEffects).unwrap();
        engine.tick(ms(1500));
        assert_eq!(engine.phase(), RoundPhase::Advancing);

        engine.go_previous();
        assert!(engine.tick(ms(10_000)).is_empty());
        assert_eq!(engine.current_index(), 0);
        assert_eq!(engine.phase(), RoundPhase::Presenting);
    }

    #[test]
    fn test_navigation_leaves_finished_state() {
        let mut engine = sums(2);
        engine.go_next();
        engine.select_candidate(&2, &mut NoEffects).unwrap();
        engine.tick(ms(1500));
        assert!(engine.is_finished());

        assert!(engine.go_previous());
        assert_eq!(engine.phase(), RoundPhase::Presenting);
        assert!(engine.is_completed(1));
    }

    #[test]
    fn test_completed_is_monotonic() {
        let mut engine = sums(2);
        engine.select_candidate(&1, &mut NoEffects).unwrap();
        engine.tick(ms(2000));
        engine.go_previous();

        engine.select_candidate(&0, &mut NoEffects).unwrap();
        engine.tick(ms(1500));
        assert!(engine.is_completed(0));
        engine.go_next();
        engine.go_previous();
        assert!(engine.is_completed(0));
    }

    #[test]
    fn test_scoring_credits_each_question_once() {
        let catalog = vec![
            Sum {
                options: vec![1, 2],
                answer: 1,
            },
            Sum {
                options: vec![3, 4],
                answer: 4,
            },
        ];
        let mut engine = RoundEngine::new(
            QuestionSet::in_order(catalog).unwrap(),
            RoundConfig::single_choice().with_scoring(),
        );

        engine.select_candidate(&1, &mut NoEffects).unwrap();
        assert_eq!(engine.score(), 1);
        engine.tick(ms(2000));
        assert_eq!(engine.current_index(), 1);

        engine.go_previous();
        engine.select_candidate(&1, &mut NoEffects).unwrap();
        assert_eq!(engine.score(), 1);
    }

    #[test]
    fn test_no_score_without_scoring_mode() {
        let mut engine = sums(2);
        engine.select_candidate(&1, &mut NoEffects).unwrap();
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.completed_count(), 1);
    }

    #[test]
    fn test_progress_marks() {
        let mut engine = sums(3);
        engine.select_candidate(&1, &mut NoEffects).unwrap();
        engine.tick(ms(2000));
        assert_eq!(
            engine.progress(),
            vec![
                ProgressMark::Done,
                ProgressMark::Current,
                ProgressMark::Pending
            ]
        );
    }

    #[test]
    fn test_custom_timing() {
        let timing = RoundTiming {
            feedback: ms(100),
            advance: Duration::ZERO,
        };
        let catalog = (0..2)
            .map(|i| Sum {
                options: vec![i],
                answer: i,
            })
            .collect();
        let mut engine = RoundEngine::new(
            QuestionSet::in_order(catalog).unwrap(),
            RoundConfig::single_choice().with_timing(timing),
        );
        engine.select_option(0, &mut NoEffects).unwrap();
        let events = engine.tick(ms(100));
        assert_eq!(events.last(), Some(&RoundEvent::Advanced { to: 1 }));
    }
}
