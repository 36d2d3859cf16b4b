//! Round progression: shuffled question sets, the generic round engine,
//! answer feedback, and the timers that pace them.

pub mod engine;
pub mod feedback;
pub mod question;
pub mod question_set;
pub mod schedule;

pub use engine::{
    EffectPlayer, NoEffects, PickResult, ProgressMark, RoundConfig, RoundEngine, RoundEvent,
    RoundPhase, RoundRejection, RoundTiming, SelectionMode,
};
pub use feedback::{FeedbackSignal, Outcome};
pub use question::{CatalogError, Question};
pub use question_set::QuestionSet;
pub use schedule::Scheduler;
