//! Interactive step-by-step questionnaire

mod command;
mod repl;

pub use command::QuestionnaireCommand;
pub use repl::QuestionnaireRepl;
