//! REPL (Read-Eval-Print Loop) for the step-by-step questionnaire

use super::command::QuestionnaireCommand;
use colored::Colorize;
use maturity_application::{AssessmentSession, GenerateReportUseCase, SessionError};
use maturity_domain::{
    MAX_RATING, MIN_RATING, Question, Report, UNANSWERED, rating_label, sample_answers,
};
use reedline::{DefaultPrompt, DefaultPromptSegment, Reedline, Signal};

/// What the loop should do after handling one command
#[derive(Debug)]
enum Flow {
    Continue,
    Quit,
    Submitted(Report),
}

/// Interactive questionnaire over an [`AssessmentSession`]
pub struct QuestionnaireRepl {
    session: AssessmentSession,
    report: GenerateReportUseCase,
}

impl QuestionnaireRepl {
    pub fn new(session: AssessmentSession, report: GenerateReportUseCase) -> Self {
        Self { session, report }
    }

    /// Run until the assessment is submitted or the user quits
    ///
    /// Returns the report on submission, `None` when the user leaves early
    /// (answers stay saved for the next run).
    pub fn run(&mut self) -> std::io::Result<Option<Report>> {
        let mut editor = Reedline::create();

        self.print_welcome();
        self.print_step();

        loop {
            match self.pending_question() {
                Some((index, question)) => println!(
                    "{} {}",
                    format!("Q{}.", index + 1).cyan().bold(),
                    question.text()
                ),
                None if self.session.can_submit() => println!(
                    "{}",
                    "All questions answered. Type /submit to see your report.".green()
                ),
                None => {}
            }

            let prompt = DefaultPrompt::new(
                DefaultPromptSegment::Basic(self.prompt_label()),
                DefaultPromptSegment::Empty,
            );

            match editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    match self.handle(QuestionnaireCommand::parse(line)) {
                        Flow::Continue => {}
                        Flow::Quit => return Ok(None),
                        Flow::Submitted(report) => return Ok(Some(report)),
                    }
                }
                Signal::CtrlC => {
                    println!("^C");
                    continue;
                }
                Signal::CtrlD => {
                    println!("Answers saved. Bye!");
                    return Ok(None);
                }
                #[allow(unreachable_patterns)]
                _ => continue,
            }
        }
    }

    fn prompt_label(&self) -> String {
        format!(
            "[{}/{}] {} ({}-{})",
            self.session.current_step() + 1,
            self.session.catalog().len(),
            self.session.current_category().short_title,
            MIN_RATING,
            MAX_RATING
        )
    }

    /// First unanswered question of the current step
    fn pending_question(&self) -> Option<(usize, &Question)> {
        let answers = self.session.answers();
        self.session
            .current_category()
            .questions
            .iter()
            .enumerate()
            .find(|(_, q)| answers.get(q.id()) == UNANSWERED)
    }

    fn handle(&mut self, command: QuestionnaireCommand) -> Flow {
        match command {
            QuestionnaireCommand::Rate(rating) => match self.pending_question() {
                Some((_, question)) => {
                    let id = question.id().to_string();
                    self.answer(&id, rating);
                }
                None => println!("No unanswered question in this step. Use /set <n> <rating>."),
            },
            QuestionnaireCommand::Set { index, rating } => {
                let id = self
                    .session
                    .current_category()
                    .questions
                    .get(index - 1)
                    .map(|q| q.id().to_string());
                match id {
                    Some(id) => self.answer(&id, rating),
                    None => println!("No question {} in this step.", index),
                }
            }
            QuestionnaireCommand::Next => match self.session.next() {
                Ok(_) => self.print_step(),
                Err(e) => println!("{}", e.to_string().yellow()),
            },
            QuestionnaireCommand::Prev => {
                self.session.prev();
                self.print_step();
            }
            QuestionnaireCommand::Show => self.print_step(),
            QuestionnaireCommand::Submit => match self.session.submit(&self.report) {
                Ok(report) => return Flow::Submitted(report),
                Err(e) => println!("{}", e.to_string().yellow()),
            },
            QuestionnaireCommand::Sample => {
                self.session.load_answers(sample_answers());
                println!("Sample answers loaded. Type /submit to see the sample report.");
                self.print_step();
            }
            QuestionnaireCommand::Reset => {
                self.session.abandon();
                println!("All answers cleared.");
                self.print_step();
            }
            QuestionnaireCommand::Help => Self::print_help(),
            QuestionnaireCommand::Quit => {
                println!("Answers saved. Bye!");
                return Flow::Quit;
            }
            QuestionnaireCommand::Unknown(input) => {
                println!("Unknown input: {}", input);
                println!("Enter a rating {}-{} or type /help", MIN_RATING, MAX_RATING);
            }
        }
        Flow::Continue
    }

    /// Record an answer and move on once the step is complete
    fn answer(&mut self, question_id: &str, rating: u8) {
        if let Err(e) = self.session.answer(question_id, rating) {
            println!("{}", e.to_string().red());
            return;
        }
        if self.session.step_status().is_complete && !self.session.is_last_step() {
            match self.session.next() {
                Ok(_) => self.print_step(),
                Err(SessionError::AtLastStep) => {}
                Err(e) => println!("{}", e.to_string().yellow()),
            }
        }
    }

    fn print_welcome(&self) {
        let overall = self.session.overall_status();
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│        AI 네이티브 조직 진단 (Self-Check)   │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!(
            "{} questions in {} categories. Rate each from {} to {}:",
            overall.total,
            self.session.catalog().len(),
            MIN_RATING,
            MAX_RATING
        );
        for rating in MIN_RATING..=MAX_RATING {
            println!("  {} = {}", rating, rating_label(rating).unwrap_or_default());
        }
        if overall.answered > 0 {
            println!();
            println!(
                "{}",
                format!(
                    "Resuming: {}/{} answered.",
                    overall.answered, overall.total
                )
                .green()
            );
        }
        println!();
        println!("Type /help for commands.");
    }

    fn print_help() {
        println!();
        println!("Commands:");
        println!("  <1-5>            - Answer the current question");
        println!("  /set <n> <0-5>   - Change answer n of this step (0 clears it)");
        println!("  /next, /n        - Go to the next step");
        println!("  /prev, /p        - Go to the previous step");
        println!("  /show, /s        - Show this step's questions and answers");
        println!("  /submit          - Finish and show the report");
        println!("  /sample          - Fill in the sample answers");
        println!("  /reset           - Clear all answers");
        println!("  /quit, /q        - Leave (answers are kept)");
        println!();
    }

    fn print_step(&self) {
        let category = self.session.current_category();
        let answers = self.session.answers();
        let status = self.session.step_status();

        // Step indicator: ✓ complete, ▶ current
        let indicator: Vec<String> = self
            .session
            .catalog()
            .categories()
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let done = maturity_domain::completion_status(c, answers).is_complete;
                if i == self.session.current_step() {
                    format!("▶ {}", c.short_title).cyan().bold().to_string()
                } else if done {
                    format!("✓ {}", c.short_title).green().to_string()
                } else {
                    c.short_title.dimmed().to_string()
                }
            })
            .collect();

        println!();
        println!("{}", indicator.join("  "));
        println!(
            "{} ({}/{} answered)",
            category.title.bold(),
            status.answered,
            status.total
        );
        for (i, question) in category.questions.iter().enumerate() {
            let rating = answers.get(question.id());
            let answer = match rating_label(rating) {
                Some(label) => format!("[{} {}]", rating, label).green().to_string(),
                None => "[ ]".dimmed().to_string(),
            };
            println!("  {:>2}. {} {}", i + 1, answer, question.text());
        }
        println!();
    }
}
