//! Knowledge-check quiz: static question bank and scoring engine

/// One multiple-choice question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub text: &'static str,
    pub options: &'static [&'static str],
    pub answer_index: usize,
    pub explanation: &'static str,
}

/// The fixed, ordered question bank
pub fn question_bank() -> &'static [Question] {
    &[
        Question {
            text: "Which algorithm ensures a specific user consistently connects to the same backend server?",
            options: &[
                "Round Robin",
                "Least Connections",
                "IP Hash",
                "Weighted Random",
            ],
            answer_index: 2,
            explanation: "IP Hash uses the client's IP address to map them to a specific server, ensuring 'Session Persistence'.",
        },
        Question {
            text: "What is the primary purpose of a 'Health Check' in a Load Balancer?",
            options: &[
                "To check server CPU temperature",
                "To ensure the server is still alive and handling requests",
                "To measure network speed",
                "To update the server software",
            ],
            answer_index: 1,
            explanation: "Health checks (heartbeats) tell the LB if a server is functional. If it fails, the LB stops sending it traffic.",
        },
        Question {
            text: "True or False: A Layer 4 Load Balancer can route traffic based on the HTTP URL path (e.g. /images).",
            options: &["True", "False"],
            answer_index: 1,
            explanation: "False. Layer 4 only sees IP and Port. Inspecting URL paths requires a Layer 7 (Application) Load Balancer.",
        },
    ]
}

/// Where the quiz currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    /// Waiting for an answer to the current question
    Answering,
    /// Answer locked in; showing the explanation
    Revealed,
    /// All questions answered
    Finished,
}

/// Quiz progress and scoring over the static bank
#[derive(Debug, Clone)]
pub struct QuizEngine {
    questions: &'static [Question],
    current: usize,
    selected: Option<usize>,
    score: usize,
    finished: bool,
}

impl QuizEngine {
    pub fn new() -> Self {
        Self {
            questions: question_bank(),
            current: 0,
            selected: None,
            score: 0,
            finished: false,
        }
    }

    pub fn phase(&self) -> QuizPhase {
        if self.finished {
            QuizPhase::Finished
        } else if self.selected.is_some() {
            QuizPhase::Revealed
        } else {
            QuizPhase::Answering
        }
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.current]
    }

    /// 0-based index of the current question
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Lock in an answer for the current question. Re-answering a revealed
    /// question or answering out of range is a no-op.
    pub fn answer(&mut self, option: usize) {
        if self.finished || self.selected.is_some() {
            return;
        }
        if option >= self.current_question().options.len() {
            return;
        }
        self.selected = Some(option);
        if option == self.current_question().answer_index {
            self.score += 1;
        }
    }

    /// Advance to the next question, or finish after the last one. Does
    /// nothing until the current answer is revealed.
    pub fn next(&mut self) {
        if self.finished || self.selected.is_none() {
            return;
        }
        if self.current + 1 < self.questions.len() {
            self.current += 1;
            self.selected = None;
        } else {
            self.finished = true;
        }
    }

    /// Start over from the first question with a zero score
    pub fn restart(&mut self) {
        *self = Self::new();
    }
}

impl Default for QuizEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_is_well_formed() {
        for question in question_bank() {
            assert!(question.options.len() >= 2);
            assert!(question.answer_index < question.options.len());
            assert!(!question.explanation.is_empty());
        }
    }

    #[test]
    fn test_correct_answer_scores() {
        let mut quiz = QuizEngine::new();
        quiz.answer(2); // IP Hash
        assert_eq!(quiz.score(), 1);
        assert_eq!(quiz.phase(), QuizPhase::Revealed);
    }

    #[test]
    fn test_wrong_answer_does_not_score() {
        let mut quiz = QuizEngine::new();
        quiz.answer(0);
        assert_eq!(quiz.score(), 0);
        assert_eq!(quiz.phase(), QuizPhase::Revealed);
    }

    #[test]
    fn test_reanswer_is_locked_out() {
        let mut quiz = QuizEngine::new();
        quiz.answer(0);
        quiz.answer(2);
        assert_eq!(quiz.score(), 0);
        assert_eq!(quiz.selected(), Some(0));
    }

    #[test]
    fn test_next_requires_revealed_answer() {
        let mut quiz = QuizEngine::new();
        quiz.next();
        assert_eq!(quiz.current_index(), 0);

        quiz.answer(2);
        quiz.next();
        assert_eq!(quiz.current_index(), 1);
        assert_eq!(quiz.phase(), QuizPhase::Answering);
    }

    #[test]
    fn test_full_run_finishes_with_perfect_score() {
        let mut quiz = QuizEngine::new();
        for question in question_bank() {
            quiz.answer(question.answer_index);
            quiz.next();
        }
        assert_eq!(quiz.phase(), QuizPhase::Finished);
        assert_eq!(quiz.score(), question_bank().len());
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut quiz = QuizEngine::new();
        quiz.answer(2);
        quiz.next();
        quiz.restart();

        assert_eq!(quiz.current_index(), 0);
        assert_eq!(quiz.score(), 0);
        assert_eq!(quiz.phase(), QuizPhase::Answering);
    }

    #[test]
    fn test_out_of_range_answer_is_ignored() {
        let mut quiz = QuizEngine::new();
        quiz.answer(99);
        assert_eq!(quiz.phase(), QuizPhase::Answering);
    }
}
