//! Level 4: memory quiz that irons out the shirt
//!
//! Four questions, one visible at a time. An answer is final and the quiz
//! always moves on; three correct answers out of four pass.

use serde::{Deserialize, Serialize};

use crate::error::GameError;

#[derive(Debug)]
pub struct Question {
    pub prompt: &'static str,
    pub options: [&'static str; 4],
    /// 0-based index into `options`
    pub correct: usize,
}

pub static QUESTIONS: [Question; 4] = [
    Question {
        prompt: "我们第一次约会是在哪里？",
        options: ["咖啡厅", "电影院", "公园", "餐厅"],
        correct: 1,
    },
    Question {
        prompt: "我最喜欢的食物是什么？",
        options: ["火锅", "寿司", "意大利面", "披萨"],
        correct: 0,
    },
    Question {
        prompt: "我们的结婚纪念日是几月几号？",
        options: ["5月20日", "6月18日", "7月7日", "8月8日"],
        correct: 2,
    },
    Question {
        prompt: "我们共同养的宠物叫什么名字？",
        options: ["豆豆", "奇奇", "球球", "毛毛"],
        correct: 3,
    },
];

/// Correct answers needed to pass
pub const PASS_MARK: usize = 3;

/// Count answers matching the key, position by position
pub fn score(answers: &[usize], key: &[usize]) -> usize {
    answers
        .iter()
        .zip(key)
        .filter(|(answer, correct)| answer == correct)
        .count()
}

/// Win predicate over a complete answer sheet
pub fn passes(answers: &[usize]) -> bool {
    let key: Vec<usize> = QUESTIONS.iter().map(|q| q.correct).collect();
    answers.len() == key.len() && score(answers, &key) >= PASS_MARK
}

/// Result of answering the visible question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    /// This was the last question
    pub finished: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawQuiz")]
pub struct Quiz {
    /// Answers in question order
    answers: Vec<usize>,
    /// Index of the visible question
    current: usize,
}

#[derive(Deserialize)]
struct RawQuiz {
    answers: Vec<usize>,
    current: usize,
}

impl TryFrom<RawQuiz> for Quiz {
    type Error = GameError;

    fn try_from(raw: RawQuiz) -> Result<Self, Self::Error> {
        if raw.current >= QUESTIONS.len() {
            return Err(GameError::InvalidSnapshot(
                "question index past the last question",
            ));
        }
        // Every question before the visible one is answered; the visible one may be
        if raw.answers.len() < raw.current || raw.answers.len() > raw.current + 1 {
            return Err(GameError::InvalidSnapshot(
                "answers out of step with the visible question",
            ));
        }
        if let Some(&index) = raw.answers.iter().find(|&&a| a >= QUESTIONS[0].options.len()) {
            return Err(GameError::OptionOutOfRange {
                index,
                len: QUESTIONS[0].options.len(),
            });
        }
        Ok(Self {
            answers: raw.answers,
            current: raw.current,
        })
    }
}

impl Quiz {
    pub fn new() -> Self {
        Self::default()
    }

    /// Question on screen, `None` once every question is answered
    pub fn current_question(&self) -> Option<&'static Question> {
        if self.is_finished() {
            None
        } else {
            QUESTIONS.get(self.current)
        }
    }

    /// 0-based index of the visible question
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Option picked for the visible question, if any
    pub fn pending_answer(&self) -> Option<usize> {
        self.answers.get(self.current).copied()
    }

    fn awaiting_advance(&self) -> bool {
        self.answers.len() > self.current
    }

    /// Answer the visible question. Answers cannot be changed.
    pub fn answer(&mut self, index: usize) -> Result<AnswerOutcome, GameError> {
        if self.is_finished() {
            return Err(GameError::PuzzleFinished);
        }
        if self.awaiting_advance() {
            return Err(GameError::Locked);
        }
        let question = &QUESTIONS[self.current];
        if index >= question.options.len() {
            return Err(GameError::OptionOutOfRange {
                index,
                len: question.options.len(),
            });
        }
        self.answers.push(index);
        Ok(AnswerOutcome {
            correct: index == question.correct,
            finished: self.is_finished(),
        })
    }

    /// Show the next question after an answer. Returns its index.
    pub fn advance(&mut self) -> Option<usize> {
        if self.awaiting_advance() && self.current + 1 < QUESTIONS.len() {
            self.current += 1;
            Some(self.current)
        } else {
            None
        }
    }

    pub fn answers(&self) -> &[usize] {
        &self.answers
    }

    pub fn correct_count(&self) -> usize {
        self.answers
            .iter()
            .zip(QUESTIONS.iter())
            .filter(|(answer, q)| **answer == q.correct)
            .count()
    }

    /// How far the shirt is ironed, in [0, 1]
    pub fn ironing_progress(&self) -> f32 {
        self.correct_count() as f32 / QUESTIONS.len() as f32
    }

    pub fn is_finished(&self) -> bool {
        self.answers.len() == QUESTIONS.len()
    }

    /// Finished with too few correct answers; only a restart helps
    pub fn is_failed(&self) -> bool {
        self.is_finished() && !self.is_solved()
    }

    pub fn is_solved(&self) -> bool {
        passes(&self.answers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(answers: &[usize]) -> Quiz {
        let mut quiz = Quiz::new();
        for &a in answers {
            quiz.answer(a).unwrap();
            quiz.advance();
        }
        quiz
    }

    #[test]
    fn test_all_correct_passes() {
        let quiz = play(&[1, 0, 2, 3]);
        assert_eq!(quiz.correct_count(), 4);
        assert!(quiz.is_solved());
        assert_eq!(quiz.ironing_progress(), 1.0);
    }

    #[test]
    fn test_one_wrong_passes() {
        let quiz = play(&[1, 0, 2, 1]);
        assert_eq!(quiz.correct_count(), 3);
        assert!(quiz.is_solved());
    }

    #[test]
    fn test_two_wrong_fails() {
        let quiz = play(&[0, 0, 2, 1]);
        assert_eq!(quiz.correct_count(), 2);
        assert!(!quiz.is_solved());
        assert!(quiz.is_failed());
        assert!(matches!(quiz.clone().answer(0), Err(GameError::PuzzleFinished)));
    }

    #[test]
    fn test_pure_predicate() {
        assert!(passes(&[1, 0, 2, 3]));
        assert!(passes(&[1, 0, 2, 1]));
        assert!(!passes(&[0, 0, 2, 1]));
        // Incomplete sheets never pass
        assert!(!passes(&[1, 0, 2]));
        assert_eq!(score(&[1, 0, 2, 3], &[1, 0, 2, 3]), 4);
    }

    #[test]
    fn test_answer_is_final_until_advance() {
        let mut quiz = Quiz::new();
        let outcome = quiz.answer(0).unwrap();
        assert!(!outcome.correct);
        assert!(!outcome.finished);
        assert_eq!(quiz.pending_answer(), Some(0));
        assert!(matches!(quiz.answer(1), Err(GameError::Locked)));
        assert_eq!(quiz.advance(), Some(1));
        assert_eq!(quiz.current_index(), 1);
        assert_eq!(quiz.pending_answer(), None);
        // No double advance without an answer
        assert_eq!(quiz.advance(), None);
    }

    #[test]
    fn test_last_answer_finishes() {
        let mut quiz = play(&[1, 0, 2]);
        assert_eq!(quiz.current_question().map(|q| q.correct), Some(3));
        let outcome = quiz.answer(3).unwrap();
        assert!(outcome.finished);
        assert!(quiz.current_question().is_none());
        assert_eq!(quiz.advance(), None);
    }

    #[test]
    fn test_out_of_range_option() {
        let mut quiz = Quiz::new();
        assert!(matches!(
            quiz.answer(4),
            Err(GameError::OptionOutOfRange { index: 4, len: 4 })
        ));
        assert!(quiz.answers().is_empty());
    }

    #[test]
    fn test_restore_checks_sheet() {
        let mut quiz: Quiz = serde_json::from_str(r#"{"answers":[1,0],"current":1}"#).unwrap();
        assert!(matches!(quiz.answer(2), Err(GameError::Locked)));
        assert_eq!(quiz.advance(), Some(2));
        assert!(quiz.answer(2).unwrap().correct);

        for bad in [
            r#"{"answers":[],"current":9}"#,
            r#"{"answers":[1,0,2],"current":0}"#,
            r#"{"answers":[],"current":2}"#,
            r#"{"answers":[7],"current":0}"#,
        ] {
            assert!(serde_json::from_str::<Quiz>(bad).is_err(), "{} loaded", bad);
        }
    }
}
