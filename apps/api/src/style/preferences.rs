//! Preference Collector: the fixed style survey and the answers a shopper gives to it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One fixed survey question and the options offered for it.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SurveyQuestion {
    pub id: u32,
    pub question: &'static str,
    pub options: &'static [&'static str],
}

pub const BUDGET_QUESTION: &str = "Your budget range?";

/// The survey, in the order it is asked.
pub const SURVEY: &[SurveyQuestion] = &[
    SurveyQuestion {
        id: 1,
        question: "What's your jewelry style?",
        options: &["Minimal", "Bold", "Traditional", "Modern"],
    },
    SurveyQuestion {
        id: 2,
        question: "What occasion are you shopping for?",
        options: &["Wedding", "Party", "Daily Wear", "Special Gift"],
    },
    SurveyQuestion {
        id: 3,
        question: BUDGET_QUESTION,
        options: &["₹5k–₹15k", "₹15k–₹30k", "₹30k+", "Flexible"],
    },
];

/// A single recorded answer. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceAnswer {
    pub question: String,
    pub answer: String,
}

/// Ordered answers handed from the collector to classification and filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PreferenceSequence(Vec<PreferenceAnswer>);

impl PreferenceSequence {
    pub fn answers(&self) -> &[PreferenceAnswer] {
        &self.0
    }

    /// Answer recorded for `question`, matched on the literal question text.
    pub fn answer_to(&self, question: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|p| p.question == question)
            .map(|p| p.answer.as_str())
    }

    pub fn budget_answer(&self) -> Option<&str> {
        self.answer_to(BUDGET_QUESTION)
    }
}

impl From<Vec<PreferenceAnswer>> for PreferenceSequence {
    fn from(answers: Vec<PreferenceAnswer>) -> Self {
        Self(answers)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SurveyError {
    #[error("question {got} answered out of order; expected question {expected}")]
    OutOfOrder { expected: usize, got: usize },

    #[error("survey has no question at index {0}")]
    UnknownQuestion(usize),

    #[error("expected {expected} answers, got {got}")]
    AnswerCount { expected: usize, got: usize },
}

/// Collects answers one question at a time, strictly in survey order.
#[derive(Debug, Clone)]
pub struct PreferenceCollector {
    questions: &'static [SurveyQuestion],
    answers: Vec<String>,
}

impl Default for PreferenceCollector {
    fn default() -> Self {
        Self::new(SURVEY)
    }
}

impl PreferenceCollector {
    pub fn new(questions: &'static [SurveyQuestion]) -> Self {
        Self {
            questions,
            answers: Vec::with_capacity(questions.len()),
        }
    }

    /// Builds a complete collector from answers given in survey order.
    pub fn from_answers<I, S>(answers: I) -> Result<Self, SurveyError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let answers: Vec<String> = answers.into_iter().map(Into::into).collect();
        let mut collector = Self::default();
        let expected = collector.questions.len();
        if answers.len() != expected {
            return Err(SurveyError::AnswerCount {
                expected,
                got: answers.len(),
            });
        }

        for (index, answer) in answers.into_iter().enumerate() {
            collector.record(index, answer)?;
        }
        Ok(collector)
    }

    /// Records the answer to the question at `index`, which must be the next unanswered one.
    pub fn record(&mut self, index: usize, answer: impl Into<String>) -> Result<(), SurveyError> {
        if index >= self.questions.len() {
            return Err(SurveyError::UnknownQuestion(index));
        }
        let expected = self.answers.len();
        if index != expected {
            return Err(SurveyError::OutOfOrder {
                expected,
                got: index,
            });
        }
        self.answers.push(answer.into());
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.answers.len() == self.questions.len()
    }

    /// The ordered question/answer list, available only once every question is answered.
    pub fn to_sequence(&self) -> Option<PreferenceSequence> {
        if !self.is_complete() {
            return None;
        }
        let answers = self
            .questions
            .iter()
            .zip(&self.answers)
            .map(|(q, a)| PreferenceAnswer {
                question: q.question.to_string(),
                answer: a.clone(),
            })
            .collect();
        Some(PreferenceSequence(answers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_survey_has_three_questions_with_budget_last() {
        assert_eq!(SURVEY.len(), 3);
        assert_eq!(SURVEY[2].question, BUDGET_QUESTION);
        assert!(SURVEY.iter().all(|q| q.options.len() == 4));
    }

    #[test]
    fn test_sequence_unavailable_until_complete() {
        let mut collector = PreferenceCollector::default();
        assert!(collector.to_sequence().is_none());

        collector.record(0, "Bold").unwrap();
        collector.record(1, "Party").unwrap();
        assert!(!collector.is_complete());
        assert!(collector.to_sequence().is_none());

        collector.record(2, "₹30k+").unwrap();
        assert!(collector.is_complete());

        let sequence = collector.to_sequence().unwrap();
        assert_eq!(sequence.answers().len(), SURVEY.len());
        assert_eq!(sequence.answers()[0].question, "What's your jewelry style?");
        assert_eq!(sequence.answers()[0].answer, "Bold");
        assert_eq!(sequence.budget_answer(), Some("₹30k+"));
    }

    #[test]
    fn test_record_rejects_skipped_question() {
        let mut collector = PreferenceCollector::default();
        assert_eq!(
            collector.record(1, "Party"),
            Err(SurveyError::OutOfOrder {
                expected: 0,
                got: 1
            })
        );
    }

    #[test]
    fn test_record_rejects_repeat_and_unknown_index() {
        let mut collector = PreferenceCollector::default();
        collector.record(0, "Minimal").unwrap();
        assert!(matches!(
            collector.record(0, "Bold"),
            Err(SurveyError::OutOfOrder { .. })
        ));
        assert_eq!(
            collector.record(7, "Bold"),
            Err(SurveyError::UnknownQuestion(7))
        );
    }

    #[test]
    fn test_from_answers_requires_every_question() {
        let err = PreferenceCollector::from_answers(["Minimal", "Wedding"]).unwrap_err();
        assert_eq!(
            err,
            SurveyError::AnswerCount {
                expected: 3,
                got: 2
            }
        );

        let collector =
            PreferenceCollector::from_answers(["Minimal", "Wedding", "Flexible"]).unwrap();
        assert!(collector.is_complete());
    }

    #[test]
    fn test_from_answers_rejects_extra_answers() {
        let expected = PreferenceCollector::default().questions.len();
        let err = PreferenceCollector::from_answers(["Bold", "Party", "₹30k+", "Extra"])
            .unwrap_err();
        assert_eq!(
            err,
            SurveyError::AnswerCount {
                expected,
                got: expected + 1
            }
        );
    }

    #[test]
    fn test_sequence_serializes_as_plain_array() {
        let sequence = PreferenceCollector::from_answers(["Modern", "Daily Wear", "Flexible"])
            .unwrap()
            .to_sequence()
            .unwrap();
        let value = serde_json::to_value(&sequence).unwrap();
        assert!(value.is_array());
        assert_eq!(value[1]["answer"], "Daily Wear");
    }

    #[test]
    fn test_budget_answer_absent() {
        let sequence = PreferenceSequence::from(vec![PreferenceAnswer {
            question: "What's your jewelry style?".to_string(),
            answer: "Bold".to_string(),
        }]);
        assert_eq!(sequence.budget_answer(), None);
    }
}
