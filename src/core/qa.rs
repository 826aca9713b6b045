//! Question-answer records

use serde::{Deserialize, Serialize};

/// A single question-answer pair. The question drives clustering,
/// the answer is carried through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaPair {
	pub question: String,
	pub answer: String,
}

impl QaPair {
	pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
		Self {
			question: question.into(),
			answer: answer.into(),
		}
	}
}
