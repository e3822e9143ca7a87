use once_cell::sync::Lazy;
use serde::Deserialize;

mod answer;
mod bulk;
mod rating;
mod request;
mod scoring;

pub use answer::AnswerStore;
pub use bulk::read_bulk;
pub use rating::RiskRating;
pub use request::{
    calculate_risk, calculate_risk_json, get_questions, get_questions_json, AnswerView,
    CalculateRiskRequest, CalculateRiskResponse, HandlerError, QuestionView,
};
pub use scoring::{
    question_score, risk_score, risk_score_raw, Identifier, QuestionScore, RawResponse, Response,
    ScoringPolicy,
};

/// 設問数
pub const QUESTION_COUNT: usize = 13;

pub static QUESTIONS: Lazy<QuestionBank> = Lazy::new(|| {
    QuestionBank::from_json(include_str!("../resources/questions.json"))
        .expect("bundled question bank is valid")
});

#[derive(Debug, Clone, Deserialize)]
pub struct Answer {
    pub id: u8,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Question {
    pub id: u8,
    pub text: String,
    pub answers: Vec<Answer>,
}

impl Question {
    pub fn answer(&self, id: u8) -> Option<&Answer> {
        self.answers.iter().find(|answer| answer.id == id)
    }

    /// 回答番号がこの設問の選択肢に含まれるか
    pub fn accepts(&self, response_id: u8) -> bool {
        self.answer(response_id).is_some()
    }
}

/// リスク許容度調査13設問のマスタ表現
///
/// 設問10のみ選択肢は3つ、それ以外は5つ。
#[derive(Debug, Deserialize)]
pub struct QuestionBank {
    /// 調査票名 (5risk)
    pub questionnaire: String,
    pub questions: Vec<Question>,
}

impl QuestionBank {
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// 設問番号を指定して設問を取得する
    pub fn question(&self, id: u8) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// 回答なし
    #[error("no responses provided")]
    EmptyInput,
    #[error("{field} is not an integer: {value:?}")]
    MalformedResponse { field: &'static str, value: String },
    /// 13設問ではない
    #[error("question is not part of the questionnaire")]
    IllegalQuestion,
    /// 回答選択肢が違反
    #[error("answer is not one of the offered options")]
    IllegalAnswer,
    /// 回答欠落
    #[error("questionnaire is not fully answered")]
    NotFullfilled,
    #[error("risk rating {0} is outside 1..=5")]
    IllegalRating(i64),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
