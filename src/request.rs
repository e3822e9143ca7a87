//! 画面・APIからのリクエストの処理 (設問一覧、リスク評価)
//!
//! 失敗は原因をログに残し、利用者には汎用メッセージのみ返す。

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::{risk_score_raw, Answer, Question, RawResponse, QUESTIONS};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CalculateRiskRequest {
    pub responses: Vec<RawResponse>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct CalculateRiskResponse {
    pub rating: u8,
}

/// 画面へ返す選択肢。IDは文字列
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AnswerView {
    pub id: String,
    pub text: String,
}

/// 画面へ返す設問。IDは文字列
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionView {
    pub id: String,
    pub text: String,
    pub answers: Vec<AnswerView>,
}

impl From<&Answer> for AnswerView {
    fn from(answer: &Answer) -> Self {
        AnswerView {
            id: answer.id.to_string(),
            text: answer.text.clone(),
        }
    }
}

impl From<&Question> for QuestionView {
    fn from(question: &Question) -> Self {
        QuestionView {
            id: question.id.to_string(),
            text: question.text.clone(),
            answers: question.answers.iter().map(AnswerView::from).collect(),
        }
    }
}

/// 利用者向けのエラー。詳細はログのみ。
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum HandlerError {
    #[error("Unable to retrieve questions. Please try again later.")]
    GetQuestions,
    #[error("Unable to calculate risk rating. Please try again later.")]
    CalculateRisk,
}

/// 設問一覧
pub fn get_questions() -> Vec<QuestionView> {
    QUESTIONS.questions().iter().map(QuestionView::from).collect()
}

pub fn get_questions_json() -> Result<String, HandlerError> {
    serde_json::to_string(&get_questions()).map_err(|e| {
        error!(error = %e, "error fetching questions");
        HandlerError::GetQuestions
    })
}

pub fn calculate_risk(
    request: &CalculateRiskRequest,
) -> Result<CalculateRiskResponse, HandlerError> {
    match risk_score_raw(&request.responses) {
        Ok(rating) => {
            info!(responses = request.responses.len(), rating, "calculated risk rating");
            Ok(CalculateRiskResponse { rating })
        }
        Err(e) => {
            error!(error = %e, "error calculating risk");
            Err(HandlerError::CalculateRisk)
        }
    }
}

/// JSON文字列のリクエストを処理し、JSON文字列で応答する
pub fn calculate_risk_json(body: &str) -> Result<String, HandlerError> {
    let request: CalculateRiskRequest = serde_json::from_str(body).map_err(|e| {
        error!(error = %e, "malformed risk request");
        HandlerError::CalculateRisk
    })?;
    let response = calculate_risk(&request)?;
    serde_json::to_string(&response).map_err(|e| {
        error!(error = %e, "failed to encode risk response");
        HandlerError::CalculateRisk
    })
}
