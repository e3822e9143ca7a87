use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::Error;

/// 未知の設問・対応表にない回答に与える中立点
const NEUTRAL_SCORE: u8 = 3;

/// 設問番号・回答番号の受け入れ表現
///
/// 数値でも、整数を表す文字列 (`"7"`) でもよい。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    Number(i64),
    Text(String),
}

impl Identifier {
    fn parse(&self, field: &'static str) -> Result<i64, Error> {
        match self {
            Identifier::Number(value) => Ok(*value),
            Identifier::Text(text) => {
                text.trim()
                    .parse::<i64>()
                    .map_err(|_| Error::MalformedResponse {
                        field,
                        value: text.clone(),
                    })
            }
        }
    }
}

impl From<i64> for Identifier {
    fn from(value: i64) -> Self {
        Identifier::Number(value)
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Identifier::Text(value.to_owned())
    }
}

/// 受信したままの回答
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawResponse {
    pub question_id: Identifier,
    pub response_id: Identifier,
}

impl RawResponse {
    pub fn new(question_id: impl Into<Identifier>, response_id: impl Into<Identifier>) -> Self {
        Self {
            question_id: question_id.into(),
            response_id: response_id.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub question_id: i64,
    pub response_id: i64,
}

impl Response {
    pub fn new(question_id: i64, response_id: i64) -> Self {
        Self {
            question_id,
            response_id,
        }
    }
}

impl TryFrom<&RawResponse> for Response {
    type Error = Error;

    fn try_from(raw: &RawResponse) -> Result<Self, Self::Error> {
        Ok(Response {
            question_id: raw.question_id.parse("questionId")?,
            response_id: raw.response_id.parse("responseId")?,
        })
    }
}

/// 設問ごとの採点方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringPolicy {
    /// 選択肢1がもっともリスク許容度が高い。1⇒5 … 5⇒1
    Forward,
    /// 選択肢1がもっともリスク許容度が低い。1⇒1 … 5⇒5
    Reverse,
    /// 設問10の3択。1⇒1、2⇒5、3⇒3
    ThreeOption,
    Unknown,
}

impl ScoringPolicy {
    pub fn for_question(question_id: i64) -> Self {
        match question_id {
            1..=4 | 6..=8 | 12 => ScoringPolicy::Forward,
            5 | 9 | 11 | 13 => ScoringPolicy::Reverse,
            10 => ScoringPolicy::ThreeOption,
            _ => ScoringPolicy::Unknown,
        }
    }

    /// 対応表にない回答番号は `None`
    pub fn score(self, response_id: i64) -> Option<u8> {
        match (self, response_id) {
            (ScoringPolicy::Forward, id @ 1..=5) => Some(6 - id as u8),
            (ScoringPolicy::Reverse, id @ 1..=5) => Some(id as u8),
            (ScoringPolicy::ThreeOption, 1) => Some(1),
            (ScoringPolicy::ThreeOption, 2) => Some(5),
            (ScoringPolicy::ThreeOption, 3) => Some(3),
            _ => None,
        }
    }
}

/// 1設問の採点結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionScore {
    Scored(u8),
    /// 未知の設問。中立点で採点する
    UnknownQuestion,
    /// 既知の設問だが対応表にない回答番号。中立点で採点し、警告を残す
    UnmappedResponse,
}

impl QuestionScore {
    pub fn of(response: &Response) -> Self {
        let policy = ScoringPolicy::for_question(response.question_id);
        match policy.score(response.response_id) {
            Some(score) => QuestionScore::Scored(score),
            None if policy == ScoringPolicy::Unknown => QuestionScore::UnknownQuestion,
            None => QuestionScore::UnmappedResponse,
        }
    }

    pub fn value(self) -> u8 {
        match self {
            QuestionScore::Scored(score) => score,
            QuestionScore::UnknownQuestion | QuestionScore::UnmappedResponse => NEUTRAL_SCORE,
        }
    }
}

/// 1設問の点数。常に1〜5に収まる。
pub fn question_score(response: &Response) -> u8 {
    let score = QuestionScore::of(response);
    match score {
        QuestionScore::Scored(_) => {}
        QuestionScore::UnknownQuestion => {
            debug!(
                question_id = response.question_id,
                "unknown question, scoring as neutral"
            );
        }
        QuestionScore::UnmappedResponse => {
            warn!(
                question_id = response.question_id,
                response_id = response.response_id,
                "response is not an option of this question, scoring as neutral"
            );
        }
    }
    score.value()
}

/// リスク評価 (1〜5) を算出する
///
/// 各回答を設問ごとの方式で採点し、平均を四捨五入して1〜5に丸める。
/// 同じ設問が重複していてもそれぞれ採点され、平均に寄与する。
pub fn risk_score(responses: &[Response]) -> Result<u8, Error> {
    if responses.is_empty() {
        return Err(Error::EmptyInput);
    }
    let total: u64 = responses
        .iter()
        .map(|response| u64::from(question_score(response)))
        .sum();
    let average = total as f64 / responses.len() as f64;
    // f64::round は0.5を0から遠い方へ丸める
    let rating = average.round().clamp(1.0, 5.0) as u8;
    debug!(total, count = responses.len(), average, rating, "risk score");
    Ok(rating)
}

/// 識別子を整数に変換してから採点する
pub fn risk_score_raw(responses: &[RawResponse]) -> Result<u8, Error> {
    let responses = responses
        .iter()
        .map(Response::try_from)
        .collect::<Result<Vec<Response>, Error>>()?;
    risk_score(&responses)
}
