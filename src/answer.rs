use crate::{risk_score, Error, Response, RiskRating, QUESTIONS, QUESTION_COUNT};

/// 1回分の回答
///
/// 0 は未回答を表す。
#[derive(Debug, Clone, Default)]
pub struct AnswerStore {
    values: [u8; QUESTION_COUNT],
    offset: usize,
}

impl AnswerStore {
    /// 次の設問への回答を格納する
    /// 設問の選択肢にない回答番号は認めない。
    pub fn push(&mut self, response_id: u8) -> Result<(), Error> {
        if self.offset >= QUESTION_COUNT {
            return Err(Error::IllegalQuestion);
        }
        let question = QUESTIONS.get(self.offset).ok_or(Error::IllegalQuestion)?;
        if !question.accepts(response_id) {
            return Err(Error::IllegalAnswer);
        }
        self.values[self.offset] = response_id;
        self.offset = self.next_unanswered(self.offset + 1);
        Ok(())
    }

    /// 設問番号を指定して回答を格納する
    pub fn insert(&mut self, question_id: u8, response_id: u8) -> Result<(), Error> {
        let question = QUESTIONS
            .question(question_id)
            .ok_or(Error::IllegalQuestion)?;
        if !question.accepts(response_id) {
            return Err(Error::IllegalAnswer);
        }
        let offset = usize::from(question_id - 1);
        self.values[offset] = response_id;
        if offset == self.offset {
            self.offset = self.next_unanswered(offset);
        }
        Ok(())
    }

    fn next_unanswered(&self, from: usize) -> usize {
        (from..QUESTION_COUNT)
            .find(|&offset| self.values[offset] == 0)
            .unwrap_or(QUESTION_COUNT)
    }

    /// 回答済みの設問を設問番号順に返す
    pub fn responses(&self) -> Vec<Response> {
        self.values
            .iter()
            .enumerate()
            .filter(|&(_, &value)| value != 0)
            .map(|(index, &value)| Response::new(index as i64 + 1, value.into()))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.values.iter().all(|&value| value != 0)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn to_rating(&self) -> Result<RiskRating, Error> {
        if !self.is_complete() {
            return Err(Error::NotFullfilled);
        }
        RiskRating::try_from(risk_score(&self.responses())?)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_answer_store_low() {
        let mut store = AnswerStore::default();
        for response_id in [5, 5, 5, 5, 1, 5, 5, 5, 1, 1, 1, 5, 1] {
            assert!(store.push(response_id).is_ok());
        }
        assert!(store.is_complete());
        assert_eq!(store.to_rating().unwrap(), RiskRating::LOWEST);
    }

    #[test]
    fn test_answer_store_high() {
        let mut store = AnswerStore::default();
        for response_id in [1, 1, 1, 1, 5, 1, 1, 1, 5, 2, 5, 1, 5] {
            assert!(store.push(response_id).is_ok());
        }
        assert_eq!(store.to_rating().unwrap(), RiskRating::HIGHEST);
    }

    #[test]
    fn test_answer_not_fullfilled() {
        let mut store = AnswerStore::default();
        for _ in 0..12 {
            assert!(store.push(1).is_ok());
        }
        assert!(!store.is_complete());
        assert!(matches!(store.to_rating(), Err(Error::NotFullfilled)));
        assert_eq!(store.responses().len(), 12);
    }

    #[test]
    fn test_answer_exceeded() {
        let mut store = AnswerStore::default();
        for _ in 0..13 {
            assert!(store.push(1).is_ok());
        }
        assert!(matches!(store.push(1), Err(Error::IllegalQuestion)));
    }

    #[test]
    fn test_push_checks_options() {
        let mut store = AnswerStore::default();
        for _ in 0..9 {
            assert!(store.push(5).is_ok());
        }
        // 設問10は3択
        assert!(matches!(store.push(5), Err(Error::IllegalAnswer)));
        assert!(matches!(store.push(0), Err(Error::IllegalAnswer)));
        assert!(store.push(3).is_ok());
    }

    #[test]
    fn test_insert() {
        let mut store = AnswerStore::default();
        assert!(store.insert(0, 1).is_err());
        assert!(store.insert(1, 1).is_ok());
        assert!(store.insert(13, 1).is_ok());
        assert!(store.insert(14, 1).is_err());
        assert!(matches!(store.insert(10, 4), Err(Error::IllegalAnswer)));
        assert!(matches!(store.insert(2, 6), Err(Error::IllegalAnswer)));

        // push は未回答の設問2から続く
        assert!(store.push(2).is_ok());
        assert_eq!(
            store.responses(),
            vec![
                Response::new(1, 1),
                Response::new(2, 2),
                Response::new(13, 1)
            ]
        );
    }

    #[test]
    fn test_reset() {
        let mut store = AnswerStore::default();
        for _ in 0..13 {
            assert!(store.push(3).is_ok());
        }
        assert_eq!(store.to_rating().unwrap().value(), 3);
        store.reset();
        assert!(store.responses().is_empty());
        assert!(store.push(1).is_ok());
    }
}
