use std::io::Read;

use crate::{AnswerStore, Error, QUESTION_COUNT};

/// CSVから回答を一括で読み込む
///
/// 1行目はヘッダ。1列目が回答者ID、続く13列が設問1〜13の回答番号。
/// 空欄は未回答として扱う。
pub fn read_bulk<R: Read>(
    reader: R,
) -> impl Iterator<Item = Result<(String, AnswerStore), Error>> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader)
        .into_records()
        .map(|record| to_store(&record?))
}

fn to_store(record: &csv::StringRecord) -> Result<(String, AnswerStore), Error> {
    let id = record.get(0).ok_or(Error::NotFullfilled)?.to_owned();
    if record.len() > QUESTION_COUNT + 1 {
        return Err(Error::IllegalQuestion);
    }
    let mut store = AnswerStore::default();
    for (index, value) in record.iter().skip(1).enumerate() {
        if value.is_empty() {
            continue;
        }
        let response_id = value.parse::<u8>().map_err(|_| Error::IllegalAnswer)?;
        store.insert(index as u8 + 1, response_id)?;
    }
    Ok((id, store))
}
