use std::io::stdin;

use atr_riskcheck::{AnswerStore, Error, QUESTIONS};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut buffer = String::new();
    let mut store = AnswerStore::default();

    for question in QUESTIONS.questions() {
        println!("{}. {}", question.id, question.text);
        for answer in &question.answers {
            println!("  {} => {}", answer.id, answer.text);
        }
        loop {
            buffer.clear();
            if stdin().read_line(&mut buffer)? == 0 {
                return Err(Error::NotFullfilled);
            }
            match store_answer(buffer.trim(), &mut store) {
                Ok(()) => break,
                Err(_) => println!(
                    "Please enter one of the numbers 1 to {}.",
                    question.answers.len()
                ),
            }
        }
        println!();
    }

    let rating = store.to_rating()?;
    println!("Your attitude to risk: {}", rating);
    println!("{}", rating.description());
    Ok(())
}

fn store_answer(value: &str, store: &mut AnswerStore) -> Result<(), Error> {
    let value = value.parse::<u8>().map_err(|_| Error::IllegalAnswer)?;
    store.push(value)?;
    Ok(())
}
