//! Turns raw user text into ingredient queries.
//!
//! No splitting or normalisation happens here: whatever the user typed is
//! what the model sees.

use std::io::BufRead;

use crate::error::PlannerError;
use crate::model::IngredientQuery;

/// Shown while there is nothing to cook with yet
pub const EMPTY_HINT: &str = "Start by typing the ingredients you have at home.";

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Ingredients(IngredientQuery),
    Empty,
}

impl Input {
    pub fn query(&self) -> Option<&IngredientQuery> {
        match self {
            Input::Ingredients(query) => Some(query),
            Input::Empty => None,
        }
    }
}

impl From<IngredientQuery> for Input {
    fn from(query: IngredientQuery) -> Self {
        Input::Ingredients(query)
    }
}

impl From<&str> for Input {
    fn from(raw: &str) -> Self {
        match collect(raw) {
            Some(query) => Input::Ingredients(query),
            None => Input::Empty,
        }
    }
}

/// `None` for empty input, otherwise the raw text untouched
pub fn collect(raw: &str) -> Option<IngredientQuery> {
    IngredientQuery::new(raw)
}

/// Join command-line words back into one ingredient string
pub fn from_args(args: &[String]) -> Option<IngredientQuery> {
    collect(&args.join(" "))
}

/// Echo of what the user entered
pub fn echo(query: &IngredientQuery) -> String {
    format!("You entered these fridge items: {}", query)
}

/// Reads one [`Input`] per line until EOF
pub struct InputCollector<R> {
    reader: R,
}

impl<R: BufRead> InputCollector<R> {
    pub fn new(reader: R) -> Self {
        InputCollector { reader }
    }
}

impl<R: BufRead> Iterator for InputCollector<R> {
    type Item = Result<Input, PlannerError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                // Strip line framing only
                let raw = line
                    .strip_suffix('\n')
                    .map(|l| l.strip_suffix('\r').unwrap_or(l))
                    .unwrap_or(line.as_str());
                Some(Ok(Input::from(raw)))
            }
            Err(e) => Some(Err(e.into())),
        }
    }
}
