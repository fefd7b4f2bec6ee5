use log::debug;

use crate::builder::RecipeRequester;
use crate::collector::Input;
use crate::model::{RecipeResult, RequestState};

/// Drives one user action at a time through `Idle -> Requesting -> Done`.
///
/// Requests are blocking, so at most one is ever in flight.
pub struct Session<'a> {
    requester: &'a RecipeRequester,
    state: RequestState,
}

impl<'a> Session<'a> {
    pub fn new(requester: &'a RecipeRequester) -> Self {
        Session {
            requester,
            state: RequestState::Idle,
        }
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// Handle one user action.
    ///
    /// Empty input issues no request and leaves the session `Idle`. Otherwise
    /// `on_change` sees `Requesting` before the call and `Done` after it, which
    /// is where a busy indicator hooks in.
    pub fn submit<F>(&mut self, input: &Input, mut on_change: F) -> Option<&RecipeResult>
    where
        F: FnMut(&RequestState),
    {
        self.state = RequestState::Idle;
        let query = input.query()?;

        self.state = RequestState::Requesting;
        on_change(&self.state);

        let result = self.requester.request_recipe(query);
        debug!("Request finished: {:?}", result.kind());
        self.state = RequestState::Done(result);
        on_change(&self.state);

        self.state.result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RequestError;
    use crate::model::FailureKind;
    use crate::providers::LlmProvider;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Counting(Rc<Cell<usize>>);

    impl LlmProvider for Counting {
        fn provider_name(&self) -> &str {
            "counting"
        }

        fn generate(&self, _prompt: &str) -> Result<String, RequestError> {
            self.0.set(self.0.get() + 1);
            Err(RequestError::EmptyGeneration)
        }
    }

    fn requester() -> (RecipeRequester, Rc<Cell<usize>>) {
        let calls = Rc::new(Cell::new(0));
        (
            RecipeRequester::with_provider(Box::new(Counting(calls.clone()))),
            calls,
        )
    }

    #[test]
    fn test_empty_input_stays_idle() {
        let (requester, calls) = requester();
        let mut session = Session::new(&requester);
        let mut seen = Vec::new();

        let result = session.submit(&Input::Empty, |s| seen.push(s.clone()));
        assert!(result.is_none());
        assert_eq!(session.state(), &RequestState::Idle);
        assert!(seen.is_empty());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_transitions_through_requesting() {
        let (requester, calls) = requester();
        let mut session = Session::new(&requester);
        let mut seen = Vec::new();

        let kind = session
            .submit(&Input::from("eggs"), |s| seen.push(s.clone()))
            .and_then(|r| r.kind());
        assert_eq!(kind, Some(FailureKind::EmptyGeneration));
        assert_eq!(calls.get(), 1);
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], RequestState::Requesting);
        assert!(seen[1].is_terminal());
    }

    #[test]
    fn test_each_action_issues_one_request() {
        let (requester, calls) = requester();
        let mut session = Session::new(&requester);

        session.submit(&Input::from("eggs"), |_| {});
        session.submit(&Input::from(""), |_| {});
        session.submit(&Input::from("rice"), |_| {});
        assert_eq!(calls.get(), 2);
    }
}
