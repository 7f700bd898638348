/// Lifecycle of a remote fetch owned by a page.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    NotStarted,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::NotStarted
    }
}

impl<T> FetchState<T> {
    pub fn from_result(result: Result<T, String>) -> Self {
        match result {
            Ok(data) => FetchState::Loaded(data),
            Err(e) => FetchState::Failed(e),
        }
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_not_started() {
        let state = FetchState::<Vec<i32>>::default();
        assert_eq!(state, FetchState::NotStarted);
        assert_eq!(state.loaded(), None);
    }

    #[test]
    fn test_from_result_ok() {
        let state = FetchState::from_result(Ok(vec![1, 2]));
        assert_eq!(state.loaded(), Some(&vec![1, 2]));
    }

    #[test]
    fn test_from_result_err_is_not_loading() {
        let state = FetchState::<Vec<i32>>::from_result(Err("timeout".to_string()));
        assert_eq!(state, FetchState::Failed("timeout".to_string()));
        assert_eq!(state.loaded(), None);
    }
}
