use crate::client::model::error::ApiError;

/// Client-side snapshot of one API resource.
#[derive(Clone, Default, PartialEq, Debug)]
pub enum Cache<T> {
    #[default]
    NotFetched,
    Loading,
    Fetched(T),
    Error(ApiError),
}

impl<T> Cache<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Cache::NotFetched | Cache::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Cache::Fetched(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Cache::Error(error) => Some(error),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Cache::Fetched(_))
    }

    /// Marks a fetch as in flight. A revalidation keeps showing the current data.
    pub fn begin(&mut self) {
        if !self.is_success() {
            *self = Cache::Loading;
        }
    }

    /// Stores the outcome of a fetch.
    ///
    /// Later results overwrite earlier ones. A failure after a successful fetch
    /// keeps the last good snapshot and returns `false`.
    pub fn settle(&mut self, result: Result<T, ApiError>) -> bool {
        match result {
            Ok(data) => {
                *self = Cache::Fetched(data);
                true
            }
            Err(error) if self.is_success() => {
                dioxus_logger::tracing::warn!("Revalidation failed: {}", error);
                false
            }
            Err(error) => {
                *self = Cache::Error(error);
                true
            }
        }
    }

    /// Map the inner data to another value, returning None if not fetched successfully
    pub fn map<U, F>(&self, f: F) -> Option<U>
    where
        F: FnOnce(&T) -> U,
    {
        self.data().map(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error(status: u64) -> ApiError {
        ApiError {
            status,
            message: "boom".to_string(),
        }
    }

    #[test]
    fn first_failure_is_reported() {
        let mut cache = Cache::<u32>::default();
        cache.begin();
        assert!(cache.is_loading());

        assert!(cache.settle(Err(error(500))));
        assert_eq!(cache.error().map(|e| e.status), Some(500));
    }

    #[test]
    fn failed_revalidation_keeps_last_snapshot() {
        let mut cache = Cache::Fetched(1u32);
        cache.begin();
        assert_eq!(cache.data(), Some(&1));

        assert!(!cache.settle(Err(error(502))));
        assert_eq!(cache.data(), Some(&1));
    }

    #[test]
    fn latest_success_wins() {
        let mut cache = Cache::Fetched(1u32);
        cache.settle(Ok(2));
        cache.settle(Ok(3));
        assert_eq!(cache.data(), Some(&3));
    }
}
