//! Fetch-with-cache hooks shared by the dashboard pages.
//!
//! A [`Resource`] is a cache signal plus a trigger signal. Bumping the trigger
//! re-runs the fetch; the hooks live in the calling component's scope so any
//! in-flight request is cancelled when the page unmounts.

use dioxus::prelude::*;

use crate::client::{
    model::cache::Cache,
    util::chart::Viewport,
};

#[cfg(feature = "web")]
use std::future::Future;

#[cfg(feature = "web")]
use crate::client::model::{auth::SessionContext, error::ApiError};

pub struct Resource<T: 'static> {
    pub cache: Signal<Cache<T>>,
    trigger: Signal<u64>,
}

impl<T: 'static> Clone for Resource<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for Resource<T> {}

impl<T: 'static> PartialEq for Resource<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cache == other.cache && self.trigger == other.trigger
    }
}

impl<T: 'static> Resource<T> {
    /// Schedules a re-fetch, e.g. after a mutation succeeded.
    pub fn refresh(&mut self) {
        *self.trigger.write() += 1;
    }
}

pub fn use_cached<T: 'static>() -> Resource<T> {
    Resource {
        cache: use_signal(Cache::default),
        trigger: use_signal(|| 0),
    }
}

/// Runs `fetch` on mount and on every [`Resource::refresh`].
///
/// A `401` forgets the session user so the protected layout sends the user to
/// the login page.
#[cfg(feature = "web")]
pub fn use_fetch<T, F, Fut>(resource: Resource<T>, fetch: F)
where
    T: 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let Resource { mut cache, trigger } = resource;
    let session = try_use_context::<SessionContext>();

    let _ = use_resource(move || {
        let _ = trigger();
        let request = fetch();
        async move {
            cache.write().begin();
            let result = request.await;

            if let Err(error) = &result {
                if error.is_unauthorized() {
                    if let Some(mut session) = session {
                        session.clear();
                    }
                }
            }

            cache.write().settle(result);
        }
    });
}

/// Re-fetches `resource` every `interval_ms` while the component is mounted.
#[cfg(feature = "web")]
pub fn use_revalidate<T: 'static>(resource: Resource<T>, interval_ms: u32) {
    let mut resource = resource;
    use_future(move || async move {
        loop {
            gloo_timers::future::TimeoutFuture::new(interval_ms).await;
            resource.refresh();
        }
    });
}

/// Current viewport bucket, updated on window resize.
pub fn use_viewport() -> Signal<Viewport> {
    #[allow(unused_mut)]
    let mut viewport = use_signal(|| Viewport::Default);

    #[cfg(feature = "web")]
    use_future(move || async move {
        let mut eval = document::eval(
            r#"
            const send = () => dioxus.send([window.innerWidth, window.innerHeight]);
            send();
            window.addEventListener('resize', send);
            await new Promise(() => {});
            "#,
        );
        while let Ok((width, height)) = eval.recv::<(f64, f64)>().await {
            viewport.set(Viewport::from_dimensions(width, height));
        }
    });

    viewport
}
