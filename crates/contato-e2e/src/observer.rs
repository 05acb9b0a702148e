//! Submission-effect observation.
//!
//! The two signal sources (outbound POST request, main-frame navigation)
//! are registered before the submit is triggered, then raced with a
//! bounded deadline. Both listeners are passive; the losing one is
//! discarded without side effects. Absence of either signal within the
//! bound is itself a valid observation (the negative scenario requires
//! it), so the race resolves to `Quiescent` rather than erroring.

use std::sync::Arc;
use std::time::Duration;

use chromiumoxide::cdp::browser_protocol::network::{
    EnableParams, EventRequestWillBeSent, GetRequestPostDataParams, Request,
};
use chromiumoxide::cdp::browser_protocol::page::EventFrameNavigated;
use futures::stream::BoxStream;
use futures::StreamExt;
use tracing::debug;

use crate::browser::PageHandle;
use crate::result::{ContatoError, ContatoResult};
use crate::submission::{CapturedPost, NavigationEvent, SubmissionObservation};

/// Armed pair of submission-effect listeners
pub struct SubmissionObserver {
    requests: BoxStream<'static, Arc<EventRequestWillBeSent>>,
    navigations: BoxStream<'static, Arc<EventFrameNavigated>>,
}

impl std::fmt::Debug for SubmissionObserver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubmissionObserver").finish_non_exhaustive()
    }
}

impl SubmissionObserver {
    /// Register both listeners. Must be called before the submit is
    /// triggered so no signal can be missed.
    pub async fn arm(page: &PageHandle) -> ContatoResult<Self> {
        page.cdp()
            .execute(EnableParams::default())
            .await
            .map_err(|e| ContatoError::Page {
                message: format!("enabling network domain: {e}"),
            })?;

        let requests = page
            .cdp()
            .event_listener::<EventRequestWillBeSent>()
            .await
            .map_err(|e| ContatoError::Page {
                message: format!("subscribing to requestWillBeSent: {e}"),
            })?
            .boxed();

        let navigations = page
            .cdp()
            .event_listener::<EventFrameNavigated>()
            .await
            .map_err(|e| ContatoError::Page {
                message: format!("subscribing to frameNavigated: {e}"),
            })?
            .boxed();

        Ok(Self {
            requests,
            navigations,
        })
    }

    /// Await the first qualifying signal.
    ///
    /// Non-POST requests and subframe navigations are skipped rather than
    /// resolved; anchor (`#`) same-document navigation never fires
    /// `frameNavigated`, so it correctly does not count as a reload. When
    /// the deadline passes first the observation is `Quiescent`.
    pub async fn wait(
        mut self,
        page: &PageHandle,
        timeout: Duration,
    ) -> ContatoResult<SubmissionObservation> {
        let deadline = tokio::time::Instant::now() + timeout;
        loop {
            tokio::select! {
                maybe_request = self.requests.next() => {
                    let event = maybe_request
                        .ok_or_else(|| stream_closed("requestWillBeSent"))?;
                    if !event.request.method.eq_ignore_ascii_case("POST") {
                        continue;
                    }
                    let captured = capture_post(page, &event).await;
                    debug!(url = %captured.url, content_type = ?captured.content_type,
                        "captured outbound POST");
                    return Ok(SubmissionObservation::PostRequest(captured));
                }
                maybe_nav = self.navigations.next() => {
                    let event = maybe_nav
                        .ok_or_else(|| stream_closed("frameNavigated"))?;
                    if event.frame.parent_id.is_some() {
                        continue;
                    }
                    debug!(url = %event.frame.url, "main frame navigated");
                    return Ok(SubmissionObservation::Navigation(NavigationEvent {
                        url: event.frame.url.clone(),
                    }));
                }
                () = tokio::time::sleep_until(deadline) => {
                    debug!(timeout_ms = timeout.as_millis() as u64, "no submission effect observed");
                    return Ok(SubmissionObservation::Quiescent);
                }
            }
        }
    }
}

fn stream_closed(name: &str) -> ContatoError {
    ContatoError::Page {
        message: format!("{name} event stream closed"),
    }
}

/// Build a `CapturedPost` from the request event, recovering the body via
/// `Network.getRequestPostData` when the event did not inline it. Body
/// recovery is best effort; the decode step reports a missing body with
/// full context.
async fn capture_post(page: &PageHandle, event: &EventRequestWillBeSent) -> CapturedPost {
    let mut body = event.request.post_data.clone();
    if body.is_none() && event.request.has_post_data.unwrap_or(false) {
        body = fetch_post_data(page, event).await;
    }
    CapturedPost {
        url: event.request.url.clone(),
        method: event.request.method.to_ascii_uppercase(),
        content_type: content_type_of(&event.request),
        body,
    }
}

async fn fetch_post_data(page: &PageHandle, event: &EventRequestWillBeSent) -> Option<String> {
    let params = GetRequestPostDataParams::builder()
        .request_id(event.request_id.clone())
        .build()
        .ok()?;
    match page.cdp().execute(params).await {
        Ok(response) => Some(response.post_data.clone()),
        Err(e) => {
            debug!(error = %e, "getRequestPostData failed");
            None
        }
    }
}

fn content_type_of(request: &Request) -> Option<String> {
    let headers = serde_json::to_value(&request.headers).ok()?;
    let object = headers.as_object()?;
    object
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case("content-type"))
        .and_then(|(_, value)| value.as_str().map(str::to_string))
}
