//! One question, one request, one answer.

use crate::{AnswerGateway, AskError, DisplaySurface, LoadingGuard, QuestionRequest};
use std::sync::Arc;
use tracing::{info, warn};

/// Drives an ask cycle between a display surface and an answer gateway.
///
/// Cloning is cheap and clones share both collaborators, so several cycles
/// can run against the same surface at once. Overlapping cycles are not
/// serialized: whichever response settles last owns the answer surface.
pub struct QueryController<S: ?Sized, G: ?Sized> {
    surface: Arc<S>,
    gateway: Arc<G>,
}

impl<S: ?Sized, G: ?Sized> Clone for QueryController<S, G> {
    fn clone(&self) -> Self {
        Self {
            surface: Arc::clone(&self.surface),
            gateway: Arc::clone(&self.gateway),
        }
    }
}

impl<S, G> QueryController<S, G>
where
    S: DisplaySurface + ?Sized,
    G: AnswerGateway + ?Sized,
{
    pub fn new(surface: Arc<S>, gateway: Arc<G>) -> Self {
        Self { surface, gateway }
    }

    pub fn surface(&self) -> &Arc<S> {
        &self.surface
    }

    /// Run one cycle: read the question, clear the old answer, show the
    /// loading indicator, wait for the gateway, hide the indicator and
    /// write the answer.
    ///
    /// On failure the indicator is hidden and the answer surface stays
    /// empty; the error is handed back to the caller.
    pub async fn ask(&self) -> Result<String, AskError> {
        let request = QuestionRequest {
            question: self.surface.question(),
        };

        self.surface.set_answer("");

        let response = {
            let _loading = LoadingGuard::acquire(&*self.surface);
            self.gateway.ask(&request).await
        };

        match response {
            Ok(response) => {
                self.surface.set_answer(&response.answer);
                info!(len = response.answer.len(), "answer displayed");
                Ok(response.answer)
            }
            Err(e) => {
                warn!(error = %e, "ask failed");
                Err(e)
            }
        }
    }
}
