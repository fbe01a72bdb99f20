//! Display surface port
//!
//! The controller never touches a concrete UI. It reads the question from,
//! and writes the answer and loading state to, whatever implements
//! [`DisplaySurface`].

use std::sync::Mutex;

/// The three display roles an ask cycle needs: an input source, an answer
/// text sink and a loading indicator.
///
/// Implementations are shared between overlapping invocations, so every
/// method takes `&self`.
pub trait DisplaySurface: Send + Sync {
    /// Current text of the input source.
    fn question(&self) -> String;

    /// Replace the displayed answer with `text`, verbatim.
    fn set_answer(&self, text: &str);

    fn set_loading(&self, visible: bool);
}

/// Shows the loading indicator for as long as it is alive.
///
/// Dropping the guard hides the indicator, so every exit path of an ask
/// cycle (success, early `?` return, panic unwinding) releases it.
pub struct LoadingGuard<'a, S: DisplaySurface + ?Sized> {
    surface: &'a S,
}

impl<'a, S: DisplaySurface + ?Sized> LoadingGuard<'a, S> {
    pub fn acquire(surface: &'a S) -> Self {
        surface.set_loading(true);
        Self { surface }
    }
}

impl<S: DisplaySurface + ?Sized> Drop for LoadingGuard<'_, S> {
    fn drop(&mut self) {
        self.surface.set_loading(false);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    Answer(String),
    Loading(bool),
}

#[derive(Debug, Default)]
struct Recorded {
    question: String,
    answer: String,
    loading: bool,
    events: Vec<SurfaceEvent>,
}

/// In-memory surface that keeps the current state and an ordered log of
/// every mutation.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    inner: Mutex<Recorded>,
}

impl RecordingSurface {
    pub fn new(question: impl Into<String>) -> Self {
        let surface = Self::default();
        surface.set_question(question);
        surface
    }

    pub fn set_question(&self, question: impl Into<String>) {
        self.lock().question = question.into();
    }

    pub fn answer(&self) -> String {
        self.lock().answer.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.lock().loading
    }

    pub fn events(&self) -> Vec<SurfaceEvent> {
        self.lock().events.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Recorded> {
        // A poisoned lock only means a writer panicked mid-push; the log is
        // still readable.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl DisplaySurface for RecordingSurface {
    fn question(&self) -> String {
        self.lock().question.clone()
    }

    fn set_answer(&self, text: &str) {
        let mut state = self.lock();
        state.answer = text.to_string();
        state.events.push(SurfaceEvent::Answer(text.to_string()));
    }

    fn set_loading(&self, visible: bool) {
        let mut state = self.lock();
        state.loading = visible;
        state.events.push(SurfaceEvent::Loading(visible));
    }
}
