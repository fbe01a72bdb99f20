//! Two overlapping asks against one surface. The slower, earlier request
//! settles last and its answer is the one left on screen.

use ask_client::{
    AnswerGateway, AnswerResponse, AskError, QueryController, QuestionRequest, RecordingSurface,
};
use async_trait::async_trait;
use std::{
    error::Error,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};
use tracing_subscriber::EnvFilter;

/// Answers the n-th call after `latencies[n]`.
struct DelayedGateway {
    latencies: Vec<Duration>,
    calls: AtomicUsize,
}

#[async_trait]
impl AnswerGateway for DelayedGateway {
    async fn ask(&self, request: &QuestionRequest) -> Result<AnswerResponse, AskError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        let latency = self.latencies.get(n).copied().unwrap_or_default();
        tokio::time::sleep(latency).await;
        Ok(AnswerResponse {
            answer: format!("answer #{n} after {latency:?}"),
            question: Some(request.question.clone()),
        })
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();

    let gateway = Arc::new(DelayedGateway {
        latencies: vec![Duration::from_millis(300), Duration::from_millis(50)],
        calls: AtomicUsize::new(0),
    });
    let surface = Arc::new(RecordingSurface::new("What services does the company offer?"));
    let controller = QueryController::new(Arc::clone(&surface), gateway);

    let (first, second) = futures::join!(controller.ask(), controller.ask());
    println!("first  -> {}", first?);
    println!("second -> {}", second?);

    println!("Surface timeline:");
    for event in surface.events() {
        println!("  {event:?}");
    }
    println!("On screen: {}", surface.answer());

    Ok(())
}
