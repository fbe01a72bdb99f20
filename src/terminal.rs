//! Terminal rendition of the display surface

use crate::{AnswerGateway, DisplaySurface, QueryController};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::sync::Mutex;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::warn;

/// Question comes from the command line or a prompt, the loading indicator
/// is a spinner on stderr and answers are written to `out` as-is.
pub struct TerminalSurface {
    question: Mutex<String>,
    spinner: Mutex<Option<ProgressBar>>,
    out: Mutex<Box<dyn Write + Send>>,
    show_spinner: bool,
}

impl TerminalSurface {
    pub fn new(show_spinner: bool) -> Self {
        Self::with_writer(Box::new(io::stdout()), show_spinner)
    }

    pub fn with_writer(out: Box<dyn Write + Send>, show_spinner: bool) -> Self {
        Self {
            question: Mutex::new(String::new()),
            spinner: Mutex::new(None),
            out: Mutex::new(out),
            show_spinner,
        }
    }

    pub fn set_question(&self, question: impl Into<String>) {
        *self.question.lock().unwrap_or_else(|e| e.into_inner()) = question.into();
    }

    /// Write `text` to the output without a trailing newline.
    pub fn print(&self, text: &str) -> io::Result<()> {
        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        out.write_all(text.as_bytes())?;
        out.flush()
    }

    /// Print a failure without touching the answer.
    pub fn report_error(&self, message: &str) {
        eprintln!("{} {}", "error:".red().bold(), message);
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl DisplaySurface for TerminalSurface {
    fn question(&self) -> String {
        self.question
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn set_answer(&self, text: &str) {
        // Nothing is on screen to clear; an empty answer prints nothing.
        if text.is_empty() {
            return;
        }
        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        if let Err(e) = writeln!(out, "{text}").and_then(|()| out.flush()) {
            warn!(error = %e, "could not write answer");
        }
    }

    fn set_loading(&self, visible: bool) {
        if !self.show_spinner {
            return;
        }
        let mut slot = self.spinner.lock().unwrap_or_else(|e| e.into_inner());
        if visible {
            if slot.is_none() {
                let pb = ProgressBar::new_spinner();
                pb.set_style(Self::spinner_style());
                pb.set_message("Waiting for answer...");
                pb.enable_steady_tick(Duration::from_millis(100));
                *slot = Some(pb);
            }
        } else if let Some(pb) = slot.take() {
            pb.finish_and_clear();
        }
    }
}

/// Ask one question per input line until EOF, `exit` or `quit`.
///
/// A failed question is reported and the session goes on. Returns how many
/// questions were asked.
pub async fn chat<R, G>(
    controller: &QueryController<TerminalSurface, G>,
    input: R,
) -> io::Result<usize>
where
    R: AsyncBufRead + Unpin,
    G: AnswerGateway + ?Sized,
{
    let surface = controller.surface();
    surface.print(&format!("{}\n", "Type a question, or `exit` to quit.".dimmed()))?;

    let mut lines = input.lines();
    let mut asked = 0;
    loop {
        surface.print(&format!("{} ", ">".cyan().bold()))?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim_end_matches('\r');
        if matches!(line.trim(), "exit" | "quit") {
            break;
        }

        surface.set_question(line);
        asked += 1;
        if let Err(e) = controller.ask().await {
            surface.report_error(&e.to_string());
        }
    }

    Ok(asked)
}
