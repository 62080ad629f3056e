use std::{
    future::Future,
    io::{self, BufRead, Write},
    pin::Pin,
    task::{Context, Poll},
    thread,
};

use flume::{unbounded, Receiver};
use futures::FutureExt;
use parking_client::{Prompt, SpotView, UiEvent};
use parking_core::types::{PromotionBanner, SpotCell};
use tokio_util::sync::CancellationToken;
use url::Url;

const TIME_PICKER_HINT: &str = "请输入预定使用时间 (YYYY-MM-DDTHH:MM)，直接回车取消：";
const IDLE_HINT: &str = "输入车位编号选择车位，输入 q 退出";

/// Feeds stdin lines into a channel from a plain thread.
pub fn spawn_stdin_reader() -> Receiver<String> {
    let (tx, rx) = unbounded();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
        log::debug!("stdin closed");
    });
    rx
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputMode {
    Idle,
    Prompt,
    TimePicker,
}

type LineFuture = Pin<Box<dyn Future<Output = (Option<String>, Receiver<String>)> + Send>>;

fn next_line(rx: Receiver<String>) -> LineFuture {
    Box::pin(async move {
        let line = rx.recv_async().await.ok();
        (line, rx)
    })
}

/// Line-oriented `SpotView`. What a line means depends on what was last
/// asked: a spot number when idle, an answer while prompting, a time while
/// the picker is open.
pub struct TerminalView<W: Write> {
    out: W,
    lines: Option<LineFuture>,
    mode: InputMode,
    base_url: Url,
    promotion: Option<PromotionBanner>,
    stop_token: CancellationToken,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W, lines: Receiver<String>, base_url: Url, stop_token: CancellationToken) -> Self {
        Self {
            out,
            lines: Some(next_line(lines)),
            mode: InputMode::Idle,
            base_url,
            promotion: None,
            stop_token,
        }
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    fn print(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text) {
            log::error!("terminal write failed: {}", e);
        }
    }

    fn line_to_event(&mut self, line: String) -> Option<UiEvent> {
        let line = line.trim().to_string();
        match self.mode {
            InputMode::Prompt => {
                self.mode = InputMode::Idle;
                Some(UiEvent::PromptAnswered((!line.is_empty()).then_some(line)))
            }
            InputMode::TimePicker if line.is_empty() => Some(UiEvent::ReservationTimeCancelled),
            InputMode::TimePicker => Some(UiEvent::ReservationTimeSubmitted(line)),
            InputMode::Idle if line.eq_ignore_ascii_case("q") => {
                self.stop_token.cancel();
                None
            }
            InputMode::Idle if line.is_empty() => None,
            InputMode::Idle => Some(UiEvent::SpotClicked(line.to_uppercase())),
        }
    }
}

/// Cells grouped into one row per zone letter.
fn grid_rows(cells: &[SpotCell]) -> Vec<String> {
    let mut rows: Vec<(char, Vec<String>)> = Vec::new();
    for cell in cells {
        let zone = cell.id.chars().next().unwrap_or('?');
        let entry = format!("{}[{}]", cell.id, cell.label);
        match rows.last_mut() {
            Some((z, row)) if *z == zone => row.push(entry),
            _ => rows.push((zone, vec![entry])),
        }
    }
    rows.into_iter().map(|(_, row)| row.join(" ")).collect()
}

impl<W: Write> SpotView for TerminalView<W> {
    fn bind_spots(&mut self, spot_ids: &[String]) {
        self.print(&format!("共 {} 个车位。{}", spot_ids.len(), IDLE_HINT));
    }

    fn render_spots(&mut self, cells: &[SpotCell]) {
        if let Some(banner) = self.promotion.clone() {
            self.print(&banner.headline);
            self.print(&banner.period);
        }
        for row in grid_rows(cells) {
            self.print(&row);
        }
    }

    fn show_promotion(&mut self, banner: &PromotionBanner) {
        if self.promotion.as_ref() != Some(banner) {
            self.print(&banner.headline);
            self.print(&banner.period);
        }
        self.promotion = Some(banner.clone());
    }

    fn hide_promotion(&mut self) {
        self.promotion = None;
    }

    fn show_error(&mut self, message: &str) {
        self.print(&format!("[错误] {}", message));
    }

    fn hide_error(&mut self) {}

    fn set_loading(&mut self, visible: bool) {
        if visible {
            self.print("加载中...");
        }
    }

    fn prompt(&mut self, prompt: &Prompt) {
        self.mode = InputMode::Prompt;
        self.print(&prompt.message());
    }

    fn show_time_picker(&mut self) {
        self.mode = InputMode::TimePicker;
        self.print(TIME_PICKER_HINT);
    }

    fn hide_time_picker(&mut self) {
        self.mode = InputMode::Idle;
    }

    fn alert(&mut self, message: &str) {
        self.print(&format!("[提示] {}", message));
    }

    /// A terminal cannot follow the link, so it is printed and the session
    /// ends the way leaving the page would.
    fn navigate(&mut self, path: &str) {
        let target = match self.base_url.join(path) {
            Ok(url) => url.to_string(),
            Err(_) => path.to_string(),
        };
        log::info!("navigating to {}", target);
        self.print(&format!("请前往 {}", target));
        self.stop_token.cancel();
    }

    fn poll_ui_event(&mut self, cx: &mut Context<'_>) -> Poll<UiEvent> {
        loop {
            let fut = match self.lines.as_mut() {
                Some(fut) => fut,
                None => return Poll::Pending,
            };
            match fut.poll_unpin(cx) {
                Poll::Ready((Some(line), rx)) => {
                    self.lines = Some(next_line(rx));
                    if let Some(event) = self.line_to_event(line) {
                        return Poll::Ready(event);
                    }
                }
                Poll::Ready((None, _)) => {
                    log::info!("input closed, stopping");
                    self.lines = None;
                    self.stop_token.cancel();
                    return Poll::Pending;
                }
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}
