use crossterm::event::{poll, Event, KeyEvent, KeyEventKind, MouseEvent};
use tokio::time::{Duration, Instant};

/// Minimum time between two frames (~60 FPS)
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

pub struct EventHandler {
    tick_rate: Duration,
    last_tick: Instant,
    last_render_time: Instant,
}

impl EventHandler {
    pub fn new() -> Self {
        Self::with_tick_rate(Duration::from_millis(crate::constants::TICK_RATE_DEFAULT_MS))
    }

    pub fn with_tick_rate(tick_rate: Duration) -> Self {
        let now = Instant::now();
        Self {
            tick_rate,
            last_tick: now,
            last_render_time: now,
        }
    }

    /// How long to sleep between two input polls.
    ///
    /// Never longer than a frame, so a slow tick rate does not delay key presses.
    pub fn input_wait(&self) -> Duration {
        self.tick_rate.min(FRAME_INTERVAL)
    }

    pub async fn next_event(&mut self) -> anyhow::Result<EventType> {
        loop {
            if poll(Duration::ZERO)? {
                return Ok(match crossterm::event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => EventType::Key(key),
                    Event::Mouse(mouse) => EventType::Mouse(mouse),
                    Event::Resize(w, h) => EventType::Resize(w, h),
                    _ => EventType::Other,
                });
            }

            if self.last_tick.elapsed() >= self.tick_rate {
                self.last_tick = Instant::now();
                return Ok(EventType::Tick);
            }

            tokio::time::sleep(self.input_wait()).await;
        }
    }

    /// Get the time since last render for frame timing
    pub fn time_since_last_render(&self) -> Duration {
        self.last_render_time.elapsed()
    }

    /// Check if we should render based on timing
    pub fn should_render(&self) -> bool {
        self.time_since_last_render() >= FRAME_INTERVAL
    }

    pub fn mark_rendered(&mut self) {
        self.last_render_time = Instant::now();
    }
}

#[derive(Debug, Clone)]
pub enum EventType {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
    Other,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
