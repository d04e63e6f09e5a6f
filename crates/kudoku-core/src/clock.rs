/// Elapsed-time clock for a puzzle session: a one-second tick counter with
/// explicit start/stop/reset, owned by the session rather than living in
/// ambient global state.
///
/// The clock does not schedule anything itself; the driver (UI event loop)
/// delivers one [`Clock::tick`] per second. Ticks while stopped are ignored,
/// so a completed session keeps its frozen completion time.
#[derive(Debug, Clone, Default)]
pub struct Clock {
    seconds: u64,
    running: bool,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume counting. Idempotent.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Pause counting, freezing the current elapsed time.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Reset to zero without changing the running state.
    pub fn reset(&mut self) {
        self.seconds = 0;
    }

    /// Advance by one second if running.
    pub fn tick(&mut self) {
        if self.running {
            self.seconds += 1;
        }
    }

    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Format the elapsed time as HH:MM:SS.
    pub fn formatted(&self) -> String {
        let h = self.seconds / 3600;
        let m = (self.seconds % 3600) / 60;
        let s = self.seconds % 60;
        format!("{:02}:{:02}:{:02}", h, m, s)
    }
}
