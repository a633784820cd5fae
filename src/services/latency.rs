use std::time::Duration;

/// Default delay before a login attempt resolves
pub const LOGIN_LATENCY: Duration = Duration::from_millis(1500);

/// Default delay before a registration resolves
pub const REGISTER_LATENCY: Duration = Duration::from_millis(2000);

/// Stand-in for a network round trip that never happens
///
/// A fixed, fire-and-forget delay: no cancellation, no timeout, no retry.
/// Tests use [`SimulatedLatency::none`] to resolve immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedLatency {
    duration: Duration,
}

impl SimulatedLatency {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    pub fn none() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub async fn wait(&self) {
        if self.duration.is_zero() {
            return;
        }
        tracing::trace!("Simulating {}ms of latency", self.duration.as_millis());
        tokio::time::sleep(self.duration).await;
    }
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self::none()
    }
}
