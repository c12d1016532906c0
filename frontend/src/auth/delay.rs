use std::time::Duration;

pub const DEFAULT_LOGIN_DELAY_MS: u64 = 500;

/// Simulated round-trip applied before a login attempt resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginDelay(Duration);

impl LoginDelay {
    pub fn from_millis(ms: u64) -> Self {
        Self(Duration::from_millis(ms))
    }

    pub fn none() -> Self {
        Self(Duration::ZERO)
    }

    pub fn as_duration(&self) -> Duration {
        self.0
    }

    pub async fn wait(&self) {
        if self.0.is_zero() {
            return;
        }
        sleep(self.0).await;
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    let ms = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

// Host builds only render for tests; there is no timer to wait on.
#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    log::debug!("skipping login delay of {:?} on host", duration);
}

impl Default for LoginDelay {
    fn default() -> Self {
        Self::from_millis(DEFAULT_LOGIN_DELAY_MS)
    }
}
