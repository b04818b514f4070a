use std::time::Duration;

pub struct DemoConfig {
    /// Ceiling for `AsyncResult::get` in the get demo.
    pub get_timeout: Duration,
    /// Ceiling for `AsyncResult::wait` in the wait demo.
    pub wait_timeout: Duration,
    pub poll_interval: Duration,
    pub request_count: usize,
}

impl DemoConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            get_timeout: millis_from_env("FBN_ASYNC_GET_TIMEOUT_MS", 2_000),
            wait_timeout: millis_from_env("FBN_ASYNC_WAIT_TIMEOUT_MS", 20_000),
            poll_interval: Duration::from_secs(1),
            request_count: 10,
        }
    }
}

fn millis_from_env(name: &str, default_ms: u64) -> Duration {
    let ms = std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default_ms);
    Duration::from_millis(ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millis_from_env_falls_back_on_missing_or_bad_values() {
        assert_eq!(
            millis_from_env("LUSID_DEMO_TEST_UNSET_TIMEOUT", 2_000),
            Duration::from_secs(2)
        );

        std::env::set_var("LUSID_DEMO_TEST_BAD_TIMEOUT", "soon");
        assert_eq!(
            millis_from_env("LUSID_DEMO_TEST_BAD_TIMEOUT", 20_000),
            Duration::from_secs(20)
        );

        std::env::set_var("LUSID_DEMO_TEST_GOOD_TIMEOUT", " 150 ");
        assert_eq!(
            millis_from_env("LUSID_DEMO_TEST_GOOD_TIMEOUT", 20_000),
            Duration::from_millis(150)
        );
    }
}
