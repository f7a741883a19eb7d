use dashmap::DashMap;
use std::time::{Duration, Instant};

// Quota policy, fixed for the process lifetime
#[derive(Debug, Clone, Copy)]
pub struct RateLimitPolicy {
    pub max_requests: u32,
    pub window: Duration,
}

impl RateLimitPolicy {
    // Policy string used in the health payload and the 429 message
    pub fn describe(&self) -> String {
        match self.window.as_secs() {
            3600 => format!("{} requests/hour", self.max_requests),
            60 => format!("{} requests/minute", self.max_requests),
            secs => format!("{} requests/{}s", self.max_requests, secs),
        }
    }
}

// Signalled when a key has used up its quota for the current window
#[derive(Debug, PartialEq, Eq)]
pub struct QuotaExceeded;

// Sliding-window limiter - tracks request timestamps per client key
pub struct RateLimiter {
    policy: RateLimitPolicy,
    requests: DashMap<String, Vec<Instant>>,
}

impl RateLimiter {
    pub fn new(policy: RateLimitPolicy) -> Self {
        Self {
            policy,
            requests: DashMap::new(),
        }
    }

    pub fn policy(&self) -> RateLimitPolicy {
        self.policy
    }

    // Admit or reject one request for `key`, returning the remaining quota.
    // The entry guard keeps the shard locked for the whole call, so
    // prune + check + append is atomic with respect to other calls on the
    // same key. Rejected requests do not count against the quota.
    pub fn check_and_consume(&self, key: &str) -> Result<u32, QuotaExceeded> {
        let now = Instant::now();
        let mut log = self.requests.entry(key.to_string()).or_default();

        // expire by age, not by position
        log.retain(|&t| now.duration_since(t) < self.policy.window);

        if log.len() as u32 >= self.policy.max_requests {
            return Err(QuotaExceeded);
        }

        log.push(now);
        Ok(self.policy.max_requests - log.len() as u32)
    }
}
