#![allow(dead_code)]

use async_trait::async_trait;
use binance_rest::core::errors::ExchangeError;
use binance_rest::core::kernel::{Request, RestClient};
use std::collections::VecDeque;
use std::env;
use std::sync::Mutex;

/// In-memory transport: records every request and replays canned replies in order
#[derive(Default)]
pub struct MockRest {
    replies: Mutex<VecDeque<Result<Vec<u8>, ExchangeError>>>,
    requests: Mutex<Vec<Request>>,
}

impl MockRest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(self, body: &str) -> Self {
        self.push(Ok(body.as_bytes().to_vec()));
        self
    }

    pub fn with_error(self, error: ExchangeError) -> Self {
        self.push(Err(error));
        self
    }

    pub fn push(&self, reply: Result<Vec<u8>, ExchangeError>) {
        self.replies.lock().unwrap().push_back(reply);
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Request {
        self.requests()
            .pop()
            .expect("no request was sent through the mock")
    }
}

#[async_trait]
impl RestClient for MockRest {
    async fn invoke(&self, request: &Request) -> Result<Vec<u8>, ExchangeError> {
        self.requests.lock().unwrap().push(request.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ExchangeError::NetworkError("no canned reply".to_string())))
    }
}

/// Live tests hit the real exchange and only run when opted in
pub fn should_run_integration_tests() -> bool {
    env::var("RUN_INTEGRATION_TESTS").unwrap_or_default() == "true"
}

/// Check if a string represents a valid positive number
pub fn is_valid_positive_number(s: &str) -> bool {
    s.parse::<f64>().is_ok_and(|n| n > 0.0)
}

/// Check if a string represents a valid non-negative number
pub fn is_valid_non_negative_number(s: &str) -> bool {
    s.parse::<f64>().is_ok_and(|n| n >= 0.0)
}
