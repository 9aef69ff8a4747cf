//! Test double for CompletionProvider: records every request and answers
//! from a canned per-model script.

#[cfg(test)]
mod stub {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use playground::{Completion, CompletionProvider, CompletionRequest, DomainError};

    pub struct StubCompletion {
        failures: HashMap<String, u16>,
        calls: Mutex<Vec<CompletionRequest>>,
    }

    impl StubCompletion {
        /// Succeeds for every model, echoing `answer from <model>`
        pub fn new() -> Self {
            Self {
                failures: HashMap::new(),
                calls: Mutex::new(Vec::new()),
            }
        }

        /// Answer calls for `model` with an upstream error status
        pub fn failing_for(mut self, model: &str, status: u16) -> Self {
            self.failures.insert(model.to_string(), status);
            self
        }

        pub fn calls(&self) -> Vec<CompletionRequest> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CompletionProvider for StubCompletion {
        async fn complete(&self, request: &CompletionRequest) -> Result<Completion, DomainError> {
            self.calls.lock().unwrap().push(request.clone());

            if let Some(status) = self.failures.get(&request.model) {
                return Err(DomainError::Upstream {
                    status: *status,
                    reason: "stubbed failure".to_string(),
                });
            }

            Ok(Completion {
                content: format!("answer from {}", request.model),
                metadata: serde_json::json!({ "model": request.model, "usage": { "total_tokens": 10 } }),
                cost: 20,
                duration: 5,
            })
        }

        fn provider_name(&self) -> &str {
            "stub"
        }
    }
}

#[cfg(test)]
pub use stub::StubCompletion;
