//! In-memory implementation of PromptRepository and ResponseRepository

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use playground::{
    DomainError, NewPrompt, NewResponse, Prompt, PromptRepository, Response, ResponseRepository,
};

/// One id space plus its rows. Ids come out of `next_id` and are never reused.
struct Table<T> {
    next_id: i32,
    rows: BTreeMap<i32, T>,
}

impl<T: Clone> Table<T> {
    fn new() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }

    fn insert_with(&mut self, build: impl FnOnce(i32) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let row = build(id);
        self.rows.insert(id, row.clone());
        row
    }

    /// Rows in insertion (= id) order
    fn values(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }
}

/// Mapping-based store for prompts and responses
pub struct MemoryStore {
    prompts: RwLock<Table<Prompt>>,
    responses: RwLock<Table<Response>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            prompts: RwLock::new(Table::new()),
            responses: RwLock::new(Table::new()),
        }
    }

    fn read<T>(lock: &RwLock<T>) -> Result<RwLockReadGuard<'_, T>, DomainError> {
        lock.read()
            .map_err(|e| DomainError::Repository(format!("store lock poisoned: {e}")))
    }

    fn write<T>(lock: &RwLock<T>) -> Result<RwLockWriteGuard<'_, T>, DomainError> {
        lock.write()
            .map_err(|e| DomainError::Repository(format!("store lock poisoned: {e}")))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PromptRepository for MemoryStore {
    async fn create_prompt(&self, prompt: NewPrompt) -> Result<Prompt, DomainError> {
        let mut table = Self::write(&self.prompts)?;
        Ok(table.insert_with(|id| Prompt::create(id, prompt)))
    }

    async fn get_prompt(&self, id: i32) -> Result<Option<Prompt>, DomainError> {
        Ok(Self::read(&self.prompts)?.rows.get(&id).cloned())
    }

    async fn get_prompts(&self) -> Result<Vec<Prompt>, DomainError> {
        Ok(Self::read(&self.prompts)?.values().cloned().collect())
    }

    async fn get_recent_prompts(&self, limit: usize) -> Result<Vec<Prompt>, DomainError> {
        let mut prompts: Vec<Prompt> = Self::read(&self.prompts)?.values().cloned().collect();
        // sort_by is stable: equal timestamps keep insertion order
        prompts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        prompts.truncate(limit);
        Ok(prompts)
    }
}

#[async_trait]
impl ResponseRepository for MemoryStore {
    async fn create_response(&self, response: NewResponse) -> Result<Response, DomainError> {
        let mut table = Self::write(&self.responses)?;
        Ok(table.insert_with(|id| Response::create(id, response)))
    }

    async fn get_response(&self, id: i32) -> Result<Option<Response>, DomainError> {
        Ok(Self::read(&self.responses)?.rows.get(&id).cloned())
    }

    async fn get_responses_by_prompt_id(
        &self,
        prompt_id: i32,
    ) -> Result<Vec<Response>, DomainError> {
        Ok(Self::read(&self.responses)?
            .values()
            .filter(|r| r.prompt_id == Some(prompt_id))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use playground::PromptType;
    use std::sync::Arc;

    fn new_prompt(content: &str) -> NewPrompt {
        NewPrompt::new(content, PromptType::ZeroShot, "m1")
    }

    fn new_response(prompt_id: Option<i32>, content: &str) -> NewResponse {
        NewResponse {
            prompt_id,
            model: "m1".to_string(),
            content: content.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_prompt_ids_are_sequential_from_one() {
        let store = MemoryStore::new();
        let mut last = 0;
        for i in 0..5 {
            let prompt = store.create_prompt(new_prompt(&format!("p{i}"))).await.unwrap();
            assert!(prompt.id > last);
            assert_eq!(prompt.id, i + 1);
            last = prompt.id;
        }
    }

    #[tokio::test]
    async fn test_id_spaces_are_independent() {
        let store = MemoryStore::new();
        store.create_prompt(new_prompt("a")).await.unwrap();
        store.create_prompt(new_prompt("b")).await.unwrap();
        let response = store.create_response(new_response(Some(2), "r")).await.unwrap();
        assert_eq!(response.id, 1);
    }

    #[tokio::test]
    async fn test_point_lookups() {
        let store = MemoryStore::new();
        let prompt = store.create_prompt(new_prompt("hello")).await.unwrap();
        let response = store.create_response(new_response(Some(prompt.id), "hi")).await.unwrap();

        assert_eq!(store.get_prompt(prompt.id).await.unwrap(), Some(prompt));
        assert_eq!(store.get_response(response.id).await.unwrap(), Some(response));
        assert_eq!(store.get_prompt(99).await.unwrap(), None);
        assert_eq!(store.get_response(99).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_create_response_defaults() {
        let store = MemoryStore::new();
        let response = store.create_response(new_response(None, "orphan")).await.unwrap();
        assert_eq!(response.prompt_id, None);
        assert_eq!(response.metadata, serde_json::json!({}));
        assert_eq!(response.cost, 0);
        assert_eq!(response.duration, 0);
    }

    #[tokio::test]
    async fn test_responses_by_prompt_id_with_interleaving() {
        let store = MemoryStore::new();
        let first = store.create_prompt(new_prompt("first")).await.unwrap();
        let second = store.create_prompt(new_prompt("second")).await.unwrap();

        let a = store.create_response(new_response(Some(first.id), "a")).await.unwrap();
        let b = store.create_response(new_response(Some(second.id), "b")).await.unwrap();
        let c = store.create_response(new_response(Some(first.id), "c")).await.unwrap();
        store.create_response(new_response(None, "d")).await.unwrap();

        let for_first = store.get_responses_by_prompt_id(first.id).await.unwrap();
        assert_eq!(for_first, vec![a, c]);
        let for_second = store.get_responses_by_prompt_id(second.id).await.unwrap();
        assert_eq!(for_second, vec![b]);
        assert!(store.get_responses_by_prompt_id(42).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_recent_prompts_newest_first_and_limited() {
        let store = MemoryStore::new();
        for i in 0..5 {
            store.create_prompt(new_prompt(&format!("p{i}"))).await.unwrap();
            tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        }

        let recent = store.get_recent_prompts(3).await.unwrap();
        assert_eq!(recent.len(), 3);
        assert!(recent.windows(2).all(|w| w[0].created_at >= w[1].created_at));
        assert_eq!(recent[0].content, "p4");

        let all = store.get_recent_prompts(100).await.unwrap();
        assert_eq!(all.len(), 5);
        assert!(store.get_recent_prompts(0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_recent_prompts_ties_keep_insertion_order() {
        let store = MemoryStore::new();
        let stamp = Prompt::create(0, new_prompt("seed")).created_at;
        {
            let mut table = store.prompts.write().unwrap();
            for content in ["a", "b", "c"] {
                table.insert_with(|id| Prompt {
                    created_at: stamp,
                    ..Prompt::create(id, new_prompt(content))
                });
            }
        }

        let recent = store.get_recent_prompts(10).await.unwrap();
        let ids: Vec<i32> = recent.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        let newer = store.create_prompt(new_prompt("d")).await.unwrap();
        let recent = store.get_recent_prompts(2).await.unwrap();
        assert_eq!(recent[0].id, newer.id);
        assert_eq!(recent[1].id, 1);
    }

    #[tokio::test]
    async fn test_get_prompts_in_insertion_order() {
        let store = MemoryStore::new();
        store.create_prompt(new_prompt("a")).await.unwrap();
        store.create_prompt(new_prompt("b")).await.unwrap();
        let contents: Vec<String> = store
            .get_prompts()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.content)
            .collect();
        assert_eq!(contents, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_concurrent_creates_never_share_ids() {
        let store = Arc::new(MemoryStore::new());
        let mut handles = Vec::new();
        for i in 0..32 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.create_prompt(new_prompt(&format!("p{i}"))).await.unwrap().id
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();
        assert_eq!(ids, (1..=32).collect::<Vec<_>>());
    }
}
