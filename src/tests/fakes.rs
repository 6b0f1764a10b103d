use std::sync::Mutex;

use async_trait::async_trait;

use crate::client::{FeedbackStore, RecordStore, StatsSource};
use crate::error::{AdminError, AdminResult};
use crate::models::{ChatMessage, Feedback, FeedbackStatus, OverviewStats, Resource, Team, User};

/// In-memory store that can be told to fail reads or writes.
pub struct MemoryStore<R> {
    records: Mutex<Vec<R>>,
    list_error: Option<String>,
    write_error: Option<String>,
    calls: Mutex<Vec<String>>,
}

impl<R: Resource> MemoryStore<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self {
            records: Mutex::new(records),
            list_error: None,
            write_error: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_list(mut self, message: &str) -> Self {
        self.list_error = Some(message.to_string());
        self
    }

    pub fn failing_writes(mut self, message: &str) -> Self {
        self.write_error = Some(message.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn stored(&self) -> Vec<R> {
        self.records.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn write_result(&self) -> AdminResult<()> {
        match &self.write_error {
            Some(message) => Err(AdminError::HttpStatus {
                status: 500,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl<R: Resource> RecordStore<R> for MemoryStore<R> {
    async fn list(&self) -> AdminResult<Vec<R>> {
        self.record("list".to_string());
        match &self.list_error {
            Some(message) => Err(AdminError::HttpStatus {
                status: 503,
                message: message.clone(),
            }),
            None => Ok(self.stored()),
        }
    }

    async fn remove(&self, key: &str) -> AdminResult<()> {
        self.record(format!("remove {}", key));
        self.write_result()?;
        self.records.lock().unwrap().retain(|r| r.key() != key);
        Ok(())
    }
}

#[async_trait]
impl FeedbackStore for MemoryStore<Feedback> {
    async fn update_field(&self, email: &str, field: &str, value: &str) -> AdminResult<()> {
        self.record(format!("update {} {}={}", email, field, value));
        self.write_result()?;
        let status: FeedbackStatus = value.parse()?;
        if let Some(row) = self.records.lock().unwrap().iter_mut().find(|r| r.email == email) {
            row.status = status;
        }
        Ok(())
    }
}

pub struct FixedStats(pub OverviewStats);

#[async_trait]
impl StatsSource for FixedStats {
    async fn overview(&self) -> OverviewStats {
        self.0.clone()
    }
}

pub fn user(id: &str, name: &str, email: &str) -> User {
    User {
        id: id.to_string(),
        full_name: Some(name.to_string()),
        updated_at: Some("2024-05-01T10:00:00Z".to_string()),
        status: None,
        email: Some(email.to_string()),
    }
}

pub fn users(count: usize) -> Vec<User> {
    (1..=count)
        .map(|i| user(&i.to_string(), &format!("User {}", i), &format!("user{}@example.com", i)))
        .collect()
}

pub fn team(id: &str, name: &str) -> Team {
    Team {
        id: id.to_string(),
        name: Some(name.to_string()),
        is_recruiting: false,
        member_limit: None,
        created_at: None,
    }
}

pub fn chat(id: &str, content: &str) -> ChatMessage {
    ChatMessage {
        id: id.to_string(),
        conversation_id: Some("c1".to_string()),
        sender_id: Some("u1".to_string()),
        content: Some(content.to_string()),
        created_at: None,
    }
}

pub fn feedback(email: &str, text: &str, status: FeedbackStatus) -> Feedback {
    Feedback {
        email: email.to_string(),
        name: Some("Ada".to_string()),
        feedback: Some(text.to_string()),
        status,
        timestamp: None,
    }
}
