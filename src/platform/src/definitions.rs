use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use chrono::DateTime;
use chrono::Utc;
use chrono_tz::Tz;
use common::messages::Messages;
use serde::Deserialize;
use serde::Serialize;
use storage::Entry;
use storage::Provider;
use tokio::sync::RwLock;
use tracing::debug;
use tracing::info;

use crate::PlatformError;
use crate::Result;

/// The dictionary service: in-memory word list, its backing store and the request counter.
pub struct Definitions {
    store: Arc<dyn Provider>,
    entries: RwLock<Vec<Entry>>,
    requests: AtomicU64,
    messages: Arc<Messages>,
    timezone: Tz,
}

impl Definitions {
    /// Loads the persisted dictionary. A malformed store is an error.
    pub fn try_new(store: Arc<dyn Provider>, messages: Arc<Messages>, timezone: Tz) -> Result<Self> {
        let entries = store.load()?;

        Ok(Self {
            store,
            entries: RwLock::new(entries),
            requests: AtomicU64::new(0),
            messages,
            timezone,
        })
    }

    /// Counts one more request to the endpoint and returns its number.
    pub fn next_request_number(&self) -> u64 {
        self.requests.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn requests(&self) -> u64 {
        self.requests.load(Ordering::SeqCst)
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    pub async fn entries(&self) -> Vec<Entry> {
        self.entries.read().await.clone()
    }

    pub async fn get(&self, num_req: u64, word: Option<&str>) -> Result<String> {
        let word = match word {
            Some(word) if !word.is_empty() => word,
            _ => {
                debug!("request #{num_req}: missing word");
                return Err(PlatformError::BadRequest(
                    self.messages.get_req_invalid_msg.clone(),
                ));
            }
        };

        let entries = self.entries.read().await;
        match entries.iter().find(|entry| entry.word == word) {
            Some(entry) => Ok(entry.definition.clone()),
            None => {
                debug!("request #{num_req}: word {word:?} not found");
                Err(PlatformError::NotFound(
                    self.messages.word_not_found(num_req, word),
                ))
            }
        }
    }

    /// Adds a new word. The in-memory list changes only once the store accepted the new list.
    pub async fn create(
        &self,
        num_req: u64,
        request: CreateDefinitionRequest,
    ) -> Result<CreateDefinitionResponse> {
        let (word, definition) = match (request.word, request.definition) {
            (Some(word), Some(definition)) if !word.is_empty() && !definition.is_empty() => {
                (word, definition)
            }
            _ => {
                debug!("request #{num_req}: missing word or definition");
                return Err(PlatformError::BadRequest(
                    self.messages.post_req_invalid_msg.clone(),
                ));
            }
        };

        let mut entries = self.entries.write().await;
        if entries.iter().any(|entry| entry.word == word) {
            debug!("request #{num_req}: word {word:?} already exists");
            return Err(PlatformError::Conflict(self.messages.word_exists(&word)));
        }

        let mut updated = Vec::with_capacity(entries.len() + 1);
        updated.extend_from_slice(&entries);
        updated.push(Entry::new(word.clone(), definition.clone()));
        updated.sort_by(|a, b| a.word.cmp(&b.word));

        let store = self.store.clone();
        let updated = tokio::task::spawn_blocking(move || {
            store.save(&updated)?;
            Ok::<_, PlatformError>(updated)
        })
        .await??;
        *entries = updated;
        info!("request #{num_req}: added word {word:?}, definition {definition:?}");

        Ok(CreateDefinitionResponse {
            num_req,
            date: format_date(Utc::now(), self.timezone),
            total_words: entries.len(),
            word,
            definition,
        })
    }
}

/// Short en-US date (`Oct 18, 2026`) in the given timezone.
pub fn format_date(now: DateTime<Utc>, tz: Tz) -> String {
    now.with_timezone(&tz).format("%b %-d, %Y").to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct CreateDefinitionRequest {
    pub word: Option<String>,
    pub definition: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateDefinitionResponse {
    pub num_req: u64,
    pub date: String,
    pub total_words: usize,
    pub word: String,
    pub definition: String,
}
