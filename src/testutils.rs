use std::sync::{
    atomic::{AtomicBool, AtomicU64, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;

use crate::{
    backend::{decode_feed, SlotBackend},
    error::FetchError,
    types::Slot,
};

pub struct MockSlotBackendInner {
    pub success: AtomicBool,
    pub calls_to_fetch_slots: AtomicU64,
    pub slots: Mutex<Vec<Slot>>,
}

#[derive(Clone)]
pub struct MockSlotBackend(pub Arc<MockSlotBackendInner>);

impl MockSlotBackendInner {
    fn new() -> Self {
        Self {
            success: AtomicBool::new(true),
            calls_to_fetch_slots: AtomicU64::default(),
            slots: Mutex::default(),
        }
    }
}

impl MockSlotBackend {
    pub fn new() -> Self {
        Self(Arc::new(MockSlotBackendInner::new()))
    }

    /// Mock serving `feed`, given in the upstream JSON format.
    pub fn with_feed(feed: &str) -> Self {
        let backend = Self::new();
        *backend.0.slots.lock().unwrap() = decode_feed(feed.as_bytes()).unwrap();
        backend
    }
}

#[async_trait]
impl SlotBackend for MockSlotBackend {
    async fn fetch_slots(&self) -> Result<Vec<Slot>, FetchError> {
        self.0.calls_to_fetch_slots.fetch_add(1, Ordering::SeqCst);
        match self.0.success.load(Ordering::SeqCst) {
            true => Ok(self.0.slots.lock().unwrap().clone()),
            false => Err(FetchError::Decode("API failure".into())),
        }
    }
}
