#![allow(dead_code)]

use kb_config::ValidationConfig;
use kb_core::{Author, Project};
use kb_services::{
    KanbanBoard, ProjectService, RecordingNotifier, ServiceContext, Simulator, Validator,
};
use kb_store::{KeyValueStore, MemoryStore, SharedStore, StoreResult, UpdateFn};

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

// =========================================================================
// Stores
// =========================================================================

/// Memory store that counts every write, including those made through
/// `update`.
#[derive(Default)]
pub struct CountingStore {
    inner: MemoryStore,
    writes: AtomicUsize,
}

impl CountingStore {
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl KeyValueStore for CountingStore {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        self.inner.read(key)
    }

    fn write(&self, key: &str, value: &str) -> StoreResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.write(key, value)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.remove(key)
    }

    fn keys(&self) -> StoreResult<Vec<String>> {
        self.inner.keys()
    }

    fn update(&self, key: &str, f: &mut UpdateFn<'_>) -> StoreResult<()> {
        let writes = &self.writes;
        self.inner.update(key, &mut |current: Option<&str>| {
            let next = f(current)?;
            if next.is_some() {
                writes.fetch_add(1, Ordering::SeqCst);
            }
            Ok(next)
        })
    }
}

// =========================================================================
// Test Fixtures
// =========================================================================

pub struct TestFixture {
    pub store: Arc<CountingStore>,
    pub notifier: Arc<RecordingNotifier>,
    pub ctx: ServiceContext,
}

impl TestFixture {
    pub fn new() -> Self {
        Self::with_simulator(Simulator::instant())
    }

    pub fn with_simulator(simulator: Simulator) -> Self {
        let store = Arc::new(CountingStore::default());
        let notifier = Arc::new(RecordingNotifier::new());
        let shared: SharedStore = store.clone();
        let ctx = ServiceContext::new(shared, simulator, notifier.clone());
        Self {
            store,
            notifier,
            ctx,
        }
    }

    /// Context over the same store whose every call fails.
    pub fn failing_ctx(&self) -> ServiceContext {
        let shared: SharedStore = self.store.clone();
        ServiceContext::new(
            shared,
            Simulator::instant().with_failure_rate(1.0),
            self.notifier.clone(),
        )
    }

    pub async fn create_project(&self, name: &str) -> Project {
        ProjectService::new(self.ctx.clone())
            .create(name.to_string(), None, None)
            .await
            .expect("Failed to create test project")
    }

    pub fn board(&self, project_id: uuid::Uuid) -> KanbanBoard {
        KanbanBoard::new(self.ctx.clone(), Validator::default(), test_author(), project_id)
    }

    /// Board loaded for a fresh project.
    pub async fn loaded_board(&self) -> KanbanBoard {
        let project = self.create_project("Test Project").await;
        let mut board = self.board(project.id);
        board.load().await.expect("Failed to load board");
        board
    }
}

pub fn test_author() -> Author {
    Author::new("u1", "Ada")
}

pub fn strict_validator() -> Validator {
    Validator::new(ValidationConfig {
        max_title_length: 10,
        ..ValidationConfig::default()
    })
}
