//! Where blocking ingestion work runs.

/// A unit of background work.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Runs ingestion tasks away from the caller.
pub trait TaskSpawner: Send + Sync {
    fn spawn(&self, task: Task);
}

/// Runs tasks on the rayon global pool. Used by the application.
pub struct RayonSpawner;

impl TaskSpawner for RayonSpawner {
    fn spawn(&self, task: Task) {
        rayon::spawn(task);
    }
}

/// Runs tasks immediately on the calling thread. Used headless and in tests.
pub struct InlineSpawner;

impl TaskSpawner for InlineSpawner {
    fn spawn(&self, task: Task) {
        task();
    }
}
