//! Database connection cleanup utilities.
//!
//! This module provides helpers for properly closing database connections
//! during graceful shutdown.

use tracing::{error, info};

/// Cleanup handler for PostgreSQL connections (SeaORM).
///
/// SeaORM's `DatabaseConnection` closes automatically on drop, but
/// we explicitly close it to ensure proper cleanup logging.
///
/// # Example
/// ```ignore
/// use axum_helpers::server::close_postgres;
///
/// close_postgres(db, "main").await;
/// ```
pub async fn close_postgres(db: sea_orm::DatabaseConnection, name: &str) {
    match db.close().await {
        Ok(_) => info!("PostgreSQL connection '{}' closed successfully", name),
        Err(e) => error!("Error closing PostgreSQL connection '{}': {}", name, e),
    }
}

/// Generic cleanup coordinator for multiple cleanup tasks.
///
/// Spawns each task when added and waits for all of them in `run`.
///
/// # Example
/// ```ignore
/// use axum_helpers::server::{CleanupCoordinator, close_postgres};
///
/// let mut cleanup = CleanupCoordinator::new();
/// cleanup.add_task("postgres", close_postgres(db, "main"));
/// cleanup.run().await;
/// ```
pub struct CleanupCoordinator {
    tasks: Vec<(&'static str, tokio::task::JoinHandle<()>)>,
}

impl CleanupCoordinator {
    /// Create a new cleanup coordinator.
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Add a cleanup task with a name.
    ///
    /// The task is spawned immediately and tracked for completion.
    pub fn add_task<F>(&mut self, name: &'static str, task: F)
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(task);
        self.tasks.push((name, handle));
    }

    /// Wait for all cleanup tasks to complete.
    ///
    /// If a task panics it is logged but does not stop other tasks.
    pub async fn run(self) {
        info!("Running {} cleanup tasks", self.tasks.len());

        for (name, handle) in self.tasks {
            match handle.await {
                Ok(_) => {
                    info!("Cleanup task '{}' completed successfully", name);
                }
                Err(e) => {
                    error!("Cleanup task '{}' failed: {}", name, e);
                }
            }
        }

        info!("All cleanup tasks completed");
    }
}

impl Default for CleanupCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_run_awaits_all_tasks() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut cleanup = CleanupCoordinator::new();

        for name in ["first", "second", "third"] {
            let counter = Arc::clone(&counter);
            cleanup.add_task(name, async move {
                counter.fetch_add(1, Ordering::SeqCst);
            });
        }

        cleanup.run().await;

        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_panicking_task_does_not_stop_others() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut cleanup = CleanupCoordinator::new();

        cleanup.add_task("panicking", async {
            panic!("cleanup failure");
        });
        {
            let counter = Arc::clone(&counter);
            cleanup.add_task("surviving", async move {
                counter.fetch_add(1, Ordering::SeqCst);
            });
        }

        cleanup.run().await;

        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }
}
