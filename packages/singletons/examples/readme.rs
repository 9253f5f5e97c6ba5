//! Example that demonstrates the exact usage shown in the README.md file.
//!
//! This shows how a shared registry hands every caller the same instance.

use std::sync::Arc;
use std::thread;

use singletons::SingletonRegistry;

struct ConnectionPool {
    url: String,
}

fn main() {
    println!("=== Singletons README Example ===");

    let registry = Arc::new(SingletonRegistry::new());

    let pool = registry.get_or_init(|| ConnectionPool {
        url: "postgres://localhost".to_string(),
    });
    println!("initialized a connection pool for {}", pool.url);

    let workers: Vec<_> = (0..4)
        .map(|worker| {
            let registry = Arc::clone(&registry);
            let original = Arc::clone(&pool);

            thread::spawn(move || {
                // The pool already exists here, so the closure is never invoked.
                let pool: Arc<ConnectionPool> = registry.get_or_init(|| unreachable!());

                assert!(Arc::ptr_eq(&pool, &original));
                println!("worker {worker} sees the same pool for {}", pool.url);
            })
        })
        .collect();

    for worker in workers {
        worker.join().unwrap();
    }

    println!("README example completed successfully!");
}
