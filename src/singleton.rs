// Singleton Pattern - a lazily-initialized, process-wide connection handle.
// OnceLock guarantees exactly one construction even when multiple threads
// race on first access.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

static CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

pub struct DatabaseConnection {
    connection_string: String,
}

impl DatabaseConnection {
    /// Returns the sole instance, constructing it on the very first call.
    pub fn instance() -> &'static DatabaseConnection {
        static INSTANCE: OnceLock<DatabaseConnection> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst);
            println!("Opening database connection");
            DatabaseConnection {
                connection_string: "db://local".to_string(),
            }
        })
    }

    /// Echoes the query. No real connection behind this.
    pub fn execute_query(&self, text: &str) -> String {
        let line = format!("Executing query: {}", text);
        println!("{}", line);
        line
    }

    pub fn connection_string(&self) -> &str {
        &self.connection_string
    }

    /// How many times the constructor has run. Stays at 1 for the
    /// process lifetime once `instance` has been called.
    pub fn construction_count() -> usize {
        CONSTRUCTIONS.load(Ordering::SeqCst)
    }
}

pub fn demo() {
    let first = DatabaseConnection::instance();
    first.execute_query("SELECT * FROM users");

    let second = DatabaseConnection::instance();
    second.execute_query("SELECT * FROM orders");

    println!(
        "Same instance: {}",
        std::ptr::eq(first, second)
    );
}
