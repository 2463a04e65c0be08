// Demo driver: runs all six pattern demos sequentially. The patterns are
// independent; this binary only composes them for illustration.

use design_patterns::{adapter, decorator, factory, observer, singleton, strategy};

fn main() {
    println!("Classic Design Patterns");
    println!("=======================\n");

    println!("=== Observer Pattern ===");
    observer::demo();
    println!();

    println!("=== Strategy Pattern ===");
    strategy::demo();
    println!();

    println!("=== Singleton Pattern ===");
    singleton::demo();
    println!();

    println!("=== Factory Pattern ===");
    factory::demo();
    println!();

    println!("=== Adapter Pattern ===");
    adapter::demo();
    println!();

    println!("=== Decorator Pattern ===");
    decorator::demo();
}
