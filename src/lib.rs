//! # Classic Design Patterns in Rust
//!
//! This crate demonstrates six classic object-oriented design patterns,
//! each as an independent, self-contained module:
//!
//! ## Behavioral Patterns
//! - Observer: a weather station broadcasting readings to subscribers
//! - Strategy: a sort context delegating to interchangeable algorithms
//!
//! ## Creational Patterns
//! - Singleton: a lazily-initialized, process-wide connection handle
//! - Factory: mapping a string key to a concrete shape
//!
//! ## Structural Patterns
//! - Adapter: bridging a modern payment interface onto a legacy gateway
//! - Decorator: layering add-ons around a base beverage
//!
//! No module depends on another; the demo driver composes all six
//! sequentially for illustration only.
//!
//! Run the full demo with: `cargo run --bin patterns_demo`

pub mod adapter;
pub mod decorator;
pub mod factory;
pub mod observer;
pub mod singleton;
pub mod strategy;
