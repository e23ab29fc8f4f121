// Library exports for integration tests and reusable components

// Internal modules needed for compilation (hidden from docs)
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod ui;

// Re-export AppContext at crate root for easier access
pub use ui::AppContext;

pub mod catalog;
pub mod models;
pub mod omdb;
pub mod search;

// Test support (only available with test-utils feature)
#[cfg(feature = "test-utils")]
pub mod test_support;
