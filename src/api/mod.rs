pub mod client;
pub mod filter;
mod franchise;
mod order;
pub mod types;
mod user;

pub use client::*;
pub use filter::NameFilter;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;
