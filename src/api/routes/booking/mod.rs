pub mod event;
mod router;
pub use router::router;
pub mod public;
