// ── Domain store ──
//
// Cached backend state plus the actions that refresh it.

mod network_store;

pub use network_store::{NetworkStore, StoreSnapshot};
