//! Domain traits (ports)

mod store;

pub use store::{PointStore, StoreResult};
