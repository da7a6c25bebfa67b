mod batch;
mod manager;

pub use batch::{BatchCoordinator, BatchOutcome};
pub use manager::UserManager;
