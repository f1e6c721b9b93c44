//! In-memory host for tests: a tiny document tree and a virtual-time
//! scheduler. Enabled under `cfg(test)` and by the `testing` feature.

mod scheduler;
mod surface;

pub use scheduler::ManualScheduler;
pub use surface::{FakeNode, FakeSurface};
