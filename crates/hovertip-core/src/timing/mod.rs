//! Debounce and throttle wrappers.
//!
//! Both wrap a `Fn(A)` and hand the argument of the call that eventually
//! runs to it. `A` carries whatever the caller needs forwarded: a receiver,
//! an argument list, or `()`.
//!
//! Pending invocations hold only a weak reference to the wrapper, so
//! dropping every handle to a wrapper silently discards its pending call.

mod debounce;
mod throttle;

pub use debounce::{debounce, Debounced};
pub use throttle::{throttle, Throttled};
