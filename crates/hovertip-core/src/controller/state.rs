use crate::surface::TimerId;

/// Wrapper and content are mounted together or not at all.
#[derive(Debug, Clone)]
pub(super) struct Nodes<N> {
    pub wrapper: N,
    pub content: N,
}

#[derive(Debug)]
pub(super) struct State<N> {
    pub nodes: Option<Nodes<N>>,
    /// Bumped on every mount; hide completions only destroy their own mount.
    pub generation: u64,
    pub showing_timer: Option<TimerId>,
    pub hiding_timer: Option<TimerId>,
    pub last_enter_ms: Option<f64>,
    pub last_leave_ms: Option<f64>,
}

impl<N> Default for State<N> {
    fn default() -> Self {
        Self {
            nodes: None,
            generation: 0,
            showing_timer: None,
            hiding_timer: None,
            last_enter_ms: None,
            last_leave_ms: None,
        }
    }
}

/// Whether `since` lies less than `delay_ms` before `now`.
pub(super) fn within(since: Option<f64>, now: f64, delay_ms: u32) -> bool {
    since.is_some_and(|t| now - t < f64::from(delay_ms))
}
