//! Load tracking for embedded pages.
//!
//! # Design
//! - The indicator shows until the first load signal and never returns.
//! - A timeout only exists when the host configures one.

/// Presentation state of an embedded page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    /// Waiting for the page to signal completion.
    #[default]
    Loading,
    /// The page reported it finished loading.
    Loaded,
    /// The configured timeout elapsed first.
    TimedOut,
}

/// Inputs that move a [`LoadState`] forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadEvent {
    /// The embedded page fired its load event.
    Loaded,
    /// The configured timeout elapsed.
    TimedOut,
}

impl LoadState {
    /// Apply `event`; terminal states never go back to [`LoadState::Loading`].
    #[must_use]
    pub const fn apply(self, event: LoadEvent) -> Self {
        match (self, event) {
            (_, LoadEvent::Loaded) => Self::Loaded,
            (Self::Loading, LoadEvent::TimedOut) => Self::TimedOut,
            (state, LoadEvent::TimedOut) => state,
        }
    }

    /// Returns `true` while the loading overlay should be visible.
    #[must_use]
    pub const fn shows_indicator(self) -> bool {
        matches!(self, Self::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_dismisses_indicator_permanently() {
        let state = LoadState::default();
        assert!(state.shows_indicator());
        let loaded = state.apply(LoadEvent::Loaded);
        assert_eq!(loaded, LoadState::Loaded);
        assert!(!loaded.shows_indicator());
        assert_eq!(loaded.apply(LoadEvent::TimedOut), LoadState::Loaded);
    }

    #[test]
    fn timeout_only_fires_while_loading() {
        let timed_out = LoadState::Loading.apply(LoadEvent::TimedOut);
        assert_eq!(timed_out, LoadState::TimedOut);
        assert!(!timed_out.shows_indicator());
        assert_eq!(timed_out.apply(LoadEvent::Loaded), LoadState::Loaded);
    }

    #[test]
    fn indicator_never_returns_after_dismissal() {
        let events = [LoadEvent::Loaded, LoadEvent::TimedOut];
        for terminal in [LoadState::Loaded, LoadState::TimedOut] {
            let mut state = terminal;
            for event in events.iter().cycle().take(6) {
                state = state.apply(*event);
                assert_ne!(state, LoadState::Loading);
                assert!(!state.shows_indicator());
            }
        }
    }
}
