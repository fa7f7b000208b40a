//! Service-worker update state behind the update prompt.
//!
//! DESIGN
//! ======
//! Transitions are plain methods so the browser glue in `util::pwa` only
//! reports events and the prompt component only reads flags.

#[cfg(test)]
#[path = "pwa_test.rs"]
mod pwa_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PwaState {
    /// A new worker is waiting to take over.
    pub need_refresh: bool,
    /// First install finished; the app works offline.
    pub offline_ready: bool,
    /// The user accepted the update and activation is in flight.
    pub updating: bool,
    /// A new worker is still installing; nothing is waiting yet.
    pub installing: bool,
}

impl PwaState {
    /// A worker started installing. The prompt stays hidden until it
    /// reaches the `installed` state.
    pub fn on_update_found(&mut self) {
        self.installing = true;
    }

    /// A worker finished installing and is waiting. With an active
    /// controller this is an update; without one it is the first install.
    pub fn on_installed(&mut self, has_controller: bool) {
        self.installing = false;
        if has_controller {
            self.need_refresh = true;
        } else {
            self.offline_ready = true;
        }
    }

    /// The installing worker went redundant before it could wait.
    pub fn on_install_abandoned(&mut self) {
        self.installing = false;
    }

    /// Start applying the update. Returns `false` when there is nothing to
    /// apply or an update is already running.
    pub fn begin_update(&mut self) -> bool {
        if !self.need_refresh || self.updating {
            return false;
        }
        self.updating = true;
        true
    }

    pub fn update_failed(&mut self) {
        self.updating = false;
    }

    /// "Later": hide the prompt until the next update is found.
    pub fn dismiss(&mut self) {
        if !self.updating {
            self.need_refresh = false;
        }
    }

    pub fn show_prompt(&self) -> bool {
        self.need_refresh
    }
}
