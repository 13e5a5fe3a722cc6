//! Solver configuration.
//!
//! Plain data, built by the application (the `antfarm` binary fills it from
//! command-line flags) and passed to `af_solve::Solver`.  Every struct has a
//! `Default` that reproduces the reference schedules.

// ── ReroutePolicy ─────────────────────────────────────────────────────────────

/// Congestion rerouting for ants still waiting at the start room.
///
/// When the next room on an ant's path is occupied, the scheduler may move
/// the ant onto another path of the set whose first room is free.  The
/// switch is refused when few ants remain at start (no more than the number
/// of paths) and the alternative is more than `detour_slack` rooms longer:
/// waiting one turn is then cheaper than the detour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReroutePolicy {
    /// `false` disables rerouting entirely: blocked ants always wait.
    pub enabled: bool,

    /// Extra rooms an alternative path may have before the switch is
    /// deferred.  Default: 1.
    pub detour_slack: usize,
}

impl ReroutePolicy {
    /// Should an ant on a path of `current_len` rooms move to a free path of
    /// `candidate_len` rooms, given `at_home` ants still at start and
    /// `path_count` paths in the set?
    #[inline]
    pub fn allows_switch(
        &self,
        current_len:   usize,
        candidate_len: usize,
        at_home:       usize,
        path_count:    usize,
    ) -> bool {
        !(at_home <= path_count && candidate_len > current_len + self.detour_slack)
    }
}

impl Default for ReroutePolicy {
    fn default() -> Self {
        Self { enabled: true, detour_slack: 1 }
    }
}

// ── SchedulePolicy ────────────────────────────────────────────────────────────

/// Tunable rules of one congestion-scheduler run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SchedulePolicy {
    pub reroute: ReroutePolicy,

    /// Once an ant completes a direct start→end hop in a turn, no other ant
    /// may take a direct hop in that same turn.  Only engages when the path
    /// set holds more than one path.
    pub direct_path_lock: bool,
}

impl Default for SchedulePolicy {
    fn default() -> Self {
        Self {
            reroute:          ReroutePolicy::default(),
            direct_path_lock: true,
        }
    }
}

// ── SolverConfig ──────────────────────────────────────────────────────────────

/// Top-level solver configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    /// Rules applied to every candidate path set's scheduler run.
    pub schedule: SchedulePolicy,
}
