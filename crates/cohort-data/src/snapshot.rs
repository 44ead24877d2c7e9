//! Latest group-list snapshot, guarded by fetch generations.
//!
//! Every load begins a new generation. Only the most recently begun generation
//! may publish its outcome, so a slow, superseded load can never overwrite the
//! result of a newer one.

use cohort_core::AssembledGroup;

/// Token identifying one load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchGeneration(u64);

/// What the list currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum GroupListState {
    /// Nothing has been published yet.
    Loading,
    Loaded(Vec<AssembledGroup>),
    /// The latest load failed; the list renders empty.
    Failed { message: String },
}

#[derive(Debug)]
pub struct GroupListCache {
    latest: u64,
    state: GroupListState,
}

impl Default for GroupListCache {
    fn default() -> Self {
        Self::new()
    }
}

impl GroupListCache {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            latest: 0,
            state: GroupListState::Loading,
        }
    }

    /// Start a load, superseding every earlier one.
    pub const fn begin(&mut self) -> FetchGeneration {
        self.latest += 1;
        FetchGeneration(self.latest)
    }

    /// Publish the outcome of load `generation`.
    ///
    /// Returns `false` (and leaves the state untouched) if a newer load has begun.
    pub fn commit<E: std::fmt::Display>(
        &mut self,
        generation: FetchGeneration,
        outcome: &Result<Vec<AssembledGroup>, E>,
    ) -> bool {
        if generation.0 != self.latest {
            tracing::debug!(
                stale = generation.0,
                latest = self.latest,
                "dropping superseded group list"
            );
            return false;
        }
        self.state = match outcome {
            Ok(groups) => GroupListState::Loaded(groups.clone()),
            Err(error) => GroupListState::Failed {
                message: error.to_string(),
            },
        };
        true
    }

    #[must_use]
    pub const fn state(&self) -> &GroupListState {
        &self.state
    }

    /// Groups to render: empty unless the latest load succeeded.
    #[must_use]
    pub fn groups(&self) -> &[AssembledGroup] {
        match &self.state {
            GroupListState::Loaded(groups) => groups,
            GroupListState::Loading | GroupListState::Failed { .. } => &[],
        }
    }
}
