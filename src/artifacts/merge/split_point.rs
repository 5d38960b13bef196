//! Split point search
//!
//! The split point of a merge is the common ancestor the three-way comparison is made
//! against. Two strategies are available:
//!
//! - **Best common ancestor** (default): a common ancestor that is not an ancestor of
//!   any other common ancestor. Criss-cross histories can have several; the one with
//!   the latest timestamp wins, then the one closest to the current tip.
//! - **Latest timestamp**: among every commit reachable from both tips, the one with
//!   the latest timestamp, whether or not it is the closest.
//!
//! Both traverse primary and secondary parents iteratively, so arbitrarily deep
//! histories never recurse.

use crate::artifacts::core::config::MergeBaseStrategy;
use crate::artifacts::log::rev_list::ancestors;
use crate::artifacts::objects::commit::SlimCommit;
use crate::artifacts::objects::object_id::ObjectId;
use bitflags::bitflags;
use log::debug;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

bitflags! {
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    struct VisitState: u8 {
        const NONE = 0b00;
        const VISITED_FROM_CURRENT = 0b01;
        const VISITED_FROM_OTHER = 0b10;
        const VISITED_FROM_BOTH = Self::VISITED_FROM_CURRENT.bits() | Self::VISITED_FROM_OTHER.bits();
        const STALE = 0b100; // reachable from another common ancestor
    }
}

impl fmt::Debug for VisitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut flags = Vec::new();
        if self.contains(VisitState::VISITED_FROM_CURRENT) {
            flags.push("CURRENT");
        }
        if self.contains(VisitState::VISITED_FROM_OTHER) {
            flags.push("OTHER");
        }
        if self.contains(VisitState::STALE) {
            flags.push("STALE");
        }
        if flags.is_empty() {
            write!(f, "NONE")
        } else {
            write!(f, "{}", flags.join("|"))
        }
    }
}

pub struct SplitPointFinder<CommitLoaderFn>
where
    CommitLoaderFn: Fn(&ObjectId) -> anyhow::Result<SlimCommit>,
{
    commit_loader: CommitLoaderFn,
    strategy: MergeBaseStrategy,
    cache: RefCell<HashMap<ObjectId, SlimCommit>>,
}

impl<CommitLoaderFn> SplitPointFinder<CommitLoaderFn>
where
    CommitLoaderFn: Fn(&ObjectId) -> anyhow::Result<SlimCommit>,
{
    pub fn new(commit_loader: CommitLoaderFn, strategy: MergeBaseStrategy) -> Self {
        Self {
            commit_loader,
            strategy,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Split point of `current` and `other`, `None` for unrelated histories
    pub fn find(&self, current: &ObjectId, other: &ObjectId) -> anyhow::Result<Option<ObjectId>> {
        let from_current = ancestors(current, |oid| Ok(self.load(oid)?.parents))?;
        let from_other = ancestors(other, |oid| Ok(self.load(oid)?.parents))?;

        let mut states = HashMap::<ObjectId, VisitState>::new();
        for oid in from_current.keys() {
            *states.entry(oid.clone()).or_insert(VisitState::NONE) |= VisitState::VISITED_FROM_CURRENT;
        }
        for oid in from_other.keys() {
            *states.entry(oid.clone()).or_insert(VisitState::NONE) |= VisitState::VISITED_FROM_OTHER;
        }

        let common = states
            .iter()
            .filter(|(_, state)| state.contains(VisitState::VISITED_FROM_BOTH))
            .map(|(oid, _)| oid.clone())
            .collect::<Vec<_>>();

        let candidates = match self.strategy {
            MergeBaseStrategy::LatestTimestamp => common,
            MergeBaseStrategy::BestCommonAncestor => {
                self.mark_stale(&common, &mut states)?;
                common
                    .into_iter()
                    .filter(|oid| !states[oid].contains(VisitState::STALE))
                    .collect()
            }
        };

        debug!(
            "split point candidates of {current} and {other}: {}",
            candidates
                .iter()
                .map(|oid| format!("{oid} {:?}", states[oid]))
                .collect::<Vec<_>>()
                .join(", ")
        );

        let mut best: Option<(SlimCommit, usize)> = None;
        for oid in candidates {
            let commit = self.load(&oid)?;
            let distance = from_current[&oid];

            let better = match &best {
                None => true,
                Some((best_commit, best_distance)) => {
                    (commit.timestamp, std::cmp::Reverse(distance), std::cmp::Reverse(&commit.oid))
                        > (
                            best_commit.timestamp,
                            std::cmp::Reverse(*best_distance),
                            std::cmp::Reverse(&best_commit.oid),
                        )
                }
            };
            if better {
                best = Some((commit, distance));
            }
        }

        Ok(best.map(|(commit, _)| commit.oid))
    }

    /// Mark everything strictly below a common ancestor as stale
    fn mark_stale(
        &self,
        common: &[ObjectId],
        states: &mut HashMap<ObjectId, VisitState>,
    ) -> anyhow::Result<()> {
        let mut stack = Vec::new();
        for oid in common {
            stack.extend(self.load(oid)?.parents);
        }

        while let Some(oid) = stack.pop() {
            let state = states.entry(oid.clone()).or_insert(VisitState::NONE);
            if state.contains(VisitState::STALE) {
                continue;
            }
            *state |= VisitState::STALE;

            stack.extend(self.load(&oid)?.parents);
        }

        Ok(())
    }

    fn load(&self, oid: &ObjectId) -> anyhow::Result<SlimCommit> {
        if let Some(commit) = self.cache.borrow().get(oid) {
            return Ok(commit.clone());
        }

        let commit = (self.commit_loader)(oid)?;
        self.cache.borrow_mut().insert(oid.clone(), commit.clone());

        Ok(commit)
    }
}
