use crate::areas::commit_graph::CommitGraph;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;
use std::collections::{HashMap, VecDeque};

/// Walks primary parents from a starting commit down to the root
#[derive(Clone, new)]
pub struct RevList<'g> {
    graph: &'g CommitGraph,
    start: ObjectId,
}

impl<'g> IntoIterator for RevList<'g> {
    type Item = anyhow::Result<(ObjectId, Commit)>;
    type IntoIter = RevListIntoIter<'g>;

    fn into_iter(self) -> Self::IntoIter {
        RevListIntoIter {
            graph: self.graph,
            current_commit_oid: Some(self.start),
        }
    }
}

#[derive(Clone)]
pub struct RevListIntoIter<'g> {
    graph: &'g CommitGraph,
    current_commit_oid: Option<ObjectId>,
}

impl Iterator for RevListIntoIter<'_> {
    type Item = anyhow::Result<(ObjectId, Commit)>;

    fn next(&mut self) -> Option<Self::Item> {
        let commit_oid = self.current_commit_oid.take()?;

        match self.graph.get_commit(&commit_oid) {
            Ok(commit) => {
                // the walk ends at the commit without a parent
                self.current_commit_oid = commit.parent().cloned();
                Some(Ok((commit_oid, commit)))
            }
            Err(error) => Some(Err(error)),
        }
    }
}

/// Every ancestor of `tip` (itself included) with its distance in edges, following
/// both primary and secondary parents
pub fn ancestors<F>(tip: &ObjectId, parents_of: F) -> anyhow::Result<HashMap<ObjectId, usize>>
where
    F: Fn(&ObjectId) -> anyhow::Result<Vec<ObjectId>>,
{
    let mut distances = HashMap::from([(tip.clone(), 0)]);
    let mut queue = VecDeque::from([tip.clone()]);

    while let Some(oid) = queue.pop_front() {
        let distance = distances[&oid];

        for parent in parents_of(&oid)? {
            if !distances.contains_key(&parent) {
                distances.insert(parent.clone(), distance + 1);
                queue.push_back(parent);
            }
        }
    }

    Ok(distances)
}
