//! Invalidation cascades
//!
//! A successful mutation is described by its logical [`Effect`]; the effect
//! decides which key prefixes can no longer be trusted.
//!
//! | Effect | Invalidated prefixes |
//! |---|---|
//! | `Created` | domain lists |
//! | `CreatedChild` | child lists, child-by-parent(parent id), parent lists |
//! | `Modified` (update, approve, delete) | the whole domain |
//! | `Analyzed` | results(id) and not-implemented(id) only |

use super::key::{KeySpace, NOT_IMPLEMENTED_SCOPE, QueryKey, RESULTS_SCOPE};
use super::store::ResourceCache;

/// Logical effect of a completed mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// A top-level resource was created
    Created { space: KeySpace },

    /// A child resource was created under `parent_id`; aggregate views of
    /// the parent domain may roll up children
    CreatedChild {
        child: KeySpace,
        parent: KeySpace,
        parent_id: String,
    },

    /// A resource was updated or deleted
    Modified { space: KeySpace },

    /// An analysis ran (or its item statuses changed) for `id`
    Analyzed { space: KeySpace, id: String },
}

impl Effect {
    /// Prefixes to evict, in order.
    pub fn targets(&self) -> Vec<QueryKey> {
        match self {
            Effect::Created { space } => vec![space.lists()],
            Effect::CreatedChild {
                child,
                parent,
                parent_id,
            } => vec![
                child.lists(),
                child.by_parent(*parent, parent_id),
                parent.lists(),
            ],
            Effect::Modified { space } => vec![space.root()],
            Effect::Analyzed { space, id } => vec![
                space.scoped(RESULTS_SCOPE, id),
                space.scoped(NOT_IMPLEMENTED_SCOPE, id),
            ],
        }
    }
}

/// Apply `effect` to `cache`. Returns the number of entries evicted.
pub fn invalidate(cache: &ResourceCache, effect: &Effect) -> usize {
    let targets = effect.targets();
    let removed = cache.invalidate(&targets);
    log::debug!("{:?} invalidated {} cache entries", effect, removed);
    removed
}
