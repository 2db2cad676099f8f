use super::RangeNormalizer;
use crate::dependency_resolution::domain::{
    PackageRef, ResolutionTable, ResolvedPackage, SourceList, VisitKey, VisitedSet,
};
use crate::ports::outbound::{DependencyRepository, SourceLookup};
use crate::shared::error::LookupError;
use futures::stream::{self, StreamExt};
use std::collections::{HashMap, HashSet};

type FetchOutcome = Result<SourceLookup, LookupError>;

/// Things the engine reports while it walks the graph
#[derive(Debug)]
pub enum ResolutionEvent<'a> {
    /// A package is about to be expanded; `visited` counts claimed keys so far
    Visiting {
        package: &'a PackageRef,
        visited: usize,
    },
    /// A source was skipped while looking up a package
    SourceSkipped(&'a LookupError),
    /// A declared dependency was left out because its id is unusable
    DependencyRejected(&'a LookupError),
    /// No source could answer for a package; it is recorded without dependencies
    LookupFailed(&'a LookupError),
}

/// Pending visit on the worklist
struct Pending {
    package: PackageRef,
    /// Roots are visited even when their id is already in the table
    is_root: bool,
}

/// Traversal state owned by one `resolve` call
#[derive(Default)]
struct Traversal {
    visited: VisitedSet,
    table: ResolutionTable,
    prefetched: HashMap<VisitKey, FetchOutcome>,
}

/// ResolutionEngine walks the dependency graph from the root references.
///
/// The walk is depth-first and driven by an explicit worklist. For every
/// package it:
/// 1. skips the `(lowercased id, version)` key if already visited,
/// 2. claims the key before expanding,
/// 3. fetches the declared dependencies,
/// 4. records the package unless its id is already in the table,
/// 5. schedules each dependency (range normalized to a token) whose id is
///    not yet in the table.
///
/// Diamond dependencies with differing versions are not reconciled: the
/// version seen first in depth-first order is the one recorded.
///
/// With `max_concurrency > 1`, lookups for the siblings discovered in one
/// expansion step are issued together before the walk descends. The walk
/// itself stays sequential, so the resulting table is the same as with
/// `max_concurrency == 1`.
pub struct ResolutionEngine<'r, R> {
    repository: &'r R,
    max_concurrency: usize,
}

impl<'r, R: DependencyRepository> ResolutionEngine<'r, R> {
    pub fn new(repository: &'r R) -> Self {
        Self {
            repository,
            max_concurrency: 1,
        }
    }

    /// Sets how many registry lookups may be in flight at once (minimum 1)
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency.max(1);
        self
    }

    /// Resolves the transitive closure of `roots`, visiting roots in order
    ///
    /// Never fails: packages that cannot be looked up are recorded with no
    /// dependencies and reported through `observer`.
    pub async fn resolve<F>(
        &self,
        roots: &[PackageRef],
        sources: &SourceList,
        mut observer: F,
    ) -> ResolutionTable
    where
        F: FnMut(ResolutionEvent<'_>),
    {
        let mut traversal = Traversal::default();
        let mut worklist: Vec<Pending> = roots
            .iter()
            .rev()
            .map(|package| Pending {
                package: package.clone(),
                is_root: true,
            })
            .collect();

        self.prefetch(roots.to_vec(), sources, &mut traversal).await;

        while let Some(Pending { package, is_root }) = worklist.pop() {
            if !is_root && traversal.table.contains(package.id()) {
                continue;
            }
            if !traversal.visited.insert(&package) {
                continue;
            }

            observer(ResolutionEvent::Visiting {
                package: &package,
                visited: traversal.visited.len(),
            });

            let outcome = match traversal.prefetched.remove(&VisitedSet::key_of(&package)) {
                Some(outcome) => outcome,
                None => {
                    self.repository
                        .fetch_dependencies(package.id(), package.version(), sources)
                        .await
                }
            };

            let resolved = match outcome {
                Ok(lookup) => {
                    for skipped in &lookup.skipped {
                        observer(ResolutionEvent::SourceSkipped(skipped));
                    }
                    for rejected in &lookup.rejected {
                        observer(ResolutionEvent::DependencyRejected(rejected));
                    }
                    ResolvedPackage::new(package, lookup.dependencies)
                }
                Err(error) => {
                    observer(ResolutionEvent::LookupFailed(&error));
                    ResolvedPackage::unresolved(package)
                }
            };

            let children: Vec<PackageRef> = resolved
                .dependencies()
                .iter()
                .map(|dep| {
                    PackageRef::from_parts(dep.id().clone(), RangeNormalizer::normalize(dep.range()))
                })
                .collect();

            traversal.table.record(resolved);

            let upcoming: Vec<PackageRef> = children
                .iter()
                .filter(|child| {
                    !traversal.table.contains(child.id()) && !traversal.visited.contains(child)
                })
                .cloned()
                .collect();
            self.prefetch(upcoming, sources, &mut traversal).await;

            worklist.extend(children.into_iter().rev().map(|package| Pending {
                package,
                is_root: false,
            }));
        }

        traversal.table
    }

    /// Issues the lookups for `packages` concurrently and parks the results
    /// until the walk reaches them. Keys already fetched are not fetched again.
    async fn prefetch(
        &self,
        packages: Vec<PackageRef>,
        sources: &SourceList,
        traversal: &mut Traversal,
    ) {
        if self.max_concurrency <= 1 {
            return;
        }

        let mut seen = HashSet::new();
        let pending: Vec<PackageRef> = packages
            .into_iter()
            .filter(|package| {
                let key = VisitedSet::key_of(package);
                !traversal.prefetched.contains_key(&key)
                    && !traversal.visited.contains(package)
                    && seen.insert(key)
            })
            .collect();

        // A lone lookup gains nothing from running ahead of the walk.
        if pending.len() < 2 {
            return;
        }

        let repository = self.repository;
        let fetched: Vec<(VisitKey, FetchOutcome)> = stream::iter(pending)
            .map(|package| async move {
                let outcome = repository
                    .fetch_dependencies(package.id(), package.version(), sources)
                    .await;
                (VisitedSet::key_of(&package), outcome)
            })
            .buffered(self.max_concurrency)
            .collect()
            .await;

        traversal.prefetched.extend(fetched);
    }
}
