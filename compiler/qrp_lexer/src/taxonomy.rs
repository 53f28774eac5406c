//! Taxonomy resolution: dotted type paths to token kinds.
//!
//! The taxonomy is a trie keyed by path segments. Interior nodes are
//! branches, terminal nodes carry a [`TokenKind`]. A branch may carry a
//! fallback kind (written `Token.Flavour._` in entry tables) that answers for
//! any segment the branch has no child for, and for paths ending at the
//! branch itself.
//!
//! ```text
//! Token ─┬─ Keyword ─┬─ Declaration  → Keyword(Declaration)
//!        │           └─ _            → Keyword(Unflavoured)
//!        └─ Literal ─┬─ Number ─┬─ Integer → Literal(Number(Integer))
//!                    │          └─ _       → Literal(Number(Unflavoured))
//!                    └─ _                  → Literal(Unflavoured)
//! ```
//!
//! Tables are validated when built, so a lookup never meets a half-built
//! branch: every branch below the root must have a fallback.

mod standard;

use std::collections::hash_map::Entry;
use std::sync::OnceLock;

use qrp_ir::{TokenKind, TYPE_PATH_ROOT};
use rustc_hash::FxHashMap;

use crate::error::{ResolveError, TaxonomyError};

pub use standard::STANDARD_ENTRIES;

/// Segment marking a branch's fallback entry in taxonomy tables.
pub const FALLBACK_KEY: &str = "_";

#[derive(Clone, Debug)]
enum Node {
    Leaf(TokenKind),
    Branch(Branch),
}

#[derive(Clone, Debug, Default)]
struct Branch {
    children: FxHashMap<Box<str>, Node>,
    fallback: Option<TokenKind>,
}

/// A validated, read-only classification table.
///
/// Resolution never mutates the table, so one taxonomy can be shared by
/// any number of classification sessions, including across threads.
#[derive(Clone, Debug)]
pub struct Taxonomy {
    root: Branch,
    entry_count: usize,
}

static STANDARD: OnceLock<Result<Taxonomy, TaxonomyError>> = OnceLock::new();

impl Taxonomy {
    /// Build and validate a taxonomy from `(path, kind)` entries.
    ///
    /// Paths must start with `Token`. A trailing `_` segment declares the
    /// fallback of the branch it follows.
    pub fn from_entries<'a, I>(entries: I) -> Result<Self, TaxonomyError>
    where
        I: IntoIterator<Item = (&'a str, TokenKind)>,
    {
        let mut taxonomy = Taxonomy {
            root: Branch::default(),
            entry_count: 0,
        };
        for (path, kind) in entries {
            taxonomy.insert(path, kind)?;
        }
        validate_fallbacks(&taxonomy.root, TYPE_PATH_ROOT, true)?;
        tracing::debug!(entries = taxonomy.entry_count, "built taxonomy");
        Ok(taxonomy)
    }

    /// The built-in table, built and validated on first use.
    pub fn standard() -> Result<&'static Taxonomy, TaxonomyError> {
        STANDARD
            .get_or_init(|| Taxonomy::from_entries(STANDARD_ENTRIES.iter().copied()))
            .as_ref()
            .map_err(Clone::clone)
    }

    fn insert(&mut self, path: &str, kind: TokenKind) -> Result<(), TaxonomyError> {
        let error_path = || path.to_owned();
        let mut segments = path.split('.');
        if segments.next() != Some(TYPE_PATH_ROOT) {
            return Err(TaxonomyError::MissingRoot { path: error_path() });
        }
        let rest: Vec<&str> = segments.collect();
        if rest.iter().any(|segment| segment.is_empty()) {
            return Err(TaxonomyError::EmptySegment { path: error_path() });
        }
        let Some((&last, parents)) = rest.split_last() else {
            // `Token` alone names the root, which is always a branch.
            return Err(TaxonomyError::LeafBranchConflict { path: error_path() });
        };
        if parents.contains(&FALLBACK_KEY) {
            return Err(TaxonomyError::FallbackNotTerminal { path: error_path() });
        }

        let mut branch = &mut self.root;
        for &segment in parents {
            let node = branch
                .children
                .entry(Box::from(segment))
                .or_insert_with(|| Node::Branch(Branch::default()));
            match node {
                Node::Branch(next) => branch = next,
                Node::Leaf(_) => {
                    return Err(TaxonomyError::LeafBranchConflict { path: error_path() })
                }
            }
        }

        if last == FALLBACK_KEY {
            if branch.fallback.is_some() {
                return Err(TaxonomyError::Duplicate { path: error_path() });
            }
            branch.fallback = Some(kind);
        } else {
            match branch.children.entry(Box::from(last)) {
                Entry::Occupied(occupied) => {
                    return Err(match occupied.get() {
                        Node::Leaf(_) => TaxonomyError::Duplicate { path: error_path() },
                        Node::Branch(_) => {
                            TaxonomyError::LeafBranchConflict { path: error_path() }
                        }
                    });
                }
                Entry::Vacant(vacant) => {
                    vacant.insert(Node::Leaf(kind));
                }
            }
        }
        self.entry_count += 1;
        Ok(())
    }

    /// Resolve a dotted type path to its token kind.
    ///
    /// Segments are walked from the root. An unknown segment resolves to the
    /// current branch's fallback; a path ending on a branch resolves to that
    /// branch's fallback. Reaching a terminal kind with segments left over
    /// resolves to the terminal: the rest are finer subtypes
    /// (`Token.Literal.String.Double`) that token kinds do not model.
    ///
    /// An empty segment is looked up like any other, so `Token.Keyword.`
    /// lands on the keyword fallback.
    pub fn resolve(&self, path: &str) -> Result<TokenKind, ResolveError> {
        let mut segments = path.split('.');
        if segments.next() != Some(TYPE_PATH_ROOT) {
            return Err(ResolveError::MalformedTypePath {
                path: path.to_owned(),
            });
        }

        let mut branch = &self.root;
        for segment in segments {
            match branch.children.get(segment) {
                Some(Node::Branch(next)) => branch = next,
                Some(Node::Leaf(kind)) => return Ok(*kind),
                None => {
                    return match branch.fallback {
                        Some(kind) => {
                            tracing::trace!(path, segment, "resolved through fallback");
                            Ok(kind)
                        }
                        None => Err(ResolveError::UnresolvedTaxonomy {
                            path: path.to_owned(),
                            segment: Some(segment.to_owned()),
                        }),
                    };
                }
            }
        }

        branch
            .fallback
            .ok_or_else(|| ResolveError::UnresolvedTaxonomy {
                path: path.to_owned(),
                segment: None,
            })
    }

    /// Number of entries (terminals and fallbacks).
    pub fn len(&self) -> usize {
        self.entry_count
    }

    pub fn is_empty(&self) -> bool {
        self.entry_count == 0
    }

    /// Every entry as `(path, kind)`, sorted by path. Fallbacks use the
    /// `_` segment, as in entry tables.
    pub fn entries(&self) -> Vec<(String, TokenKind)> {
        let mut out = Vec::with_capacity(self.entry_count);
        collect_entries(&self.root, TYPE_PATH_ROOT, &mut out);
        out.sort();
        out
    }
}

fn collect_entries(branch: &Branch, prefix: &str, out: &mut Vec<(String, TokenKind)>) {
    if let Some(kind) = branch.fallback {
        out.push((format!("{prefix}.{FALLBACK_KEY}"), kind));
    }
    for (segment, node) in &branch.children {
        let path = format!("{prefix}.{segment}");
        match node {
            Node::Leaf(kind) => out.push((path, *kind)),
            Node::Branch(next) => collect_entries(next, &path, out),
        }
    }
}

/// Every branch below the root must have a fallback. Children are visited
/// in sorted order so the reported branch is deterministic.
fn validate_fallbacks(branch: &Branch, path: &str, is_root: bool) -> Result<(), TaxonomyError> {
    if !is_root && branch.fallback.is_none() {
        return Err(TaxonomyError::MissingFallback {
            path: path.to_owned(),
        });
    }
    let mut children: Vec<_> = branch
        .children
        .iter()
        .filter_map(|(segment, node)| match node {
            Node::Branch(next) => Some((segment, next)),
            Node::Leaf(_) => None,
        })
        .collect();
    children.sort_by(|a, b| a.0.cmp(b.0));
    for (segment, next) in children {
        validate_fallbacks(next, &format!("{path}.{segment}"), false)?;
    }
    Ok(())
}
