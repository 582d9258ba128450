use crate::atom::{Atom, AtomId, AtomKind, Branch, Limits};
use crate::namespace::KeySet;
use crate::stack::ensure_sufficient_stack;
use crate::symbols::Mode;
use crate::types::{ErrorCode, ParseError, ParseErrorKind};

/// Deepest atom nesting [`AtomTree::validate`] accepts. A parse under the
/// default `Settings::max_depth` stays well below it.
pub const MAX_TREE_DEPTH: usize = 1024;

/// Arena holding every atom of one parse.
///
/// Atoms are never removed; an edit that drops an atom simply stops
/// referring to it. [`AtomTree::validate`] checks that the atoms reachable
/// from a root list still form a tree.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AtomTree {
    atoms: Vec<Atom>,
}

impl AtomTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of atoms in the arena, reachable or not.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.atoms.len()
    }

    /// Whether the arena is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Adds an atom and makes it the parent of the atoms in its slots.
    pub fn push(&mut self, atom: Atom) -> AtomId {
        let id = AtomId(self.atoms.len());
        let children: Vec<AtomId> = atom
            .branches()
            .into_iter()
            .flat_map(|(_, ids)| ids.iter().copied())
            .collect();
        self.atoms.push(atom);
        for child in children {
            if let Some(child) = self.atoms.get_mut(child.0) {
                child.parent = Some(id);
            }
        }
        id
    }

    /// The atom `id`, if it exists.
    #[must_use]
    pub fn get(&self, id: AtomId) -> Option<&Atom> {
        self.atoms.get(id.0)
    }

    /// Mutable access to the atom `id`.
    pub fn get_mut(&mut self, id: AtomId) -> Option<&mut Atom> {
        self.atoms.get_mut(id.0)
    }

    /// The atom `id`, or an `invalid-atom-id` error.
    pub fn atom(&self, id: AtomId) -> Result<&Atom, ParseError> {
        self.get(id)
            .ok_or_else(|| ParseError::new(ParseErrorKind::InvalidAtomId { atom: id.0 }))
    }

    /// All child ids of `id` (slots first, then scripts).
    #[must_use]
    pub fn children(&self, id: AtomId) -> Vec<AtomId> {
        self.get(id).map_or_else(Vec::new, |atom| {
            atom.branches()
                .into_iter()
                .flat_map(|(_, ids)| ids.iter().copied())
                .collect()
        })
    }

    /// Named child lists of `id`.
    #[must_use]
    pub fn branches(&self, id: AtomId) -> Vec<(Branch, &[AtomId])> {
        self.get(id).map_or_else(Vec::new, |atom| {
            atom.branches()
                .into_iter()
                .map(|(branch, ids)| (branch, ids.as_slice()))
                .collect()
        })
    }

    /// Parent of `id`.
    #[must_use]
    pub fn parent(&self, id: AtomId) -> Option<AtomId> {
        self.get(id)?.parent
    }

    /// Iterator over the parent chain of `id`, nearest first.
    #[must_use]
    pub const fn ancestors(&self, id: AtomId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            current: Some(id),
            remaining: self.atoms.len(),
        }
    }

    /// Every atom below `id`, in pre-order. Each atom is visited once even
    /// if the tree is malformed.
    #[must_use]
    pub fn descendants(&self, id: AtomId) -> Vec<AtomId> {
        let mut seen = KeySet::default();
        seen.insert(id);
        let mut out = Vec::new();
        let mut stack: Vec<AtomId> = self.children(id).into_iter().rev().collect();
        while let Some(next) = stack.pop() {
            if !seen.insert(next) {
                continue;
            }
            out.push(next);
            stack.extend(self.children(next).into_iter().rev());
        }
        out
    }

    /// Mode the atom was parsed in; unknown ids count as math.
    #[must_use]
    pub fn mode_of(&self, id: AtomId) -> Mode {
        self.get(id).map_or(Mode::Math, |atom| atom.mode)
    }

    /// Replaces a child list of `parent` and adopts the new children.
    pub fn set_branch(
        &mut self,
        parent: AtomId,
        branch: Branch,
        children: Vec<AtomId>,
    ) -> Result<(), ParseError> {
        for child in &children {
            self.atom(*child)?;
        }
        let atom = self
            .get_mut(parent)
            .ok_or_else(|| ParseError::new(ParseErrorKind::InvalidAtomId { atom: parent.0 }))?;
        let slot = atom.branch_mut(branch).ok_or_else(|| {
            ParseError::new(ParseErrorKind::MalformedTree {
                atom: parent.0,
                reason: "has no such branch",
            })
        })?;
        *slot = children.clone();
        self.adopt(parent, &children);
        Ok(())
    }

    /// Makes `parent` the parent of `children`.
    pub fn adopt(&mut self, parent: AtomId, children: &[AtomId]) {
        for child in children {
            if let Some(atom) = self.get_mut(*child) {
                atom.parent = Some(parent);
            }
        }
    }

    /// Copies the atoms `ids` and everything below them, returning the ids
    /// of the copies. The copies have no parent.
    pub fn deep_clone(&mut self, ids: &[AtomId]) -> Vec<AtomId> {
        ids.iter()
            .filter_map(|id| self.deep_clone_atom(*id, 0))
            .collect()
    }

    fn deep_clone_atom(&mut self, id: AtomId, depth: usize) -> Option<AtomId> {
        // A cycle would recurse forever; stop at the arena size.
        if depth > self.atoms.len() {
            return None;
        }
        let mut atom = self.get(id)?.clone();
        let branches: Vec<(Branch, Vec<AtomId>)> = atom
            .branches()
            .into_iter()
            .map(|(branch, ids)| (branch, ids.clone()))
            .collect();
        for (branch, ids) in branches {
            let copies: Vec<AtomId> = ids
                .iter()
                .filter_map(|child| {
                    ensure_sufficient_stack(|| self.deep_clone_atom(*child, depth + 1))
                })
                .collect();
            if let Some(slot) = atom.branch_mut(branch) {
                *slot = copies;
            }
        }
        atom.parent = None;
        Some(self.push(atom))
    }

    /// Checks that the atoms reachable from `roots` form a well-formed tree.
    ///
    /// Fails on the first violation: a dangling id, a cycle, an atom in two
    /// slots, a fraction without numerator or denominator, a root without a
    /// body, `limits: accent` on something other than an accent, or nesting
    /// deeper than [`MAX_TREE_DEPTH`].
    pub fn validate(&self, roots: &[AtomId]) -> Result<(), ParseError> {
        let mut state = vec![VisitState::Unvisited; self.atoms.len()];
        for root in roots {
            self.validate_atom(*root, 1, &mut state)?;
        }
        Ok(())
    }

    fn validate_atom(
        &self,
        id: AtomId,
        depth: usize,
        state: &mut [VisitState],
    ) -> Result<(), ParseError> {
        let atom = self.atom(id)?;
        if depth > MAX_TREE_DEPTH {
            return Err(ParseError::with_token(
                ParseErrorKind::TooDeeplyNested {
                    limit: MAX_TREE_DEPTH,
                },
                atom,
            ));
        }
        match state[id.0] {
            VisitState::InProgress => {
                return Err(ParseError::with_token(
                    ParseErrorKind::CyclicTree { atom: id.0 },
                    atom,
                ));
            }
            VisitState::Done => {
                return Err(ParseError::with_token(
                    ParseErrorKind::MalformedTree {
                        atom: id.0,
                        reason: "appears in more than one slot",
                    },
                    atom,
                ));
            }
            VisitState::Unvisited => {}
        }
        state[id.0] = VisitState::InProgress;

        let malformed = |reason| {
            Err(ParseError::with_token(
                ParseErrorKind::MalformedTree { atom: id.0, reason },
                atom,
            ))
        };
        match &atom.kind {
            AtomKind::Genfrac { numer, denom, .. } if numer.is_empty() || denom.is_empty() => {
                return malformed("is a fraction without numerator or denominator");
            }
            AtomKind::Surd { body, .. } if body.is_empty() => {
                return malformed("is a root without a body");
            }
            kind if atom.limits == Limits::Accent && !matches!(kind, AtomKind::Accent { .. }) => {
                return malformed("has accent limits but is not an accent");
            }
            _ => {}
        }

        for child in self.children(id) {
            ensure_sufficient_stack(|| self.validate_atom(child, depth + 1, state))?;
        }
        state[id.0] = VisitState::Done;
        Ok(())
    }

    /// Error atoms reachable from `roots`, in reading order.
    #[must_use]
    pub fn errors(&self, roots: &[AtomId]) -> Vec<(AtomId, &ErrorCode)> {
        let mut out = Vec::new();
        for root in roots {
            for id in core::iter::once(*root).chain(self.descendants(*root)) {
                if let Some(code) = self.get(id).and_then(Atom::error_code) {
                    out.push((id, code));
                }
            }
        }
        out
    }

    /// Iterator over all atoms of the arena with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (AtomId, &Atom)> {
        self.atoms
            .iter()
            .enumerate()
            .map(|(index, atom)| (AtomId(index), atom))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    Unvisited,
    InProgress,
    Done,
}

/// Iterator returned by [`AtomTree::ancestors`].
pub struct Ancestors<'a> {
    tree: &'a AtomTree,
    current: Option<AtomId>,
    remaining: usize,
}

impl Iterator for Ancestors<'_> {
    type Item = AtomId;

    fn next(&mut self) -> Option<AtomId> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let parent = self.tree.parent(self.current?)?;
        self.current = Some(parent);
        Some(parent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ord(tree: &mut AtomTree, value: &str) -> AtomId {
        tree.push(Atom::new(AtomKind::Ord, Mode::Math).with_value(value))
    }

    fn frac(tree: &mut AtomTree) -> (AtomId, AtomId, AtomId) {
        let one = ord(tree, "1");
        let two = ord(tree, "2");
        let frac = tree.push(Atom::new(
            AtomKind::Genfrac {
                numer: vec![one],
                denom: vec![two],
                has_bar_line: true,
                left_delim: None,
                right_delim: None,
                math_style: None,
                continued: false,
            },
            Mode::Math,
        ));
        (frac, one, two)
    }

    #[test]
    fn push_sets_parents() {
        let mut tree = AtomTree::new();
        let (frac, one, two) = frac(&mut tree);
        assert_eq!(tree.parent(one), Some(frac));
        assert_eq!(tree.parent(two), Some(frac));
        assert_eq!(tree.children(frac), vec![one, two]);
        assert_eq!(tree.ancestors(one).collect::<Vec<_>>(), vec![frac]);
    }

    #[test]
    fn descendants_are_preorder() {
        let mut tree = AtomTree::new();
        let (frac, one, two) = frac(&mut tree);
        let group = tree.push(Atom::new(AtomKind::Group { body: vec![frac] }, Mode::Math));
        assert_eq!(tree.descendants(group), vec![frac, one, two]);
        assert!(tree.validate(&[group]).is_ok());
    }

    #[test]
    fn deep_clone_copies_subtrees() {
        let mut tree = AtomTree::new();
        let (frac, _, _) = frac(&mut tree);
        let copies = tree.deep_clone(&[frac]);
        assert_eq!(copies.len(), 1);
        assert_ne!(copies[0], frac);
        assert_eq!(tree.descendants(copies[0]).len(), 2);
        assert!(tree.validate(&[frac, copies[0]]).is_ok());
    }

    #[test]
    fn validate_rejects_cycles() {
        let mut tree = AtomTree::new();
        let x = ord(&mut tree, "x");
        let group = tree.push(Atom::new(AtomKind::Group { body: vec![x] }, Mode::Math));
        tree.get_mut(x).unwrap().superscript = Some(vec![group]);
        let err = tree.validate(&[group]).unwrap_err();
        assert_eq!(err.code(), "cyclic-tree");
    }

    #[test]
    fn validate_rejects_shared_atoms() {
        let mut tree = AtomTree::new();
        let x = ord(&mut tree, "x");
        let group = tree.push(Atom::new(AtomKind::Group { body: vec![x] }, Mode::Math));
        let err = tree.validate(&[group, x]).unwrap_err();
        assert_eq!(err.code(), "malformed-tree");
    }

    fn surd_chain(tree: &mut AtomTree, levels: usize) -> AtomId {
        let mut id = ord(tree, "x");
        for _ in 1..levels {
            id = tree.push(Atom::new(
                AtomKind::Surd {
                    body: vec![id],
                    index: None,
                },
                Mode::Math,
            ));
        }
        id
    }

    #[test]
    fn validate_bounds_nesting() {
        let mut tree = AtomTree::new();
        let deep = surd_chain(&mut tree, MAX_TREE_DEPTH);
        assert!(tree.validate(&[deep]).is_ok());
        assert_eq!(tree.deep_clone(&[deep]).len(), 1);

        let mut tree = AtomTree::new();
        let too_deep = surd_chain(&mut tree, MAX_TREE_DEPTH + 1);
        let err = tree.validate(&[too_deep]).unwrap_err();
        assert_eq!(err.code(), "too-deeply-nested");
    }

    #[test]
    fn validate_checks_accent_limits() {
        let mut tree = AtomTree::new();
        let x = tree.push(
            Atom::new(AtomKind::Ord, Mode::Math)
                .with_value("x")
                .with_limits(Limits::Accent),
        );
        assert_eq!(tree.validate(&[x]).unwrap_err().code(), "malformed-tree");
    }

    #[test]
    fn set_branch_adopts_children() {
        let mut tree = AtomTree::new();
        let (frac, _, _) = frac(&mut tree);
        let three = ord(&mut tree, "3");
        tree.set_branch(frac, Branch::Superscript, vec![three]).unwrap();
        assert_eq!(tree.parent(three), Some(frac));
        assert!(tree.set_branch(three, Branch::Numer, vec![]).is_err());
        assert_eq!(tree.errors(&[frac]).len(), 0);
    }
}
