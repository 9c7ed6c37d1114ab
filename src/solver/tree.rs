//! Arena of discovered states with parent links for path reconstruction
//!
//! Each search owns its own tree; nothing is shared between invocations.

use crate::core::{Move, Puzzle, SearchPath};

struct Node {
    state: Puzzle,
    parent: Option<(usize, Move)>,
}

pub(super) struct SearchTree {
    nodes: Vec<Node>,
}

impl SearchTree {
    pub(super) const ROOT: usize = 0;

    pub(super) fn with_root(start: Puzzle) -> Self {
        Self {
            nodes: vec![Node {
                state: start,
                parent: None,
            }],
        }
    }

    pub(super) fn push(&mut self, state: Puzzle, parent: usize, mv: Move) -> usize {
        self.nodes.push(Node {
            state,
            parent: Some((parent, mv)),
        });
        self.nodes.len() - 1
    }

    pub(super) fn state(&self, id: usize) -> &Puzzle {
        &self.nodes[id].state
    }

    /// Moves leading from the root to `id`
    pub(super) fn path_to(&self, id: usize) -> SearchPath {
        let mut path = Vec::new();
        let mut current = id;
        while let Some((parent, mv)) = self.nodes[current].parent {
            path.push(mv);
            current = parent;
        }
        path.reverse();
        path
    }
}

/// Successor states for `moves`, which must all be legal in `state`
pub(super) fn successors(state: &Puzzle, moves: Vec<Move>) -> Vec<(Move, Puzzle)> {
    moves
        .into_iter()
        .filter_map(|mv| match state.apply(mv) {
            Ok(next) => Some((mv, next)),
            Err(err) => {
                debug_assert!(false, "move generation produced {err}");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> Puzzle {
        Puzzle::from_grid(&[vec!["RED", "BLUE"], vec!["BLUE"], vec![]], Some(2)).unwrap()
    }

    #[test]
    fn root_has_empty_path() {
        let tree = SearchTree::with_root(start());
        assert!(tree.path_to(SearchTree::ROOT).is_empty());
    }

    #[test]
    fn path_follows_parent_links() {
        let root = start();
        let mut tree = SearchTree::with_root(root.clone());

        let first = root.apply(Move::new(0, 1)).unwrap();
        let a = tree.push(first.clone(), SearchTree::ROOT, Move::new(0, 1));
        let second = first.apply(Move::new(0, 2)).unwrap();
        let b = tree.push(second.clone(), a, Move::new(0, 2));

        assert_eq!(tree.path_to(b), vec![Move::new(0, 1), Move::new(0, 2)]);
        assert_eq!(tree.state(b), &second);
    }

    #[test]
    fn successors_pair_moves_with_states() {
        let root = start();
        let next = successors(&root, root.legal_moves());
        assert_eq!(next.len(), 3);
        for (mv, state) in next {
            assert_eq!(root.apply(mv).unwrap(), state);
        }
    }
}
