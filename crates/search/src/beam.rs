use pdp_core::Action;
use pdp_engine::Board;
use tracing::debug;

/// Deepest look-ahead accepted by [`BeamSearch::new`].
pub const MAX_DEPTH: usize = 4;

/// Breadth-limited search over action sequences.
///
/// Each level expands every kept board into all of its children and keeps
/// the `beam_width` best by score summed along the path.
pub struct BeamSearch {
    pub depth: usize,
    pub beam_width: usize,
}

struct SearchNode {
    board: Board,
    score: u32,
    first: Action,
}

impl BeamSearch {
    pub fn new(depth: usize, beam_width: usize) -> Self {
        Self {
            depth: depth.clamp(1, MAX_DEPTH),
            beam_width: beam_width.max(1),
        }
    }

    /// Best first action from `board` and the cumulative score of the line
    /// it starts. Ties go to the lower action index.
    pub fn search(&self, board: &Board) -> Option<(Action, u32)> {
        let mut nodes: Vec<SearchNode> = Action::all(board.height())
            .zip(board.children().ok()?)
            .map(|(first, (board, score))| SearchNode {
                board,
                score: score.value(),
                first,
            })
            .collect();
        prune(&mut nodes, self.beam_width);

        for _ in 1..self.depth.clamp(1, MAX_DEPTH) {
            let mut next = Vec::with_capacity(nodes.len() * Action::count(board.height()));
            for node in &nodes {
                for (child, score) in node.board.children().ok()? {
                    next.push(SearchNode {
                        board: child,
                        score: node.score + score.value(),
                        first: node.first,
                    });
                }
            }
            prune(&mut next, self.beam_width);
            nodes = next;
        }

        let best = nodes.first()?;
        debug!(action = ?best.first, score = best.score, depth = self.depth, "beam search");
        Some((best.first, best.score))
    }
}

impl Default for BeamSearch {
    fn default() -> Self {
        Self {
            depth: 2,
            beam_width: 64,
        }
    }
}

/// Keep the `width` highest scores. `sort_by` is stable, so equal scores
/// stay in expansion order.
fn prune(nodes: &mut Vec<SearchNode>, width: usize) {
    nodes.sort_by(|a, b| b.score.cmp(&a.score));
    nodes.truncate(width.max(1));
}
