//! Time-bounded Monte Carlo tree search: UCT selection, random-playout expansion and
//! simulation, visit-count backpropagation.
//!
//! The tree is an arena (`Vec<Node>` indexed by `usize`) rather than `Rc<RefCell<_>>` with
//! `Weak` parent links: children hold the move that produced them, parents own their children
//! exclusively, and back-references to the parent are non-owning. A plain index into the
//! arena is already non-owning and sidesteps the interior-mutability dance `Rc<RefCell<_>>`
//! would otherwise force on every visit-count update. Only the root snapshot is retained; every
//! other node's board position is reconstructed by replaying moves from the root as selection
//! descends, so a `Board` is never duplicated per node.

use std::time::{Duration, Instant};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board::Board;
use crate::movegen::generate_legal_moves;
use crate::moves::Move;
use crate::types::Color;

/// Exploration constant `c` in `Q/N + c * sqrt(ln(N_parent) / N)`.
const EXPLORATION_FACTOR: f64 = 0.1;

struct Node {
    mv: Option<Move>,
    parent: Option<usize>,
    children: Vec<usize>,
    /// The color that played `mv` to reach this node. Meaningless for the root (no move led
    /// to it) but never read there.
    mover: Color,
    visits: u32,
    reward: f64,
}

impl Node {
    fn root(color_turn: Color) -> Self {
        Self { mv: None, parent: None, children: Vec::new(), mover: color_turn, visits: 0, reward: 0.0 }
    }
}

/// `Q/N + c * sqrt(ln(N_parent) / N)`, or 0 if the node has never been visited.
fn uct(node: &Node, parent_visits: u32) -> f64 {
    if node.visits == 0 {
        return 0.0;
    }
    node.reward / node.visits as f64 + EXPLORATION_FACTOR * ((parent_visits as f64).ln() / node.visits as f64).sqrt()
}

/// `None` if the terminal position is a draw (stalemate); otherwise the color that delivered
/// checkmate: the side not to move wins when the side to move is in check, otherwise it's a
/// draw.
fn terminal_outcome(board: &Board) -> Option<Color> {
    let side_to_move = board.color_turn();
    if board.is_square_attacked(board.king_square(side_to_move), side_to_move.opposite()) {
        Some(side_to_move.opposite())
    } else {
        None
    }
}

/// A Monte Carlo tree search rooted at one board snapshot. `rollouts()`/`elapsed_seconds()`
/// report the statistics of the most recent `search` call.
pub struct Mcts {
    nodes: Vec<Node>,
    root_board: Board,
    rng: SmallRng,
    rollouts: u64,
    elapsed: Duration,
}

impl Mcts {
    pub fn new(root_board: Board, seed: u64) -> Self {
        let color_turn = root_board.color_turn();
        Self { nodes: vec![Node::root(color_turn)], root_board, rng: SmallRng::seed_from_u64(seed), rollouts: 0, elapsed: Duration::ZERO }
    }

    /// Runs selection/expansion/simulation/backpropagation iterations until `budget` has
    /// elapsed, checked at the start of each iteration so an in-flight iteration always
    /// completes.
    pub fn search(&mut self, budget: Duration) {
        let start = Instant::now();
        let mut rollouts = 0u64;
        while start.elapsed() < budget {
            self.iterate();
            rollouts += 1;
        }
        self.rollouts = rollouts;
        self.elapsed = start.elapsed();
    }

    fn iterate(&mut self) {
        let (leaf, board) = self.select();
        let (expanded, rollout_start) = self.expand(leaf, board);
        let outcome = self.simulate(rollout_start);
        self.backpropagate(expanded, outcome);
    }

    /// Descends from the root picking the maximal-UCT child (ties broken uniformly at random)
    /// until a node with no children is reached, replaying moves onto a working snapshot along
    /// the way. Every node with no children is, by construction, either never expanded or an
    /// unvisited child just created by expansion — both are valid selection stopping points.
    fn select(&mut self) -> (usize, Board) {
        let mut idx = 0;
        let mut board = self.root_board.clone();
        loop {
            if self.nodes[idx].children.is_empty() {
                return (idx, board);
            }

            let parent_visits = self.nodes[idx].visits;
            let children = &self.nodes[idx].children;
            let mut best_value = f64::NEG_INFINITY;
            let mut best: Vec<usize> = Vec::new();
            for &child in children {
                let value = uct(&self.nodes[child], parent_visits);
                if value > best_value {
                    best_value = value;
                    best.clear();
                    best.push(child);
                } else if value == best_value {
                    best.push(child);
                }
            }
            let chosen = best[self.rng.random_range(0..best.len())];

            let mv = self.nodes[chosen].mv.expect("non-root nodes always carry the move that led to them");
            board = board.apply_move(mv);

            if self.nodes[chosen].visits == 0 {
                return (chosen, board);
            }
            idx = chosen;
        }
    }

    /// If `board` (the position at `idx`) is non-terminal, creates one child per legal move,
    /// picks one uniformly at random, and returns it with the board after its move. Otherwise
    /// returns `idx`/`board` unchanged — there is nothing to expand.
    fn expand(&mut self, idx: usize, board: Board) -> (usize, Board) {
        let legal_moves = generate_legal_moves(&board);
        if legal_moves.is_empty() {
            return (idx, board);
        }

        let mover = board.color_turn();
        let mut child_indices = Vec::with_capacity(legal_moves.len());
        for m in legal_moves {
            let child_idx = self.nodes.len();
            self.nodes.push(Node { mv: Some(m), parent: Some(idx), children: Vec::new(), mover, visits: 0, reward: 0.0 });
            child_indices.push(child_idx);
        }
        self.nodes[idx].children = child_indices.clone();

        let chosen = child_indices[self.rng.random_range(0..child_indices.len())];
        let mv = self.nodes[chosen].mv.expect("just inserted with a move");
        let next_board = board.apply_move(mv);
        (chosen, next_board)
    }

    /// Plays uniformly-random legal moves from `board` until a terminal position, then returns
    /// its outcome.
    fn simulate(&mut self, mut board: Board) -> Option<Color> {
        loop {
            let legal_moves = generate_legal_moves(&board);
            if legal_moves.is_empty() {
                return terminal_outcome(&board);
            }
            let choice = legal_moves[self.rng.random_range(0..legal_moves.len())];
            board = board.apply_move(choice);
        }
    }

    /// Walks from `expanded` to the root, incrementing `N` at every step. `Q`'s increment is 1
    /// if the outcome favors the side that played the move into the current node, else 0 (0
    /// everywhere on a draw); the reward flips on each ancestor step.
    fn backpropagate(&mut self, expanded: usize, outcome: Option<Color>) {
        let mut reward = match outcome {
            None => 0.0,
            Some(winner) => {
                if winner == self.nodes[expanded].mover {
                    1.0
                } else {
                    0.0
                }
            }
        };

        let mut cursor = Some(expanded);
        while let Some(i) = cursor {
            self.nodes[i].visits += 1;
            self.nodes[i].reward += reward;
            cursor = self.nodes[i].parent;
            if outcome.is_some() {
                reward = 1.0 - reward;
            }
        }
    }

    /// The root's child with the greatest visit count, ties broken uniformly at random. `None`
    /// if the root has no children (nothing has been expanded, or the root is terminal).
    pub fn choose_best_move(&mut self) -> Option<Move> {
        let children = self.nodes[0].children.clone();
        if children.is_empty() {
            return None;
        }
        let max_visits = children.iter().map(|&c| self.nodes[c].visits).max().expect("non-empty");
        let best: Vec<usize> = children.into_iter().filter(|&c| self.nodes[c].visits == max_visits).collect();
        let chosen = best[self.rng.random_range(0..best.len())];
        self.nodes[chosen].mv
    }

    /// `(rollouts, elapsed_seconds)` of the most recent `search` call.
    pub fn statistics(&self) -> (u64, f64) {
        (self.rollouts, self.elapsed.as_secs_f64())
    }
}
