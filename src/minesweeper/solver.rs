//! Knowledge-base inference engine
//!
//! The solver accumulates [`Sentence`]s from revealed cells and propagates
//! them to a fixpoint: saturated sentences resolve their cells, emptied
//! sentences are dropped, and subset pairs yield difference sentences.
//! Certainty only grows; a cell marked safe or mined is never retracted.

use std::collections::HashSet;

use rand::{Rng, prelude::IndexedRandom};
use serde::{Deserialize, Serialize};

use super::sentence::{Cell, Sentence};

/// Incremental Minesweeper solver over an `height` x `width` grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solver {
    height: usize,
    width: usize,
    moves_made: HashSet<Cell>,
    mines: HashSet<Cell>,
    safes: HashSet<Cell>,
    knowledge: Vec<Sentence>,
}

impl Solver {
    /// Create a solver for a grid with no knowledge yet
    pub fn new(height: usize, width: usize) -> Self {
        Solver {
            height,
            width,
            moves_made: HashSet::new(),
            mines: HashSet::new(),
            safes: HashSet::new(),
            knowledge: Vec::new(),
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Cells already probed
    pub fn moves_made(&self) -> &HashSet<Cell> {
        &self.moves_made
    }

    /// Cells confirmed to be mines
    pub fn mines(&self) -> &HashSet<Cell> {
        &self.mines
    }

    /// Cells confirmed to be safe
    pub fn safes(&self) -> &HashSet<Cell> {
        &self.safes
    }

    /// Live sentences, in insertion order
    pub fn knowledge(&self) -> &[Sentence] {
        &self.knowledge
    }

    /// Record `cell` as a confirmed mine and resolve it in every live
    /// sentence.
    pub fn mark_mine(&mut self, cell: Cell) {
        self.mines.insert(cell);
        for sentence in &mut self.knowledge {
            sentence.mark_mine(cell);
        }
    }

    /// Record `cell` as confirmed safe and resolve it in every live
    /// sentence.
    pub fn mark_safe(&mut self, cell: Cell) {
        self.safes.insert(cell);
        for sentence in &mut self.knowledge {
            sentence.mark_safe(cell);
        }
    }

    /// Absorb one observation: `cell` was probed safely and `count` of its
    /// neighbors are mines.
    ///
    /// Records the move, marks the cell safe, adds a sentence over the
    /// still-unknown neighbors (with already-confirmed mine neighbors
    /// subtracted from `count`), and then propagates to a fixpoint. A
    /// duplicate of a live sentence teaches nothing and ends the call
    /// early, as does an observation whose neighbors are all resolved.
    ///
    /// Inconsistent observations are accepted without complaint; the
    /// knowledge base performs no contradiction detection.
    pub fn add_knowledge(&mut self, cell: Cell, count: usize) {
        self.moves_made.insert(cell);
        self.mark_safe(cell);

        let neighbors = cell.neighbors(self.height, self.width);
        let mine_neighbors = neighbors.intersection(&self.mines).count();
        let unknown: HashSet<Cell> = neighbors
            .into_iter()
            .filter(|n| !self.mines.contains(n) && !self.safes.contains(n))
            .collect();
        if unknown.is_empty() {
            return;
        }

        let sentence = Sentence::new(unknown, count.saturating_sub(mine_neighbors));
        if self.knowledge.contains(&sentence) {
            return;
        }
        self.knowledge.push(sentence);

        self.propagate();
    }

    /// Run resolution, cleanup, and subset inference until nothing changes.
    ///
    /// Terminates because cell sets only shrink or disappear and duplicate
    /// sentences are rejected.
    fn propagate(&mut self) {
        loop {
            let before = (self.mines.len(), self.safes.len(), self.knowledge.len());

            // Resolution: collect certainties first, since marking mutates
            // every sentence.
            let mut found_mines = HashSet::new();
            let mut found_safes = HashSet::new();
            for sentence in &self.knowledge {
                found_mines.extend(sentence.known_mines());
                found_safes.extend(sentence.known_safes());
            }
            for cell in found_mines {
                self.mark_mine(cell);
            }
            for cell in found_safes {
                self.mark_safe(cell);
            }

            self.knowledge.retain(|sentence| !sentence.is_empty());

            // Subset inference: "exactly N of A" and "exactly M of B" with
            // A a subset of B jointly give "exactly M - N of B minus A".
            let mut derived: Vec<Sentence> = Vec::new();
            for (i, sub) in self.knowledge.iter().enumerate() {
                for (j, sup) in self.knowledge.iter().enumerate() {
                    if i == j || !sub.cells().is_subset(sup.cells()) {
                        continue;
                    }
                    let difference: HashSet<Cell> =
                        sup.cells().difference(sub.cells()).copied().collect();
                    if difference.is_empty() {
                        continue;
                    }
                    let candidate =
                        Sentence::new(difference, sup.count().saturating_sub(sub.count()));
                    if !self.knowledge.contains(&candidate) && !derived.contains(&candidate) {
                        derived.push(candidate);
                    }
                }
            }
            self.knowledge.extend(derived);

            if (self.mines.len(), self.safes.len(), self.knowledge.len()) == before {
                break;
            }
        }
    }

    /// An unplayed cell known to be safe, chosen uniformly, or `None` when
    /// no such cell exists. Does not mutate the solver.
    pub fn make_safe_move(&self, rng: &mut impl Rng) -> Option<Cell> {
        let mut candidates: Vec<Cell> = self.safes.difference(&self.moves_made).copied().collect();
        candidates.sort_unstable();
        candidates.choose(rng).copied()
    }

    /// A cell that is neither played nor a known mine, chosen uniformly
    /// over the whole grid, or `None` when no such cell exists. Does not
    /// mutate the solver.
    pub fn make_random_move(&self, rng: &mut impl Rng) -> Option<Cell> {
        let candidates: Vec<Cell> = (0..self.height)
            .flat_map(|row| (0..self.width).map(move |col| Cell::new(row, col)))
            .filter(|cell| !self.moves_made.contains(cell) && !self.mines.contains(cell))
            .collect();
        candidates.choose(rng).copied()
    }
}
