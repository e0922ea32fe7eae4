use maze_core::Position;

/// Manhattan (L1) distance between two positions.
///
/// The heuristic used by A*, greedy best-first and simulated annealing. On a
/// 4-connected grid with unit step cost it is admissible and consistent.
#[inline]
pub fn manhattan(a: Position, b: Position) -> i32 {
    a.manhattan(b)
}
