use crate::linear::Matrix;

/// Event emitted once per pivot step, after the pivot column is eliminated.
///
/// At this point column `step` of `matrix` holds 1 at row `step` and 0
/// elsewhere (up to rounding).
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// Pivot step, equal to the pivot column (0-based).
    pub step: usize,

    /// Row the pivot was taken from before any swap.
    ///
    /// Always equal to `step` unless partial pivoting is enabled.
    pub pivot_row: usize,

    /// Pivot value used to normalize the row.
    pub pivot: f64,

    /// Coefficient matrix after this step.
    pub matrix: &'a Matrix,

    /// Right-hand side after this step.
    pub rhs: &'a [f64],
}
