/// Actions an observer can take during Gauss–Jordan elimination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop after the current pivot step and return the partially reduced
    /// right-hand side.
    StopEarly,
}
