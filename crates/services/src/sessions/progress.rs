/// Aggregated view of round progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub is_over: bool,
}
