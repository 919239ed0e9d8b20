/// Lowest recursion depth the controls allow (the bare triangle).
pub const MIN_DEPTH: u32 = 0;
/// Highest recursion depth the controls allow. Point count grows as 3·4^d+1,
/// so 15 is already ~3.2 billion points; the generator itself does not bound
/// depth, this controller is the only guard.
pub const MAX_DEPTH: u32 = 15;
/// Depth shown on startup and after a reset.
pub const INITIAL_DEPTH: u32 = 0;

/// Owns the bounded recursion depth stepped by the UI controls.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DepthControl {
    depth: u32,
}

impl Default for DepthControl {
    fn default() -> Self {
        Self {
            depth: INITIAL_DEPTH,
        }
    }
}

impl DepthControl {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Steps one level deeper, clamped to [`MAX_DEPTH`].
    pub fn step_forward(&mut self) {
        self.depth = (self.depth + 1).min(MAX_DEPTH);
    }

    /// Steps one level back, clamped to [`MIN_DEPTH`].
    pub fn step_backward(&mut self) {
        self.depth = self.depth.saturating_sub(1).max(MIN_DEPTH);
    }

    pub fn reset(&mut self) {
        self.depth = INITIAL_DEPTH;
    }

    #[must_use]
    pub fn at_max(&self) -> bool {
        self.depth >= MAX_DEPTH
    }

    #[must_use]
    pub fn at_min(&self) -> bool {
        self.depth <= MIN_DEPTH
    }

    #[must_use]
    pub fn is_initial(&self) -> bool {
        self.depth == INITIAL_DEPTH
    }
}
