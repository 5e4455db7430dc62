use advect_core::FieldState;

/// Which update produced the level an [`Event`] reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// The field has just been seeded from the initial profile.
    Seeded,
    /// The FTCS bootstrap step produced time level 1.
    Bootstrapped,
    /// An FTBS step produced time level 2 or later.
    Advanced,
}

/// Event emitted by the FTBS solver after each completed step.
///
/// Step 0 is the seeded field before any update. The field has already been
/// rotated when the event is emitted, so [`FieldState::current`] holds the
/// level for `step`.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// Time level held in `field.current()`.
    pub step: usize,

    pub stage: Stage,

    /// Simulated time at this level, `step * dt`.
    pub time: f64,

    pub field: &'a FieldState,
}

impl Event<'_> {
    /// The field values at this step.
    #[must_use]
    pub fn current(&self) -> &[f64] {
        self.field.current()
    }
}
