/// Control actions supported by the FTBS solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the field as it stands.
    StopEarly,
}
