/// Hook for watching a numerical procedure step by step.
///
/// A procedure calls [`observe`](Self::observe) once per step with an event
/// of type `E`. For Gauss–Jordan elimination that is one event per pivot,
/// carrying the pivot value and the partially reduced system. Returning
/// `Some(action)` asks the procedure to act on it (stopping after the
/// current pivot, for example); `None` leaves it running.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, which is how traces
/// of the pivot steps are printed. `()` observes nothing.
pub trait Observer<E, A> {
    /// Handles one step's event, optionally returning an action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
