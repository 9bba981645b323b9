//! Traits that bind a problem signature to the shared pipeline

use crate::schema::{Schema, Value};

/// What a problem driver should implement
pub trait Problem {
    /// Decoded argument tuple handed to the solution, in parameter order.
    type Args;
    /// What the solution returns.
    type Answer;

    /// Short identifier, used in logs.
    fn name(&self) -> &'static str;

    /// Input records, output format and failure policy of this problem.
    fn schema(&self) -> Schema;

    /// Turn decoded values into the argument tuple.
    ///
    /// `values` holds one entry per schema field, with the kind the field declares. Returning
    /// `None` skips the solution call and prints nothing, which the judge scores as a failed
    /// test case.
    fn bind(&self, values: Vec<Value>) -> Option<Self::Args>;

    /// Convert the solution's answer into a printable value.
    fn answer(&self, answer: Self::Answer) -> Value;
}

/// The user-supplied routine solving problem `P`.
///
/// Any `FnMut(P::Args) -> P::Answer` closure is a solution, so a driver binary usually just
/// forwards the tuple to the submitted function.
pub trait Solution<P: Problem> {
    /// Solve one test case. Panics are not caught.
    fn solve(&mut self, args: P::Args) -> P::Answer;
}

impl<P, F> Solution<P> for F
where
    P: Problem,
    F: FnMut(P::Args) -> P::Answer,
{
    fn solve(&mut self, args: P::Args) -> P::Answer {
        self(args)
    }
}
