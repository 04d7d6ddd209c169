/// Turns application state into something the terminal can draw.
pub trait Exhaust<I> {
    type To;
    fn emit(&self, input: I) -> Self::To;
}
