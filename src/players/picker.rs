/// Chooses among the components currently on offer.
///
/// Both methods return a position into `options`.
pub trait Picker {
    /// The human's choice. Fails if input could not be read.
    fn pick(&mut self, options: &[String]) -> anyhow::Result<usize>;
    /// The opponent's choice, uniform over `options`.
    /// Fails if no valid choice can be made.
    fn random(&mut self, options: &[String]) -> anyhow::Result<usize>;
}
