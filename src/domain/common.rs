/// Anything carrying a monetary amount that feeds the ledger totals.
pub trait Amounted {
    fn amount(&self) -> f64;

    /// The amount as it should count toward totals. Non-finite values
    /// contribute nothing.
    fn countable_amount(&self) -> f64 {
        let amount = self.amount();
        if amount.is_finite() {
            amount
        } else {
            0.0
        }
    }
}
