/// One line of the consumption ledger.
///
/// `calories` is a snapshot taken when the entry was recorded; later catalog
/// or meal changes never touch it.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsumedEntry {
    /// Food name or custom meal name.
    pub label: String,

    pub calories: f64,
}

impl ConsumedEntry {
    pub fn new(label: impl Into<String>, calories: f64) -> Self {
        Self {
            label: label.into(),
            calories,
        }
    }
}
