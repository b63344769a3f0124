use serde::Serialize;

/// Price bucket chosen in the survey. Bounds are in whole rupees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetRange {
    /// 5,000 – 15,000 inclusive.
    Low,
    /// 15,000 – 30,000 inclusive.
    Mid,
    /// 30,000 and above.
    High,
    /// No price constraint.
    Flexible,
}

impl BudgetRange {
    /// Matches the literal survey label. Anything unrecognized is `Flexible`.
    pub fn from_answer(answer: &str) -> Self {
        match answer {
            "₹5k–₹15k" => BudgetRange::Low,
            "₹15k–₹30k" => BudgetRange::Mid,
            "₹30k+" => BudgetRange::High,
            _ => BudgetRange::Flexible,
        }
    }

    pub fn is_unrestricted(self) -> bool {
        self == BudgetRange::Flexible
    }

    /// Whether `price` falls in the bucket. An unknown price only fits `Flexible`.
    pub fn contains(self, price: Option<u32>) -> bool {
        match (self, price) {
            (BudgetRange::Flexible, _) => true,
            (_, None) => false,
            (BudgetRange::Low, Some(p)) => (5_000..=15_000).contains(&p),
            (BudgetRange::Mid, Some(p)) => (15_000..=30_000).contains(&p),
            (BudgetRange::High, Some(p)) => p >= 30_000,
        }
    }
}
