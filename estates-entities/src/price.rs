use std::fmt;

/// Asking price of a listing in dollars.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Price(f64);

impl Price {
    /// Largest amount that is displayed exactly (one quadrillion dollars).
    pub const MAX_AMOUNT: f64 = 1e15;

    /// Negative or non-finite amounts are treated as zero,
    /// larger amounts are capped at [`Price::MAX_AMOUNT`].
    pub fn new(amount: f64) -> Self {
        if amount.is_finite() && amount > 0.0 {
            Self(amount.min(Self::MAX_AMOUNT))
        } else {
            Self(0.0)
        }
    }
}

impl From<f64> for Price {
    fn from(from: f64) -> Self {
        Self::new(from)
    }
}

fn group_thousands(mut n: u64) -> String {
    let mut groups = vec![];
    while n >= 1000 {
        groups.push(format!("{:03}", n % 1000));
        n /= 1000;
    }
    groups.push(n.to_string());
    groups.reverse();
    groups.join(",")
}

/// Whole dollars with thousands separators,
/// cents only if there are any: `$1,250,000`, `$99.5`.
impl fmt::Display for Price {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let cents = (self.0 * 100.0).round() as u64;
        write!(f, "${}", group_thousands(cents / 100))?;
        let fraction = cents % 100;
        if fraction > 0 {
            let fraction = format!("{fraction:02}");
            write!(f, ".{}", fraction.trim_end_matches('0'))?;
        }
        Ok(())
    }
}
