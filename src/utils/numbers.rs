use rust_decimal::Decimal;

/// Redondeo a dos decimales (promedios de rating)
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Suma de importes; `None` si el total no cabe en un `Decimal`
pub fn checked_sum<I>(amounts: I) -> Option<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |total, amount| total.checked_add(amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(14.0 / 3.0), 4.67);
        assert_eq!(round2(4.95), 4.95);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn test_checked_sum() {
        assert_eq!(checked_sum([Decimal::from(75), Decimal::from(380)]), Some(Decimal::from(455)));
        assert_eq!(checked_sum(Vec::new()), Some(Decimal::ZERO));
        assert_eq!(checked_sum([Decimal::MAX, Decimal::ONE]), None);
    }
}
