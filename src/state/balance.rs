// Passive balance accumulator driven by the ticker interval
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BalanceTicker {
    pub balance: f64,
    /// Ticks applied since mount.
    pub ticks: u64,
}

impl BalanceTicker {
    pub fn tick(self, rate: f64) -> Self {
        Self {
            balance: self.balance + rate,
            ticks: self.ticks.saturating_add(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn starts_at_zero() {
        let t = BalanceTicker::default();
        assert_eq!(t.balance, 0.0);
        assert_eq!(t.ticks, 0);
    }

    #[test]
    fn one_tick_adds_one_rate() {
        let t = BalanceTicker::default().tick(0.000001);
        assert_eq!(t.balance, 0.000001);
        assert_eq!(t.ticks, 1);
    }

    proptest! {
        #[test]
        fn balance_is_ticks_times_rate(n in 0u64..5_000, rate in 0.0f64..1.0) {
            let mut t = BalanceTicker::default();
            for _ in 0..n {
                t = t.tick(rate);
            }
            prop_assert_eq!(t.ticks, n);
            let expected = n as f64 * rate;
            prop_assert!((t.balance - expected).abs() <= 1e-9 * expected.max(1.0));
        }

        #[test]
        fn balance_never_decreases(n in 1u64..500, rate in 0.0f64..1.0) {
            let mut t = BalanceTicker::default();
            for _ in 0..n {
                let next = t.tick(rate);
                prop_assert!(next.balance >= t.balance);
                t = next;
            }
        }
    }
}
