use crate::error::ScheduleError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// One band of a progressive income tax table.
///
/// Covers the half-open salary range `[lower, upper)`; `upper == None` means
/// the band has no ceiling. Tax inside the band is `base_tax` plus `rate` on
/// every unit above `lower`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub lower: Decimal,
    pub upper: Option<Decimal>,
    pub base_tax: Decimal,
    pub rate: Decimal,
}

impl TaxBracket {
    pub const fn new(lower: Decimal, upper: Option<Decimal>, base_tax: Decimal, rate: Decimal) -> Self {
        Self {
            lower,
            upper,
            base_tax,
            rate,
        }
    }

    pub fn contains(&self, salary: Decimal) -> bool {
        salary >= self.lower && self.upper.is_none_or(|upper| salary < upper)
    }

    pub fn tax_for(&self, salary: Decimal) -> Decimal {
        self.base_tax + (salary - self.lower) * self.rate
    }
}

/// An ordered, gap-free sequence of [`TaxBracket`]s covering `[0, ∞)`.
///
/// Construction validates the table so that lookups always find exactly one
/// bracket and tax is continuous across boundaries.
#[derive(Debug, Clone, PartialEq)]
pub struct TaxSchedule {
    brackets: Vec<TaxBracket>,
}

impl TaxSchedule {
    pub fn new(brackets: Vec<TaxBracket>) -> Result<Self, ScheduleError> {
        let last = brackets.len().checked_sub(1).ok_or(ScheduleError::Empty)?;
        if brackets[0].lower != Decimal::ZERO {
            return Err(ScheduleError::NonZeroStart(brackets[0].lower));
        }
        if brackets[0].base_tax != Decimal::ZERO {
            return Err(ScheduleError::NonZeroBase(brackets[0].base_tax));
        }

        for (index, bracket) in brackets.iter().enumerate() {
            if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
                return Err(ScheduleError::RateOutOfRange {
                    index,
                    rate: bracket.rate,
                });
            }

            let Some(upper) = bracket.upper else {
                if index != last {
                    return Err(ScheduleError::UnboundedBeforeLast { index });
                }
                continue;
            };
            if upper <= bracket.lower {
                return Err(ScheduleError::EmptyRange { index });
            }

            let next = brackets.get(index + 1).ok_or(ScheduleError::BoundedLast)?;
            if next.lower != upper {
                return Err(ScheduleError::Gap {
                    index,
                    end: upper,
                    next_start: next.lower,
                });
            }
            let expected = bracket.tax_for(upper);
            if next.base_tax != expected {
                return Err(ScheduleError::Discontinuous {
                    index: index + 1,
                    expected,
                    found: next.base_tax,
                });
            }
        }

        Ok(Self { brackets })
    }

    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// Returns the bracket whose range contains `salary`, if any.
    ///
    /// Only negative salaries fall outside a validated schedule.
    pub fn bracket_for(&self, salary: Decimal) -> Option<&TaxBracket> {
        self.brackets.iter().find(|b| b.contains(salary))
    }

    /// Annual income tax owed on an annual salary, unrounded.
    pub fn annual_tax(&self, salary: Decimal) -> Decimal {
        self.bracket_for(salary)
            .map_or(Decimal::ZERO, |bracket| bracket.tax_for(salary))
    }
}

impl Default for TaxSchedule {
    /// Resident individual rates for 2012-13.
    fn default() -> Self {
        Self {
            brackets: vec![
                TaxBracket::new(dec!(0), Some(dec!(18200)), dec!(0), dec!(0)),
                TaxBracket::new(dec!(18200), Some(dec!(37000)), dec!(0), dec!(0.19)),
                TaxBracket::new(dec!(37000), Some(dec!(80000)), dec!(3572), dec!(0.325)),
                TaxBracket::new(dec!(80000), Some(dec!(180000)), dec!(17547), dec!(0.37)),
                TaxBracket::new(dec!(180000), None, dec!(54547), dec!(0.45)),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schedule_is_valid() {
        let default = TaxSchedule::default();
        let validated = TaxSchedule::new(default.brackets().to_vec()).unwrap();
        assert_eq!(validated, default);
    }

    #[test]
    fn test_annual_tax_per_bracket() {
        let schedule = TaxSchedule::default();
        assert_eq!(schedule.annual_tax(dec!(0)), dec!(0));
        assert_eq!(schedule.annual_tax(dec!(18000)), dec!(0));
        assert_eq!(schedule.annual_tax(dec!(30000)), dec!(2242));
        assert_eq!(schedule.annual_tax(dec!(60050)), dec!(11063.25));
        assert_eq!(schedule.annual_tax(dec!(120000)), dec!(32347));
        assert_eq!(schedule.annual_tax(dec!(200000)), dec!(63547));
    }

    #[test]
    fn test_boundary_belongs_to_upper_bracket() {
        let schedule = TaxSchedule::default();
        let bracket = schedule.bracket_for(dec!(37000)).unwrap();
        assert_eq!(bracket.lower, dec!(37000));
        assert_eq!(bracket.rate, dec!(0.325));
        assert_eq!(schedule.annual_tax(dec!(37000)), dec!(3572));

        let below = schedule.bracket_for(dec!(36999.99)).unwrap();
        assert_eq!(below.lower, dec!(18200));
    }

    #[test]
    fn test_negative_salary_has_no_bracket() {
        let schedule = TaxSchedule::default();
        assert!(schedule.bracket_for(dec!(-1)).is_none());
        assert_eq!(schedule.annual_tax(dec!(-1)), Decimal::ZERO);
    }

    #[test]
    fn test_rejects_empty_schedule() {
        assert_eq!(TaxSchedule::new(vec![]), Err(ScheduleError::Empty));
    }

    #[test]
    fn test_rejects_non_zero_start() {
        let result = TaxSchedule::new(vec![TaxBracket::new(dec!(100), None, dec!(0), dec!(0.1))]);
        assert_eq!(result, Err(ScheduleError::NonZeroStart(dec!(100))));
    }

    #[test]
    fn test_rejects_non_zero_first_base_tax() {
        let negative = TaxSchedule::new(vec![TaxBracket::new(dec!(0), None, dec!(-5000), dec!(0))]);
        assert_eq!(negative, Err(ScheduleError::NonZeroBase(dec!(-5000))));

        let levy = TaxSchedule::new(vec![TaxBracket::new(dec!(0), None, dec!(100), dec!(0.1))]);
        assert_eq!(levy, Err(ScheduleError::NonZeroBase(dec!(100))));
    }

    #[test]
    fn test_rejects_gap() {
        let result = TaxSchedule::new(vec![
            TaxBracket::new(dec!(0), Some(dec!(100)), dec!(0), dec!(0)),
            TaxBracket::new(dec!(150), None, dec!(0), dec!(0.1)),
        ]);
        assert!(matches!(result, Err(ScheduleError::Gap { index: 0, .. })));
    }

    #[test]
    fn test_rejects_bounded_last_bracket() {
        let result = TaxSchedule::new(vec![TaxBracket::new(dec!(0), Some(dec!(100)), dec!(0), dec!(0))]);
        assert_eq!(result, Err(ScheduleError::BoundedLast));
    }

    #[test]
    fn test_rejects_unbounded_middle_bracket() {
        let result = TaxSchedule::new(vec![
            TaxBracket::new(dec!(0), None, dec!(0), dec!(0)),
            TaxBracket::new(dec!(100), None, dec!(0), dec!(0.1)),
        ]);
        assert_eq!(result, Err(ScheduleError::UnboundedBeforeLast { index: 0 }));
    }

    #[test]
    fn test_rejects_rate_out_of_range() {
        let result = TaxSchedule::new(vec![TaxBracket::new(dec!(0), None, dec!(0), dec!(1.5))]);
        assert!(matches!(result, Err(ScheduleError::RateOutOfRange { index: 0, .. })));
    }

    #[test]
    fn test_rejects_discontinuous_base() {
        let result = TaxSchedule::new(vec![
            TaxBracket::new(dec!(0), Some(dec!(100)), dec!(0), dec!(0.1)),
            TaxBracket::new(dec!(100), None, dec!(12), dec!(0.2)),
        ]);
        assert_eq!(
            result,
            Err(ScheduleError::Discontinuous {
                index: 1,
                expected: dec!(10),
                found: dec!(12),
            })
        );
    }

    #[test]
    fn test_rejects_inverted_range() {
        let result = TaxSchedule::new(vec![
            TaxBracket::new(dec!(0), Some(dec!(0)), dec!(0), dec!(0)),
            TaxBracket::new(dec!(0), None, dec!(0), dec!(0.1)),
        ]);
        assert_eq!(result, Err(ScheduleError::EmptyRange { index: 0 }));
    }
}
