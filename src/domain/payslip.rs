use super::tax::TaxSchedule;
use crate::error::SuperRateError;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use std::fmt;
use std::str::FromStr;

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Rounds a monetary amount to whole currency units, halves away from zero.
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Superannuation rate as a fraction in `[0, 1]`.
///
/// Parsed from a whole percentage (`"9%"`, `"9"`, `"10.5%"`).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SuperRate(Decimal);

impl SuperRate {
    pub fn from_fraction(value: Decimal) -> Result<Self, SuperRateError> {
        if value < Decimal::ZERO || value > Decimal::ONE {
            return Err(SuperRateError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    pub fn from_percent(value: Decimal) -> Result<Self, SuperRateError> {
        Self::from_fraction(value / dec!(100))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl FromStr for SuperRate {
    type Err = SuperRateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();
        let percent =
            Decimal::from_str(number).map_err(|_| SuperRateError::Invalid(s.to_string()))?;
        Self::from_percent(percent)
    }
}

impl fmt::Display for SuperRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", (self.0 * dec!(100)).normalize())
    }
}

/// Monthly figures derived from a payslip's annual inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayslipFigures {
    pub gross_income: Decimal,
    pub income_tax: Decimal,
    pub net_income: Decimal,
    pub super_amount: Decimal,
}

/// One employee's salary record for a pay period.
///
/// Holds the parsed inputs and, once [`Payslip::calculate`] has run, the
/// monthly figures.
#[derive(Debug, Clone, PartialEq)]
pub struct Payslip {
    pub name: String,
    pub annual_salary: Decimal,
    pub super_rate: SuperRate,
    pub payment_period: String,
    figures: Option<PayslipFigures>,
}

impl Payslip {
    pub fn new(
        name: impl Into<String>,
        annual_salary: Decimal,
        super_rate: SuperRate,
        payment_period: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            annual_salary,
            super_rate,
            payment_period: payment_period.into(),
            figures: None,
        }
    }

    /// Computes the monthly figures.
    ///
    /// Tax is taken from the annual salary and only then converted to a
    /// monthly amount, so rounding never moves a salary across a bracket.
    pub fn calculate(&mut self, schedule: &TaxSchedule) {
        let gross_income = round_currency(self.annual_salary / MONTHS_PER_YEAR);
        let income_tax = round_currency(schedule.annual_tax(self.annual_salary) / MONTHS_PER_YEAR);
        let super_amount = round_currency(gross_income * self.super_rate.value());

        self.figures = Some(PayslipFigures {
            gross_income,
            income_tax,
            net_income: gross_income - income_tax,
            super_amount,
        });
    }

    pub fn figures(&self) -> Option<&PayslipFigures> {
        self.figures.as_ref()
    }

    pub fn is_calculated(&self) -> bool {
        self.figures.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payslip(salary: Decimal, rate: &str) -> Payslip {
        Payslip::new("David Rudd", salary, rate.parse().unwrap(), "01 March - 31 March")
    }

    #[test]
    fn test_figures_absent_until_calculated() {
        let slip = payslip(dec!(60050), "9%");
        assert!(!slip.is_calculated());
        assert!(slip.figures().is_none());
    }

    #[test]
    fn test_calculate_reference_employee() {
        let mut slip = payslip(dec!(60050), "9%");
        slip.calculate(&TaxSchedule::default());

        let figures = slip.figures().unwrap();
        assert_eq!(figures.gross_income, dec!(5004));
        assert_eq!(figures.income_tax, dec!(922));
        assert_eq!(figures.net_income, dec!(4082));
        assert_eq!(figures.super_amount, dec!(450));
    }

    #[test]
    fn test_calculate_second_reference_employee() {
        let mut slip = payslip(dec!(120000), "10%");
        slip.calculate(&TaxSchedule::default());

        let figures = slip.figures().unwrap();
        assert_eq!(figures.gross_income, dec!(10000));
        assert_eq!(figures.income_tax, dec!(2696));
        assert_eq!(figures.net_income, dec!(7304));
        assert_eq!(figures.super_amount, dec!(1000));
    }

    #[test]
    fn test_zero_salary() {
        let mut slip = payslip(dec!(0), "0%");
        slip.calculate(&TaxSchedule::default());

        let figures = slip.figures().unwrap();
        assert_eq!(figures.gross_income, Decimal::ZERO);
        assert_eq!(figures.income_tax, Decimal::ZERO);
        assert_eq!(figures.net_income, Decimal::ZERO);
        assert_eq!(figures.super_amount, Decimal::ZERO);
    }

    #[test]
    fn test_tax_uses_annual_salary_not_rounded_gross() {
        // 18294 / 12 = 1524.5 rounds up to 1525, which annualises to 18300.
        let mut slip = payslip(dec!(18294), "0%");
        slip.calculate(&TaxSchedule::default());
        let figures = slip.figures().unwrap();
        assert_eq!(figures.gross_income, dec!(1525));
        // 94 * 0.19 / 12 = 1.488.., whereas 100 * 0.19 / 12 would give 2.
        assert_eq!(figures.income_tax, dec!(1));
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        assert_eq!(round_currency(dec!(0.5)), dec!(1));
        assert_eq!(round_currency(dec!(2.5)), dec!(3));
        assert_eq!(round_currency(dec!(2.49)), dec!(2));
    }

    #[test]
    fn test_super_rate_parsing() {
        assert_eq!("9%".parse::<SuperRate>().unwrap().value(), dec!(0.09));
        assert_eq!(" 10.5 % ".parse::<SuperRate>().unwrap().value(), dec!(0.105));
        assert_eq!("50".parse::<SuperRate>().unwrap().value(), dec!(0.5));
    }

    #[test]
    fn test_super_rate_errors() {
        assert_eq!(
            "101%".parse::<SuperRate>(),
            Err(SuperRateError::OutOfRange(dec!(1.01)))
        );
        assert_eq!(
            "-1%".parse::<SuperRate>(),
            Err(SuperRateError::OutOfRange(dec!(-0.01)))
        );
        assert_eq!(
            "nine".parse::<SuperRate>(),
            Err(SuperRateError::Invalid("nine".to_string()))
        );
        assert_eq!(
            SuperRate::from_fraction(dec!(1.5)).unwrap_err().to_string(),
            "super rate 1.5 is outside 0-100%"
        );
    }

    #[test]
    fn test_super_rate_display() {
        assert_eq!("9%".parse::<SuperRate>().unwrap().to_string(), "9%");
        assert_eq!("12.5%".parse::<SuperRate>().unwrap().to_string(), "12.5%");
    }
}
