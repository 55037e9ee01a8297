use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

use crate::error::{LojinhaError, Result};

/// A monetary amount in centavos. All price arithmetic stays in integers;
/// the only floating-point value in the crate is the report margin, which is
/// display-only.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    pub const fn zero() -> Self {
        Money(0)
    }

    pub const fn cents(&self) -> i64 {
        self.0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parse a user-entered amount into centavos. Accepts whole numbers
    /// ("3500") and one- or two-digit decimals with either separator
    /// ("35.5", "35,50"). Negative and malformed input is rejected.
    pub fn parse(input: &str) -> Result<Self> {
        let raw = input.trim();
        if raw.is_empty() {
            return Err(LojinhaError::Input("valor vazio".to_string()));
        }
        if raw.starts_with('-') {
            return Err(LojinhaError::Input(format!(
                "valor não pode ser negativo: {}",
                raw
            )));
        }

        let invalid = || LojinhaError::Input(format!("valor inválido: {}", raw));

        let normalized = raw.replace(',', ".");
        let mut parts = normalized.splitn(2, '.');
        let units_part = parts.next().unwrap_or("");
        let units: i64 = if units_part.is_empty() {
            0
        } else {
            units_part.parse().map_err(|_| invalid())?
        };

        let cents: i64 = match parts.next() {
            None => 0,
            Some("") => 0,
            Some(frac) if !frac.chars().all(|c| c.is_ascii_digit()) => return Err(invalid()),
            Some(frac) if frac.len() == 1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
            Some(frac) if frac.len() == 2 => frac.parse().map_err(|_| invalid())?,
            Some(_) => return Err(invalid()),
        };

        Ok(Money(units * 100 + cents))
    }

    /// Plain decimal rendering with a dot separator, for CSV cells
    /// ("15000.00", "-3.05").
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        format!("{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

/// pt-BR rendering: thousands separated by dots, comma before the centavos
/// ("3.500,00"). The currency symbol is a presentation concern and is
/// prepended by the CLI layer.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let units = (abs / 100).to_string();
        let mut grouped = String::with_capacity(units.len() + units.len() / 3);
        for (i, c) in units.chars().enumerate() {
            if i > 0 && (units.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(c);
        }
        write!(f, "{}{},{:02}", sign, grouped, abs % 100)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, rhs: i64) -> Money {
        Money(self.0 * rhs)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_whole_numbers_as_units() {
        assert_eq!(Money::parse("3500").unwrap().cents(), 350_000);
        assert_eq!(Money::parse("0").unwrap().cents(), 0);
    }

    #[test]
    fn parses_decimals_with_either_separator() {
        assert_eq!(Money::parse("36.00").unwrap().cents(), 3600);
        assert_eq!(Money::parse("36,00").unwrap().cents(), 3600);
        assert_eq!(Money::parse("35.5").unwrap().cents(), 3550);
        assert_eq!(Money::parse(",99").unwrap().cents(), 99);
    }

    #[test]
    fn rejects_negative_and_malformed_input() {
        assert!(Money::parse("-10").is_err());
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.234").is_err());
        assert!(Money::parse("1.2.3").is_err());
    }

    #[test]
    fn formats_pt_br() {
        assert_eq!(Money::from_cents(350_000).to_string(), "3.500,00");
        assert_eq!(Money::from_cents(9900).to_string(), "99,00");
        assert_eq!(Money::from_cents(5).to_string(), "0,05");
        assert_eq!(Money::from_cents(-123_456).to_string(), "-1.234,56");
        assert_eq!(Money::from_cents(100_000_000).to_string(), "1.000.000,00");
    }

    #[test]
    fn decimal_string_for_csv() {
        assert_eq!(Money::from_cents(1_500_000).to_decimal_string(), "15000.00");
        assert_eq!(Money::from_cents(-305).to_decimal_string(), "-3.05");
    }

    #[test]
    fn arithmetic_stays_in_cents() {
        let price = Money::from_cents(500_000);
        let cost = Money::from_cents(350_000);
        assert_eq!((price * 3).cents(), 1_500_000);
        assert_eq!(((price - cost) * 3).cents(), 450_000);
        let total: Money = [price, cost].into_iter().sum();
        assert_eq!(total.cents(), 850_000);
    }
}
