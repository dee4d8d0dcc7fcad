use rust_decimal::{Decimal, RoundingStrategy};
use std::{
    borrow::Borrow,
    collections::BTreeMap,
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
    str::FromStr,
};
use thiserror::Error;

/// Net position per participant. A `BTreeMap` keeps iteration ordered by identifier.
pub type Balances = BTreeMap<Participant, Money>;

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Participant(String);

impl Participant {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Participant {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Participant {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("participant name must not be empty")]
    EmptyName,
    #[error("participant '{0}' is already on the roster")]
    Duplicate(String),
}

/// Ordered set of unique participants. Order only matters for display.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    participants: Vec<Participant>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_from_names<I, S>(names: I) -> Result<Self, RosterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut roster = Self::new();
        for name in names {
            roster.try_push(name.as_ref())?;
        }
        Ok(roster)
    }

    /// Appends a participant; the name is trimmed before validation.
    pub fn try_push(&mut self, name: &str) -> Result<&Participant, RosterError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RosterError::EmptyName);
        }
        if self.contains(name) {
            return Err(RosterError::Duplicate(name.to_owned()));
        }
        self.participants.push(Participant::new(name));
        Ok(&self.participants[self.participants.len() - 1])
    }

    pub fn remove(&mut self, index: usize) -> Option<Participant> {
        (index < self.participants.len()).then(|| self.participants.remove(index))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.participants.iter().any(|p| p.as_str() == name)
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn iter(&self) -> impl Iterator<Item = &Participant> + '_ {
        self.participants.iter()
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}

/// Decimal money amount. Arithmetic keeps full precision; only `Display` rounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Settlement granularity: magnitudes at or below this count as zero.
    pub const TOLERANCE: Self = Self(Decimal::from_parts(1, 0, 0, false, 9));

    /// Decimal places used for display and the finest amount an expense may carry.
    pub const DISPLAY_SCALE: u32 = 2;

    /// Largest amount accepted for a single expense (one trillion).
    pub const MAX_AMOUNT: Self = Self(Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0));

    pub fn new(num: i64, scale: u32) -> Self {
        Self(Decimal::new(num, scale))
    }

    pub fn from_i64(value: i64) -> Self {
        Self(Decimal::from(value))
    }

    pub fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    /// Goes through the shortest round-trip text form, so `0.1` stays `0.1`.
    /// Returns `None` for NaN, infinities and values outside decimal range.
    pub fn try_from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        Decimal::from_str(&value.to_string()).ok().map(Self)
    }

    pub fn as_decimal(self) -> Decimal {
        self.0
    }

    /// Parses the normalized decimal text, so whole-cent amounts up to
    /// [`Money::MAX_AMOUNT`] come back unchanged through [`Money::try_from_f64`].
    pub fn to_f64(self) -> f64 {
        self.0.normalize().to_string().parse().unwrap_or_default()
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }

    /// True when the amount has no digits below [`Money::DISPLAY_SCALE`].
    pub fn is_whole_cents(self) -> bool {
        self.0.normalize().scale() <= Self::DISPLAY_SCALE
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    pub fn is_positive(self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn is_negative(self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// True when the magnitude is within [`Money::TOLERANCE`].
    pub fn is_negligible(self) -> bool {
        self.abs() <= Self::TOLERANCE
    }

    /// Divides into `parts` equal shares at full precision. Zero parts yield zero.
    pub fn split(self, parts: usize) -> Self {
        if parts == 0 {
            return Self::ZERO;
        }
        Self(self.0 / Decimal::from(parts))
    }

    /// Amount rounded to [`Money::DISPLAY_SCALE`] places, midpoint away from zero.
    pub fn rounded(self) -> Decimal {
        let mut rounded = self
            .0
            .round_dp_with_strategy(Self::DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero);
        if rounded.is_zero() {
            rounded.set_sign_positive(true);
        }
        rounded.rescale(Self::DISPLAY_SCALE);
        rounded
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rounded())
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim()).map(Self)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// How an expense is shared. Every expense follows exactly one policy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SplitPolicy {
    /// Split evenly across the entire roster.
    Equal,
    /// Split evenly among the listed participants only.
    Among(Vec<Participant>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expense {
    pub title: String,
    pub amount: Money,
    pub payer: Participant,
    pub split: SplitPolicy,
}

impl Expense {
    pub fn equal(title: impl Into<String>, amount: Money, payer: impl Into<Participant>) -> Self {
        Self {
            title: title.into(),
            amount,
            payer: payer.into(),
            split: SplitPolicy::Equal,
        }
    }

    pub fn among<I, P>(
        title: impl Into<String>,
        amount: Money,
        payer: impl Into<Participant>,
        shared_by: I,
    ) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Participant>,
    {
        Self {
            title: title.into(),
            amount,
            payer: payer.into(),
            split: SplitPolicy::Among(shared_by.into_iter().map(Into::into).collect()),
        }
    }
}

/// Why an expense was left out of the balance calculation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ExpenseIssue {
    #[error("amount must be positive")]
    NonPositiveAmount,
    #[error("payer is not on the roster")]
    UnknownPayer,
    #[error("shared-by list is empty")]
    EmptySharedBy,
    #[error("none of the listed sharers are on the roster")]
    NoKnownSharers,
    #[error("amount is too large to add to the running balances")]
    AmountOutOfRange,
}

/// Non-fatal findings of a balance calculation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BalanceWarning {
    #[error("roster is empty; every balance resolves to zero")]
    EmptyRoster,
    #[error("expense #{index} '{title}' skipped: {issue}")]
    InvalidExpense {
        index: usize,
        title: String,
        issue: ExpenseIssue,
    },
    #[error("expense #{index} '{title}': sharer '{name}' is not on the roster")]
    UnknownSharer {
        index: usize,
        title: String,
        name: Participant,
    },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BalanceReport {
    pub balances: Balances,
    /// Sum of the expenses that were counted.
    pub total: Money,
    /// `total` divided by roster size; informational only.
    pub per_person_share: Money,
    pub warnings: Vec<BalanceWarning>,
}

impl BalanceReport {
    pub fn balance_of(&self, name: &str) -> Option<Money> {
        self.balances.get(name).copied()
    }

    pub fn net_total(&self) -> Money {
        self.balances.values().sum()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settlement {
    pub from: Participant,
    pub to: Participant,
    pub amount: Money,
}

impl fmt::Display for Settlement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}: {}", self.from, self.to, self.amount)
    }
}
