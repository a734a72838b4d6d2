/// A non-negative distance with meters as the canonical unit.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Length(f64);

impl Length {
    pub const ZERO: Self = Self(0.0);

    pub const fn from_meters(meters: f64) -> Self {
        Self(meters)
    }

    pub const fn as_meters(self) -> f64 {
        self.0
    }

    pub const fn from_kilometers(km: f64) -> Self {
        Self(km * 1000.0)
    }

    pub const fn as_kilometers(self) -> f64 {
        self.0 / 1000.0
    }
}

impl Eq for Length {}

impl Ord for Length {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Type assumes that all values are normal and could be compared
        self.0
            .partial_cmp(&other.0)
            .unwrap_or(std::cmp::Ordering::Equal)
    }
}

impl std::ops::Add for Length {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::AddAssign for Length {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl std::iter::Sum for Length {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, std::ops::Add::add)
    }
}

impl From<Length> for f64 {
    fn from(Length(meters): Length) -> Self {
        meters
    }
}

impl std::fmt::Display for Length {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} m", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_conversions() {
        let length = Length::from_kilometers(1.5);

        assert_eq!(length.as_meters(), 1500.0);
        assert_eq!(length.as_kilometers(), 1.5);
        assert_eq!(length, Length::from_meters(1500.0));
    }

    #[test]
    fn ordering_by_magnitude() {
        let mut lengths = [
            Length::from_meters(30.0),
            Length::ZERO,
            Length::from_meters(10.0),
        ];
        lengths.sort();

        assert_eq!(
            lengths,
            [
                Length::ZERO,
                Length::from_meters(10.0),
                Length::from_meters(30.0),
            ]
        );
    }

    #[test]
    fn sum_of_lengths() {
        let total: Length = [10.0, 20.0, 12.5].map(Length::from_meters).into_iter().sum();

        assert_eq!(total, Length::from_meters(42.5));
    }
}
