//! The distance metrics supported for clustering.

use core::{fmt::Display, str::FromStr};

use distances::Number;
use serde::{Deserialize, Serialize};

use super::LinkageError;

/// The L_p norms under which pairwise distances may be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Metric {
    /// The L1 norm, also known as the city block distance.
    Manhattan,
    /// The L2 norm.
    #[default]
    Euclidean,
}

impl Metric {
    /// Returns the `p` of the L_p norm.
    #[must_use]
    pub const fn norm_order(self) -> u32 {
        match self {
            Self::Manhattan => 1,
            Self::Euclidean => 2,
        }
    }

    /// Returns the `Metric` for the given norm order.
    ///
    /// # Errors
    ///
    /// * If `p` is neither 1 nor 2.
    pub fn from_norm_order(p: u32) -> Result<Self, LinkageError> {
        match p {
            1 => Ok(Self::Manhattan),
            2 => Ok(Self::Euclidean),
            _ => Err(LinkageError::InvalidConfiguration(format!(
                "Unsupported norm order {p}. Expected 1 (manhattan) or 2 (euclidean)."
            ))),
        }
    }

    /// The name of the metric.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Manhattan => "manhattan",
            Self::Euclidean => "euclidean",
        }
    }

    /// Computes the distance between two points.
    ///
    /// Both points are assumed to have the same dimensionality. Points with no
    /// dimensions are at distance zero from each other.
    ///
    /// The sum is accumulated in `f64`, so integer coordinates cannot overflow.
    pub fn distance<T: Number>(self, a: &[T], b: &[T]) -> f64 {
        match self {
            Self::Manhattan => a.iter().zip(b).map(|(&x, &y)| (x.as_f64() - y.as_f64()).abs()).sum(),
            Self::Euclidean => distances::vectors::euclidean::<T, f64>(a, b),
        }
    }
}

impl Display for Metric {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Metric {
    type Err = LinkageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "manhattan" => Ok(Self::Manhattan),
            "euclidean" => Ok(Self::Euclidean),
            _ => Err(LinkageError::InvalidConfiguration(format!(
                "Unknown metric {s:?}. Expected \"euclidean\" or \"manhattan\"."
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!("euclidean".parse::<Metric>(), Ok(Metric::Euclidean));
        assert_eq!("Manhattan".parse::<Metric>(), Ok(Metric::Manhattan));
        assert!(matches!(
            "cosine".parse::<Metric>(),
            Err(LinkageError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn norm_orders() {
        for metric in [Metric::Manhattan, Metric::Euclidean] {
            assert_eq!(Metric::from_norm_order(metric.norm_order()), Ok(metric));
        }
        assert!(Metric::from_norm_order(0).is_err());
        assert!(Metric::from_norm_order(3).is_err());
    }

    #[test]
    fn distances() {
        let a = [1.0_f64, 2.0, 3.0];
        let b = [4.0_f64, 6.0, 3.0];
        assert!((Metric::Manhattan.distance(&a, &b) - 7.0).abs() <= f64::EPSILON);
        assert!((Metric::Euclidean.distance(&a, &b) - 5.0).abs() <= f64::EPSILON);

        let empty: [f64; 0] = [];
        assert!(Metric::Euclidean.distance(&empty, &empty).abs() <= f64::EPSILON);
        assert!(Metric::Manhattan.distance(&empty, &empty).abs() <= f64::EPSILON);

        let (x, y) = ([3_u32, 0], [0_u32, 4]);
        assert!((Metric::Euclidean.distance(&x, &y) - 5.0).abs() <= f64::EPSILON);
        assert!((Metric::Manhattan.distance(&x, &y) - 7.0).abs() <= f64::EPSILON);
    }
}
