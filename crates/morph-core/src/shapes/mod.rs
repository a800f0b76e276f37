//! Procedural shape sampling.
//!
//! Six stochastic generators (one per [`ShapeKind`]) and a dispatcher that
//! fills a target buffer for whichever shape is active. Sampling is
//! randomized per point, not traced along a curve, so two fills of the same
//! shape produce different point sets.

pub mod dispatcher;
pub mod generators;

use std::fmt;
use std::str::FromStr;

use crate::error::CloudError;

/// The closed set of renderable shapes.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ShapeKind {
    Heart,
    Flower,
    Saturn,
    Sun,
    Buddha,
    /// Compact seed cluster that the animator blows apart under tension.
    Fireworks,
}

impl ShapeKind {
    /// Every supported shape, in UI order.
    pub const ALL: [ShapeKind; 6] = [
        ShapeKind::Heart,
        ShapeKind::Flower,
        ShapeKind::Saturn,
        ShapeKind::Sun,
        ShapeKind::Buddha,
        ShapeKind::Fireworks,
    ];

    /// The identifier the control surface uses for this shape.
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Heart => "heart",
            ShapeKind::Flower => "flower",
            ShapeKind::Saturn => "saturn",
            ShapeKind::Sun => "sun",
            ShapeKind::Buddha => "buddha",
            ShapeKind::Fireworks => "fireworks",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = CloudError;

    fn from_str(s: &str) -> Result<Self, CloudError> {
        match s {
            "heart" => Ok(ShapeKind::Heart),
            "flower" => Ok(ShapeKind::Flower),
            "saturn" => Ok(ShapeKind::Saturn),
            "sun" => Ok(ShapeKind::Sun),
            "buddha" => Ok(ShapeKind::Buddha),
            "fireworks" => Ok(ShapeKind::Fireworks),
            other => Err(CloudError::UnknownShape(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for kind in ShapeKind::ALL {
            assert_eq!(kind.name().parse::<ShapeKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_unknown_name_rejected() {
        let err = "not-a-shape".parse::<ShapeKind>().unwrap_err();
        assert_eq!(err, CloudError::UnknownShape("not-a-shape".to_string()));
    }

    #[test]
    fn test_names_are_case_sensitive() {
        assert!("Heart".parse::<ShapeKind>().is_err());
    }
}
