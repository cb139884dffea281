use std::fmt::{self, Display};

/// The two classes a sample can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Square = 0,
    Circle = 1,
}

impl Label {
    /// Thresholds a raw prediction, anything at or above zero is a circle.
    ///
    /// This is the only decision rule, both the reported class and the learning rule go through
    /// it, so a prediction of exactly zero is always read as a circle.
    pub fn from_prediction(prediction: f32) -> Self {
        if prediction >= 0. {
            Label::Circle
        } else {
            Label::Square
        }
    }

    /// Returns the numeric class, 1 for circles and 0 for squares.
    pub fn value(self) -> u8 {
        self as u8
    }
}

impl Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Square => f.write_str("square"),
            Label::Circle => f.write_str("circle"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold() {
        assert_eq!(Label::from_prediction(-0.5), Label::Square);
        assert_eq!(Label::from_prediction(0.), Label::Circle);
        assert_eq!(Label::from_prediction(-0.), Label::Circle);
        assert_eq!(Label::from_prediction(3.), Label::Circle);
    }

    #[test]
    fn values() {
        assert_eq!(Label::Square.value(), 0);
        assert_eq!(Label::Circle.value(), 1);
    }
}
