use std::fmt::Display;
use std::fmt::Formatter;
use std::ops::Not;

/// A boolean decision variable, identified by the order in which the solver created it.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct VariableId(u32);

impl VariableId {
    pub(crate) fn new(index: u32) -> Self {
        VariableId(index)
    }

    /// The position of the variable in the solver.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Display for VariableId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.0)
    }
}

/// A [`VariableId`] together with a polarity; the positive literal of `x` states `x = 1` and the
/// negative literal states `x = 0`.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Literal {
    variable: VariableId,
    polarity: bool,
}

impl Literal {
    pub fn new(variable: VariableId, polarity: bool) -> Self {
        Literal { variable, polarity }
    }

    pub fn variable(self) -> VariableId {
        self.variable
    }

    /// Whether the literal states that its variable is assigned to 1.
    pub fn is_positive(self) -> bool {
        self.polarity
    }
}

impl Not for Literal {
    type Output = Literal;

    fn not(self) -> Self::Output {
        Literal {
            variable: self.variable,
            polarity: !self.polarity,
        }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} == {}]", self.variable, u8::from(self.polarity))
    }
}

#[cfg(test)]
mod tests {
    use super::Literal;
    use super::VariableId;

    #[test]
    fn negation_flips_only_the_polarity() {
        let literal = Literal::new(VariableId::new(7), true);

        assert_eq!((!literal).variable(), literal.variable());
        assert!(!(!literal).is_positive());
        assert_eq!(!!literal, literal);
    }

    #[test]
    fn display_shows_the_assigned_value() {
        let literal = Literal::new(VariableId::new(3), false);

        assert_eq!(literal.to_string(), "[x3 == 0]");
    }
}
