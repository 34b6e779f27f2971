//! Recognizer configuration.

/// Which spellings the `Constant` rule accepts.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ConstantRule {
    /// `(+|-)? NUMBER | STRING_CONST`.
    #[default]
    Standard,
    /// Only a signed number. Unsigned numbers and string literals are
    /// rejected, and because `Factor` consumes prefix signs before it reaches
    /// `Value`, constants inside expressions are always rejected too. Only a
    /// declaration initializer such as `int a = -5;` gets through.
    SignedOnly,
}

/// Options for one recognizer run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ParseOptions {
    pub constant_rule: ConstantRule,
}

impl ParseOptions {
    #[must_use]
    pub fn with_constant_rule(mut self, rule: ConstantRule) -> Self {
        self.constant_rule = rule;
        self
    }
}
