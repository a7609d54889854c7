use crate::error::Error;

/// Decoding rules for the corner cases where simplified and real 8086
/// behaviour disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Semantics {
    /// 8-bit displacements are zero-extended, 16-bit displacements are
    /// unsigned, and MOD=00 R/M=110 addresses `[bp]`.
    #[default]
    Literal,
    /// Displacements are sign-extended and MOD=00 R/M=110 is a direct
    /// 16-bit address.
    Hardware,
}

impl std::fmt::Display for Semantics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Semantics::Literal => f.write_str("literal"),
            Semantics::Hardware => f.write_str("hardware"),
        }
    }
}

impl std::str::FromStr for Semantics {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "literal" | "Literal" => Ok(Semantics::Literal),
            "hardware" | "Hardware" | "8086" => Ok(Semantics::Hardware),
            _ => Err(Error::UnknownSemantics(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display() {
        assert_eq!("literal".parse::<Semantics>().unwrap(), Semantics::Literal);
        assert_eq!("8086".parse::<Semantics>().unwrap(), Semantics::Hardware);
        assert_eq!(Semantics::Hardware.to_string(), "hardware");
        assert_eq!(Semantics::default(), Semantics::Literal);
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "z80".parse::<Semantics>().unwrap_err();
        assert_eq!(err, Error::UnknownSemantics("z80".to_string()));
    }
}
