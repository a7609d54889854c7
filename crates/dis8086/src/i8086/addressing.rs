use std::fmt;

use super::tables::address_expression;

/// Constant offset attached to a memory operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Displacement {
    /// MOD=00: no displacement bytes.
    None,
    /// Displacement read as an unsigned value.
    Unsigned(u16),
    /// Displacement read as a two's-complement value.
    Signed(i16),
}

/// Memory operand of a register/memory MOV.
///
/// The 8086 encodes memory operands with the 2-bit MOD field and the
/// 3-bit R/M field. MOD selects how many displacement bytes follow; R/M
/// selects the base/index combination from
/// [`ADDRESS_EXPRESSIONS`](super::tables::ADDRESS_EXPRESSIONS).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectiveAddress {
    /// `[base]` or `[base + disp]`
    Based { rm: u8, displacement: Displacement },
    /// `[addr]` — direct address, only produced under hardware semantics.
    Direct(u16),
}

impl EffectiveAddress {
    pub fn based(rm: u8, displacement: Displacement) -> Self {
        EffectiveAddress::Based {
            rm: rm & 0b111,
            displacement,
        }
    }
}

impl fmt::Display for EffectiveAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EffectiveAddress::Based { rm, displacement } => {
                let base = address_expression(*rm);
                match displacement {
                    Displacement::None => write!(f, "[{base}]"),
                    Displacement::Unsigned(d) => write!(f, "[{base} + {d}]"),
                    Displacement::Signed(d) if *d < 0 => {
                        write!(f, "[{base} - {}]", d.unsigned_abs())
                    }
                    Displacement::Signed(d) => write!(f, "[{base} + {d}]"),
                }
            }
            EffectiveAddress::Direct(addr) => write!(f, "[{addr}]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_based() {
        assert_eq!(
            EffectiveAddress::based(0b000, Displacement::None).to_string(),
            "[bx + si]"
        );
        assert_eq!(
            EffectiveAddress::based(0b110, Displacement::Unsigned(0)).to_string(),
            "[bp + 0]"
        );
        assert_eq!(
            EffectiveAddress::based(0b100, Displacement::Unsigned(4999)).to_string(),
            "[si + 4999]"
        );
    }

    #[test]
    fn render_signed() {
        assert_eq!(
            EffectiveAddress::based(0b001, Displacement::Signed(-37)).to_string(),
            "[bx + di - 37]"
        );
        assert_eq!(
            EffectiveAddress::based(0b111, Displacement::Signed(i16::MIN)).to_string(),
            "[bx - 32768]"
        );
        assert_eq!(
            EffectiveAddress::based(0b101, Displacement::Signed(12)).to_string(),
            "[di + 12]"
        );
    }

    #[test]
    fn render_direct() {
        assert_eq!(EffectiveAddress::Direct(3458).to_string(), "[3458]");
    }
}
