use serde::{Deserialize, Serialize};
use std::fmt;

/// A monomer unit in a polymer chain.
///
/// The simulation works over a fixed three-letter alphabet; a chain is a
/// sequence of these units joined by bonds of varying strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Monomer {
    A,
    B,
    C,
}

impl Monomer {
    /// All monomer kinds, in canonical order.
    pub const ALL: [Monomer; 3] = [Monomer::A, Monomer::B, Monomer::C];

    pub fn as_char(&self) -> char {
        match self {
            Monomer::A => 'A',
            Monomer::B => 'B',
            Monomer::C => 'C',
        }
    }
}

impl fmt::Display for Monomer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monomers_serialize_as_single_letter_strings() {
        assert_eq!(serde_json::to_string(&Monomer::A).unwrap(), "\"A\"");
        assert_eq!(serde_json::to_string(&Monomer::B).unwrap(), "\"B\"");
        assert_eq!(serde_json::to_string(&Monomer::C).unwrap(), "\"C\"");
    }

    #[test]
    fn monomers_deserialize_from_single_letter_strings() {
        let m: Monomer = serde_json::from_str("\"C\"").unwrap();
        assert_eq!(m, Monomer::C);
    }

    #[test]
    fn canonical_order_is_a_b_c() {
        let letters: String = Monomer::ALL.iter().map(Monomer::as_char).collect();
        assert_eq!(letters, "ABC");
    }
}
