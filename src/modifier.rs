use std::fmt::{Display, Formatter};
use std::ops::{BitOr, BitOrAssign};

use itertools::Itertools;

use crate::error::Error;

/// Modifier flags specified on a declaration, bit-encoded the way the JVM
/// encodes access flags so raw masks round-trip through [`Modifiers::bits`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers(u32);

/// Flags paired with their keyword, in canonical source order.
const NAMED_FLAGS: &[(Modifiers, &str)] = &[
    (Modifiers::PUBLIC, "public"),
    (Modifiers::PROTECTED, "protected"),
    (Modifiers::PRIVATE, "private"),
    (Modifiers::ABSTRACT, "abstract"),
    (Modifiers::STATIC, "static"),
    (Modifiers::FINAL, "final"),
    (Modifiers::TRANSIENT, "transient"),
    (Modifiers::VOLATILE, "volatile"),
    (Modifiers::SYNCHRONIZED, "synchronized"),
    (Modifiers::NATIVE, "native"),
    (Modifiers::STRICT, "strictfp"),
];

impl Modifiers {
    pub const PUBLIC: Modifiers = Modifiers(0x0001);
    pub const PRIVATE: Modifiers = Modifiers(0x0002);
    pub const PROTECTED: Modifiers = Modifiers(0x0004);
    pub const STATIC: Modifiers = Modifiers(0x0008);
    pub const FINAL: Modifiers = Modifiers(0x0010);
    pub const SYNCHRONIZED: Modifiers = Modifiers(0x0020);
    pub const VOLATILE: Modifiers = Modifiers(0x0040);
    pub const TRANSIENT: Modifiers = Modifiers(0x0080);
    pub const NATIVE: Modifiers = Modifiers(0x0100);
    pub const ABSTRACT: Modifiers = Modifiers(0x0400);
    pub const STRICT: Modifiers = Modifiers(0x0800);

    pub const fn empty() -> Self {
        Modifiers(0)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn from_bits(bits: u32) -> Self {
        Modifiers(bits)
    }

    pub const fn contains(self, other: Modifiers) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Modifiers {
    type Output = Modifiers;
    fn bitor(self, rhs: Modifiers) -> Modifiers {
        Modifiers(self.0 | rhs.0)
    }
}

impl BitOrAssign for Modifiers {
    fn bitor_assign(&mut self, rhs: Modifiers) {
        self.0 |= rhs.0;
    }
}

impl TryFrom<&str> for Modifiers {
    type Error = Error;
    fn try_from(value: &str) -> Result<Self, Error> {
        Ok(match value {
            "public" => Self::PUBLIC,
            "private" => Self::PRIVATE,
            "protected" => Self::PROTECTED,
            "static" => Self::STATIC,
            "final" => Self::FINAL,
            "synchronized" => Self::SYNCHRONIZED,
            "volatile" => Self::VOLATILE,
            "transient" => Self::TRANSIENT,
            "native" => Self::NATIVE,
            "abstract" => Self::ABSTRACT,
            "strictfp" => Self::STRICT,
            other => return Err(Error::UnrecognizedModifier(other.to_string())),
        })
    }
}

impl Display for Modifiers {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(
            f,
            "{}",
            NAMED_FLAGS
                .iter()
                .filter(|(flag, _)| self.contains(*flag))
                .map(|(_, keyword)| *keyword)
                .join(" ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combine_flags() {
        let modifiers = Modifiers::PUBLIC | Modifiers::STATIC;
        assert!(modifiers.contains(Modifiers::PUBLIC));
        assert!(modifiers.contains(Modifiers::STATIC));
        assert!(!modifiers.contains(Modifiers::PRIVATE));
        assert!(!modifiers.contains(Modifiers::PUBLIC | Modifiers::FINAL));

        let mut modifiers = Modifiers::PROTECTED;
        modifiers |= Modifiers::ABSTRACT;
        assert_eq!(modifiers, Modifiers::PROTECTED | Modifiers::ABSTRACT);

        assert!(Modifiers::default().is_empty());
        assert!(Modifiers::empty().contains(Modifiers::empty()));
    }

    #[test]
    fn bits_round_trip() {
        let modifiers = Modifiers::PUBLIC | Modifiers::FINAL;
        assert_eq!(modifiers.bits(), 0x0011);
        assert_eq!(Modifiers::from_bits(0x0011), modifiers);
    }

    #[test]
    fn keyword_lookup() -> Result<(), Error> {
        assert_eq!(Modifiers::try_from("public")?, Modifiers::PUBLIC);
        assert_eq!(Modifiers::try_from("strictfp")?, Modifiers::STRICT);
        assert_eq!(
            Modifiers::try_from("sealed"),
            Err(Error::UnrecognizedModifier("sealed".to_string()))
        );
        Ok(())
    }

    #[test]
    fn display_canonical_order() {
        let modifiers = Modifiers::FINAL | Modifiers::STATIC | Modifiers::PUBLIC;
        assert_eq!(modifiers.to_string(), "public static final");
        assert_eq!(Modifiers::empty().to_string(), "");
    }
}
