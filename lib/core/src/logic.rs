use std::ops;

use crate::trit::Trit;

impl Trit {
    /// Kleene negation, an involution under the ordinal encoding: `2 - t`.
    pub const fn not(self) -> Trit {
        Trit::from_int(2 - self.get())
    }

    pub fn and(self, rhs: Trit) -> Trit {
        self.min(rhs)
    }

    pub fn or(self, rhs: Trit) -> Trit {
        self.max(rhs)
    }

    /// `(a & ~b) | (~a & b)`
    pub fn xor(self, rhs: Trit) -> Trit {
        self.and(rhs.not()).or(self.not().and(rhs))
    }

    /// `~a | b`
    pub fn imply_kleene(self, rhs: Trit) -> Trit {
        self.not().or(rhs)
    }

    /// Agrees with [Trit::imply_kleene] everywhere except at
    /// (Neutral, Neutral), where it yields `True`.
    pub fn imply_lukasiewicz(self, rhs: Trit) -> Trit {
        if self == Trit::Neutral && rhs == Trit::Neutral {
            Trit::True
        } else {
            self.imply_kleene(rhs)
        }
    }

    pub fn nand(self, rhs: Trit) -> Trit {
        self.and(rhs).not()
    }

    pub fn nor(self, rhs: Trit) -> Trit {
        self.or(rhs).not()
    }

    pub fn equiv(self, rhs: Trit) -> Trit {
        self.xor(rhs).not()
    }
}

/// N-ary conjunction: the left fold of [Trit::and] seeded with `True`.
pub fn and_all<I>(xs: I) -> Trit
where
    I: IntoIterator<Item = Trit>,
{
    xs.into_iter().fold(Trit::True, Trit::and)
}

/// N-ary disjunction: the left fold of [Trit::or] seeded with `False`.
pub fn or_all<I>(xs: I) -> Trit
where
    I: IntoIterator<Item = Trit>,
{
    xs.into_iter().fold(Trit::False, Trit::or)
}

// ~Trit
impl ops::Not for Trit {
    type Output = Self;

    fn not(self) -> Self::Output {
        Trit::not(self)
    }
}

impl ops::BitAnd for Trit {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Trit::and(self, rhs)
    }
}

impl ops::BitOr for Trit {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Trit::or(self, rhs)
    }
}

impl ops::BitXor for Trit {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        Trit::xor(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use itertools::iproduct;
    use quickcheck::{Arbitrary, Gen};
    use quickcheck_macros::quickcheck;

    use super::*;

    impl Arbitrary for Trit {
        fn arbitrary(g: &mut Gen) -> Self {
            *g.choose(&Trit::ALL).unwrap()
        }
    }

    #[test]
    fn test_not_table() {
        let cases = [
            (Trit::False, Trit::True),
            (Trit::Neutral, Trit::Neutral),
            (Trit::True, Trit::False),
        ];
        for (a, expected) in cases {
            assert_eq!(a.not(), expected);
        }
    }

    #[test]
    fn test_and_table() {
        let cases = [
            (Trit::False, Trit::False, Trit::False),
            (Trit::False, Trit::Neutral, Trit::False),
            (Trit::False, Trit::True, Trit::False),
            (Trit::Neutral, Trit::False, Trit::False),
            (Trit::Neutral, Trit::Neutral, Trit::Neutral),
            (Trit::Neutral, Trit::True, Trit::Neutral),
            (Trit::True, Trit::False, Trit::False),
            (Trit::True, Trit::Neutral, Trit::Neutral),
            (Trit::True, Trit::True, Trit::True),
        ];
        for (a, b, expected) in cases {
            assert_eq!(a.and(b), expected);
        }
    }

    #[test]
    fn test_or_table() {
        let cases = [
            (Trit::False, Trit::False, Trit::False),
            (Trit::False, Trit::Neutral, Trit::Neutral),
            (Trit::False, Trit::True, Trit::True),
            (Trit::Neutral, Trit::False, Trit::Neutral),
            (Trit::Neutral, Trit::Neutral, Trit::Neutral),
            (Trit::Neutral, Trit::True, Trit::True),
            (Trit::True, Trit::False, Trit::True),
            (Trit::True, Trit::Neutral, Trit::True),
            (Trit::True, Trit::True, Trit::True),
        ];
        for (a, b, expected) in cases {
            assert_eq!(a.or(b), expected);
        }
    }

    #[test]
    fn test_xor_table() {
        let cases = [
            (Trit::False, Trit::False, Trit::False),
            (Trit::False, Trit::Neutral, Trit::Neutral),
            (Trit::False, Trit::True, Trit::True),
            (Trit::Neutral, Trit::False, Trit::Neutral),
            (Trit::Neutral, Trit::Neutral, Trit::Neutral),
            (Trit::Neutral, Trit::True, Trit::Neutral),
            (Trit::True, Trit::False, Trit::True),
            (Trit::True, Trit::Neutral, Trit::Neutral),
            (Trit::True, Trit::True, Trit::False),
        ];
        for (a, b, expected) in cases {
            assert_eq!(a.xor(b), expected);
        }
    }

    #[test]
    fn test_lukasiewicz_special_case() {
        assert_eq!(Trit::Neutral.imply_lukasiewicz(Trit::Neutral), Trit::True);
        for (a, b) in iproduct!(Trit::ALL, Trit::ALL) {
            if a == Trit::Neutral && b == Trit::Neutral {
                continue;
            }
            assert_eq!(a.imply_lukasiewicz(b), a.imply_kleene(b));
        }
    }

    #[test]
    fn test_derived_operators() {
        for (a, b) in iproduct!(Trit::ALL, Trit::ALL) {
            assert_eq!(a.nand(b), a.and(b).not());
            assert_eq!(a.nor(b), a.or(b).not());
            assert_eq!(a.equiv(b), a.xor(b).not());
        }
    }

    #[test]
    fn test_nary_seeds() {
        assert_eq!(and_all([]), Trit::True);
        assert_eq!(or_all([]), Trit::False);
        assert_eq!(and_all([Trit::True, Trit::Neutral, Trit::True]), Trit::Neutral);
        assert_eq!(or_all([Trit::False, Trit::Neutral, Trit::False]), Trit::Neutral);
    }

    #[test]
    fn test_operator_sugar() {
        for (a, b) in iproduct!(Trit::ALL, Trit::ALL) {
            assert_eq!(!a, a.not());
            assert_eq!(a & b, a.and(b));
            assert_eq!(a | b, a.or(b));
            assert_eq!(a ^ b, a.xor(b));
        }
    }

    #[quickcheck]
    fn not_is_involution(a: Trit) -> bool {
        a.not().not() == a
    }

    #[quickcheck]
    fn and_commutes(a: Trit, b: Trit) -> bool {
        a.and(b) == b.and(a)
    }

    #[quickcheck]
    fn or_commutes(a: Trit, b: Trit) -> bool {
        a.or(b) == b.or(a)
    }

    #[quickcheck]
    fn xor_commutes(a: Trit, b: Trit) -> bool {
        a.xor(b) == b.xor(a)
    }

    #[quickcheck]
    fn equiv_commutes(a: Trit, b: Trit) -> bool {
        a.equiv(b) == b.equiv(a)
    }

    #[quickcheck]
    fn and_or_associate(a: Trit, b: Trit, c: Trit) -> bool {
        a.and(b).and(c) == a.and(b.and(c)) && a.or(b).or(c) == a.or(b.or(c))
    }

    #[quickcheck]
    fn kleene_imply_is_not_or(a: Trit, b: Trit) -> bool {
        a.imply_kleene(b) == a.not().or(b)
    }

    #[quickcheck]
    fn de_morgan(a: Trit, b: Trit) -> bool {
        a.nand(b) == a.not().or(b.not()) && a.nor(b) == a.not().and(b.not())
    }

    #[quickcheck]
    fn and_all_is_minimum(xs: Vec<Trit>) -> bool {
        and_all(xs.iter().copied()) == xs.iter().copied().min().unwrap_or(Trit::True)
    }

    #[quickcheck]
    fn or_all_is_maximum(xs: Vec<Trit>) -> bool {
        or_all(xs.iter().copied()) == xs.iter().copied().max().unwrap_or(Trit::False)
    }
}
