//! Equality between views and other array-like operands.
//!
//! Every impl funnels into a single element-wise routine: unequal lengths
//! compare unequal without touching elements, and otherwise elements are
//! compared pairwise in index order, short-circuiting on the first mismatch.
//! Element types may differ as long as `T: PartialEq<U>` exists.
//!
//! Coherence only permits impls with the view on the left for generic
//! element types, so `view == other` is the supported spelling; equality
//! between two views is provided (and symmetric) for both operand orders.

use super::View;

fn elementwise_eq<T, U>(lhs: &[T], rhs: &[U]) -> bool
where
    T: PartialEq<U>,
{
    lhs.len() == rhs.len() && lhs.iter().zip(rhs.iter()).all(|(x, y)| x == y)
}

impl<'a, 'b, T, U> PartialEq<View<'b, U>> for View<'a, T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &View<'b, U>) -> bool {
        elementwise_eq(self.as_slice(), other.as_slice())
    }
}

impl<'a, T, U> PartialEq<[U]> for View<'a, T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        elementwise_eq(self.as_slice(), other)
    }
}

impl<'a, T, U> PartialEq<&[U]> for View<'a, T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &&[U]) -> bool {
        elementwise_eq(self.as_slice(), other)
    }
}

impl<'a, T, U, const N: usize> PartialEq<[U; N]> for View<'a, T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        elementwise_eq(self.as_slice(), other)
    }
}

impl<'a, T, U, const N: usize> PartialEq<&[U; N]> for View<'a, T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &&[U; N]) -> bool {
        elementwise_eq(self.as_slice(), *other)
    }
}

impl<'a, T, U> PartialEq<Vec<U>> for View<'a, T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vec<U>) -> bool {
        elementwise_eq(self.as_slice(), other)
    }
}

impl<'a, T> Eq for View<'a, T> where T: Eq {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eq_reflexive() {
        let source = vec![1, 2, 3];
        let view = View::from(&source);

        assert_eq!(view, view);
    }

    #[test]
    fn test_eq_symmetric() {
        let first = [1, 2, 3];
        let second = vec![1, 2, 3];
        let lhs = View::from(&first);
        let rhs = View::from(&second);

        assert_eq!(lhs, rhs);
        assert_eq!(rhs, lhs);
    }

    #[test]
    fn test_eq_length_sensitive() {
        let longer = [1, 2, 3];
        let shorter = [1, 2];

        assert_ne!(View::from(&longer), shorter);
        assert_ne!(View::from(&longer), View::from(&shorter));
    }

    #[test]
    fn test_eq_value_sensitive() {
        let first = [1, 2, 3];
        let second = [1, 2, 4];

        assert_ne!(View::from(&first), View::from(&second));
        assert_ne!(View::from(&first), second);
    }

    #[test]
    fn test_eq_array_like_operands() {
        let source = vec![10, 20, 30];
        let view = View::from(&source);

        assert_eq!(view, [10, 20, 30]);
        assert_eq!(view, &[10, 20, 30]);
        assert_eq!(view, [10, 20, 30].as_slice());
        assert_eq!(view, vec![10, 20, 30]);
    }

    #[test]
    fn test_eq_empty() {
        let source: Vec<i32> = Vec::new();
        let empty: [i32; 0] = [];
        let view = View::from(&source);

        assert_eq!(view, View::default());
        assert_eq!(view, empty);
    }

    #[test]
    fn test_eq_cross_element_type() {
        let owned = vec![String::from("a"), String::from("b")];
        let borrowed = ["a", "b"];
        let view = View::from(&owned);

        assert_eq!(view, borrowed);
        assert_eq!(view, View::from(&borrowed));
    }

    #[derive(Debug, PartialEq)]
    struct Narrow(u8);

    #[derive(Debug, PartialEq)]
    struct Wide(u64);

    impl PartialEq<Wide> for Narrow {
        fn eq(&self, other: &Wide) -> bool {
            u64::from(self.0) == other.0
        }
    }

    #[test]
    fn test_eq_cross_numeric_width() {
        let narrow = [Narrow(1), Narrow(2), Narrow(3)];
        let wide = [Wide(1), Wide(2), Wide(3)];

        assert_eq!(View::from(&narrow), View::from(&wide));
        assert_ne!(View::from(&narrow), View::from(&[Wide(1), Wide(2), Wide(4)]));
    }

    #[test]
    fn test_elementwise_eq_short_circuits() {
        struct Loud(i32);

        impl PartialEq for Loud {
            fn eq(&self, other: &Self) -> bool {
                assert_ne!(self.0, i32::MAX, "comparison past first mismatch");
                self.0 == other.0
            }
        }

        let lhs = [Loud(0), Loud(1), Loud(i32::MAX)];
        let rhs = [Loud(0), Loud(2), Loud(i32::MAX)];

        assert!(!elementwise_eq(&lhs, &rhs));
    }
}
