/// Helper trait to more conveniently test outputs for equality.
pub trait OutputEq<O = Self>
where
    O: ?Sized,
{
    fn output_eq(&self, other: &O) -> bool;
}

impl<A, B, C, D> OutputEq<(C, D)> for (A, B)
where
    A: OutputEq<C>,
    B: OutputEq<D>,
{
    #[inline]
    fn output_eq(&self, other: &(C, D)) -> bool {
        self.0.output_eq(&other.0) && self.1.output_eq(&other.1)
    }
}

impl<A, B> OutputEq<Option<B>> for Option<A>
where
    A: OutputEq<B>,
{
    #[inline]
    fn output_eq(&self, other: &Option<B>) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.output_eq(b),
            (None, None) => true,
            _ => false,
        }
    }
}

macro_rules! partial_eq {
    ($ty:ty) => {
        impl OutputEq<$ty> for $ty {
            #[inline]
            fn output_eq(&self, other: &Self) -> bool {
                other == self
            }
        }
    };
}

partial_eq!(usize);
partial_eq!(u32);
partial_eq!(u64);
partial_eq!(i32);
partial_eq!(i64);
partial_eq!(bool);
partial_eq!(());

#[cfg(test)]
mod tests {
    use super::OutputEq;

    #[test]
    fn tuples_and_options() {
        assert!((142u64, 281u64).output_eq(&(142u64, 281u64)));
        assert!(!(142u64, 281u64).output_eq(&(142u64, 282u64)));
        assert!(Some(1u32).output_eq(&Some(1u32)));
        assert!(!Some(1u32).output_eq(&None));
    }
}
