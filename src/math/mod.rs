pub mod expint;


/// Lossy `as`-style conversion into the primitive float types.
pub trait ToPrimitiveUnchecked {
    fn to_f32_unchecked(&self) -> f32;
    fn to_f64_unchecked(&self) -> f64;
}

/// Infallible counterpart of `num::NumCast::from`.
///
/// Iteration counters, orders and harmonic-sum indices only ever hold
/// small integers, so going through `as` is exact for every float type
/// we evaluate in and avoids threading `Option`s through the algorithms.
pub trait NumCastUnchecked: Sized + ToPrimitiveUnchecked {
    fn from_unchecked<T: ToPrimitiveUnchecked>(n: T) -> Self;
}

macro_rules! impl_to_primitive_unchecked {
    ($($ty:ty),*) => {$(
        impl ToPrimitiveUnchecked for $ty {
            fn to_f32_unchecked(&self) -> f32 { *self as _ }
            fn to_f64_unchecked(&self) -> f64 { *self as _ }
        }
    )*};
}

impl_to_primitive_unchecked!(i32, usize, f32, f64);

impl NumCastUnchecked for f32 {
    fn from_unchecked<T: ToPrimitiveUnchecked>(n: T) -> Self {
        n.to_f32_unchecked()
    }
}

impl NumCastUnchecked for f64 {
    fn from_unchecked<T: ToPrimitiveUnchecked>(n: T) -> Self {
        n.to_f64_unchecked()
    }
}
