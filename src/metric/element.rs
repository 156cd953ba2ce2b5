/// Array element types that can take part in a deviation metric.
///
/// Every element is widened to `f64` before subtracting. For 64-bit integers
/// this rounds values above 2^53 to the nearest representable `f64`.
pub trait Element: Copy {
    fn to_f64(self) -> f64;
}

macro_rules! impl_element {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_element!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
