use std::ops;

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// A trait for numeric types that support basic arithmetic operations.
///
/// This is what the multiplication routines need from matrix and vector elements.
/// Unsigned integers qualify, since no negation or division is involved.
pub trait Number:
    Zero + One + ops::Add<Output = Self> + ops::Mul<Output = Self> + PartialEq + Copy
{
}
impl<T> Number for T where
    T: Zero + One + ops::Add<Output = Self> + ops::Mul<Output = Self> + PartialEq + Copy
{
}

/// Types that support the trigonometric functions needed to build rotations.
///
/// Rotations also negate the sine, hence the [`Neg`](ops::Neg) bound.
pub trait Trig: ops::Neg<Output = Self> {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    /// Converts an angle in degrees to radians by multiplying it with `π / 180`.
    fn degrees_to_radians(self) -> Self;
}

macro_rules! zero_one {
    ($zero:literal, $one:literal => $($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = $zero;
            }

            impl One for $types {
                const ONE: Self = $one;
            }
        )+
    };
}
zero_one!(0.0, 1.0 => f32, f64);
zero_one!(0, 1 => u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl Trig for f32 {
    fn sin(self) -> Self {
        self.sin()
    }

    fn cos(self) -> Self {
        self.cos()
    }

    fn degrees_to_radians(self) -> Self {
        self * (std::f32::consts::PI / 180.0)
    }
}

impl Trig for f64 {
    fn sin(self) -> Self {
        self.sin()
    }

    fn cos(self) -> Self {
        self.cos()
    }

    fn degrees_to_radians(self) -> Self {
        self * (std::f64::consts::PI / 180.0)
    }
}
