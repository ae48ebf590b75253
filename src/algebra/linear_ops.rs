/// Implements the vector-space operators (+, -, negation, scaling) for a container
///
/// The container must provide `map(&self, f)` and `zip_with(&self, other, f)` acting on
/// the components used by its space dimension.
macro_rules! impl_linear_ops {
    ($name:ident) => {
        impl<const N: usize> std::ops::Add for $name<N> {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                self.zip_with(&rhs, |a, b| a + b)
            }
        }

        impl<const N: usize> std::ops::Sub for $name<N> {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                self.zip_with(&rhs, |a, b| a - b)
            }
        }

        impl<const N: usize> std::ops::Neg for $name<N> {
            type Output = Self;
            fn neg(self) -> Self {
                self.map(|a| -a)
            }
        }

        impl<const N: usize> std::ops::Mul<f64> for $name<N> {
            type Output = Self;
            fn mul(self, alpha: f64) -> Self {
                self.map(|a| a * alpha)
            }
        }

        impl<const N: usize> std::ops::Mul<$name<N>> for f64 {
            type Output = $name<N>;
            fn mul(self, rhs: $name<N>) -> $name<N> {
                rhs.map(|a| self * a)
            }
        }

        impl<const N: usize> std::ops::Div<f64> for $name<N> {
            type Output = Self;
            fn div(self, alpha: f64) -> Self {
                self.map(|a| a / alpha)
            }
        }

        impl<const N: usize> std::ops::AddAssign for $name<N> {
            fn add_assign(&mut self, rhs: Self) {
                *self = self.zip_with(&rhs, |a, b| a + b);
            }
        }

        impl<const N: usize> std::ops::SubAssign for $name<N> {
            fn sub_assign(&mut self, rhs: Self) {
                *self = self.zip_with(&rhs, |a, b| a - b);
            }
        }
    };
}
