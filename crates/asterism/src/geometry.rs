use thiserror::Error;

/// Errors raised by vector arithmetic preconditions.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    #[error("Dimension mismatch: cannot combine a {left}-component vector with a {right}-component vector")]
    DimensionMismatch { left: usize, right: usize },
}

/// A fixed-length numeric vector.
///
/// The elementwise operations are dimension-generic and check that both
/// operands have the same number of components; positions in a layout are
/// three-dimensional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vector {
    components: Vec<f32>,
}

impl Vector {
    /// Creates a zero vector with the given number of components
    pub fn zero(dimensions: usize) -> Self {
        Self {
            components: vec![0.0; dimensions],
        }
    }

    /// Returns the number of components
    pub fn dimensions(&self) -> usize {
        self.components.len()
    }

    /// Returns the components as a slice
    pub fn components(&self) -> &[f32] {
        &self.components
    }

    /// Returns the component on the given axis
    ///
    /// # Panics
    /// Panics if the axis is out of range for this vector.
    pub fn component(&self, axis: usize) -> f32 {
        self.components[axis]
    }

    /// Checks if every component is exactly zero
    pub fn is_zero(&self) -> bool {
        self.components.iter().all(|component| *component == 0.0)
    }

    /// Calculates the Euclidean norm
    pub fn norm(&self) -> f32 {
        self.components
            .iter()
            .map(|component| component * component)
            .sum::<f32>()
            .sqrt()
    }

    /// Adds another vector elementwise, returning a new vector
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DimensionMismatch`] if the operands have a
    /// different number of components.
    pub fn add(&self, other: &Vector) -> Result<Vector, GeometryError> {
        self.zip_with(other, |lhs, rhs| lhs + rhs)
    }

    /// Subtracts another vector elementwise, returning a new vector
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DimensionMismatch`] if the operands have a
    /// different number of components.
    pub fn sub(&self, other: &Vector) -> Result<Vector, GeometryError> {
        self.zip_with(other, |lhs, rhs| lhs - rhs)
    }

    /// Multiplies by another vector elementwise, returning a new vector
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DimensionMismatch`] if the operands have a
    /// different number of components.
    pub fn mul(&self, other: &Vector) -> Result<Vector, GeometryError> {
        self.zip_with(other, |lhs, rhs| lhs * rhs)
    }

    /// Divides by another vector elementwise, returning a new vector
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DimensionMismatch`] if the operands have a
    /// different number of components.
    pub fn div(&self, other: &Vector) -> Result<Vector, GeometryError> {
        self.zip_with(other, |lhs, rhs| lhs / rhs)
    }

    /// Multiplies every component by the given factor
    pub fn scale(&self, factor: f32) -> Vector {
        Vector {
            components: self
                .components
                .iter()
                .map(|component| component * factor)
                .collect(),
        }
    }

    /// Divides every component by the given divisor
    pub fn scale_div(&self, divisor: f32) -> Vector {
        Vector {
            components: self
                .components
                .iter()
                .map(|component| component / divisor)
                .collect(),
        }
    }

    /// Returns this vector scaled to unit length
    ///
    /// The zero vector has no direction and is returned unchanged.
    pub fn normalized(&self) -> Vector {
        if self.is_zero() {
            self.clone()
        } else {
            self.scale_div(self.norm())
        }
    }

    fn zip_with(
        &self,
        other: &Vector,
        op: impl Fn(f32, f32) -> f32,
    ) -> Result<Vector, GeometryError> {
        self.check_dimensions(other)?;

        Ok(Vector {
            components: self
                .components
                .iter()
                .zip(&other.components)
                .map(|(lhs, rhs)| op(*lhs, *rhs))
                .collect(),
        })
    }

    fn check_dimensions(&self, other: &Vector) -> Result<(), GeometryError> {
        if self.components.len() == other.components.len() {
            Ok(())
        } else {
            Err(GeometryError::DimensionMismatch {
                left: self.components.len(),
                right: other.components.len(),
            })
        }
    }
}

impl From<Vec<f32>> for Vector {
    fn from(components: Vec<f32>) -> Self {
        Self { components }
    }
}

impl<const N: usize> From<[f32; N]> for Vector {
    fn from(components: [f32; N]) -> Self {
        Self {
            components: components.to_vec(),
        }
    }
}
