use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// The shape of an array: one size per axis.
///
/// The rank is the number of axes. An empty shape describes a scalar-like
/// array holding exactly one element.
///
/// # Example
/// ```
/// use glyphic::interpreter::value::dimensions::Dimensions;
///
/// let dims = Dimensions::new(vec![2, 3], 1).unwrap();
///
/// assert_eq!(dims.rank(), 2);
/// assert_eq!(dims.content_size(), 6);
/// assert_eq!(dims.index_from_position(&[1, 2], 1).unwrap(), 5);
/// assert_eq!(Dimensions::scalar().content_size(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dimensions {
    axes: Vec<usize>,
    size: usize,
}

impl Dimensions {
    /// Builds a shape from per-axis sizes.
    ///
    /// # Errors
    /// Returns `Overflow` if the total element count does not fit in a
    /// `usize`.
    pub fn new(axes: Vec<usize>, line: usize) -> EvalResult<Self> {
        let size = axes.iter()
                       .try_fold(1usize, |acc, &axis| acc.checked_mul(axis))
                       .ok_or(RuntimeError::Overflow { line })?;

        Ok(Self { axes, size })
    }

    /// The rank-0 shape.
    #[must_use]
    pub fn scalar() -> Self {
        Self { axes: Vec::new(),
               size: 1, }
    }

    /// The rank-1 shape of a vector with `length` elements.
    #[must_use]
    pub fn vector(length: usize) -> Self {
        Self { axes: vec![length],
               size: length, }
    }

    /// Number of axes.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.axes.len()
    }

    /// Per-axis sizes, outermost first.
    #[must_use]
    pub fn axes(&self) -> &[usize] {
        &self.axes
    }

    /// Total number of elements: the product of the axis sizes.
    #[must_use]
    pub const fn content_size(&self) -> usize {
        self.size
    }

    /// Converts a position (one coordinate per axis) to a row-major index.
    ///
    /// # Errors
    /// - `IndexRankMismatch` if `position` does not have one coordinate per
    ///   axis.
    /// - `IndexOutOfBounds` if any coordinate is outside its axis.
    pub fn index_from_position(&self, position: &[usize], line: usize) -> EvalResult<usize> {
        if position.len() != self.rank() {
            return Err(RuntimeError::IndexRankMismatch { expected: self.rank(),
                                                         found: position.len(),
                                                         line });
        }

        let mut index = 0;
        for (&coordinate, &axis) in position.iter().zip(&self.axes) {
            if coordinate >= axis {
                return Err(RuntimeError::IndexOutOfBounds { max: axis.saturating_sub(1),
                                                            found: coordinate,
                                                            line });
            }
            index = index * axis + coordinate;
        }
        Ok(index)
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, axis) in self.axes.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            write!(f, "{axis}")?;
        }
        Ok(())
    }
}
