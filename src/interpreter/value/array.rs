use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Engine},
            operator::{BinaryOperator, UnaryOperator},
        },
        value::{core::Value, dimensions::Dimensions},
    },
    util::num::usize_to_i64_checked,
};

/// An n-dimensional array of values.
///
/// Most arrays are views: their elements are computed from other arrays on
/// each access instead of being stored. Operands are shared through `Rc`, so
/// building `a + b` never copies `a` or `b`. Use [`Array::collapse`] to turn a
/// view into stored values.
#[derive(Debug)]
pub struct Array {
    dimensions: Dimensions,
    content:    Content,
    depth:      usize,
}

#[derive(Debug)]
enum Content {
    /// Stored elements in row-major order.
    Values(Vec<Value>),
    /// Every element is the same value.
    Constant(Value),
    /// Element `i` is the integer `i`.
    Iota,
    /// Elements of the source, repeated cyclically.
    Cyclic(Rc<Array>),
    /// A scalar function applied pairwise to two same-shaped arrays.
    Binary {
        op:    BinaryOperator,
        left:  Rc<Array>,
        right: Rc<Array>,
        line:  usize,
    },
    /// A scalar function applied to every element of one array.
    Unary {
        op:     UnaryOperator,
        source: Rc<Array>,
        line:   usize,
    },
}

impl Array {
    /// A rank-1 array holding `values`.
    #[must_use]
    pub fn vector(values: Vec<Value>) -> Self {
        let dimensions = Dimensions::vector(values.len());
        Self::from_values(dimensions, values)
    }

    /// An array of the given shape holding `values` in row-major order.
    ///
    /// # Errors
    /// Returns `ShapeMismatch` if the number of values differs from the
    /// element count of `dimensions`.
    pub fn with_values(dimensions: Dimensions, values: Vec<Value>, line: usize) -> EvalResult<Self> {
        if dimensions.content_size() != values.len() {
            return Err(RuntimeError::ShapeMismatch { left: dimensions.to_string(),
                                                     right: values.len().to_string(),
                                                     line });
        }
        Ok(Self::from_values(dimensions, values))
    }

    fn from_values(dimensions: Dimensions, values: Vec<Value>) -> Self {
        let depth = values.iter().map(Value::depth).max().unwrap_or(0) + 1;
        Self { dimensions,
               content: Content::Values(values),
               depth }
    }

    /// An array of the given shape whose every element is `value`.
    #[must_use]
    pub fn constant(dimensions: Dimensions, value: Value) -> Self {
        let depth = value.depth() + 1;
        Self { dimensions,
               content: Content::Constant(value),
               depth }
    }

    /// The vector `0 1 … length-1`.
    ///
    /// # Example
    /// ```
    /// use glyphic::interpreter::value::array::Array;
    ///
    /// let iota = Array::iota(4);
    /// assert_eq!(iota.formatted(1).unwrap(), "0 1 2 3");
    /// ```
    #[must_use]
    pub fn iota(length: usize) -> Self {
        Self { dimensions: Dimensions::vector(length),
               content:    Content::Iota,
               depth:      1, }
    }

    /// An array of the given shape filled by repeating the elements of
    /// `source` in row-major order.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `source` is empty while `dimensions`
    /// is not.
    pub fn cyclic(dimensions: Dimensions, source: Rc<Self>, line: usize) -> EvalResult<Self> {
        if source.size() == 0 && dimensions.content_size() > 0 {
            return Err(RuntimeError::InvalidArgument { details: "cannot reshape an empty array into a non-empty one".to_string(),
                                                       line });
        }
        let depth = source.depth + 1;
        Ok(Self { dimensions,
                  content: Content::Cyclic(source),
                  depth })
    }

    /// Pairwise application of `op` to two arrays of identical shape.
    ///
    /// The caller is responsible for checking the shapes; the result takes the
    /// shape of `left`.
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Rc<Self>, right: Rc<Self>, line: usize) -> Self {
        let depth = left.depth.max(right.depth) + 1;
        Self { dimensions: left.dimensions.clone(),
               content: Content::Binary { op,
                                          left,
                                          right,
                                          line },
               depth }
    }

    /// Elementwise application of `op` to `source`.
    #[must_use]
    pub fn unary(op: UnaryOperator, source: Rc<Self>, line: usize) -> Self {
        let depth = source.depth + 1;
        Self { dimensions: source.dimensions.clone(),
               content: Content::Unary { op,
                                         source,
                                         line },
               depth }
    }

    #[must_use]
    pub const fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    #[must_use]
    pub fn rank(&self) -> usize {
        self.dimensions.rank()
    }

    /// Total number of elements.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.dimensions.content_size()
    }

    /// Length of the longest chain of views below this array, counting the
    /// array itself.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the element at a row-major index, computing it if this array
    /// is a view.
    ///
    /// # Errors
    /// - `IndexOutOfBounds` if `index` is not below [`Array::size`].
    /// - Any arithmetic error raised while computing a view element. Those
    ///   errors report the line where the view was built.
    pub fn value_at(&self, index: usize, line: usize) -> EvalResult<Value> {
        if index >= self.size() {
            return Err(RuntimeError::IndexOutOfBounds { max: self.size().saturating_sub(1),
                                                        found: index,
                                                        line });
        }

        match &self.content {
            Content::Values(values) => {
                values.get(index)
                      .cloned()
                      .ok_or(RuntimeError::IndexOutOfBounds { max: values.len().saturating_sub(1),
                                                              found: index,
                                                              line })
            },
            Content::Constant(value) => Ok(value.clone()),
            Content::Iota => Ok(Value::Integer(usize_to_i64_checked(index, line)?)),
            Content::Cyclic(source) => source.value_at(index % source.size(), line),
            Content::Binary { op, left, right, line } => {
                let a = left.value_at(index, *line)?;
                let b = right.value_at(index, *line)?;
                Engine::eval_binary(*op, &a, &b, *line)
            },
            Content::Unary { op, source, line } => {
                let value = source.value_at(index, *line)?;
                Engine::eval_unary(*op, &value, *line)
            },
        }
    }

    /// Returns the element at a position given as one coordinate per axis.
    ///
    /// # Errors
    /// - `IndexRankMismatch` if the number of coordinates differs from the
    ///   rank.
    /// - `IndexOutOfBounds` if a coordinate is outside its axis.
    pub fn value_at_position(&self, position: &[usize], line: usize) -> EvalResult<Value> {
        let index = self.dimensions.index_from_position(position, line)?;
        self.value_at(index, line)
    }

    /// Computes every element and stores the results, recursively collapsing
    /// nested arrays.
    ///
    /// # Errors
    /// Propagates the first error raised while computing an element.
    pub fn collapse(&self, line: usize) -> EvalResult<Self> {
        let values = (0..self.size()).map(|index| self.value_at(index, line)?.collapse(line))
                                     .collect::<EvalResult<Vec<_>>>()?;

        Ok(Self::from_values(self.dimensions.clone(), values))
    }
}
