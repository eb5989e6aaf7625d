use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{array::Array, core::Value},
    },
};

impl Value {
    /// Renders the value as text.
    ///
    /// Integers print in decimal. Reals print in their shortest exact form
    /// and keep a trailing `.0` when whole. Vectors print their elements
    /// separated by single spaces and matrices print one row per line. A
    /// nested array inside another array is wrapped in parentheses.
    ///
    /// # Errors
    /// - `UnsupportedRank` for arrays of rank 3 or more.
    /// - Any error raised while computing the elements of a view.
    ///
    /// # Example
    /// ```
    /// use glyphic::interpreter::value::core::Value;
    ///
    /// let v = Value::from(vec![Value::Integer(1), Value::Real(2.5), Value::Integer(-3)]);
    /// assert_eq!(v.formatted(1).unwrap(), "1 2.5 -3");
    /// ```
    pub fn formatted(&self, line: usize) -> EvalResult<String> {
        match self {
            Self::Integer(n) => Ok(n.to_string()),
            Self::Real(r) => Ok(format!("{r:?}")),
            Self::Array(array) => array.formatted(line),
        }
    }

    fn formatted_element(&self, line: usize) -> EvalResult<String> {
        match self {
            Self::Array(array) => Ok(format!("({})", array.formatted(line)?)),
            Self::Integer(_) | Self::Real(_) => self.formatted(line),
        }
    }
}

impl Array {
    /// Renders the array as text; see [`Value::formatted`].
    ///
    /// # Errors
    /// `UnsupportedRank` for rank 3 and above, or an error from computing an
    /// element.
    pub fn formatted(&self, line: usize) -> EvalResult<String> {
        match self.dimensions().axes() {
            [] => self.value_at(0, line)?.formatted(line),
            [length] => self.format_row(0, *length, line),
            [rows, columns] => {
                let mut rendered = Vec::with_capacity(*rows);
                for row in 0..*rows {
                    rendered.push(self.format_row(row * columns, *columns, line)?);
                }
                Ok(rendered.join("\n"))
            },
            axes => Err(RuntimeError::UnsupportedRank { rank: axes.len(),
                                                        line }),
        }
    }

    fn format_row(&self, start: usize, length: usize, line: usize) -> EvalResult<String> {
        let mut buffer = String::new();
        for index in start..start + length {
            if index > start {
                buffer.push(' ');
            }
            buffer.push_str(&self.value_at(index, line)?.formatted_element(line)?);
        }
        Ok(buffer)
    }
}
