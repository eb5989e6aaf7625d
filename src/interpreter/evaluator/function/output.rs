use std::{cell::RefCell, rc::Rc};

/// Destination for formatted values written by `print` and by auto-printing.
pub trait OutputSink {
    /// Receives one formatted value. Multi-line values (matrices) arrive as a
    /// single string with embedded newlines.
    fn write_formatted(&mut self, text: &str);
}

/// Writes each value to standard output followed by a newline.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn write_formatted(&mut self, text: &str) {
        println!("{text}");
    }
}

/// An in-memory sink whose clones share one buffer.
///
/// Hand one clone to the engine and keep another to read what was written.
#[derive(Debug, Default, Clone)]
pub struct SharedBuffer {
    lines: Rc<RefCell<Vec<String>>>,
}

impl SharedBuffer {
    /// Every value written so far, in order.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Everything written so far, one value per line.
    #[must_use]
    pub fn contents(&self) -> String {
        self.lines.borrow().join("\n")
    }
}

impl OutputSink for SharedBuffer {
    fn write_formatted(&mut self, text: &str) {
        self.lines.borrow_mut().push(text.to_owned());
    }
}
