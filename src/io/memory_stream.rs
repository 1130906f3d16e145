use std::cell::RefCell;
use std::rc::Rc;

use super::{parse_cells, render_cells, IoError, Reader, Writer};

/// Caller-supplied stream holding the `.cell` text in memory.
///
/// Clones share the same buffer, so a caller can keep a handle and inspect
/// what a boxed writer produced.
#[derive(Clone, Debug, Default)]
pub struct MemoryStream {
    buffer: Rc<RefCell<String>>,
}

impl MemoryStream {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            buffer: Rc::new(RefCell::new(text.into())),
        }
    }

    pub fn contents(&self) -> String {
        self.buffer.borrow().clone()
    }
}

impl Reader for MemoryStream {
    fn read(&mut self) -> Result<Vec<Vec<bool>>, IoError> {
        parse_cells(&self.buffer.borrow())
    }
}

impl Writer for MemoryStream {
    fn write(&mut self, cells: &[Vec<bool>]) -> Result<(), IoError> {
        if cells.is_empty() {
            return Err(IoError::EmptyGeneration);
        }
        *self.buffer.borrow_mut() = render_cells(cells.iter().map(Vec::as_slice));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_buffer() {
        let handle = MemoryStream::default();
        let mut writer = handle.clone();
        writer.write(&[vec![true, false], vec![false, true]]).unwrap();
        assert_eq!(handle.contents(), "o-\n-o");
    }

    #[test]
    fn test_write_rejects_empty_generation() {
        let mut stream = MemoryStream::new("oo");
        assert!(matches!(stream.write(&[]), Err(IoError::EmptyGeneration)));
        assert_eq!(stream.contents(), "oo");
    }
}
