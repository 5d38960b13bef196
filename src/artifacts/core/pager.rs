use minus::Pager;
use std::io::{self, Write};

/// Repository output that feeds the minus pager
///
/// A multi-byte character split across two writes is held back until it is complete.
pub struct PagedOutput {
    pager: Pager,
    pending: Vec<u8>,
}

impl PagedOutput {
    pub fn new(pager: Pager) -> Self {
        PagedOutput {
            pager,
            pending: Vec::new(),
        }
    }

    fn push_complete_text(&mut self) -> io::Result<()> {
        let complete = match std::str::from_utf8(&self.pending) {
            Ok(text) => text.len(),
            Err(error) if error.error_len().is_none() => error.valid_up_to(),
            Err(error) => {
                self.pending.clear();
                return Err(io::Error::new(io::ErrorKind::InvalidData, error));
            }
        };
        if complete == 0 {
            return Ok(());
        }

        let text = String::from_utf8(self.pending.drain(..complete).collect())
            .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))?;
        self.pager.push_str(text).map_err(io::Error::other)
    }
}

impl Write for PagedOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pending.extend_from_slice(buf);
        self.push_complete_text()?;

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.pending.is_empty() {
            return Ok(());
        }

        let rest = String::from_utf8_lossy(&self.pending).into_owned();
        self.pending.clear();
        self.pager.push_str(rest).map_err(io::Error::other)
    }
}
