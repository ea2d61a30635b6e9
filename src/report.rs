use std::io::Write;

/// Human-readable status lines. A console that can't be written to is not a
/// reason to abandon the download, so write failures are dropped.
pub struct Console<W: Write> {
    out: W,
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn line(&mut self, text: &str) {
        let _ = writeln!(self.out, "{}", text);
        let _ = self.out.flush();
    }

    pub fn maybe_line(&mut self, text: Option<impl AsRef<str>>) {
        if let Some(text) = text {
            self.line(text.as_ref());
        }
    }

    pub fn error(&mut self, err: &dyn std::fmt::Display) {
        self.line(&format!("Error: {}", err));
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}
