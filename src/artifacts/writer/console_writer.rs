use crate::artifacts::writer::{ColorMode, ColorPalette, DiffWriter, DiffWriterTag};
use log::warn;
use std::io::{self, Stdout, Write};

/// Streams the diff to an `io::Write` sink, wrapping tagged fragments in ANSI colors.
///
/// The first I/O error stops all further output. It is kept until the caller takes the sink
/// back with [`ConsoleDiffWriter::into_inner`].
pub struct ConsoleDiffWriter<W: Write> {
    output: W,
    use_color: bool,
    palette: ColorPalette,
    error: Option<io::Error>,
}

impl ConsoleDiffWriter<Stdout> {
    pub fn stdout(mode: ColorMode) -> Self {
        Self::new(io::stdout(), mode.use_color_for_stdout())
    }
}

impl<W: Write> ConsoleDiffWriter<W> {
    pub fn new(output: W, use_color: bool) -> Self {
        Self {
            output,
            use_color,
            palette: ColorPalette::default(),
            error: None,
        }
    }

    pub fn with_palette(self, palette: ColorPalette) -> Self {
        Self { palette, ..self }
    }

    pub fn palette_mut(&mut self) -> &mut ColorPalette {
        &mut self.palette
    }

    pub fn error(&self) -> Option<&io::Error> {
        self.error.as_ref()
    }

    pub fn into_inner(self) -> io::Result<W> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.output),
        }
    }

    fn emit(&mut self, text: &str) {
        if self.error.is_some() || text.is_empty() {
            return;
        }

        if let Err(error) = self.output.write_all(text.as_bytes()) {
            warn!("stopping diff output: {error}");
            self.error = Some(error);
        }
    }
}

impl<W: Write> DiffWriter for ConsoleDiffWriter<W> {
    fn write(&mut self, text: &str, tag: DiffWriterTag) {
        if self.use_color {
            let painted = self.palette.paint(text, tag).into_owned();
            self.emit(&painted);
        } else {
            self.emit(text);
        }
    }

    fn write_line(&mut self, line: &str, tag: DiffWriterTag) {
        DiffWriter::write(self, line, tag);
        self.emit("\n");
    }

    fn finish(&mut self) {
        if self.error.is_some() {
            return;
        }

        if let Err(error) = self.output.flush() {
            warn!("failed to flush diff output: {error}");
            self.error = Some(error);
        }
    }
}
