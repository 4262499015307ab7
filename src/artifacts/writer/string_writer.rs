use crate::artifacts::writer::{ColorPalette, DiffWriter, DiffWriterTag};

/// Collects the diff into a `String`.
///
/// `finish` drops one trailing line break so the result can be compared or embedded
/// without a dangling newline. With a palette the fragments carry ANSI escapes.
#[derive(Debug, Default)]
pub struct StringDiffWriter {
    result: String,
    palette: Option<ColorPalette>,
}

impl StringDiffWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_palette(palette: ColorPalette) -> Self {
        Self {
            result: String::new(),
            palette: Some(palette),
        }
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn into_result(self) -> String {
        self.result
    }
}

impl DiffWriter for StringDiffWriter {
    fn write(&mut self, text: &str, tag: DiffWriterTag) {
        match &self.palette {
            Some(palette) => self.result.push_str(&palette.paint(text, tag)),
            None => self.result.push_str(text),
        }
    }

    fn write_line(&mut self, line: &str, tag: DiffWriterTag) {
        self.write(line, tag);
        self.result.push('\n');
    }

    fn finish(&mut self) {
        if self.result.ends_with('\n') {
            self.result.pop();
        }
    }
}
