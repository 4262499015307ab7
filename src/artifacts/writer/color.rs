use crate::artifacts::writer::DiffWriterTag;
use anyhow::Context;
use clap::ValueEnum;
use colored::Color;
use derive_new::new;
use is_terminal::IsTerminal;
use std::borrow::Cow;
use std::collections::HashMap;

/// Escape sequence restoring the terminal's default attributes.
pub const RESET: &str = "\x1b[00m";

/// `tag=foreground[/background]`, e.g. `deleted=white/red`.
pub const COLOR_ENTRY_REGEX: &str =
    r"^(?P<tag>[a-z_]+)=(?P<foreground>[A-Za-z_ ]*)(?:/(?P<background>[A-Za-z_ ]+))?$";

/// Separator between entries of a palette override string.
pub const COLOR_ENTRY_SEPARATOR: char = ':';

#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct ConsoleColor {
    foreground: Option<Color>,
    background: Option<Color>,
    bold: bool,
}

impl ConsoleColor {
    /// Bold foreground color, the style used by every default palette entry.
    pub fn foreground(color: Color) -> Self {
        Self::new(Some(color), None, true)
    }

    pub fn on(self, background: Color) -> Self {
        Self {
            background: Some(background),
            ..self
        }
    }

    pub fn escape_sequence(&self) -> String {
        let mut codes: Vec<Cow<'static, str>> = Vec::new();
        if self.bold {
            codes.push(Cow::Borrowed("01"));
        }
        if let Some(foreground) = &self.foreground {
            codes.push(foreground.to_fg_str());
        }
        if let Some(background) = &self.background {
            codes.push(background.to_bg_str());
        }

        format!("\x1b[{}m", codes.join(";"))
    }

    pub fn paint(&self, text: &str) -> String {
        format!("{}{text}{RESET}", self.escape_sequence())
    }
}

/// Colors used for each writer tag. Tags without an entry are written as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorPalette {
    colors: HashMap<DiffWriterTag, ConsoleColor>,
}

impl Default for ColorPalette {
    fn default() -> Self {
        let colors = HashMap::from([
            (DiffWriterTag::DeletedMark, ConsoleColor::foreground(Color::Red)),
            (DiffWriterTag::InsertedMark, ConsoleColor::foreground(Color::Green)),
            (DiffWriterTag::DifferenceMark, ConsoleColor::foreground(Color::Cyan)),
            (DiffWriterTag::Summary, ConsoleColor::foreground(Color::Cyan)),
            (
                DiffWriterTag::Deleted,
                ConsoleColor::foreground(Color::White).on(Color::Red),
            ),
            (
                DiffWriterTag::Inserted,
                ConsoleColor::foreground(Color::White).on(Color::Green),
            ),
        ]);

        Self { colors }
    }
}

impl ColorPalette {
    /// Default palette with the overrides of `spec` applied, see [`ColorPalette::apply`].
    pub fn parse(spec: &str) -> anyhow::Result<Self> {
        let mut palette = Self::default();
        palette.apply(spec)?;
        Ok(palette)
    }

    pub fn color(&self, tag: DiffWriterTag) -> Option<&ConsoleColor> {
        self.colors.get(&tag)
    }

    pub fn set_color(&mut self, tag: DiffWriterTag, color: Option<ConsoleColor>) {
        match color {
            Some(color) => self.colors.insert(tag, color),
            None => self.colors.remove(&tag),
        };
    }

    /// Applies colon-separated `tag=foreground[/background]` overrides.
    ///
    /// An empty foreground without background removes the tag's color.
    pub fn apply(&mut self, spec: &str) -> anyhow::Result<()> {
        let entry_regex = regex::Regex::new(COLOR_ENTRY_REGEX)
            .with_context(|| format!("invalid color entry regex: {COLOR_ENTRY_REGEX}"))?;

        for entry in spec
            .split(COLOR_ENTRY_SEPARATOR)
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
        {
            let captures = entry_regex
                .captures(entry)
                .with_context(|| format!("malformed color entry: {entry}"))?;
            let tag = captures["tag"]
                .parse::<DiffWriterTag>()
                .with_context(|| format!("malformed color entry: {entry}"))?;

            let foreground = parse_color(&captures["foreground"])?;
            let background = captures
                .name("background")
                .map(|background| parse_color(background.as_str()))
                .transpose()?
                .flatten();

            let color = match (foreground, background) {
                (None, None) => None,
                (foreground, background) => Some(ConsoleColor::new(foreground, background, true)),
            };
            self.set_color(tag, color);
        }

        Ok(())
    }

    /// `text` wrapped in the tag's color, untouched when the tag has none or the text is empty.
    pub fn paint<'t>(&self, text: &'t str, tag: DiffWriterTag) -> Cow<'t, str> {
        match self.color(tag) {
            Some(color) if !text.is_empty() => Cow::Owned(color.paint(text)),
            _ => Cow::Borrowed(text),
        }
    }
}

fn parse_color(name: &str) -> anyhow::Result<Option<Color>> {
    let name = name.trim();
    if name.is_empty() {
        return Ok(None);
    }

    name.replace('_', " ")
        .parse::<Color>()
        .map(Some)
        .map_err(|_| anyhow::anyhow!("unknown color: {name}"))
}

/// When console output should be colorized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorMode {
    /// Colorize when writing to a terminal and `NO_COLOR` is unset
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn use_color(&self, is_terminal: bool) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => is_terminal && std::env::var_os("NO_COLOR").is_none(),
        }
    }

    pub fn use_color_for_stdout(&self) -> bool {
        self.use_color(std::io::stdout().is_terminal())
    }
}
