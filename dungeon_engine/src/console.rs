//! Console front end: numbered menus in, text or JSON lines out.

use std::io::{BufRead, Write};

use crate::choice::{Choice, ChoiceProvider};
use crate::error::ChoiceError;
use crate::events::{EventSink, GameEvent};

/// Reads selections from a line-based reader.
///
/// Options are printed as a numbered list. Either the number or the exact
/// label (case-insensitive) selects an option; anything else re-prompts.
#[derive(Debug)]
pub struct ConsoleChoices<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleChoices<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn render<T>(&mut self, prompt: &str, options: &[Choice<T>]) -> std::io::Result<()> {
        writeln!(self.output, "? {prompt}")?;
        for (index, option) in options.iter().enumerate() {
            writeln!(self.output, "  {}) {}", index + 1, option.label)?;
        }
        write!(self.output, "> ")?;
        self.output.flush()
    }
}

fn parse_selection<T>(line: &str, options: &[Choice<T>]) -> Option<usize> {
    let line = line.trim();
    if let Ok(number) = line.parse::<usize>() {
        return number.checked_sub(1).filter(|index| *index < options.len());
    }
    options
        .iter()
        .position(|option| option.label.eq_ignore_ascii_case(line))
}

impl<R: BufRead, W: Write> ChoiceProvider for ConsoleChoices<R, W> {
    fn choose<'a, T>(
        &mut self,
        prompt: &str,
        options: &'a [Choice<T>],
    ) -> Result<&'a T, ChoiceError> {
        if options.is_empty() {
            return Err(ChoiceError::NoOptions {
                prompt: prompt.to_string(),
            });
        }
        loop {
            self.render(prompt, options)?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(ChoiceError::InputClosed {
                    prompt: prompt.to_string(),
                });
            }
            if let Some(option) = parse_selection(&line, options).and_then(|i| options.get(i)) {
                return Ok(&option.value);
            }
            writeln!(
                self.output,
                "Please pick a number between 1 and {}",
                options.len()
            )?;
        }
    }
}

/// Prints events as human-readable text.
#[derive(Debug)]
pub struct TextSink<W> {
    output: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(output: W) -> Self {
        Self { output }
    }
}

impl<W: Write> EventSink for TextSink<W> {
    fn emit(&mut self, event: GameEvent) {
        if let Err(e) = writeln!(self.output, "{event}") {
            tracing::warn!(error = %e, "failed to write event");
        }
    }
}

/// Prints events as one JSON object per line.
#[derive(Debug)]
pub struct JsonSink<W> {
    output: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(output: W) -> Self {
        Self { output }
    }
}

impl<W: Write> EventSink for JsonSink<W> {
    fn emit(&mut self, event: GameEvent) {
        let written = serde_json::to_string(&event)
            .map_err(std::io::Error::from)
            .and_then(|line| writeln!(self.output, "{line}"));
        if let Err(e) = written {
            tracing::warn!(error = %e, "failed to write event");
        }
    }
}
