/// Colored text output for shell results
use cframe_core::coerce::format_number;
use cframe_core::{Matrix4, Vector3};
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::{self, Write};

/// Kinds of output line, each with its own color
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tone {
    Value,
    Label,
    Prompt,
    Error,
}

impl Tone {
    fn color(self) -> Color {
        match self {
            Tone::Value => Color::White,
            Tone::Label => Color::Cyan,
            Tone::Prompt => Color::Yellow,
            Tone::Error => Color::Red,
        }
    }
}

/// Writes styled text, or plain text when color is off
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    color: bool,
}

impl Printer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn write<W: Write>(&self, writer: &mut W, tone: Tone, text: &str) -> io::Result<()> {
        if self.color {
            writer.queue(SetForegroundColor(tone.color()))?;
            writer.queue(Print(text))?;
            writer.queue(ResetColor)?;
        } else {
            writer.queue(Print(text))?;
        }
        Ok(())
    }

    pub fn line<W: Write>(&self, writer: &mut W, tone: Tone, text: &str) -> io::Result<()> {
        self.write(writer, tone, text)?;
        writer.queue(Print('\n'))?;
        Ok(())
    }

    /// `label: value`
    pub fn field<W: Write>(&self, writer: &mut W, label: &str, value: &str) -> io::Result<()> {
        self.write(writer, Tone::Label, &format!("{}: ", label))?;
        self.line(writer, Tone::Value, value)
    }

    pub fn matrix<W: Write>(&self, writer: &mut W, matrix: &Matrix4) -> io::Result<()> {
        for row in matrix.to_rows() {
            let cells: Vec<String> = row.iter().map(|v| format_number(*v)).collect();
            self.line(writer, Tone::Value, &format!("[{}]", cells.join(", ")))?;
        }
        Ok(())
    }
}

/// A point with each component in host number formatting.
pub fn format_point(point: &Vector3) -> String {
    format!(
        "({}, {}, {})",
        format_number(point.x),
        format_number(point.y),
        format_number(point.z)
    )
}
