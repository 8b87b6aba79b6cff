/// Terminal host for the transform engine: a line-oriented command shell
use cframe_core::coerce::format_number;
use cframe_core::{CFrame, CFrameError, CameraProperty, SceneState, Vector3};
use log::debug;
use std::io::{self, BufRead, Write};
use thiserror::Error;

pub mod command;
pub mod output;

pub use command::{Command, CommandError, COMMANDS};
pub use output::{format_point, Printer, Tone};

const PROMPT: &str = "cframe> ";

#[derive(Debug, Error)]
pub enum ShellError {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error(transparent)]
    Core(#[from] CFrameError),

    #[error("output failed: {0}")]
    Io(#[from] io::Error),
}

/// Owns the scene for one session and executes commands against it
pub struct Shell {
    scene: SceneState,
    printer: Printer,
    running: bool,
}

impl Shell {
    pub fn new(scene: SceneState, color: bool) -> Self {
        Self {
            scene,
            printer: Printer::new(color),
            running: true,
        }
    }

    pub fn scene(&self) -> &SceneState {
        &self.scene
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Parse and execute one line, writing any result to `out`.
    pub fn execute_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<(), ShellError> {
        match Command::parse(line)? {
            Some(command) => self.execute(command, out),
            None => Ok(()),
        }
    }

    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<(), ShellError> {
        debug!("executing {:?}", command);
        let printer = self.printer;
        match command {
            Command::AddPoint([x, y, z]) => self.scene.add_point(x, y, z),
            Command::ClearPoints => self.scene.clear_points(),
            Command::Points => {
                for (i, point) in self.scene.points().iter().enumerate() {
                    printer.field(out, &i.to_string(), &format_point(point))?;
                }
            }
            Command::Count => {
                printer.line(out, Tone::Value, &self.scene.point_count().to_string())?;
            }
            Command::SetCameraPosition([x, y, z]) => self.scene.set_camera_position(x, y, z),
            Command::SetCameraRotation([rx, ry, rz]) => self.scene.set_camera_rotation(rx, ry, rz),
            Command::CameraProperty(name) => {
                printer.line(out, Tone::Value, &self.scene.get_camera_property_string(&name))?;
            }
            Command::Camera => {
                for property in CameraProperty::ALL {
                    printer.field(
                        out,
                        property.name(),
                        &format_number(self.scene.camera(property)),
                    )?;
                }
            }
            Command::CreateCFrame([x, y, z, rx, ry, rz]) => {
                let frame = self.scene.create_cframe(x, y, z, rx, ry, rz);
                printer.field(out, "position", &format_point(&frame.position()))?;
                printer.line(out, Tone::Label, "rotation:")?;
                printer.matrix(out, &frame.rotation())?;
            }
            Command::Transform { frame, point } => {
                let [x, y, z, rx, ry, rz] = frame;
                let moved = CFrame::new(x, y, z, rx, ry, rz).transform_point(&Vector3::from(point));
                printer.line(out, Tone::Value, &format_point(&moved))?;
            }
            Command::TransformPoints([x, y, z, rx, ry, rz]) => {
                let frame = CFrame::new(x, y, z, rx, ry, rz);
                for (i, point) in self.scene.transformed_points(&frame).iter().enumerate() {
                    printer.field(out, &i.to_string(), &format_point(point))?;
                }
            }
            Command::Scene => {
                let json = self.scene.to_config().to_json_string()?;
                printer.line(out, Tone::Value, &json)?;
            }
            Command::Help => {
                for (name, synopsis, summary) in COMMANDS {
                    printer.write(out, Tone::Label, &format!("{:<20}", name))?;
                    printer.line(out, Tone::Value, &format!("{:<24} {}", synopsis, summary))?;
                }
            }
            Command::Quit => self.running = false,
        }
        out.flush()?;
        Ok(())
    }

    /// Execute lines from `input` until it ends or `quit` is read.
    ///
    /// Command errors are reported on `err` and do not stop the loop; output
    /// failures do. Bytes that are not UTF-8 are replaced with U+FFFD, so such
    /// arguments coerce to NaN. Returns how many lines failed.
    pub fn run<R: BufRead, W: Write, E: Write>(
        &mut self,
        mut input: R,
        out: &mut W,
        err: &mut E,
        prompt: bool,
    ) -> io::Result<usize> {
        let mut failures = 0;
        let mut buf = Vec::new();

        while self.running {
            if prompt {
                self.printer.write(out, Tone::Prompt, PROMPT)?;
                out.flush()?;
            }
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            match self.execute_line(&line, out) {
                Ok(()) => {}
                Err(ShellError::Io(e)) => return Err(e),
                Err(e) => {
                    failures += 1;
                    self.printer.line(err, Tone::Error, &format!("error: {}", e))?;
                    err.flush()?;
                }
            }
        }

        Ok(failures)
    }
}
