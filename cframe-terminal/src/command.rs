/// Shell commands, one per host block
use cframe_core::coerce::parse_number;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),

    #[error("`{command}` takes {expected} argument(s), got {got}")]
    Arity {
        command: &'static str,
        expected: usize,
        got: usize,
    },
}

/// A parsed shell line. Numeric arguments are already coerced; text that is
/// not a number has become NaN.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddPoint([f64; 3]),
    ClearPoints,
    Points,
    Count,
    SetCameraPosition([f64; 3]),
    SetCameraRotation([f64; 3]),
    CameraProperty(String),
    Camera,
    CreateCFrame([f64; 6]),
    Transform { frame: [f64; 6], point: [f64; 3] },
    TransformPoints([f64; 6]),
    Scene,
    Help,
    Quit,
}

/// Name, argument synopsis and summary for `help`.
pub const COMMANDS: &[(&str, &str, &str)] = &[
    ("add-point", "X Y Z", "append a point"),
    ("clear-points", "", "remove every point"),
    ("points", "", "list points in insertion order"),
    ("count", "", "number of points"),
    ("set-camera-position", "X Y Z", "overwrite camera x, y, z"),
    ("set-camera-rotation", "RX RY RZ", "overwrite camera rx, ry, rz (radians)"),
    ("camera-property", "NAME", "one of x y z rx ry rz (anything else is 0)"),
    ("camera", "", "all six camera scalars"),
    ("create-cframe", "X Y Z RX RY RZ", "build a frame and print its rotation"),
    ("transform", "X Y Z RX RY RZ PX PY PZ", "move one point through a frame"),
    ("transform-points", "X Y Z RX RY RZ", "move every point through a frame"),
    ("scene", "", "print the scene as JSON"),
    ("help", "", "show this list"),
    ("quit", "", "leave the shell"),
];

impl Command {
    /// Parse one line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        let mut words = line.split_whitespace();
        let name = words.next().unwrap_or_default();
        let args: Vec<&str> = words.collect();

        let command = match name {
            "add-point" => Command::AddPoint(numbers("add-point", &args)?),
            "clear-points" => no_args("clear-points", &args, Command::ClearPoints)?,
            "points" => no_args("points", &args, Command::Points)?,
            "count" => no_args("count", &args, Command::Count)?,
            "set-camera-position" => {
                Command::SetCameraPosition(numbers("set-camera-position", &args)?)
            }
            "set-camera-rotation" => {
                Command::SetCameraRotation(numbers("set-camera-rotation", &args)?)
            }
            "camera-property" => match args.as_slice() {
                [property] => Command::CameraProperty(property.to_string()),
                _ => return Err(arity("camera-property", 1, args.len())),
            },
            "camera" => no_args("camera", &args, Command::Camera)?,
            "create-cframe" => Command::CreateCFrame(numbers("create-cframe", &args)?),
            "transform" => {
                let all: [f64; 9] = numbers("transform", &args)?;
                let mut frame = [0.0; 6];
                let mut point = [0.0; 3];
                frame.copy_from_slice(&all[..6]);
                point.copy_from_slice(&all[6..]);
                Command::Transform { frame, point }
            }
            "transform-points" => Command::TransformPoints(numbers("transform-points", &args)?),
            "scene" => no_args("scene", &args, Command::Scene)?,
            "help" => no_args("help", &args, Command::Help)?,
            "quit" | "exit" => no_args("quit", &args, Command::Quit)?,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}

fn arity(command: &'static str, expected: usize, got: usize) -> CommandError {
    CommandError::Arity {
        command,
        expected,
        got,
    }
}

fn no_args(command: &'static str, args: &[&str], parsed: Command) -> Result<Command, CommandError> {
    if args.is_empty() {
        Ok(parsed)
    } else {
        Err(arity(command, 0, args.len()))
    }
}

fn numbers<const N: usize>(command: &'static str, args: &[&str]) -> Result<[f64; N], CommandError> {
    if args.len() != N {
        return Err(arity(command, N, args.len()));
    }
    let mut out = [0.0; N];
    for (slot, arg) in out.iter_mut().zip(args) {
        *slot = parse_number(arg);
    }
    Ok(out)
}
