use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use easel_engine::coords::Rect;
use easel_engine::logging::{init_logging, LoggingConfig};
use easel_engine::model::PaintModel;
use easel_engine::paint::Color;
use easel_engine::render::Renderer;
use easel_engine::scene::{DrawCmd, PaintMode};
use easel_engine::shapes::ShapeCommand;
use easel_format::{load_file, save_file, LineEnding, SaveOptions};

const USAGE: &str = "\
usage:
  easel-studio check  <file>
  easel-studio dump   <file>
  easel-studio draw   <file>
  easel-studio resave <in> <out> [--lf]

Set EASEL_LOG (env_logger syntax) to control log output.";

enum Command {
    Check(PathBuf),
    Dump(PathBuf),
    Draw(PathBuf),
    Resave { input: PathBuf, output: PathBuf, lf: bool },
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Command> {
    let Some(cmd) = args.next() else { bail!("missing command\n\n{USAGE}") };
    let rest: Vec<String> = args.collect();
    let file = |i: usize| -> Result<PathBuf> {
        rest.get(i)
            .map(PathBuf::from)
            .with_context(|| format!("'{cmd}' needs a file argument\n\n{USAGE}"))
    };

    Ok(match cmd.as_str() {
        "check" => Command::Check(file(0)?),
        "dump" => Command::Dump(file(0)?),
        "draw" => Command::Draw(file(0)?),
        "resave" => Command::Resave {
            input: file(0)?,
            output: file(1)?,
            lf: rest.iter().skip(2).any(|a| a == "--lf"),
        },
        "-h" | "--help" | "help" => {
            println!("{USAGE}");
            std::process::exit(0);
        }
        other => bail!("unknown command '{other}'\n\n{USAGE}"),
    })
}

fn main() -> ExitCode {
    init_logging(LoggingConfig::from_env("EASEL_LOG"));

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    match parse_args(std::env::args().skip(1))? {
        Command::Check(path) => {
            let shapes = load(&path)?;
            println!("{}: ok ({} shapes)", path.display(), shapes.len());
        }
        Command::Dump(path) => {
            for (i, shape) in load(&path)?.iter().enumerate() {
                println!("{i:>4}  {}", describe(shape));
            }
        }
        Command::Draw(path) => {
            let mut model = PaintModel::new();
            model.set_commands(load(&path)?);
            model.draw_all(&mut PrintRenderer);
        }
        Command::Resave { input, output, lf } => {
            let mut model = PaintModel::new();
            model.subscribe(|e| log::debug!("model event: {e:?}"));
            model.set_commands(load(&input)?);

            let ending = if lf { LineEnding::Lf } else { LineEnding::CrLf };
            let opts = SaveOptions::default().line_ending(ending);
            save_file(&output, model.commands(), &opts)
                .with_context(|| format!("writing {}", output.display()))?;
            println!("{} -> {} ({} shapes)", input.display(), output.display(), model.len());
        }
    }
    Ok(())
}

fn load(path: &Path) -> Result<Vec<ShapeCommand>> {
    load_file(path).with_context(|| format!("reading {}", path.display()))
}

fn describe(shape: &ShapeCommand) -> String {
    let style = shape.style();
    let c = style.color;
    let fill = if style.filled { "filled" } else { "outline" };
    let geometry = match shape {
        ShapeCommand::Circle(s) => format!("centre {} radius {}", s.centre, s.radius),
        ShapeCommand::Rectangle(s) => {
            let (w, h) = s.dimensions();
            format!("{} .. {} ({w}x{h})", s.p1, s.p2)
        }
        ShapeCommand::Squiggle(s) => format!("{} points", s.points.len()),
    };
    format!("{:<9} rgb({},{},{}) {fill:<7} {geometry}", shape.kind().name(), c.r, c.g, c.b)
}

/// Writes each drawing primitive as a line of text.
struct PrintRenderer;

impl Renderer for PrintRenderer {
    fn draw(&mut self, cmd: &DrawCmd) {
        let rgb = |c: &Color| format!("rgb({},{},{})", c.r, c.g, c.b);
        let mode = |m: &PaintMode| match m {
            PaintMode::Fill => "fill",
            PaintMode::Stroke => "stroke",
        };
        let area = |b: &Rect| format!("x={} y={} w={} h={}", b.x, b.y, b.w, b.h);
        match cmd {
            DrawCmd::Oval { bounds, color, mode: m } => {
                println!("{} oval   {} {}", mode(m), area(bounds), rgb(color));
            }
            DrawCmd::Rect { bounds, color, mode: m } => {
                println!("{} rect   {} {}", mode(m), area(bounds), rgb(color));
            }
            DrawCmd::Line { from, to, color } => {
                println!("stroke line   {from} -> {to} {}", rgb(color));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use easel_engine::coords::Point;
    use easel_engine::paint::ShapeStyle;
    use easel_engine::shapes::RectangleCommand;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn resave_flags() {
        let command = parse_args(args(&["resave", "a", "b", "--lf"])).unwrap();
        let Command::Resave { input, output, lf } = command else {
            panic!("expected resave");
        };
        assert_eq!(input, PathBuf::from("a"));
        assert_eq!(output, PathBuf::from("b"));
        assert!(lf);
    }

    #[test]
    fn missing_file_argument() {
        assert!(parse_args(args(&["check"])).is_err());
        assert!(parse_args(args(&["resave", "only-one"])).is_err());
        assert!(parse_args(args(&["explode", "x"])).is_err());
    }

    #[test]
    fn describe_rectangle() {
        let style = ShapeStyle::solid(Color::rgb(1, 2, 3));
        let r: ShapeCommand =
            RectangleCommand::new(Point::new(8, 2), Point::new(2, 6), style).into();
        let line = describe(&r);
        assert!(line.starts_with("Rectangle"), "{line}");
        assert!(line.contains("rgb(1,2,3) filled"), "{line}");
        assert!(line.ends_with("(8,2) .. (2,6) (6x4)"), "{line}");
    }
}
