//! Command parsing and execution.
//!
//! Commands are pure: `execute` returns an [`Output`] and printing is left
//! to the caller, so everything here is testable without a terminal.

use std::str::FromStr;

use corgi_hexgrid::{
    direction_to, generate_hex_board, opposite_hex, Direction, HexCoord, Layout, Point,
};
use serde::Serialize;

use crate::config::OutputFormat;
use crate::error::{CliError, Result};

/// A parsed CLI command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Board { radius: i32 },
    Range { center: HexCoord, radius: i32 },
    Ring { center: HexCoord, radius: i32 },
    Neighbors { center: HexCoord },
    Distance { from: HexCoord, to: HexCoord },
    ToPixel { hex: HexCoord },
    Pixel { x: f64, y: f64 },
    Direction { from: HexCoord, to: HexCoord },
    Opposite { center: HexCoord, reference: HexCoord },
}

/// Result of running a command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Output {
    Hexes(Vec<HexCoord>),
    Hex(Option<HexCoord>),
    Distance(u64),
    Point(Point),
    Direction(Option<Direction>),
}

impl Command {
    /// Parse `args` (without the program name).
    pub fn parse(args: &[String]) -> Result<Self> {
        let (name, rest) = args
            .split_first()
            .ok_or_else(|| CliError::Usage("missing command".to_string()))?;

        let command = match name.as_str() {
            "board" => {
                expect_args(name, rest, &["radius"])?;
                Command::Board { radius: arg(rest, 0, "radius")? }
            }
            "range" => {
                expect_args(name, rest, &["q", "r", "radius"])?;
                Command::Range { center: hex_arg(rest, 0)?, radius: arg(rest, 2, "radius")? }
            }
            "ring" => {
                expect_args(name, rest, &["q", "r", "radius"])?;
                Command::Ring { center: hex_arg(rest, 0)?, radius: arg(rest, 2, "radius")? }
            }
            "neighbors" => {
                expect_args(name, rest, &["q", "r"])?;
                Command::Neighbors { center: hex_arg(rest, 0)? }
            }
            "distance" => {
                expect_args(name, rest, &["q1", "r1", "q2", "r2"])?;
                Command::Distance { from: hex_arg(rest, 0)?, to: hex_arg(rest, 2)? }
            }
            "to-pixel" => {
                expect_args(name, rest, &["q", "r"])?;
                Command::ToPixel { hex: hex_arg(rest, 0)? }
            }
            "pixel" => {
                expect_args(name, rest, &["x", "y"])?;
                Command::Pixel { x: arg(rest, 0, "x")?, y: arg(rest, 1, "y")? }
            }
            "direction" => {
                expect_args(name, rest, &["q1", "r1", "q2", "r2"])?;
                Command::Direction { from: hex_arg(rest, 0)?, to: hex_arg(rest, 2)? }
            }
            "opposite" => {
                expect_args(name, rest, &["cq", "cr", "rq", "rr"])?;
                Command::Opposite { center: hex_arg(rest, 0)?, reference: hex_arg(rest, 2)? }
            }
            other => return Err(CliError::Usage(format!("unknown command: {}", other))),
        };

        Ok(command)
    }

    /// Run the command against the given pixel layout.
    pub fn execute(&self, layout: &Layout) -> Output {
        match *self {
            Command::Board { radius } => Output::Hexes(generate_hex_board(radius)),
            Command::Range { center, radius } => Output::Hexes(center.hexes_in_range(radius)),
            Command::Ring { center, radius } => Output::Hexes(center.hex_ring(radius)),
            Command::Neighbors { center } => Output::Hexes(center.neighbors().to_vec()),
            Command::Distance { from, to } => Output::Distance(from.distance_to(&to)),
            Command::ToPixel { hex } => Output::Point(layout.hex_to_pixel(hex)),
            Command::Pixel { x, y } => Output::Hex(Some(layout.pixel_to_hex(Point::new(x, y)))),
            Command::Direction { from, to } => Output::Direction(direction_to(from, to)),
            Command::Opposite { center, reference } => Output::Hex(opposite_hex(center, reference)),
        }
    }
}

impl Output {
    /// Format the output for printing.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Text => Ok(self.render_text()),
        }
    }

    fn render_text(&self) -> String {
        match self {
            Output::Hexes(hexes) => hexes
                .iter()
                .map(HexCoord::to_string)
                .collect::<Vec<_>>()
                .join("\n"),
            Output::Hex(Some(hex)) => hex.to_string(),
            Output::Distance(distance) => distance.to_string(),
            Output::Point(point) => point.to_string(),
            Output::Direction(Some(direction)) => {
                format!("{} ({})", direction.index(), direction)
            }
            Output::Hex(None) | Output::Direction(None) => "none".to_string(),
        }
    }
}

fn expect_args(command: &str, rest: &[String], names: &[&str]) -> Result<()> {
    if rest.len() == names.len() {
        return Ok(());
    }
    let placeholders: Vec<String> = names.iter().map(|n| format!("<{}>", n)).collect();
    Err(CliError::Usage(format!(
        "{} expects {} argument(s): {} {}",
        command,
        names.len(),
        command,
        placeholders.join(" ")
    )))
}

fn arg<T: FromStr>(args: &[String], index: usize, name: &'static str) -> Result<T> {
    let value = &args[index];
    value.parse().map_err(|_| CliError::InvalidArgument {
        name,
        value: value.clone(),
    })
}

fn hex_arg(args: &[String], index: usize) -> Result<HexCoord> {
    Ok(HexCoord::new(arg(args, index, "q")?, arg(args, index + 1, "r")?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(line: &str) -> Vec<String> {
        line.split_whitespace().map(String::from).collect()
    }

    fn run(line: &str) -> Output {
        Command::parse(&args(line)).unwrap().execute(&Layout::new(10.0, Point::new(0.0, 0.0)))
    }

    #[test]
    fn parses_every_command() {
        assert_eq!(Command::parse(&args("board 3")).unwrap(), Command::Board { radius: 3 });
        assert_eq!(
            Command::parse(&args("ring -1 2 4")).unwrap(),
            Command::Ring { center: HexCoord::new(-1, 2), radius: 4 }
        );
        assert_eq!(
            Command::parse(&args("opposite 0 0 1 0")).unwrap(),
            Command::Opposite { center: HexCoord::ORIGIN, reference: HexCoord::new(1, 0) }
        );
        assert_eq!(
            Command::parse(&args("pixel 12.5 -3")).unwrap(),
            Command::Pixel { x: 12.5, y: -3.0 }
        );
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(Command::parse(&[]), Err(CliError::Usage(_))));
        assert!(matches!(Command::parse(&args("teleport 1")), Err(CliError::Usage(_))));
        assert!(matches!(Command::parse(&args("ring 1 2")), Err(CliError::Usage(_))));
        assert!(matches!(
            Command::parse(&args("board wide")),
            Err(CliError::InvalidArgument { name: "radius", .. })
        ));
        assert!(matches!(
            Command::parse(&args("distance 0 0 x 1")),
            Err(CliError::InvalidArgument { name: "q", .. })
        ));
    }

    #[test]
    fn board_and_ring_outputs() {
        match run("board 1") {
            Output::Hexes(hexes) => assert_eq!(hexes.len(), 7),
            other => panic!("unexpected output {:?}", other),
        }
        match run("ring 0 0 3") {
            Output::Hexes(hexes) => assert_eq!(hexes.len(), 18),
            other => panic!("unexpected output {:?}", other),
        }
        assert_eq!(run("ring 0 0 -1"), Output::Hexes(vec![]));
    }

    #[test]
    fn adjacency_outputs() {
        assert_eq!(run("direction 0 0 0 1"), Output::Direction(Some(Direction::Southeast)));
        assert_eq!(run("direction 0 0 2 0"), Output::Direction(None));
        assert_eq!(run("opposite 0 0 1 0"), Output::Hex(Some(HexCoord::new(-1, 0))));
        assert_eq!(run("opposite 0 0 3 0"), Output::Hex(None));
        assert_eq!(run("distance 0 0 3 -1"), Output::Distance(3));
    }

    #[test]
    fn pixel_roundtrip_through_commands() {
        let point = match run("to-pixel 2 -1") {
            Output::Point(point) => point,
            other => panic!("unexpected output {:?}", other),
        };
        let line = format!("pixel {} {}", point.x, point.y);
        assert_eq!(run(&line), Output::Hex(Some(HexCoord::new(2, -1))));
    }

    #[test]
    fn text_rendering() {
        let text = run("neighbors 0 0").render(OutputFormat::Text).unwrap();
        assert_eq!(text, "(1, 0)\n(1, -1)\n(0, -1)\n(-1, 0)\n(-1, 1)\n(0, 1)");
        assert_eq!(run("direction 0 0 1 -1").render(OutputFormat::Text).unwrap(), "1 (ne)");
        assert_eq!(run("opposite 0 0 5 5").render(OutputFormat::Text).unwrap(), "none");
    }

    #[test]
    fn json_rendering() {
        let json = run("distance 0 0 2 0").render(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value, serde_json::json!({ "distance": 2 }));

        let json = run("board 0").render(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value, serde_json::json!({ "hexes": [{ "q": 0, "r": 0 }] }));

        let json = run("direction 0 0 -1 0").render(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value, serde_json::json!({ "direction": "west" }));
    }
}
