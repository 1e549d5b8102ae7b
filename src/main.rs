//! Seatplan CLI
//!
//! Usage:
//!   seatplan [OPTIONS] [FILE]
//!
//! Options:
//!   -s, --seats   List individual seat positions in the report
//!   -d, --debug   Dump section geometry to stderr after each op
//!   -h, --help    Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use seatplan::{run_scene_with_config, RunConfig, Scene, SectionKind};

#[derive(Parser)]
#[command(name = "seatplan")]
#[command(about = "Collision and layout geometry for venue seating plans")]
struct Cli {
    /// Input scene file in TOML format (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// List individual seat positions in the report
    #[arg(short, long)]
    seats: bool,

    /// Debug mode: dump section geometry to stderr after each op
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Read input
    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let config = RunConfig::new().with_debug(cli.debug);
    match run_scene_with_config(&source, config) {
        Ok(scene) => print_report(&scene, cli.seats),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_report(scene: &Scene, with_seats: bool) {
    for section in &scene.sections {
        let b = section.collision_bounds();
        println!(
            "{} ({}): x={:.1} y={:.1} w={:.1} h={:.1} rotation={:.1} curve={:.1}",
            section.id(),
            kind_name(section.kind()),
            b.x,
            b.y,
            b.width,
            b.height,
            section.rotation_degrees,
            section.curve,
        );
        if !with_seats {
            continue;
        }
        let seats = section.seats();
        let positions = section.seat_world_positions();
        for (seat, pos) in seats.iter().zip(&positions) {
            println!(
                "  seat {}:{}  x={:.1} y={:.1}",
                seat.row(),
                seat.col(),
                pos.x,
                pos.y
            );
        }
    }
}

fn kind_name(kind: SectionKind) -> &'static str {
    match kind {
        SectionKind::SeatGrid => "grid",
        SectionKind::GeneralAdmission => "ga",
        SectionKind::Zone => "zone",
    }
}

fn print_intro() {
    println!(
        r#"Seatplan - collision and layout geometry for venue seating plans

USAGE:
    seatplan [OPTIONS] [FILE]
    cat scene.toml | seatplan

OPTIONS:
    -s, --seats    List individual seat positions in the report
    -d, --debug    Dump section geometry to stderr after each op
    -h, --help     Print help

QUICK START:
    cat <<'EOF' | seatplan
    [[sections]]
    id = "orchestra"
    rows = 5
    cols = 10

    [[ops]]
    action = "curve"
    sections = ["orchestra"]
    value = 30.0
    EOF

Scenes declare sections (seat grids, general admission areas, zones)
and a list of editing ops (move, drag, align, distribute, curve,
stretch, rotate, row-align). The final geometry is printed as a
per-section report."#
    );
}
