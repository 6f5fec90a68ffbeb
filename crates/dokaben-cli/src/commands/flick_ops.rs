use std::process;

use dokaben_core::fling::{classify, Direction, GestureSample};
use dokaben_core::glyph::transliterate;
use dokaben_core::kana::{toggle_dakuten, toggle_kigou};
use dokaben_core::syllable::{resolve, ConsonantRow};

fn parse_row(key: &str) -> ConsonantRow {
    ConsonantRow::from_name(key).unwrap_or_else(|| {
        eprintln!("Error: unknown row key {key:?} (expected a, ka, ..., wa or ア, カ, ...)");
        process::exit(1);
    })
}

fn parse_direction(name: &str) -> Direction {
    Direction::from_name(name).unwrap_or_else(|| {
        eprintln!("Error: unknown direction {name:?} (expected center, left, up, right, down)");
        process::exit(1);
    })
}

pub fn resolve_cmd(key: &str, direction: Option<&str>) {
    let row = parse_row(key);
    let directions = match direction {
        Some(name) => vec![parse_direction(name)],
        None => Direction::ALL.to_vec(),
    };
    for dir in directions {
        match resolve(row, dir) {
            Some(c) => println!("{:<6} {c}  U+{:04X}", dir.name(), c as u32),
            None => println!("{:<6} -", dir.name()),
        }
    }
}

pub fn classify_cmd(sample: GestureSample) {
    let thresholds = dokaben_core::settings::settings().fling_thresholds();
    match classify(&sample, &thresholds) {
        Some(dir) => println!("{}", dir.name()),
        None => println!("none"),
    }
}

pub fn convert_cmd(text: &str) {
    println!("{}", transliterate(text));
}

pub fn toggle_cmd(c: char, kigou: bool) {
    let toggled = if kigou {
        toggle_kigou(c)
    } else {
        toggle_dakuten(c)
    };
    match toggled {
        Some(t) => println!("{c} -> {t}"),
        None => println!("{c}: no entry"),
    }
}
