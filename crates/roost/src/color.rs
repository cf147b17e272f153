//! CLI colors.
//!
//! Every helper respects `NO_COLOR`, `FORCE_COLOR` and TTY detection through
//! owo-colors' `if_supports_color()`. `--no-color` flips an in-process flag
//! that skips owo-colors altogether.

use std::sync::atomic::{AtomicBool, Ordering};

use owo_colors::OwoColorize;
use owo_colors::Stream::{self, Stderr, Stdout};

static NO_COLOR_FLAG: AtomicBool = AtomicBool::new(false);

/// Call once from main.rs when `--no-color` is passed.
pub fn set_no_color() {
    NO_COLOR_FLAG.store(true, Ordering::Relaxed);
}

#[derive(Debug, Clone, Copy)]
struct Rgb {
    r: u8,
    g: u8,
    b: u8,
}

impl Rgb {
    const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }
}

const DUSK: Rgb = Rgb::from_hex(0x7A9CC6); // names, paths
const MOSS: Rgb = Rgb::from_hex(0x7FA65A); // success, main project
const AMBER: Rgb = Rgb::from_hex(0xD6A24E); // warnings
const RUST: Rgb = Rgb::from_hex(0xC0604A); // errors
const HEATHER: Rgb = Rgb::from_hex(0xA98BC0); // shortcuts
const SLATE: Rgb = Rgb::from_hex(0x6A7280); // secondary info

fn no_color() -> bool {
    NO_COLOR_FLAG.load(Ordering::Relaxed)
}

fn paint(text: &str, stream: Stream, rgb: Rgb) -> String {
    if no_color() {
        return text.to_string();
    }
    text.if_supports_color(stream, |t| t.truecolor(rgb.r, rgb.g, rgb.b))
        .to_string()
}

/// Names and paths.
pub fn dusk(text: &str) -> String {
    paint(text, Stdout, DUSK)
}

/// Success and the main project marker.
pub fn moss(text: &str) -> String {
    paint(text, Stdout, MOSS)
}

pub fn amber(text: &str) -> String {
    paint(text, Stdout, AMBER)
}

/// Shortcuts.
pub fn heather(text: &str) -> String {
    paint(text, Stdout, HEATHER)
}

pub fn slate(text: &str) -> String {
    paint(text, Stdout, SLATE)
}

pub fn bold(text: &str) -> String {
    if no_color() {
        return text.to_string();
    }
    text.if_supports_color(Stdout, |t| t.bold()).to_string()
}

/// Color a branch sync verdict as printed by `Display`.
pub fn verdict(label: &str) -> String {
    match label {
        "in sync" => moss(label),
        "ahead" => dusk(label),
        "behind" | "diverged" => amber(label),
        "undetermined" => slate(label),
        _ => label.to_string(),
    }
}

/// Error styling for stderr.
pub fn error(text: &str) -> String {
    paint(text, Stderr, RUST)
}

/// Warning styling for stderr.
pub fn warning(text: &str) -> String {
    paint(text, Stderr, AMBER)
}

/// Secondary info on stderr.
pub fn hint(text: &str) -> String {
    paint(text, Stderr, SLATE)
}
