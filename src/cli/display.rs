// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the medsearch CLI.
//!
//! OneDark colors on dark terminals, One Light on light ones. Detection tries
//! `MEDSEARCH_THEME` first, then `COLORFGBG`, then defaults to dark. Colors
//! are dropped entirely for non-TTY output and when `NO_COLOR` is set.

use medsearch::{Navigation, PaginationGroups, Step, StepKind};
use std::sync::OnceLock;

/// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 72;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("MEDSEARCH_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// COLORS
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(CYAN);
theme_color!(GRAY);

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Visible length, excluding ANSI codes
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// │ content          │
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!(
        "{}{}{}{}",
        themed(GRAY, &[], "│"),
        content,
        " ".repeat(pad),
        themed(GRAY, &[], "│")
    );
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        themed(GRAY, &[], "┌"),
        label_part,
        themed(GRAY, &[], &format!("{}┐", "─".repeat(remaining)))
    );
}

/// └──────────────────┘
pub fn section_bot() {
    println!("{}", themed(GRAY, &[], &format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

// ═══════════════════════════════════════════════════════════════════════════
// PAGINATION
// ═══════════════════════════════════════════════════════════════════════════

/// Render page groups as a control, with `…` between non-adjacent groups.
///
/// `1 … 9 [10] 11 … 20`
pub fn format_pagination(groups: &PaginationGroups, current_page: usize) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut previous: Option<usize> = None;

    for group in groups.groups() {
        if let (Some(prev), Some(&first)) = (previous, group.first()) {
            if first > prev + 1 {
                out.push(themed(GRAY, &[DIM], "…"));
            }
        }
        for &page in group {
            if page == current_page {
                out.push(themed(YELLOW, &[BOLD], &format!("[{}]", page)));
            } else {
                out.push(page.to_string());
            }
        }
        previous = group.last().copied();
    }

    out.join(" ")
}

// ═══════════════════════════════════════════════════════════════════════════
// WIZARD
// ═══════════════════════════════════════════════════════════════════════════

pub fn format_navigation(navigation: &Navigation) -> String {
    match navigation {
        Navigation::Moved(index) => themed(GREEN, &[], &format!("→ step {}", index)),
        Navigation::Stayed(index) => themed(GRAY, &[], &format!("= step {}", index)),
        Navigation::Completed => themed(GREEN, &[BOLD], "✓ complete"),
    }
}

pub fn format_rejection(message: &str) -> String {
    themed(RED, &[], &format!("✗ {}", message))
}

/// Boxed listing of steps: index, id, kind, field count.
pub fn print_steps<K: StepKind>(title: &str, steps: &[Step<K>]) {
    section_top(title);
    for (i, step) in steps.iter().enumerate() {
        let fields = match &step.data {
            Some(data) => format!("{} fields", data.len()),
            None => themed(GRAY, &[DIM], "not submitted"),
        };
        row(&format!(
            " {:>2}  #{:<5} {:<10} {}",
            i,
            step.id.get(),
            step.kind.name(),
            fields
        ));
    }
    section_bot();
}
