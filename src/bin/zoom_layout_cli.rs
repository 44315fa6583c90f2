//! CLI tool for slidezoom - computes the grid layout of one slide and
//! outputs JSON
//!
//! Usage:
//!   zoom_layout_cli <viewport-w> <viewport-h> <cell-width> <pad-left> <pad-right> <pad-top> <pad-bottom>
//!
//! Example:
//!   zoom_layout_cli 1200 800 50% 10px 10px 5px 5px

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::io::{self, Write};

use slidezoom::layout::{GridCellStyle, GridLayout, Padding, Viewport};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 8 {
        eprintln!(
            "Usage: zoom_layout_cli <viewport-w> <viewport-h> <cell-width> \
             <pad-left> <pad-right> <pad-top> <pad-bottom>"
        );
        std::process::exit(1);
    }

    let viewport = match (args[1].parse::<f64>(), args[2].parse::<f64>()) {
        (Ok(w), Ok(h)) => Viewport::new(w, h),
        _ => {
            eprintln!("Error: viewport size must be numeric, got {} x {}", args[1], args[2]);
            std::process::exit(1);
        }
    };

    let cell = GridCellStyle {
        padding: Padding::from_computed(&args[4], &args[5], &args[6], &args[7]),
        width: args[3].clone(),
    };

    let layout = match GridLayout::compute(viewport, &cell) {
        Ok(layout) => layout,
        Err(e) => {
            eprintln!("Error computing layout: {}", e);
            std::process::exit(1);
        }
    };

    let json = serde_json::json!({
        "layout": layout,
        "wrapHeight": layout.wrap_height(layout.slide.height),
    });

    let pretty = match serde_json::to_string_pretty(&json) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error serializing JSON: {}", e);
            std::process::exit(1);
        }
    };

    io::stdout().write_all(pretty.as_bytes()).unwrap();
    println!();
}
