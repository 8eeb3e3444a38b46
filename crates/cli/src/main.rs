//! Maquette CLI - replay editor event scripts against a headless session.
//!
//! Reads a JSON list of operations, drives a `Canvas` with them under a
//! fixed canvas rectangle, and prints the resulting scene (or the export
//! layout) as JSON. Useful for reproducing interaction bugs without a
//! browser attached.

mod logger;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use glam::Vec2;
use log::LevelFilter;
use maquette::{
    layout, Canvas, HitTarget, ItemKind, PointerButton, PointerInput, ScreenPoint, ScreenRect,
    Tool, WheelInput, DEBOUNCE_WINDOW,
};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Canvas bounds every replay runs under.
const CANVAS: ScreenRect = ScreenRect {
    left: 0.0,
    top: 0.0,
    width: 1280.0,
    height: 800.0,
};

/// Maquette CLI - headless floor-plan editor driver
#[derive(Parser)]
#[command(name = "maquette")]
#[command(about = "Replay event scripts against a headless editor session")]
struct Cli {
    /// Log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a JSON event script and print the resulting scene
    Replay {
        /// Path to the script file
        script: PathBuf,

        /// Print the export layout instead of the scene
        #[arg(long)]
        layout: bool,
    },
}

/// One scripted operation.
///
/// Positions are screen pixels within the fixed canvas rect, matching what
/// a browser host would report.
#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
enum Op {
    SetBackground {
        source: String,
        width: f32,
        height: f32,
    },
    SetTool {
        tool: Tool,
    },
    PlaceItem {
        kind: ItemKind,
        x: f32,
        y: f32,
    },
    /// Two clicks of the active drawing tool.
    DrawRect {
        from: [f32; 2],
        to: [f32; 2],
    },
    /// Drag the n-th placed item (script order) from one point to another.
    DragItem {
        index: usize,
        from: [f32; 2],
        to: [f32; 2],
    },
    Wheel {
        x: f32,
        y: f32,
        delta_y: f32,
    },
    /// Middle-button pan by a pixel delta.
    Pan {
        dx: f32,
        dy: f32,
    },
    /// Set the height of the n-th window.
    WindowHeight {
        index: usize,
        cm: f32,
    },
    Undo,
    Redo,
    Clear,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    logger::StderrLogger::init(level)?;

    match cli.command {
        Commands::Replay { script, layout } => replay(&script, layout),
    }
}

fn replay(script: &PathBuf, print_layout: bool) -> Result<()> {
    let text = std::fs::read_to_string(script)
        .with_context(|| format!("failed to read {}", script.display()))?;
    let ops: Vec<Op> = serde_json::from_str(&text)
        .with_context(|| format!("invalid script {}", script.display()))?;

    let mut canvas = Canvas::new();
    // Scripts are instantaneous; advance a synthetic clock so debounced
    // commits land between operations like they would in real time.
    let mut now = Instant::now();

    for (step, op) in ops.into_iter().enumerate() {
        log::info!("step {step}: {op:?}");
        apply(&mut canvas, op, &mut now)
            .with_context(|| format!("script step {step} failed"))?;
    }

    // Settle any pending debounced zoom/pan commit.
    now += DEBOUNCE_WINDOW;
    canvas.tick(now);

    let json = if print_layout {
        serde_json::to_string_pretty(&layout(&canvas.scene))?
    } else {
        serde_json::to_string_pretty(&canvas.scene)?
    };
    println!("{json}");
    Ok(())
}

fn apply(canvas: &mut Canvas, op: Op, now: &mut Instant) -> Result<()> {
    match op {
        Op::SetBackground {
            source,
            width,
            height,
        } => {
            canvas.set_background(source, Vec2::new(width, height));
        }
        Op::SetTool { tool } => canvas.set_tool(tool),
        Op::PlaceItem { kind, x, y } => {
            canvas.place_item(CANVAS, kind, ScreenPoint::new(x, y));
        }
        Op::DrawRect { from, to } => {
            if canvas.tool().rect_kind().is_none() {
                bail!("draw_rect requires a drawing tool, current is {}", canvas.tool());
            }
            click(canvas, point(from), HitTarget::Background, now);
            canvas.pointer_move(CANVAS, PointerInput::mouse(point(to), PointerButton::Left));
            click(canvas, point(to), HitTarget::Background, now);
        }
        Op::DragItem { index, from, to } => {
            let id = canvas
                .scene
                .items
                .get(index)
                .map(|item| item.id)
                .with_context(|| format!("no item at index {index}"))?;
            canvas.pointer_down(
                CANVAS,
                PointerInput::mouse(point(from), PointerButton::Left),
                HitTarget::Item(id),
            );
            canvas.pointer_move(CANVAS, PointerInput::mouse(point(to), PointerButton::Left));
            canvas.pointer_up(
                CANVAS,
                PointerInput::mouse(point(to), PointerButton::Left),
                *now,
            );
        }
        Op::Wheel { x, y, delta_y } => {
            canvas.wheel(
                CANVAS,
                WheelInput {
                    position: ScreenPoint::new(x, y),
                    delta_y,
                },
                *now,
            );
        }
        Op::Pan { dx, dy } => {
            let from = ScreenPoint::new(CANVAS.width / 2.0, CANVAS.height / 2.0);
            let to = ScreenPoint::new(from.x() + dx, from.y() + dy);
            canvas.pointer_down(
                CANVAS,
                PointerInput::mouse(from, PointerButton::Middle),
                HitTarget::Background,
            );
            canvas.pointer_move(CANVAS, PointerInput::mouse(to, PointerButton::Middle));
            canvas.pointer_up(CANVAS, PointerInput::mouse(to, PointerButton::Middle), *now);
        }
        Op::WindowHeight { index, cm } => {
            let id = canvas
                .scene
                .windows
                .get(index)
                .map(|rect| rect.id)
                .with_context(|| format!("no window at index {index}"))?;
            canvas.set_window_height(id, cm)?;
        }
        Op::Undo => {
            if !canvas.undo() {
                log::warn!("undo ignored, already at the oldest state");
            }
        }
        Op::Redo => {
            if !canvas.redo() {
                log::warn!("redo ignored, already at the newest state");
            }
        }
        Op::Clear => canvas.clear(),
    }

    // Let debounced view commits from this op settle before the next.
    *now += DEBOUNCE_WINDOW + Duration::from_millis(1);
    canvas.tick(*now);
    Ok(())
}

fn point(xy: [f32; 2]) -> ScreenPoint {
    ScreenPoint::new(xy[0], xy[1])
}

fn click(canvas: &mut Canvas, at: ScreenPoint, hit: HitTarget, now: &mut Instant) {
    canvas.pointer_down(CANVAS, PointerInput::mouse(at, PointerButton::Left), hit);
    canvas.pointer_up(CANVAS, PointerInput::mouse(at, PointerButton::Left), *now);
}
