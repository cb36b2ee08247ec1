//! Usage: `stepring-studio [ATTRS_FILE] [OUT_DIR]`
//!
//! Binds a ring from `ATTRS_FILE` (or a built-in onboarding ring), walks it through
//! every step, and writes one SVG per redraw into `OUT_DIR` (default `ring-frames`).

use std::path::{Path, PathBuf};

use anyhow::Context;
use stepring_engine::logging::{init_logging, LoggingConfig};
use stepring_ui::prelude::*;

const DEFAULT_ATTRS: &str = "
steps: 4
space: 8
progress_start_color: #ff5722ff
progress_end_color: #ffc107ff
progress_gradient_degree: 45
progress_background_color: #2a2a3aff
progress_width: 16
progress_background_width: 16
current_step: 0
progress: 0
";

/// Logical size of each snapshot, before density scaling.
const SNAPSHOT_DP: f32 = 160.0;
const SCALE: f32 = 2.0;

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let mut args = std::env::args().skip(1);
    let attrs_src = match args.next() {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("reading ring attributes from {path}"))?,
        None => DEFAULT_ATTRS.to_string(),
    };
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| "ring-frames".to_string()));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let attrs = RingAttrs::parse_str(&attrs_src).context("binding ring attributes")?;
    let mut ring = attrs.build();
    ring.set_on_progress(|step, percent| log::info!("progress -> step {step} at {percent}%"));

    let ctx = LayoutCtx::new(SCALE);
    let mut rect = layout(&ring, &ctx);
    let mut frame = 0;

    frame = snapshot(&mut ring, &ctx, &mut rect, &out_dir, frame)?;
    let steps = ring.config().step_count as i32;
    for step in 1..=steps {
        for percent in [25.0, 50.0, 75.0, 100.0] {
            ring.set_progress(step, percent);
            frame = snapshot(&mut ring, &ctx, &mut rect, &out_dir, frame)?;
        }
    }

    // Rejected on purpose: the ring keeps its last state and nothing is redrawn.
    ring.set_progress(steps + 1, 10.0);
    ring.set_gradient_degree(400.0);
    frame = snapshot(&mut ring, &ctx, &mut rect, &out_dir, frame)?;

    ring.set_direction(Direction::RightToLeft);
    ring.set_progress(steps.min(2), 50.0);
    frame = snapshot(&mut ring, &ctx, &mut rect, &out_dir, frame)?;

    log::info!("wrote {frame} frames to {}", out_dir.display());
    Ok(())
}

fn layout(ring: &StepProgressRing, ctx: &LayoutCtx) -> Rect {
    let side = ctx.dp(SNAPSHOT_DP);
    let size = ring.measure(Constraints::loose(Vec2::new(side, side)), ctx);
    Rect::from_origin_size(Vec2::zero(), size)
}

/// Writes a frame if the ring asked for one. Returns the next frame number.
fn snapshot(
    ring: &mut StepProgressRing,
    ctx: &LayoutCtx,
    rect: &mut Rect,
    out_dir: &Path,
    frame: usize,
) -> anyhow::Result<usize> {
    let invalidation = ring.take_invalidation();
    if !invalidation.needs_redraw() {
        log::debug!("frame {frame}: nothing to redraw");
        return Ok(frame);
    }
    if invalidation.needs_relayout() {
        *rect = layout(ring, ctx);
    }

    let list = record(ring, *rect, ctx.scale);
    for cmd in list.items() {
        log::debug!("frame {frame}: {cmd:?}");
    }

    let mut svg = SvgSurface::new(rect.size.x, rect.size.y);
    list.replay(&mut svg);
    let path = out_dir.join(format!("frame-{frame:03}.svg"));
    std::fs::write(&path, svg.finish()).with_context(|| format!("writing {}", path.display()))?;
    Ok(frame + 1)
}
