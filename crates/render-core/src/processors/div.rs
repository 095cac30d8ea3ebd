//! Box decoration: background fill and borders.
//!
//! This is also the fallback processor for kinds without a dedicated one, and the other
//! processors draw it underneath their own content.

use crate::error::RenderError;
use crate::traits::{AssemblyContext, BoxProcessor};
use crate::types::{PageObject, PathObject};
use folio_layout::ContentBox;
use folio_types::{DrawParamDescriptor, PathCommand, Rect};

/// Widths below this are treated as no border at all.
const ZERO: f64 = 0.00001;

pub struct DivProcessor;

impl BoxProcessor for DivProcessor {
    fn process(
        &self,
        content: &ContentBox,
        ctx: &mut AssemblyContext<'_>,
    ) -> Result<(), RenderError> {
        draw_decoration(content, ctx)
    }

    fn name(&self) -> &'static str {
        "div"
    }
}

/// Top-left corner of the border box.
fn border_origin(content: &ContentBox) -> (f64, f64) {
    (
        content.x.unwrap_or(0.0) + content.margin.left,
        content.y.unwrap_or(0.0) + content.margin.top,
    )
}

/// Rectangle of the content area, inside margins, borders and padding.
pub(crate) fn content_rect(content: &ContentBox) -> Rect {
    let (x, y) = border_origin(content);
    Rect::new(
        x + content.border.left + content.padding.left,
        y + content.border.top + content.padding.top,
        content.width.unwrap_or(0.0),
        content.height.unwrap_or(0.0),
    )
}

pub(crate) fn alpha(content: &ContentBox) -> Option<u8> {
    content
        .opacity
        .map(|o| (o.clamp(0.0, 1.0) * 255.0) as u8)
}

fn rect_data(x: f64, y: f64, w: f64, h: f64) -> String {
    PathCommand::join(&[
        PathCommand::MoveTo { x, y },
        PathCommand::LineTo { x: x + w, y },
        PathCommand::LineTo { x: x + w, y: y + h },
        PathCommand::LineTo { x, y: y + h },
        PathCommand::Close,
    ])
}

fn line_data(x1: f64, y1: f64, x2: f64, y2: f64) -> String {
    PathCommand::join(&[
        PathCommand::MoveTo { x: x1, y: y1 },
        PathCommand::LineTo { x: x2, y: y2 },
    ])
}

/// Draws the background and borders of `content`, if it has any.
pub(crate) fn draw_decoration(
    content: &ContentBox,
    ctx: &mut AssemblyContext<'_>,
) -> Result<(), RenderError> {
    let border = content.border;
    let has_border = [border.top, border.right, border.bottom, border.left]
        .iter()
        .any(|w| *w > ZERO);
    if content.background_color.is_none() && !has_border {
        return Ok(());
    }

    let height = content.height.ok_or_else(|| {
        RenderError::InvalidBox(format!("{} box with decoration has no height", content.tag()))
    })?;
    let width = content.width.unwrap_or(0.0);
    let padding = content.padding;
    let (x, y) = border_origin(content);
    let alpha = alpha(content);

    let inner_width = padding.left + width + padding.right;
    let inner_height = padding.top + height + padding.bottom;

    if let Some(color) = content.background_color
        && inner_height > 0.0
    {
        let id = ctx.next_id();
        ctx.push(PageObject::Path(PathObject {
            id,
            boundary: Rect::new(x + border.left, y + border.top, inner_width, inner_height),
            abbreviated_data: rect_data(0.0, 0.0, inner_width, inner_height),
            stroke: false,
            fill: true,
            fill_color: Some(color),
            stroke_color: None,
            draw_param: None,
            alpha,
        }));
    }

    if !has_border {
        return Ok(());
    }

    let uniform = (border.top - border.right).abs() < ZERO
        && (border.right - border.bottom).abs() < ZERO
        && (border.bottom - border.left).abs() < ZERO;

    if uniform {
        let lw = border.top;
        let w = lw + inner_width + lw;
        let h = lw + inner_height + lw;
        let data = rect_data(lw / 2.0, lw / 2.0, w - lw, h - lw);
        stroke_path(content, ctx, Rect::new(x, y, w, h), data, lw, alpha)?;
        return Ok(());
    }

    let outer_width = border.left + inner_width + border.right;
    let outer_height = border.top + inner_height + border.bottom;

    if border.top > ZERO {
        let lw = border.top;
        let data = line_data(0.0, lw / 2.0, outer_width, lw / 2.0);
        stroke_path(content, ctx, Rect::new(x, y, outer_width, lw), data, lw, alpha)?;
    }
    if border.bottom > ZERO {
        let lw = border.bottom;
        let by = y + border.top + inner_height;
        let data = line_data(0.0, lw / 2.0, outer_width, lw / 2.0);
        stroke_path(content, ctx, Rect::new(x, by, outer_width, lw), data, lw, alpha)?;
    }
    if border.left > ZERO {
        let lw = border.left;
        let data = line_data(lw / 2.0, 0.0, lw / 2.0, outer_height);
        stroke_path(content, ctx, Rect::new(x, y, lw, outer_height), data, lw, alpha)?;
    }
    if border.right > ZERO {
        let lw = border.right;
        let rx = x + border.left + inner_width;
        let data = line_data(lw / 2.0, 0.0, lw / 2.0, outer_height);
        stroke_path(content, ctx, Rect::new(rx, y, lw, outer_height), data, lw, alpha)?;
    }
    Ok(())
}

/// Emits one stroked border path, registering its line style as a draw parameter.
fn stroke_path(
    content: &ContentBox,
    ctx: &mut AssemblyContext<'_>,
    boundary: Rect,
    abbreviated_data: String,
    line_width: f64,
    alpha: Option<u8>,
) -> Result<(), RenderError> {
    // Dash arrays are [offset, dash, gap, dash, gap, ...].
    let (dash_offset, dash_pattern) = match content.border_dash.as_deref() {
        Some([offset, pattern @ ..]) if !pattern.is_empty() => (Some(*offset), pattern.to_vec()),
        _ => (None, Vec::new()),
    };
    let param = DrawParamDescriptor {
        line_width,
        dash_offset,
        dash_pattern,
        stroke_color: content.border_color,
        ..Default::default()
    };
    let draw_param = ctx.resources.add_draw_param(Some(param))?;

    let id = ctx.next_id();
    ctx.push(PageObject::Path(PathObject {
        id,
        boundary,
        abbreviated_data,
        stroke: true,
        fill: false,
        fill_color: None,
        stroke_color: content.border_color,
        draw_param,
        alpha,
    }));
    Ok(())
}
