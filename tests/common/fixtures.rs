use folio::{
    BoxKind, CanvasContent, ClearMode, Color, ContentBox, FloatMode, ParagraphContent,
    PathCommand,
};

/// A block box (clear both) of the full row width.
pub fn block(height: f64) -> ContentBox {
    ContentBox::div(190.0, height)
}

/// A shaded block so that assembly emits a visible path for it.
pub fn shaded_block(height: f64) -> ContentBox {
    block(height).with_background(Color::gray(220))
}

/// An inline box that shares rows with its neighbours.
pub fn inline(width: f64, height: f64, float: FloatMode) -> ContentBox {
    ContentBox::div(width, height)
        .with_float(float, ClearMode::None)
        .with_background(Color::rgb(200, 30, 30))
}

pub fn paragraph_in(font_name: &str, text: &str) -> ContentBox {
    ContentBox::new(BoxKind::Paragraph(ParagraphContent {
        text: text.to_string(),
        font_name: font_name.to_string(),
        font_size: 4.0,
        ..Default::default()
    }))
}

/// A bordered triangle on a canvas.
pub fn triangle_canvas(size: f64) -> ContentBox {
    ContentBox::canvas(
        size,
        size,
        CanvasContent {
            commands: vec![
                PathCommand::MoveTo { x: 0.0, y: size },
                PathCommand::LineTo { x: size / 2.0, y: 0.0 },
                PathCommand::LineTo { x: size, y: size },
                PathCommand::Close,
            ],
            ..Default::default()
        },
    )
}
