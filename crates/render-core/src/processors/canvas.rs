use super::div::{alpha, content_rect, draw_decoration};
use crate::error::RenderError;
use crate::traits::{AssemblyContext, BoxProcessor};
use crate::types::{CompositeObject, PageObject};
use folio_layout::{BoxKind, ContentBox};
use folio_types::{DrawParamDescriptor, VectorShapeDescriptor};

/// Registers the canvas drawing as a reusable vector shape and places a reference to it.
pub struct CanvasProcessor;

impl BoxProcessor for CanvasProcessor {
    fn process(
        &self,
        content: &ContentBox,
        ctx: &mut AssemblyContext<'_>,
    ) -> Result<(), RenderError> {
        let BoxKind::Canvas(canvas) = &content.kind else {
            return Err(RenderError::InvalidBox(format!(
                "canvas processor got a {} box",
                content.tag()
            )));
        };

        draw_decoration(content, ctx)?;
        if canvas.commands.is_empty() {
            return Ok(());
        }

        let boundary = content_rect(content);
        let draw_param = ctx.resources.add_draw_param(Some(DrawParamDescriptor {
            line_width: canvas.line_width,
            stroke_color: canvas.stroke_color,
            fill_color: canvas.fill_color,
            ..Default::default()
        }))?;
        let resource = ctx.resources.add_vector_shape(VectorShapeDescriptor {
            id: None,
            width: boundary.width,
            height: boundary.height,
            thumbnail: None,
            draw_param,
            content: canvas.commands.clone(),
        })?;

        let id = ctx.next_id();
        ctx.push(PageObject::Composite(CompositeObject {
            id,
            boundary,
            resource,
            alpha: alpha(content),
        }));
        Ok(())
    }

    fn name(&self) -> &'static str {
        "canvas"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_layout::CanvasContent;
    use folio_resource::{IdAllocator, InMemoryContainer, ResourceManager};
    use folio_types::PathCommand;
    use std::sync::Arc;

    #[test]
    fn test_identical_drawings_share_one_shape() {
        let mut resources = ResourceManager::open(
            Arc::new(InMemoryContainer::default()),
            Arc::new(IdAllocator::default()),
        )
        .unwrap();
        let drawing = CanvasContent {
            commands: vec![
                PathCommand::MoveTo { x: 0.0, y: 0.0 },
                PathCommand::LineTo { x: 20.0, y: 10.0 },
            ],
            ..Default::default()
        };
        let a = ContentBox::canvas(20.0, 10.0, drawing.clone()).at(0.0, 0.0);
        let b = ContentBox::canvas(20.0, 10.0, drawing).at(50.0, 50.0);

        let mut ctx = AssemblyContext::new(&mut resources);
        CanvasProcessor.process(&a, &mut ctx).unwrap();
        CanvasProcessor.process(&b, &mut ctx).unwrap();
        let objects = ctx.into_objects();

        let refs: Vec<_> = objects
            .iter()
            .map(|o| match o {
                PageObject::Composite(c) => c.resource,
                other => panic!("expected composite, got {:?}", other),
            })
            .collect();
        assert_eq!(refs[0], refs[1]);
        assert_ne!(objects[0].id(), objects[1].id());
        let shapes = &resources.document_resources().vector_shapes;
        assert_eq!(shapes.len(), 1);
        assert!(shapes[0].draw_param.is_some());
    }
}
