use super::div::{alpha, content_rect, draw_decoration};
use crate::error::RenderError;
use crate::traits::{AssemblyContext, BoxProcessor};
use crate::types::{ImageObject, PageObject};
use folio_layout::{BoxKind, ContentBox};

pub struct ImageProcessor;

impl BoxProcessor for ImageProcessor {
    fn process(
        &self,
        content: &ContentBox,
        ctx: &mut AssemblyContext<'_>,
    ) -> Result<(), RenderError> {
        let BoxKind::Image { path } = &content.kind else {
            return Err(RenderError::InvalidBox(format!(
                "image processor got a {} box",
                content.tag()
            )));
        };

        draw_decoration(content, ctx)?;
        let resource = ctx.resources.add_image(path)?;
        let id = ctx.next_id();
        ctx.push(PageObject::Image(ImageObject {
            id,
            boundary: content_rect(content),
            resource,
            alpha: alpha(content),
        }));
        Ok(())
    }

    fn name(&self) -> &'static str {
        "image"
    }
}
