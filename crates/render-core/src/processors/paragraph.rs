use super::div::{alpha, content_rect, draw_decoration};
use crate::error::RenderError;
use crate::traits::{AssemblyContext, BoxProcessor};
use crate::types::{PageObject, TextObject};
use folio_layout::{BoxKind, ContentBox, ParagraphContent};
use folio_resource::Font;
use folio_types::ObjectId;

pub struct ParagraphProcessor;

impl BoxProcessor for ParagraphProcessor {
    fn process(
        &self,
        content: &ContentBox,
        ctx: &mut AssemblyContext<'_>,
    ) -> Result<(), RenderError> {
        let BoxKind::Paragraph(paragraph) = &content.kind else {
            return Err(RenderError::InvalidBox(format!(
                "paragraph processor got a {} box",
                content.tag()
            )));
        };

        draw_decoration(content, ctx)?;
        if paragraph.text.is_empty() {
            return Ok(());
        }

        let font = resolve_font(paragraph, ctx)?;
        let id = ctx.next_id();
        ctx.push(PageObject::Text(TextObject {
            id,
            boundary: content_rect(content),
            font,
            size: paragraph.font_size,
            fill_color: paragraph.color,
            align: paragraph.align,
            text: paragraph.text.clone(),
            alpha: alpha(content),
        }));
        Ok(())
    }

    fn name(&self) -> &'static str {
        "paragraph"
    }
}

/// Looks the font up among the document's fonts, registering it on a miss.
fn resolve_font(
    paragraph: &ParagraphContent,
    ctx: &mut AssemblyContext<'_>,
) -> Result<ObjectId, RenderError> {
    if let Some(existing) = ctx.resources.get_font(&paragraph.font_name)
        && let Some(id) = existing.descriptor.id
    {
        return Ok(id);
    }

    let mut font = Font::new(paragraph.font_name.clone());
    if let Some(file) = &paragraph.font_file {
        font = font.with_file(file.clone());
    }
    log::debug!("Registering font '{}' for paragraph text", font.name);
    Ok(ctx.resources.add_font(&font)?)
}
