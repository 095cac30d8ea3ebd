use super::div::content_rect;
use crate::error::RenderError;
use crate::traits::{AssemblyContext, BoxProcessor};
use crate::types::{BlockObject, PageObject};
use folio_layout::{BoxKind, ContentBox};

/// Reserves a named, empty block for content supplied later.
pub struct AreaHolderProcessor;

impl BoxProcessor for AreaHolderProcessor {
    fn process(
        &self,
        content: &ContentBox,
        ctx: &mut AssemblyContext<'_>,
    ) -> Result<(), RenderError> {
        let BoxKind::AreaHolder { name } = &content.kind else {
            return Err(RenderError::InvalidBox(format!(
                "area holder processor got a {} box",
                content.tag()
            )));
        };
        let id = ctx.next_id();
        ctx.push(PageObject::Block(BlockObject {
            id,
            name: name.clone(),
            boundary: content_rect(content),
        }));
        Ok(())
    }

    fn name(&self) -> &'static str {
        "area-holder"
    }
}
