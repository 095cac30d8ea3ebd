use crate::error::RenderError;
use crate::types::PageObject;
use folio_layout::ContentBox;
use folio_resource::ResourceManager;
use folio_types::ObjectId;

/// Per-box state handed to a [`BoxProcessor`]: the document's resources and the objects
/// emitted for the current layer so far.
pub struct AssemblyContext<'a> {
    pub resources: &'a mut ResourceManager,
    objects: Vec<PageObject>,
}

impl<'a> AssemblyContext<'a> {
    pub fn new(resources: &'a mut ResourceManager) -> Self {
        Self {
            resources,
            objects: Vec::new(),
        }
    }

    /// A fresh document-unique object id.
    pub fn next_id(&self) -> ObjectId {
        self.resources.ids().next()
    }

    pub fn push(&mut self, object: PageObject) {
        self.objects.push(object);
    }

    pub fn into_objects(self) -> Vec<PageObject> {
        self.objects
    }
}

/// Turns one positioned box into page objects.
pub trait BoxProcessor: Send + Sync {
    fn process(&self, content: &ContentBox, ctx: &mut AssemblyContext<'_>)
    -> Result<(), RenderError>;

    /// Name used in logs.
    fn name(&self) -> &'static str;
}
