//! Document resource registry.
//!
//! Every shared resource referenced while assembling pages goes through
//! [`ResourceManager::register`]. Identical content (ignoring the id) always resolves to the
//! id it was first registered under, including entries that were already present in the
//! container when the manager was opened.

use crate::error::ResourceError;
use crate::ids::IdAllocator;
use crate::key::ContentKey;
use folio_traits::{ContainerError, ContainerStore, ResourceSlot};
use folio_types::{
    ColorSpaceDescriptor, DrawParamDescriptor, FontDescriptor, MediaType, MultiMediaDescriptor,
    ObjectId, ResourceDescriptor, ResourceList, ResourceLoc, VectorShapeDescriptor,
};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A font as requested by content, before it becomes a descriptor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Font {
    pub name: String,
    pub family_name: Option<String>,
    /// Local font file to copy into the container.
    pub font_file: Option<PathBuf>,
    /// Only embeddable fonts have their file copied.
    pub embeddable: bool,
}

impl Font {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_family(mut self, family_name: impl Into<String>) -> Self {
        self.family_name = Some(family_name.into());
        self
    }

    pub fn with_file(mut self, font_file: impl Into<PathBuf>) -> Self {
        self.font_file = Some(font_file.into());
        self.embeddable = true;
        self
    }
}

/// A font already present in the document.
#[derive(Debug, Clone, PartialEq)]
pub struct ExistingFont {
    pub descriptor: FontDescriptor,
    /// Absolute container location of the font file, if the font has one.
    pub file_path: Option<ResourceLoc>,
}

#[derive(Debug)]
pub struct ResourceManager {
    store: Arc<dyn ContainerStore>,
    ids: Arc<IdAllocator>,
    public: ResourceList,
    document: ResourceList,
    public_dirty: bool,
    document_dirty: bool,
    cache: HashMap<ContentKey, ObjectId>,
    new_ids: Vec<ObjectId>,
}

impl ResourceManager {
    /// Opens the resource lists of the document in `store`, indexing whatever they already
    /// hold.
    pub fn open(
        store: Arc<dyn ContainerStore>,
        ids: Arc<IdAllocator>,
    ) -> Result<Self, ResourceError> {
        let public = load_list(store.as_ref(), ResourceSlot::Public)?;
        let document = load_list(store.as_ref(), ResourceSlot::Document)?;

        let mut manager = Self {
            store,
            ids,
            public: public.unwrap_or_default(),
            document: document.unwrap_or_default(),
            public_dirty: false,
            document_dirty: false,
            cache: HashMap::new(),
            new_ids: Vec::new(),
        };
        manager.index_existing()?;
        Ok(manager)
    }

    fn index_existing(&mut self) -> Result<(), ResourceError> {
        let existing: Vec<ResourceDescriptor> = self
            .public
            .descriptors()
            .chain(self.document.descriptors())
            .collect();
        for descriptor in existing {
            let Some(id) = descriptor.id() else {
                log::warn!(
                    "Existing {:?} resource without an id is not reusable",
                    descriptor.kind()
                );
                continue;
            };
            self.ids.observe(id);
            self.cache.entry(ContentKey::of(&descriptor)?).or_insert(id);
        }
        if !self.cache.is_empty() {
            log::debug!(
                "Indexed {} existing resources, next id after {}",
                self.cache.len(),
                self.ids.current()
            );
        }
        Ok(())
    }

    /// Registers a resource and returns its id, reusing the id of identical content.
    pub fn register(
        &mut self,
        descriptor: impl Into<ResourceDescriptor>,
    ) -> Result<ObjectId, ResourceError> {
        let mut descriptor = descriptor.into();
        let key = ContentKey::of(&descriptor)?;
        if let Some(&id) = self.cache.get(&key) {
            log::trace!("Reusing {:?} resource {}", descriptor.kind(), id);
            return Ok(id);
        }

        let id = self.ids.next();
        descriptor.set_id(Some(id));
        self.cache.insert(key, id);
        self.new_ids.push(id);
        log::debug!("Registered {:?} resource {}", descriptor.kind(), id);

        if descriptor.kind().is_public() {
            self.public.push(descriptor);
            self.public_dirty = true;
        } else {
            self.document.push(descriptor);
            self.document_dirty = true;
        }
        Ok(id)
    }

    pub fn add_font(&mut self, font: &Font) -> Result<ObjectId, ResourceError> {
        let descriptor = self.font_descriptor(font)?;
        self.register(descriptor)
    }

    /// Registers a font and returns the descriptor as stored, id included.
    pub fn add_font_descriptor(&mut self, font: &Font) -> Result<FontDescriptor, ResourceError> {
        let mut descriptor = self.font_descriptor(font)?;
        descriptor.id = Some(self.register(descriptor.clone())?);
        Ok(descriptor)
    }

    fn font_descriptor(&self, font: &Font) -> Result<FontDescriptor, ResourceError> {
        let mut descriptor = FontDescriptor {
            font_name: font.name.clone(),
            family_name: font.family_name.clone(),
            ..Default::default()
        };

        if let Some(file) = &font.font_file
            && font.embeddable
        {
            descriptor.font_file = Some(self.copy_file(file, &self.public.base_loc)?);
        }

        if let Some(family) = &font.family_name {
            match family.to_lowercase().as_str() {
                "serif" => descriptor.serif = true,
                "bold" => descriptor.bold = true,
                "italic" => descriptor.italic = true,
                "fixedwidth" => descriptor.fixed_width = true,
                _ => {}
            }
        }

        Ok(descriptor)
    }

    /// Copies an image into the container and registers it as multimedia.
    pub fn add_image(&mut self, path: impl AsRef<Path>) -> Result<ObjectId, ResourceError> {
        let base_loc = self.document.base_loc.clone();
        let media_file = self.copy_file(path.as_ref(), &base_loc)?;
        let format = picture_format(media_file.file_name());
        self.register(MultiMediaDescriptor {
            id: None,
            media_type: MediaType::Image,
            format,
            media_file,
        })
    }

    pub fn add_draw_param(
        &mut self,
        param: Option<DrawParamDescriptor>,
    ) -> Result<Option<ObjectId>, ResourceError> {
        param.map(|p| self.register(p)).transpose()
    }

    pub fn add_color_space(
        &mut self,
        color_space: ColorSpaceDescriptor,
    ) -> Result<ObjectId, ResourceError> {
        self.register(color_space)
    }

    pub fn add_vector_shape(
        &mut self,
        shape: VectorShapeDescriptor,
    ) -> Result<ObjectId, ResourceError> {
        self.register(shape)
    }

    /// Copies a local file into the container and returns the location to store in a list
    /// whose base location is `base_loc`.
    fn copy_file(&self, local: &Path, base_loc: &ResourceLoc) -> Result<ResourceLoc, ResourceError> {
        let copied = self.store.add_resource_file(local)?;
        let file_name = copied.file_name();
        if base_loc.same_as("Res") {
            Ok(ResourceLoc::new(file_name))
        } else {
            Ok(self.store.doc_root().cat("Res").cat(file_name))
        }
    }

    /// Finds a font by font or family name, ignoring case.
    ///
    /// The public list is searched first and the document list only when nothing public
    /// matches. Within a list the last match wins.
    pub fn get_font(&self, name: &str) -> Option<ExistingFont> {
        if name.is_empty() {
            return None;
        }
        let (list, font) = find_font(&self.public, name)
            .map(|f| (&self.public, f))
            .or_else(|| find_font(&self.document, name).map(|f| (&self.document, f)))?;

        Some(ExistingFont {
            descriptor: font.clone(),
            file_path: font
                .font_file
                .as_ref()
                .map(|loc| self.absolute_loc(list, loc)),
        })
    }

    fn absolute_loc(&self, list: &ResourceList, loc: &ResourceLoc) -> ResourceLoc {
        if loc.is_root_path() {
            return loc.clone();
        }
        if list.base_loc.is_root_path() {
            return list.base_loc.cat(loc.as_str());
        }
        self.store
            .doc_root()
            .cat(list.base_loc.as_str())
            .cat(loc.as_str())
    }

    pub fn public_resources(&self) -> &ResourceList {
        &self.public
    }

    pub fn document_resources(&self) -> &ResourceList {
        &self.document
    }

    /// Ids handed out by this manager, in registration order.
    pub fn new_resource_ids(&self) -> &[ObjectId] {
        &self.new_ids
    }

    pub fn ids(&self) -> &Arc<IdAllocator> {
        &self.ids
    }

    /// Writes every list that changed since it was opened or last flushed.
    pub fn flush(&mut self) -> Result<(), ResourceError> {
        if self.public_dirty {
            self.store
                .write(ResourceSlot::Public.file_name(), &self.public)?;
            self.public_dirty = false;
        }
        if self.document_dirty {
            self.store
                .write(ResourceSlot::Document.file_name(), &self.document)?;
            self.document_dirty = false;
        }
        log::debug!(
            "Flushed resources through {} ({} public, {} document)",
            self.store.name(),
            self.public.len(),
            self.document.len()
        );
        Ok(())
    }
}

fn load_list(
    store: &dyn ContainerStore,
    slot: ResourceSlot,
) -> Result<Option<ResourceList>, ResourceError> {
    let path = slot.file_name();
    if !store.exists(path) {
        return Ok(None);
    }
    match store.read(path) {
        Ok(list) => Ok(Some(list)),
        Err(ContainerError::Parse { path, message }) => {
            Err(ResourceError::Malformed { path, message })
        }
        Err(e) => Err(e.into()),
    }
}

fn find_font<'a>(list: &'a ResourceList, name: &str) -> Option<&'a FontDescriptor> {
    let name = name.to_lowercase();
    let matches: Vec<&FontDescriptor> = list
        .fonts
        .iter()
        .filter(|f| {
            f.font_name.to_lowercase() == name
                || f.family_name
                    .as_ref()
                    .is_some_and(|family| family.to_lowercase() == name)
        })
        .collect();
    if matches.len() > 1 {
        log::warn!(
            "{} fonts match '{}'; using the last one ({})",
            matches.len(),
            name,
            matches[matches.len() - 1].font_name
        );
    }
    matches.last().copied()
}

/// Image format from a file extension: upper-cased, with JPG and TIF normalised.
fn picture_format(file_name: &str) -> String {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_uppercase();
    match ext.as_str() {
        "JPG" => "JPEG".to_string(),
        "TIF" => "TIFF".to_string(),
        _ => ext,
    }
}
