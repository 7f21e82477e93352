//! The gallery form around the hotspot editor: title, staged image and the
//! submission step that turns editor state into a [`SavePayload`].

use crate::editor::HotspotEditor;
use crate::error::CoreError;
use crate::gallery::{validate_content_type, validate_title, validate_upload_size, SavePayload};
use crate::hotspot::Hotspot;

/// An image chosen in the form but not uploaded yet.
#[derive(Debug, Clone, PartialEq)]
pub struct StagedFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl StagedFile {
    /// Stage a file after checking its type and size.
    pub fn new(
        name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<Self, CoreError> {
        let content_type = content_type.into();
        validate_content_type(&content_type)?;
        validate_upload_size(bytes.len())?;
        Ok(Self {
            name: name.into(),
            content_type,
            bytes,
        })
    }
}

/// What the form sends: the `data` part and, when staged, the `file` part.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub payload: SavePayload,
    pub file: Option<StagedFile>,
}

/// Form state for creating or editing one gallery.
#[derive(Debug, Clone, Default)]
pub struct GalleryDraft {
    title: String,
    title_error: Option<String>,
    file: Option<StagedFile>,
    editor: HotspotEditor,
    is_new: bool,
    image_file_id: Option<String>,
    loaded_title: String,
    loaded_hotspots: Vec<Hotspot>,
}

impl GalleryDraft {
    /// Empty form for a gallery that does not exist yet.
    pub fn new_gallery() -> Self {
        Self {
            is_new: true,
            ..Self::default()
        }
    }

    /// Form seeded from a stored gallery.
    pub fn from_gallery(
        title: impl Into<String>,
        hotspots: Vec<Hotspot>,
        image_file_id: Option<String>,
    ) -> Self {
        let title = title.into();
        Self {
            editor: HotspotEditor::from_hotspots(&hotspots),
            title: title.clone(),
            loaded_title: title,
            loaded_hotspots: hotspots,
            image_file_id,
            is_new: false,
            ..Self::default()
        }
    }

    pub fn is_new(&self) -> bool {
        self.is_new
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn title_error(&self) -> Option<&str> {
        self.title_error.as_deref()
    }

    pub fn staged_file(&self) -> Option<&StagedFile> {
        self.file.as_ref()
    }

    pub fn editor(&self) -> &HotspotEditor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut HotspotEditor {
        &mut self.editor
    }

    /// Editing the title clears any pending field error.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.title_error = None;
    }

    pub fn stage_file(&mut self, file: StagedFile) {
        self.file = Some(file);
    }

    /// True when the form differs from what was loaded.
    pub fn is_dirty(&self) -> bool {
        self.file.is_some()
            || self.title != self.loaded_title
            || self.editor.hotspots() != self.loaded_hotspots
    }

    /// Build the submission, or `None` when there is nothing valid to send.
    ///
    /// A new gallery without a staged file yields `None` and leaves the form
    /// untouched. A blank or over-long title sets the field error.
    pub fn prepare_submission(&mut self) -> Option<Submission> {
        if self.is_new && self.file.is_none() {
            return None;
        }
        if let Err(message) = validate_title(&self.title) {
            self.title_error = Some(message);
            return None;
        }
        self.title_error = None;

        Some(Submission {
            payload: SavePayload {
                title: self.title.trim().to_string(),
                hotspots: self.editor.hotspots(),
                id_img: self.image_file_id.clone(),
            },
            file: self.file.clone(),
        })
    }

    /// Record a successful save: the submitted state becomes the loaded one.
    pub fn mark_saved(&mut self, image_file_id: Option<String>) {
        self.is_new = false;
        self.file = None;
        if image_file_id.is_some() {
            self.image_file_id = image_file_id;
        }
        self.loaded_title = self.title.clone();
        self.loaded_hotspots = self.editor.hotspots();
    }

    /// Restore the loaded title and hotspots and drop the staged file.
    pub fn discard(&mut self) {
        self.title = self.loaded_title.clone();
        self.title_error = None;
        self.file = None;
        self.editor.reset_to(&self.loaded_hotspots);
    }
}
