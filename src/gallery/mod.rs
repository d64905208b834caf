//! In-memory image gallery
//!
//! Owns the collection of uploaded images and all bookkeeping on it:
//! category assignment, selection state, and size accounting. Filenames are
//! the collection key; adding a duplicate filename is a no-op.

/// An uploaded image held in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedImage {
    pub filename: String,
    pub base64_data: String,
    pub size_bytes: u64,
    pub mime_type: String,
    pub category: Option<String>,
    pub selected: bool,
}

impl UploadedImage {
    /// Create an image with no category and selection cleared
    pub fn new(
        filename: impl Into<String>,
        base64_data: impl Into<String>,
        size_bytes: u64,
        mime_type: impl Into<String>,
    ) -> Self {
        Self {
            filename: filename.into(),
            base64_data: base64_data.into(),
            size_bytes,
            mime_type: mime_type.into(),
            category: None,
            selected: false,
        }
    }

    /// Inline data URL carrying the image payload
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.base64_data)
    }
}

/// Ordered collection of uploaded images, keyed by filename
#[derive(Debug, Default)]
pub struct Gallery {
    images: Vec<UploadedImage>,
}

impl Gallery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an image; returns false if an image with the same filename exists
    pub fn add(&mut self, image: UploadedImage) -> bool {
        if self.images.iter().any(|i| i.filename == image.filename) {
            return false;
        }
        self.images.push(image);
        true
    }

    /// Remove an image by filename; returns whether one was removed
    pub fn remove(&mut self, filename: &str) -> bool {
        let before = self.images.len();
        self.images.retain(|i| i.filename != filename);
        self.images.len() != before
    }

    /// Remove every image
    pub fn clear(&mut self) {
        self.images.clear();
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn images(&self) -> &[UploadedImage] {
        &self.images
    }

    pub fn get(&self, filename: &str) -> Option<&UploadedImage> {
        self.images.iter().find(|i| i.filename == filename)
    }

    fn get_mut(&mut self, filename: &str) -> Option<&mut UploadedImage> {
        self.images.iter_mut().find(|i| i.filename == filename)
    }

    /// Assign a category to an image; returns false if the filename is unknown
    pub fn set_category(&mut self, filename: &str, category: &str) -> bool {
        match self.get_mut(filename) {
            Some(image) => {
                image.category = Some(category.to_string());
                true
            }
            None => false,
        }
    }

    /// Clear an image's category; returns false if the filename is unknown
    pub fn clear_category(&mut self, filename: &str) -> bool {
        match self.get_mut(filename) {
            Some(image) => {
                image.category = None;
                true
            }
            None => false,
        }
    }

    /// Images carrying exactly the given category
    pub fn images_by_category(&self, category: &str) -> Vec<&UploadedImage> {
        self.images
            .iter()
            .filter(|i| i.category.as_deref() == Some(category))
            .collect()
    }

    /// Flip an image's selection flag; returns the new state, or None for an
    /// unknown filename
    pub fn toggle_selected(&mut self, filename: &str) -> Option<bool> {
        self.get_mut(filename).map(|image| {
            image.selected = !image.selected;
            image.selected
        })
    }

    pub fn select_all(&mut self) {
        for image in &mut self.images {
            image.selected = true;
        }
    }

    pub fn clear_selection(&mut self) {
        for image in &mut self.images {
            image.selected = false;
        }
    }

    pub fn selected(&self) -> Vec<&UploadedImage> {
        self.images.iter().filter(|i| i.selected).collect()
    }

    /// Remove all selected images; returns how many were removed
    pub fn remove_selected(&mut self) -> usize {
        let before = self.images.len();
        self.images.retain(|i| !i.selected);
        before - self.images.len()
    }

    pub fn total_size_bytes(&self) -> u64 {
        self.images.iter().map(|i| i.size_bytes).sum()
    }
}
