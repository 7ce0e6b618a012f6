use crate::content::domain::entities::{GalleryPhoto, PhotoId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhotoSelection {
    #[default]
    None,
    Photo(PhotoId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryEvent {
    Select(PhotoId),
    Close,
}

/// Interaction state owned by the gallery: at most one photo is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GalleryState {
    selection: PhotoSelection,
}

impl GalleryState {
    pub fn apply(&mut self, event: GalleryEvent, photos: &[GalleryPhoto]) {
        match event {
            GalleryEvent::Select(id) if photos.iter().any(|p| p.id == id) => {
                self.selection = PhotoSelection::Photo(id);
            }
            GalleryEvent::Select(_) => {}
            GalleryEvent::Close => self.selection = PhotoSelection::None,
        }
    }

    pub fn after(&self, event: GalleryEvent, photos: &[GalleryPhoto]) -> Self {
        let mut next = *self;
        next.apply(event, photos);
        next
    }

    pub fn selection(&self) -> PhotoSelection {
        self.selection
    }

    pub fn selected<'a>(&self, photos: &'a [GalleryPhoto]) -> Option<&'a GalleryPhoto> {
        match self.selection {
            PhotoSelection::Photo(id) => photos.iter().find(|p| p.id == id),
            PhotoSelection::None => None,
        }
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        match self.selection {
            PhotoSelection::Photo(id) => vec![("photo", id.to_string())],
            PhotoSelection::None => Vec::new(),
        }
    }
}
