use crate::app::models::ImageRef;
use std::collections::BTreeSet;

/// Deduplicating accumulator for images found across a scan.
#[derive(Debug, Default)]
pub struct ResultSet {
    images: BTreeSet<ImageRef>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, images: impl IntoIterator<Item = ImageRef>) {
        self.images.extend(images);
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Consumes the set, yielding unique images in lexicographic order.
    pub fn finalize(self) -> Vec<ImageRef> {
        self.images.into_iter().collect()
    }
}
