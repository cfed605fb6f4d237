//! Background image ownership
//!
//! Holds the single live background image. Replacing it always returns
//! the previous image to the store before the new one is loaded, and
//! dropping the slot returns whatever is still held.

use crate::traits::{ImageError, ImageId, ImageStore};

struct Loaded<I> {
    id: ImageId,
    image: I,
}

/// Owner of the currently displayed background image
pub struct BackgroundSlot<S: ImageStore> {
    store: S,
    current: Option<Loaded<S::Image>>,
}

impl<S: ImageStore> BackgroundSlot<S> {
    /// Create an empty slot backed by `store`
    pub fn new(store: S) -> Self {
        Self {
            store,
            current: None,
        }
    }

    /// Swap in the image `id`
    ///
    /// The held image is released first, so at most one image is live.
    /// On error the slot is left empty.
    pub fn replace(&mut self, id: ImageId) -> Result<&S::Image, ImageError> {
        self.release();
        let image = self.store.load(id)?;
        Ok(&self.current.insert(Loaded { id, image }).image)
    }

    /// Release the held image, if any
    pub fn release(&mut self) {
        if let Some(loaded) = self.current.take() {
            self.store.unload(loaded.image);
        }
    }

    /// Currently held image
    pub fn current(&self) -> Option<&S::Image> {
        self.current.as_ref().map(|loaded| &loaded.image)
    }

    /// Identifier of the currently held image
    pub fn current_id(&self) -> Option<ImageId> {
        self.current.as_ref().map(|loaded| loaded.id)
    }

    /// Check if an image is held
    pub fn is_loaded(&self) -> bool {
        self.current.is_some()
    }

    /// Access the backing store
    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: ImageStore> Drop for BackgroundSlot<S> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::mock::{Call, CallLog, MockStore};
    use core::cell::{Cell, RefCell};

    #[test]
    fn test_replace_releases_previous_first() {
        let log = CallLog::default();
        let live = Cell::new(0);
        let mut slot = BackgroundSlot::new(MockStore::new(&log, &live));

        slot.replace(ImageId::new(3)).unwrap();
        slot.replace(ImageId::new(4)).unwrap();

        assert_eq!(slot.current_id(), Some(ImageId::new(4)));
        assert_eq!(live.get(), 1);
        assert_eq!(
            log.borrow().as_slice(),
            &[Call::Load(3), Call::Unload(3), Call::Load(4)]
        );
    }

    #[test]
    fn test_drop_releases_held_image() {
        let log = RefCell::default();
        let live = Cell::new(0);
        {
            let mut slot = BackgroundSlot::new(MockStore::new(&log, &live));
            slot.replace(ImageId::new(7)).unwrap();
            assert_eq!(live.get(), 1);
        }
        assert_eq!(live.get(), 0);
        assert_eq!(log.borrow().as_slice(), &[Call::Load(7), Call::Unload(7)]);
    }

    #[test]
    fn test_release_is_idempotent() {
        let log = CallLog::default();
        let live = Cell::new(0);
        let mut slot = BackgroundSlot::new(MockStore::new(&log, &live));

        slot.release();
        slot.replace(ImageId::new(1)).unwrap();
        slot.release();
        slot.release();
        drop(slot);

        assert_eq!(live.get(), 0);
        assert_eq!(log.borrow().as_slice(), &[Call::Load(1), Call::Unload(1)]);
    }

    #[test]
    fn test_failed_load_leaves_slot_empty() {
        let log = CallLog::default();
        let live = Cell::new(0);
        let mut store = MockStore::new(&log, &live);
        store.missing = Some(ImageId::new(9));
        let mut slot = BackgroundSlot::new(store);

        slot.replace(ImageId::new(2)).unwrap();
        assert_eq!(slot.replace(ImageId::new(9)), Err(ImageError::NotFound));

        assert!(!slot.is_loaded());
        assert!(slot.current().is_none());
        assert_eq!(live.get(), 0);
    }
}
