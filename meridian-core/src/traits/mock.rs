//! Mock surface and image store for host tests

use core::cell::{Cell, RefCell};

use heapless::{String, Vec};

use super::{FaceSurface, ImageError, ImageId, ImageStore, SurfaceError, TextRegion};

/// Observable host calls, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Load(u8),
    Unload(u8),
    Background(u8),
    ClearBackground,
}

pub type CallLog = RefCell<Vec<Call, 256>>;

fn record(log: &CallLog, call: Call) {
    let _ = log.borrow_mut().push(call);
}

/// Image resource handed out by [`MockStore`]; deliberately not `Clone`
#[derive(Debug, PartialEq, Eq)]
pub struct MockImage {
    pub id: ImageId,
}

/// Store holding at most one live image
pub struct MockStore<'a> {
    log: &'a CallLog,
    live: &'a Cell<usize>,
    pub missing: Option<ImageId>,
}

impl<'a> MockStore<'a> {
    pub fn new(log: &'a CallLog, live: &'a Cell<usize>) -> Self {
        Self {
            log,
            live,
            missing: None,
        }
    }
}

impl ImageStore for MockStore<'_> {
    type Image = MockImage;

    fn load(&mut self, id: ImageId) -> Result<MockImage, ImageError> {
        if self.missing == Some(id) {
            return Err(ImageError::NotFound);
        }
        if self.live.get() >= 1 {
            return Err(ImageError::Exhausted);
        }
        self.live.set(self.live.get() + 1);
        record(self.log, Call::Load(id.get()));
        Ok(MockImage { id })
    }

    fn unload(&mut self, image: MockImage) {
        self.live.set(self.live.get() - 1);
        record(self.log, Call::Unload(image.id.get()));
    }
}

/// Surface remembering the last text per region
pub struct MockSurface<'a> {
    log: &'a CallLog,
    pub time: String<24>,
    pub zone: String<24>,
    pub offset: String<24>,
    pub background: Option<ImageId>,
    pub text_writes: usize,
    pub fail_background: bool,
}

impl<'a> MockSurface<'a> {
    pub fn new(log: &'a CallLog) -> Self {
        Self {
            log,
            time: String::new(),
            zone: String::new(),
            offset: String::new(),
            background: None,
            text_writes: 0,
            fail_background: false,
        }
    }
}

impl FaceSurface<MockImage> for MockSurface<'_> {
    fn set_text(&mut self, region: TextRegion, text: &str) -> Result<(), SurfaceError> {
        let target = match region {
            TextRegion::Time => &mut self.time,
            TextRegion::ZoneName => &mut self.zone,
            TextRegion::UtcOffset => &mut self.offset,
        };
        target.clear();
        target.push_str(text).map_err(|_| SurfaceError::BufferOverflow)?;
        self.text_writes += 1;
        Ok(())
    }

    fn set_background(&mut self, image: &MockImage) -> Result<(), SurfaceError> {
        if self.fail_background {
            return Err(SurfaceError::Communication);
        }
        self.background = Some(image.id);
        record(self.log, Call::Background(image.id.get()));
        Ok(())
    }

    fn clear_background(&mut self) -> Result<(), SurfaceError> {
        self.background = None;
        record(self.log, Call::ClearBackground);
        Ok(())
    }
}
