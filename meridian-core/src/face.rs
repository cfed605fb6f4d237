//! Per-minute display updater
//!
//! [`Watchface`] is the application context: it owns the configuration,
//! the displayed-zone state and the background image. The host calls
//! [`Watchface::on_minute_tick`] once at startup and then on every minute
//! tick.

use crate::background::BackgroundSlot;
use crate::clock::{ClockStyle, TimeLabel, WallClock};
use crate::config::FaceConfig;
use crate::state::{DisplayState, ZoneChange};
use crate::traits::{FaceSurface, ImageError, ImageId, ImageStore, SurfaceError, TextRegion};
use crate::zones::{offset_label, resolve_zone, zone_record, ZoneIndex};

/// Errors reported by a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaceError {
    /// Drawing to the surface failed
    Surface(SurfaceError),
    /// Loading the background image failed
    Image(ImageError),
}

impl From<SurfaceError> for FaceError {
    fn from(e: SurfaceError) -> Self {
        FaceError::Surface(e)
    }
}

impl From<ImageError> for FaceError {
    fn from(e: ImageError) -> Self {
        FaceError::Image(e)
    }
}

/// What a tick did, for logging
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    /// Zone resolved from the UTC hour
    pub zone: ZoneIndex,
    /// Whether the background image was replaced
    pub swapped: bool,
    /// Time label written to the face
    pub time: TimeLabel,
}

/// Watch-face application context
pub struct Watchface<S: ImageStore> {
    config: FaceConfig,
    state: DisplayState,
    background: BackgroundSlot<S>,
}

impl<S: ImageStore> Watchface<S> {
    /// Create a face with nothing displayed yet
    pub fn new(config: FaceConfig, store: S) -> Self {
        Self {
            config,
            state: DisplayState::new(),
            background: BackgroundSlot::new(store),
        }
    }

    /// Active configuration
    pub fn config(&self) -> &FaceConfig {
        &self.config
    }

    /// Change the 12/24-hour style; applies from the next tick
    pub fn set_clock_style(&mut self, style: ClockStyle) {
        self.config.clock.style = style;
    }

    /// Zone whose background is on screen
    pub fn displayed_zone(&self) -> Option<ZoneIndex> {
        self.state.last_zone()
    }

    /// Background slot (for inspection)
    pub fn background(&self) -> &BackgroundSlot<S> {
        &self.background
    }

    /// Refresh the face for `now`
    ///
    /// Text regions are always rewritten. The background is replaced only
    /// when the resolved zone differs from the one on screen; if the swap
    /// fails the displayed zone is left unset so the next tick retries.
    pub fn on_minute_tick<D>(
        &mut self,
        now: WallClock,
        surface: &mut D,
    ) -> Result<TickReport, FaceError>
    where
        D: FaceSurface<S::Image>,
    {
        let zone = resolve_zone(now.hour());
        let record = zone_record(zone);
        let time = now.format(self.config.clock.style);

        surface.set_text(TextRegion::Time, &time)?;
        surface.set_text(TextRegion::ZoneName, record.name)?;
        surface.set_text(TextRegion::UtcOffset, &offset_label(record))?;

        let change = self.state.observe(zone);
        if let ZoneChange::Entered { to, .. } = change {
            // The old image is gone either way once replace() starts
            self.state.reset();
            if let Err(e) = self.swap_background(record.image, surface) {
                // Leave neither the surface nor the slot holding an image
                self.background.release();
                let _ = surface.clear_background();
                return Err(e);
            }
            self.state.commit(to);
        }

        Ok(TickReport {
            zone,
            swapped: change.needs_swap(),
            time,
        })
    }

    fn swap_background<D>(&mut self, id: ImageId, surface: &mut D) -> Result<(), FaceError>
    where
        D: FaceSurface<S::Image>,
    {
        let image = self.background.replace(id)?;
        surface.set_background(image)?;
        Ok(())
    }

    /// Tear down the background, returning the image to the store
    pub fn shutdown<D>(&mut self, surface: &mut D) -> Result<(), FaceError>
    where
        D: FaceSurface<S::Image>,
    {
        surface.clear_background()?;
        self.background.release();
        self.state.reset();
        Ok(())
    }
}
