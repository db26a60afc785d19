//! Start-once latch around the overlay setup steps.

use crate::error::OverlayError;

/// The setup steps a host performs to bring the overlay up.
pub trait OverlayHost {
    type Error;

    fn inject_style(&mut self) -> Result<(), Self::Error>;
    fn build_overlay(&mut self) -> Result<(), Self::Error>;
    fn start_strobe(&mut self) -> Result<(), Self::Error>;
    fn start_animation(&mut self) -> Result<(), Self::Error>;
}

pub struct Launcher<H> {
    host: H,
    started: bool,
}

impl<H: OverlayHost> Launcher<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            started: false,
        }
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Brings the overlay up. Returns `Ok(false)` if it was already started.
    ///
    /// The latch is set before any step runs, so a failing step is not retried.
    pub fn start(&mut self) -> Result<bool, H::Error> {
        if self.started {
            log::debug!("overlay already started, ignoring");
            return Ok(false);
        }
        self.started = true;

        self.host.inject_style()?;
        self.host.build_overlay()?;
        self.host.start_strobe()?;
        self.host.start_animation()?;
        log::info!("overlay started");
        Ok(true)
    }
}

/// Hands the page's window and document to `arm`. Without a browsing
/// context it logs and returns `Ok(())` without calling `arm`.
pub fn with_page<W, D, E>(
    window: Option<W>,
    document: Option<D>,
    arm: impl FnOnce(W, D) -> Result<(), E>,
) -> Result<(), E> {
    let missing = match (window, document) {
        (Some(window), Some(document)) => return arm(window, document),
        (None, _) => OverlayError::NoWindow,
        (Some(_), None) => OverlayError::NoDocument,
    };
    log::error!("celebration overlay needs a browser page ({missing}); not starting");
    Ok(())
}
