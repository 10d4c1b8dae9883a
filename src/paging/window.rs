//! Visible-window sizing driven by the viewport

use crate::viewport::DeviceClass;

/// How many page numbers to show per device class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowPolicy {
    pub mobile: usize,
    pub tablet: usize,
    pub desktop: usize,
}

impl Default for WindowPolicy {
    fn default() -> Self {
        Self {
            mobile: 3,
            tablet: 5,
            desktop: 7,
        }
    }
}

impl WindowPolicy {
    /// A policy that ignores the viewport
    pub fn fixed(window_size: usize) -> Self {
        Self {
            mobile: window_size,
            tablet: window_size,
            desktop: window_size,
        }
    }

    /// Window size for a device class (never zero)
    pub fn window_for(&self, device: DeviceClass) -> usize {
        let size = match device {
            DeviceClass::Mobile => self.mobile,
            DeviceClass::Tablet => self.tablet,
            DeviceClass::Desktop => self.desktop,
        };
        size.max(1)
    }
}
