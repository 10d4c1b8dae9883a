//! Viewport classification shared by the paginator and the dashboard shell

/// Coarse device class derived from the viewport width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DeviceClass {
    Mobile,
    Tablet,
    #[default]
    Desktop,
}

impl DeviceClass {
    pub fn is_mobile(&self) -> bool {
        matches!(self, DeviceClass::Mobile)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceClass::Mobile => "mobile",
            DeviceClass::Tablet => "tablet",
            DeviceClass::Desktop => "desktop",
        }
    }
}

/// Width breakpoints in CSS pixels (upper bounds are inclusive)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoints {
    pub mobile_max: f64,
    pub tablet_max: f64,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            mobile_max: 767.0,  // below the `md` breakpoint
            tablet_max: 1023.0, // below the `lg` breakpoint
        }
    }
}

impl Breakpoints {
    pub fn new(mobile_max: f64, tablet_max: f64) -> Self {
        Self {
            mobile_max,
            tablet_max: tablet_max.max(mobile_max),
        }
    }

    /// Classify a viewport width.
    ///
    /// Widths that are negative or not finite come from a host that has not
    /// measured yet; they are treated as the narrowest layout.
    pub fn classify(&self, width: f64) -> DeviceClass {
        if !width.is_finite() || width < 0.0 || width <= self.mobile_max {
            DeviceClass::Mobile
        } else if width <= self.tablet_max {
            DeviceClass::Tablet
        } else {
            DeviceClass::Desktop
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_default() {
        let bp = Breakpoints::default();
        assert_eq!(bp.classify(375.0), DeviceClass::Mobile);
        assert_eq!(bp.classify(767.0), DeviceClass::Mobile);
        assert_eq!(bp.classify(768.0), DeviceClass::Tablet);
        assert_eq!(bp.classify(1023.0), DeviceClass::Tablet);
        assert_eq!(bp.classify(1440.0), DeviceClass::Desktop);
    }

    #[test]
    fn test_classify_unmeasured() {
        let bp = Breakpoints::default();
        assert_eq!(bp.classify(f64::NAN), DeviceClass::Mobile);
        assert_eq!(bp.classify(-1.0), DeviceClass::Mobile);
        assert_eq!(bp.classify(f64::INFINITY), DeviceClass::Mobile);
    }

    #[test]
    fn test_inverted_breakpoints_skip_tablet() {
        let bp = Breakpoints::new(900.0, 600.0);
        assert_eq!(bp.classify(800.0), DeviceClass::Mobile);
        assert_eq!(bp.classify(901.0), DeviceClass::Desktop);
    }
}
