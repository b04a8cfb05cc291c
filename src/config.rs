use crate::log::LogLevel;

pub const DEFAULT_BAND_SHRINK: f64 = 0.25;
pub const DEFAULT_VISIBILITY_THRESHOLD: f64 = 0.1;
pub const DEFAULT_SPEED_RATIO: f64 = 2.5;
pub const DEFAULT_AUTO_SCROLL_DELAY_MS: u32 = 3_000;
pub const DEFAULT_TEXT_OFFSET: usize = 1;
pub const DEFAULT_ROW_HEIGHT_PX: f64 = 40.0;
pub const DEFAULT_NARROW_ROW_HEIGHT_PX: f64 = 48.0;
pub const DEFAULT_NARROW_BREAKPOINT_PX: f64 = 768.0;
pub const DEFAULT_SPLASH_TICK_MS: u32 = 50;
pub const DEFAULT_SPLASH_MAX_STEP: u8 = 3;
pub const DEFAULT_SPLASH_INTRO_MS: u32 = 1_200;
pub const DEFAULT_SPLASH_SETTLE_MS: u32 = 1_000;
pub const DEFAULT_SPLASH_FADE_MS: u32 = 900;
pub const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const BAND_SHRINK_BOUNDS: (f64, f64) = (0.0, 0.49);
const VISIBILITY_THRESHOLD_BOUNDS: (f64, f64) = (0.0, 1.0);
const SPEED_RATIO_BOUNDS: (f64, f64) = (0.1, 10.0);
const AUTO_SCROLL_DELAY_MS_BOUNDS: (u32, u32) = (0, 10_000);
const ROW_HEIGHT_PX_BOUNDS: (f64, f64) = (1.0, 400.0);
const NARROW_BREAKPOINT_PX_BOUNDS: (f64, f64) = (0.0, 4_000.0);
const SPLASH_TICK_MS_BOUNDS: (u32, u32) = (10, 500);
const SPLASH_MAX_STEP_BOUNDS: (u8, u8) = (1, 20);
const SPLASH_PAUSE_MS_BOUNDS: (u32, u32) = (0, 5_000);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselConfig {
    /// Fraction of the viewport width excluded from each side of the centering band.
    pub band_shrink: f64,
    pub visibility_threshold: f64,
    pub speed_ratio: f64,
    pub auto_scroll_delay_ms: u32,
    pub text_offset: usize,
    pub row_height_px: f64,
    pub narrow_row_height_px: f64,
    pub narrow_breakpoint_px: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            band_shrink: DEFAULT_BAND_SHRINK,
            visibility_threshold: DEFAULT_VISIBILITY_THRESHOLD,
            speed_ratio: DEFAULT_SPEED_RATIO,
            auto_scroll_delay_ms: DEFAULT_AUTO_SCROLL_DELAY_MS,
            text_offset: DEFAULT_TEXT_OFFSET,
            row_height_px: DEFAULT_ROW_HEIGHT_PX,
            narrow_row_height_px: DEFAULT_NARROW_ROW_HEIGHT_PX,
            narrow_breakpoint_px: DEFAULT_NARROW_BREAKPOINT_PX,
        }
    }
}

impl CarouselConfig {
    pub fn row_height(&self, viewport_width: f64) -> f64 {
        if viewport_width <= self.narrow_breakpoint_px {
            self.narrow_row_height_px
        } else {
            self.row_height_px
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SplashConfig {
    pub tick_ms: u32,
    pub max_step: u8,
    pub intro_ms: u32,
    pub settle_ms: u32,
    pub fade_ms: u32,
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_SPLASH_TICK_MS,
            max_step: DEFAULT_SPLASH_MAX_STEP,
            intro_ms: DEFAULT_SPLASH_INTRO_MS,
            settle_ms: DEFAULT_SPLASH_SETTLE_MS,
            fade_ms: DEFAULT_SPLASH_FADE_MS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionConfig {
    pub carousel: CarouselConfig,
    pub splash: SplashConfig,
    pub log_level: LogLevel,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            carousel: CarouselConfig::default(),
            splash: SplashConfig::default(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl MotionConfig {
    /// Builds the config from `data-*` style keys. Missing, unparsable, or
    /// out-of-bounds values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let row_height_px = parse_f64_with_bounds(
            &lookup,
            "data-row-height",
            DEFAULT_ROW_HEIGHT_PX,
            ROW_HEIGHT_PX_BOUNDS,
        );

        let carousel = CarouselConfig {
            band_shrink: parse_f64_with_bounds(
                &lookup,
                "data-band-shrink",
                DEFAULT_BAND_SHRINK,
                BAND_SHRINK_BOUNDS,
            ),
            visibility_threshold: parse_f64_with_bounds(
                &lookup,
                "data-visibility-threshold",
                DEFAULT_VISIBILITY_THRESHOLD,
                VISIBILITY_THRESHOLD_BOUNDS,
            ),
            speed_ratio: parse_f64_with_bounds(
                &lookup,
                "data-speed-ratio",
                DEFAULT_SPEED_RATIO,
                SPEED_RATIO_BOUNDS,
            ),
            auto_scroll_delay_ms: parse_u32_with_bounds(
                &lookup,
                "data-auto-scroll-delay-ms",
                DEFAULT_AUTO_SCROLL_DELAY_MS,
                AUTO_SCROLL_DELAY_MS_BOUNDS,
            ),
            text_offset: DEFAULT_TEXT_OFFSET,
            row_height_px,
            narrow_row_height_px: parse_f64_with_bounds(
                &lookup,
                "data-narrow-row-height",
                DEFAULT_NARROW_ROW_HEIGHT_PX,
                ROW_HEIGHT_PX_BOUNDS,
            ),
            narrow_breakpoint_px: parse_f64_with_bounds(
                &lookup,
                "data-narrow-breakpoint",
                DEFAULT_NARROW_BREAKPOINT_PX,
                NARROW_BREAKPOINT_PX_BOUNDS,
            ),
        };

        let splash = SplashConfig {
            tick_ms: parse_u32_with_bounds(
                &lookup,
                "data-splash-tick-ms",
                DEFAULT_SPLASH_TICK_MS,
                SPLASH_TICK_MS_BOUNDS,
            ),
            max_step: parse_u32_with_bounds(
                &lookup,
                "data-splash-max-step",
                u32::from(DEFAULT_SPLASH_MAX_STEP),
                (
                    u32::from(SPLASH_MAX_STEP_BOUNDS.0),
                    u32::from(SPLASH_MAX_STEP_BOUNDS.1),
                ),
            ) as u8,
            intro_ms: parse_u32_with_bounds(
                &lookup,
                "data-splash-intro-ms",
                DEFAULT_SPLASH_INTRO_MS,
                SPLASH_PAUSE_MS_BOUNDS,
            ),
            settle_ms: parse_u32_with_bounds(
                &lookup,
                "data-splash-settle-ms",
                DEFAULT_SPLASH_SETTLE_MS,
                SPLASH_PAUSE_MS_BOUNDS,
            ),
            fade_ms: parse_u32_with_bounds(
                &lookup,
                "data-splash-fade-ms",
                DEFAULT_SPLASH_FADE_MS,
                SPLASH_PAUSE_MS_BOUNDS,
            ),
        };

        let log_level = lookup("data-log-level")
            .and_then(|value| LogLevel::parse(&value))
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            carousel,
            splash,
            log_level,
        }
    }
}

fn parse_f64_with_bounds(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: f64,
    bounds: (f64, f64),
) -> f64 {
    lookup(name)
        .and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite() && (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_u32_with_bounds(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: u32,
    bounds: (u32, u32),
) -> u32 {
    lookup(name)
        .and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}
