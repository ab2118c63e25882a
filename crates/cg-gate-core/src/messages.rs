//! User-facing status text. The gate only ever shows one of these.

pub const MISSING_TOKEN: &str =
    "This link is missing a magic token. Please use the link from your email.";
pub const CHECKING_TOKEN: &str = "Checking your magic link\u{2026}";
pub const INVALID_TOKEN: &str = "This magic link is invalid or has already been used.";
pub const VALIDATION_UNAVAILABLE: &str =
    "We couldn't verify your magic link. Please refresh and try again.";
pub const WATCH_VIDEO: &str = "Watch the Elf Orientation to unlock your Start Call button.";
pub const READY_AFTER_VIDEO: &str = "You\u{2019}re ready! Tap Start to begin your call with Santa.";
pub const READY_NO_VIDEO: &str = "Tap Start to begin your call with Santa.";
pub const CONNECTING: &str = "Connecting you to Santa\u{2026} \u{2728}";
pub const CONNECTED: &str = "You\u{2019}re connected! Say hello to Santa.";
pub const START_TOKEN_USED: &str =
    "This magic link has already been used for a call. Please refresh and try again, or request a new link.";
pub const START_FAILED: &str = "We couldn't start your call. Please refresh and try again.";
pub const WIDGET_UNAVAILABLE: &str =
    "Your call started, but we couldn't show it on this page. Please refresh and try again.";
pub const CONFIG_INVALID: &str = "This page is not set up correctly. Please try again later.";
