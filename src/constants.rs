// Element ids, selectors and CSS classes the page markup provides.

// Landing
pub const LANDING_PAGE_ID: &str = "landing-page";
pub const LANDING_SUBTITLE_SELECTOR: &str = ".landing-subtitle";

// Chrome shown once the story starts
pub const NAVIGATION_ID: &str = "navigation";
pub const SOUND_CONTROL_ID: &str = "sound-control";
pub const SOUND_TOGGLE_ID: &str = "sound-toggle";
pub const SOUND_ICON_SELECTOR: &str = ".sound-icon";
pub const NAV_NUMBER_SELECTOR: &str = ".nav-number";
pub const SCROLL_DOWN_SELECTOR: &str = ".scroll-down";

// Choice section
pub const DECLINE_SIDE_ID: &str = "decline-side";
pub const ACCEPT_SIDE_ID: &str = "accept-side";
pub const DECLINE_BTN_ID: &str = "decline-btn";
pub const ACCEPT_BTN_ID: &str = "accept-btn";
pub const CHOICE_PHONE_SELECTOR: &str = ".choice-phone-container";

// Temptation video
pub const VIDEO_FRAME_ID: &str = "temptation-video";

// Release
pub const RELEASE_INPUT_ID: &str = "release-input";
pub const LET_GO_BTN_ID: &str = "let-go-btn";
pub const RELEASE_CONTAINER_ID: &str = "release-container";
pub const RELEASE_MESSAGE_ID: &str = "release-message";

// Classes
pub const CLASS_FADE_OUT: &str = "fade-out";
pub const CLASS_VISIBLE: &str = "visible";
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_RINGING: &str = "ringing";
pub const CLASS_SHOW: &str = "show";

// Body attribute holding the console log level
pub const LOG_LEVEL_ATTR: &str = "data-log-level";
