// DOM contract shared with the page markup and stylesheet.
// Element ids, selectors and class names are the only signals crossing the
// boundary, so they are kept together here rather than inlined at call sites.

// Required elements; startup aborts if any is missing
pub const OPEN_BUTTON_ID: &str = "openButton";
pub const GATE_ID: &str = "gate";
pub const EXPERIENCE_ID: &str = "experience";
pub const STAR_CANVAS_ID: &str = "starCanvas";
pub const TITLE_ID: &str = "birthdayTitle";

// Optional hearts container and its paths
pub const HEARTS_ID: &str = "hearts";
pub const HEART_PATH_SELECTOR: &str = ".heart__path";

// Page transitions
pub const TRANSITION_LINK_SELECTOR: &str = "[data-transition-link]";
pub const PAGE_TRANSITION_CLASS: &str = "page-transition";
pub const PAGE_TRANSITION_IN_CLASS: &str = "page-transition--in";
pub const PAGE_TRANSITION_OUT_CLASS: &str = "page-transition--out";
pub const TRANSITION_NAVIGATE_DELAY_MS: i32 = 320;

// Reveal state classes
pub const GATE_HIDDEN_CLASS: &str = "gate--hidden";
pub const EXPERIENCE_VISIBLE_CLASS: &str = "experience--visible";
pub const BODY_EXPERIENCE_CLASS: &str = "body--experience";
pub const TITLE_CHAR_CLASS: &str = "birthday-title__char";
pub const HEART_DRAW_CLASS: &str = "heart__path--draw";
