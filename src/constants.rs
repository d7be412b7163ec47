// DOM and bootstrap constants for the web front-end.

// Window events forwarded into the motion stores
pub const SCROLL_EVENT: &str = "scroll";
pub const MOUSEMOVE_EVENT: &str = "mousemove";

// Both listeners are passive: they never call preventDefault
pub const PASSIVE_LISTENERS: bool = true;

// Console logging
pub const LOG_LEVEL: log::Level = log::Level::Info;

// JS-facing field names on the event object handed to subscribers
pub const FIELD_TRIGGER: &str = "trigger";
pub const FIELD_DATA: &str = "data";
pub const FIELD_SNAPSHOT: &str = "snapshot";
pub const FIELD_SECTION_PROGRESS: &str = "sectionProgress";
