// Motion tuning constants and the fixed event names shared with every consumer.

// Velocity smoothing: new = OLD * old + (1 - OLD) * instantaneous
pub const VELOCITY_SMOOTHING_OLD: f64 = 0.7;

// Lower bound on the delta-time between two commits (milliseconds)
pub const MIN_FRAME_DELTA_MS: f64 = 1.0;
pub const MS_PER_SEC: f64 = 1000.0;

// Event names dispatched by the orchestrator itself
pub const ON_SCROLL: &str = "onScroll";
pub const ON_MOUSE_MOVE: &str = "onMouseMove";
pub const ON_SECTION_ENTER: &str = "onSectionEnter";
pub const ON_SECTION_EXIT: &str = "onSectionExit";
pub const ON_SECTION_PROGRESS: &str = "onSectionProgress";
pub const ON_AUDIO_REACTIVE: &str = "onAudioReactive";
pub const ON_BLESSING_WAVE: &str = "onBlessingWave";
pub const ON_BLESSING_WAVE_UPDATE: &str = "onBlessingWaveUpdate";

// Element-level animation triggers
pub const SCROLL_PARALLAX: &str = "scrollParallax";
pub const CARD_TILT: &str = "cardTilt";
pub const HERO_REVEAL: &str = "heroReveal";

// Route transitions
pub const PAGE_TRANSITION_IN: &str = "pageTransitionIn";
pub const PAGE_TRANSITION_OUT: &str = "pageTransitionOut";
