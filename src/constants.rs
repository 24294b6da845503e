/// DOM contract between the wasm module and `web/index.html`.
///
/// Element ids and CSS custom-property names live here so the markup and the
/// glue code cannot drift apart silently.
// Profile card
pub const CARD_CONTAINER_ID: &str = "profile-card";
pub const CARD_AVATAR_ID: &str = "card-avatar";
pub const CARD_NAME_ID: &str = "card-name";
pub const CARD_TITLE_ID: &str = "card-title";
pub const CARD_HANDLE_ID: &str = "card-handle";
pub const CARD_STATUS_ID: &str = "card-status";
pub const CARD_CONTACT_BTN_ID: &str = "card-contact-btn";

// CSS custom properties the card engine writes; the stylesheet consumes them.
pub const VAR_POINTER_X: &str = "--pointer-x";
pub const VAR_POINTER_Y: &str = "--pointer-y";
pub const VAR_ROTATE_X: &str = "--rotate-x";
pub const VAR_ROTATE_Y: &str = "--rotate-y";
pub const VAR_GLOW_X: &str = "--glow-x";
pub const VAR_GLOW_Y: &str = "--glow-y";
pub const VAR_CARD_OPACITY: &str = "--card-opacity";

// Background canvas
pub const PARTICLES_CANVAS_ID: &str = "particles-canvas";

// Theme
pub const THEME_TOGGLE_ID: &str = "theme-toggle";
pub const THEME_STORAGE_KEY: &str = "folio_theme";
pub const THEME_DARK_CLASS: &str = "dark";

// Intro loader
pub const INTRO_LOADER_ID: &str = "intro-loader";
pub const HIDDEN_CLASS: &str = "hidden";

// Contact form
pub const CONTACT_SECTION_ID: &str = "contact";
pub const CONTACT_NAME_ID: &str = "contact-name";
pub const CONTACT_EMAIL_ID: &str = "contact-email";
pub const CONTACT_MESSAGE_ID: &str = "contact-message";
pub const CONTACT_SEND_ID: &str = "contact-send";
pub const CONTACT_STATUS_ID: &str = "contact-status";
pub const CONTACT_NAME_ERROR_ID: &str = "contact-name-error";
pub const CONTACT_EMAIL_ERROR_ID: &str = "contact-email-error";
pub const CONTACT_MESSAGE_ERROR_ID: &str = "contact-message-error";

// Chat widget
pub const CHAT_TOGGLE_ID: &str = "chat-toggle";
pub const CHAT_PANEL_ID: &str = "chat-panel";
pub const CHAT_LOG_ID: &str = "chat-log";
pub const CHAT_INPUT_ID: &str = "chat-input";
pub const CHAT_SEND_ID: &str = "chat-send";

// Boundary endpoints. Plain JSON, fire-and-forget, no retries.
pub const CONTACT_ENDPOINT: &str = "/api/contact";
pub const CHAT_ENDPOINT: &str = "/api/chat";

// User-visible notices (one per failure, never stacked).
pub const CONTACT_SENT_NOTICE: &str = "Thanks! I will get back to you soon.";
pub const CONTACT_FAILURE_NOTICE: &str = "Could not send your message. Please try again.";
pub const CHAT_FAILURE_NOTICE: &str = "Could not reach the assistant.";
pub const CHAT_GREETING: &str = "Hi! I'm the portfolio assistant. How can I help?";
pub const CHAT_PENDING_NOTICE: &str = "Thinking…";
