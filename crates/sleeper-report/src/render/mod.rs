// Report rendering: ANSI-coloured plain text, and an HTML page derived
// from that text.

pub mod html;
pub mod text;

pub use html::render_html;
pub use text::render_text;

// The codes `colored` writes for the game-log colours. The HTML renderer
// maps each of these to a coloured span.
pub const GREEN: &str = "\x1b[92m";
pub const RED: &str = "\x1b[91m";
pub const YELLOW: &str = "\x1b[93m";
pub const RESET: &str = "\x1b[0m";
