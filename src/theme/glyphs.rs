pub const PROMPT: &str = "❯ ";
pub const CHIP_REMOVE: &str = "✕";
pub const ACTIVE_ROW: &str = "▶ ";
pub const SEP_RIGHT: &str = "\u{e0b0}";
