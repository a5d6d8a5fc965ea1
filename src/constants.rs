//! Constants used throughout the application
//!
//! This module centralizes default geometry, UI text, and other constant values
//! so the widget, the config layer and the demo binary agree on them.

// Widget geometry defaults (terminal cells)
/// Height of the primary button in rows; it is drawn twice as wide
pub const DEFAULT_BUTTON_SIZE: u16 = 3;
/// Height of an action item's swatch in rows
pub const DEFAULT_ITEM_HEIGHT: u16 = 1;
/// Gap inserted above the first item when the stack grows downward
pub const DEFAULT_SPACING: u16 = 1;
/// Horizontal distance from the right edge, also the pill/swatch gap
pub const DEFAULT_OFFSET_X: u16 = 2;
/// Vertical distance from the anchored edge
pub const DEFAULT_OFFSET_Y: u16 = 1;
/// Extra rows added to each item so its tap target is not clipped
pub const ITEM_TAP_MARGIN: u16 = 1;
/// Columns of padding on each side of an item label
pub const ITEM_LABEL_PADDING: u16 = 1;
/// Glyph shown in the primary button
pub const DEFAULT_ICON: &str = "+";

// Config limits
/// Largest accepted button size in rows
pub const MAX_BUTTON_SIZE: u16 = 15;
/// Largest accepted item height in rows
pub const MAX_ITEM_HEIGHT: u16 = 9;
/// Largest accepted spacing or offset in cells
pub const MAX_OFFSET: u16 = 40;
/// Longest accepted auto-close delay
pub const MAX_AUTO_CLOSE_DELAY_MS: u64 = 10_000;
/// Accepted tick rate bounds for the event loop
pub const MIN_TICK_RATE_MS: u64 = 10;
pub const MAX_TICK_RATE_MS: u64 = 1_000;

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const STATUS_HINT: &str = "click or Enter: toggle • 1-9: select • Esc: dismiss • r/o: reset closed/open • q: quit";
pub const STATUS_NOTHING_SELECTED: &str = "Nothing selected yet";

// Log Messages
pub const LOG_FILE_NAME: &str = "speeddial.log";
pub const APP_DIR_NAME: &str = "speeddial";
