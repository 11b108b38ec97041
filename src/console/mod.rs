// ============================================================================
// Console Front End
// ============================================================================
//
// Numbered menus over any line reader / writer pair:
// - input.rs        - Blank-line tolerant line reader
// - menu.rs         - Beverage -> add-ons -> pricing -> receipt loop
// - receipt_view.rs - Text and JSON receipt rendering
//
// ============================================================================

mod input;
mod menu;
mod receipt_view;

pub use input::LineInput;
pub use menu::MainMenu;
pub use receipt_view::{render_receipt, render_receipt_json};
