// palette.rs - Cell colors from (previous, current) state

use egui::Color32;

/// Stable 0: black. Stable 1: white. Changed since the last step: red.
pub fn cell_color(previous: bool, current: bool) -> Color32 {
    match (previous, current) {
        (false, false) => Color32::BLACK,
        (true, true) => Color32::WHITE,
        _ => Color32::RED,
    }
}
