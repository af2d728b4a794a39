// src/ui/minimap.rs
//! Text summary map of a plan: one slot per grid cell, north at the top.

use crate::layout::{GridCell, LayoutPlan};

const SLOT: usize = 5;

/// Draws every claimed cell with its room index. `current` is bracketed.
/// Cells shared by several rooms show the first one.
pub fn render(plan: &LayoutPlan, current: Option<usize>) -> String {
    let Some((lo, hi)) = plan.occupancy.bounds() else {
        return String::new();
    };

    let mut out = String::new();
    for y in (lo.y..=hi.y).rev() {
        let mut line = String::new();
        for x in lo.x..=hi.x {
            let label = match plan.occupancy.claimant(GridCell::new(x, y)) {
                Some(index) if Some(index) == current => format!("[{index}]"),
                Some(index) => index.to_string(),
                None => ".".to_string(),
            };
            line.push_str(&format!("{label:^SLOT$}"));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::layout::generate_layout_seeded;

    #[test]
    fn test_straight_chain() {
        let plan = generate_layout_seeded(2, &LayoutConfig::default(), 42).unwrap();
        // first room exits north, so room 1 sits directly above room 0
        let map = render(&plan, Some(1));
        assert_eq!(map, " [1]\n  0\n");
    }

    #[test]
    fn test_every_room_is_drawn() {
        let plan = generate_layout_seeded(25, &LayoutConfig::default(), 9).unwrap();
        let map = render(&plan, None);
        let (lo, hi) = plan.occupancy.bounds().unwrap();
        assert_eq!(map.lines().count() as i32, hi.y - lo.y + 1);
        for room in &plan.rooms {
            let label = room.index.to_string();
            assert!(map.split_whitespace().any(|token| token == label), "room {label} missing");
        }
        assert!(!map.contains('['));
    }
}
