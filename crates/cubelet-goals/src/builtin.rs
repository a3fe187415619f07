//! Goals shipped with the crate.
//!
//! White is on `U` and yellow on `D`. The F2L pairs are numbered
//! `1 (FR)`, `2 (FL)`, `3 (BL)`, `4 (BR)`; a white pair is the slot's
//! middle-layer edge with the `U` corner above it, a yellow pair the same edge
//! with the `D` corner below it.

use cubelet_core::{Corner, Edge};

use crate::{Goal, PieceRequirement};

/// Name of the goal requiring every piece to be solved.
pub const SOLVED: &str = "Solved";
/// Name of the goal requiring the four `U` edges.
pub const WHITE_CROSS: &str = "White Cross";
/// Name of the goal requiring the four `D` edges.
pub const YELLOW_CROSS: &str = "Yellow Cross";

const PAIR_SLOTS: [(Edge, Corner, Corner); 4] = [
    (Edge::Fr, Corner::Urf, Corner::Dfr),
    (Edge::Fl, Corner::Ufl, Corner::Dlf),
    (Edge::Bl, Corner::Ulb, Corner::Dbl),
    (Edge::Br, Corner::Ubr, Corner::Drb),
];

fn edges(edges: &[Edge]) -> Vec<PieceRequirement> {
    edges
        .iter()
        .map(|&edge| PieceRequirement::home(edge as u8))
        .collect()
}

fn corners(corners: &[Corner]) -> Vec<PieceRequirement> {
    corners
        .iter()
        .map(|&corner| PieceRequirement::home(corner as u8))
        .collect()
}

fn cross(name: &str, edge_list: &[Edge], face: &str, sticker: char) -> Goal {
    let row = |left: char, mid: char, right: char| format!("  {left} {mid} {right}");
    Goal {
        name: name.to_owned(),
        required_edges: edges(edge_list),
        required_corners: Vec::new(),
        visual: vec![
            format!("{face} face:"),
            row('.', sticker, '.'),
            row(sticker, sticker, sticker),
            row('.', sticker, '.'),
        ],
    }
}

fn pair(color: &str, number: usize, edge: Edge, corner: Corner) -> Goal {
    Goal {
        name: format!("{color} F2L Pair {number} ({edge})"),
        required_edges: edges(&[edge]),
        required_corners: corners(&[corner]),
        visual: vec![
            format!("{color} pair in the {edge} slot:"),
            format!("  edge {edge} + corner {corner}"),
        ],
    }
}

/// Returns the built-in goals.
pub fn goals() -> Vec<Goal> {
    let mut goals = vec![
        Goal {
            name: SOLVED.to_owned(),
            required_edges: edges(&Edge::ALL),
            required_corners: corners(&Corner::ALL),
            visual: vec!["Every piece home and oriented.".to_owned()],
        },
        cross(WHITE_CROSS, &[Edge::Ur, Edge::Uf, Edge::Ul, Edge::Ub], "U", 'W'),
        cross(YELLOW_CROSS, &[Edge::Dr, Edge::Df, Edge::Dl, Edge::Db], "D", 'Y'),
    ];
    for (i, &(edge, top, _)) in PAIR_SLOTS.iter().enumerate() {
        goals.push(pair("White", i + 1, edge, top));
    }
    for (i, &(edge, _, bottom)) in PAIR_SLOTS.iter().enumerate() {
        goals.push(pair("Yellow", i + 1, edge, bottom));
    }
    goals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_goals_are_valid() {
        let goals = goals();
        assert_eq!(goals.len(), 11);
        for goal in &goals {
            goal.validate().unwrap();
            assert!(goal.visual_text().is_some(), "{} has no picture", goal.name);
        }
    }

    #[test]
    fn test_pair_names_and_pieces() {
        let goals = goals();
        let white_fr = goals
            .iter()
            .find(|goal| goal.name == "White F2L Pair 1 (FR)")
            .unwrap();
        assert_eq!(white_fr.required_edges, [PieceRequirement::home(8)]);
        assert_eq!(white_fr.required_corners, [PieceRequirement::home(0)]);

        let yellow_br = goals
            .iter()
            .find(|goal| goal.name == "Yellow F2L Pair 4 (BR)")
            .unwrap();
        assert_eq!(yellow_br.required_edges, [PieceRequirement::home(11)]);
        assert_eq!(yellow_br.required_corners, [PieceRequirement::home(7)]);
    }

    #[test]
    fn test_cross_visual() {
        let goals = goals();
        let white = goals.iter().find(|goal| goal.name == WHITE_CROSS).unwrap();
        assert_eq!(
            white.visual_text().unwrap(),
            "U face:\n  . W .\n  W W W\n  . W ."
        );
    }
}
