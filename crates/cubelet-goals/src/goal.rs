//! Target configurations and similarity scoring.

use cubelet_core::{CubeState, PieceKind};

use crate::GoalError;

/// One piece a goal cares about: piece `id` should sit in slot `pos` with
/// orientation `ori`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct PieceRequirement {
    /// Piece identity (home slot index).
    pub id: u8,
    /// Target slot.
    pub pos: u8,
    /// Target orientation.
    pub ori: u8,
}

impl PieceRequirement {
    /// Requires piece `id` to be solved in its home slot.
    #[must_use]
    pub const fn home(id: u8) -> Self {
        Self { id, pos: id, ori: 0 }
    }

    fn is_valid_for(self, kind: PieceKind) -> bool {
        let count = kind.count();
        usize::from(self.id) < count
            && usize::from(self.pos) < count
            && self.ori < kind.orientations()
    }

    /// Credit in half points: 2 if matched, 1 if in the slot but misoriented.
    fn half_points(self, pos: &[u8], ori: &[u8]) -> u32 {
        let Some(current) = pos.iter().position(|&piece| piece == self.id) else {
            return 0;
        };
        if current != usize::from(self.pos) {
            0
        } else if ori[current] == self.ori {
            2
        } else {
            1
        }
    }
}

/// A named target configuration.
///
/// The JSON form is the one goal files use:
///
/// ```json
/// {
///   "name": "White Cross",
///   "required_edges": [{ "id": 0, "pos": 0, "ori": 0 }],
///   "required_corners": [],
///   "visual": ["  W  ", "W W W", "  W  "]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Goal {
    /// Catalog key.
    pub name: String,
    /// Edge requirements.
    #[serde(default)]
    pub required_edges: Vec<PieceRequirement>,
    /// Corner requirements.
    #[serde(default)]
    pub required_corners: Vec<PieceRequirement>,
    /// Lines of an ASCII picture of the target.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub visual: Vec<String>,
}

impl Goal {
    /// Creates a goal with no requirements.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required_edges: Vec::new(),
            required_corners: Vec::new(),
            visual: Vec::new(),
        }
    }

    /// Parses and validates one goal from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`GoalError::Json`] for malformed JSON, or a validation error as
    /// described in [`Goal::validate`].
    pub fn from_json_str(text: &str) -> Result<Self, GoalError> {
        let goal: Self = serde_json::from_str(text).map_err(|source| GoalError::Json {
            origin: "<string>".to_owned(),
            source,
        })?;
        goal.validate()?;
        Ok(goal)
    }

    /// Total number of required pieces.
    #[must_use]
    pub fn requirement_count(&self) -> usize {
        self.required_edges.len() + self.required_corners.len()
    }

    /// Checks every requirement against its piece class.
    ///
    /// # Errors
    ///
    /// Returns [`GoalError::InvalidRequirement`] if an id, slot or orientation is
    /// out of range, and [`GoalError::DuplicatePiece`] if a piece is listed twice.
    pub fn validate(&self) -> Result<(), GoalError> {
        self.validate_list(PieceKind::Edge, &self.required_edges)?;
        self.validate_list(PieceKind::Corner, &self.required_corners)
    }

    fn validate_list(&self, kind: PieceKind, reqs: &[PieceRequirement]) -> Result<(), GoalError> {
        let mut seen = [false; 12];
        for (index, req) in reqs.iter().enumerate() {
            if !req.is_valid_for(kind) {
                return Err(GoalError::InvalidRequirement {
                    goal: self.name.clone(),
                    kind,
                    index,
                    id: req.id,
                    pos: req.pos,
                    ori: req.ori,
                });
            }
            let slot = &mut seen[usize::from(req.id)];
            if *slot {
                return Err(GoalError::DuplicatePiece {
                    goal: self.name.clone(),
                    kind,
                    id: req.id,
                });
            }
            *slot = true;
        }
        Ok(())
    }

    /// Similarity of `state` to this goal, in `[0, 1]`.
    ///
    /// Each required piece earns 1 if it is in its target slot with the target
    /// orientation, 0.5 if it is in the slot with another orientation, and 0
    /// otherwise. The score is the mean over required pieces; a goal with no
    /// requirements scores 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use cubelet_core::CubeState;
    /// use cubelet_goals::{Goal, PieceRequirement};
    ///
    /// let mut goal = Goal::new("UF edge");
    /// goal.required_edges.push(PieceRequirement::home(1));
    ///
    /// let mut state = CubeState::SOLVED;
    /// assert_eq!(goal.score(&state), 1.0);
    /// state.apply("F".parse()?);
    /// assert_eq!(goal.score(&state), 0.0);
    /// assert_eq!(Goal::new("anything").score(&state), 1.0);
    /// # Ok::<(), cubelet_core::MoveError>(())
    /// ```
    #[must_use]
    pub fn score(&self, state: &CubeState) -> f64 {
        let total = self.requirement_count();
        if total == 0 {
            return 1.0;
        }
        let edges: u32 = self
            .required_edges
            .iter()
            .map(|req| req.half_points(state.edge_pos(), state.edge_ori()))
            .sum();
        let corners: u32 = self
            .required_corners
            .iter()
            .map(|req| req.half_points(state.corner_pos(), state.corner_ori()))
            .sum();
        #[expect(clippy::cast_precision_loss)]
        let max = (2 * total) as f64;
        f64::from(edges + corners) / max
    }

    /// The picture joined with newlines, or `None` if the goal has none.
    #[must_use]
    pub fn visual_text(&self) -> Option<String> {
        (!self.visual.is_empty()).then(|| self.visual.join("\n"))
    }
}
