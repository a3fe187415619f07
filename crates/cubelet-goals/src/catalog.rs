//! Name-keyed goal collections.

use std::{
    collections::{BTreeMap, btree_map::Entry},
    fs, io,
    path::Path,
};

use cubelet_core::CubeState;

use crate::{Goal, GoalError, builtin};

/// Short goal names used by training environments, and the goal each maps to.
const ALIASES: [(&str, &str); 14] = [
    ("cross", builtin::WHITE_CROSS),
    ("cross_1", builtin::WHITE_CROSS),
    ("cross_2", builtin::WHITE_CROSS),
    ("cross_3", builtin::WHITE_CROSS),
    ("cross_white", builtin::WHITE_CROSS),
    ("cross_yellow", builtin::YELLOW_CROSS),
    ("f2l_fr", "White F2L Pair 1 (FR)"),
    ("f2l_fl", "White F2L Pair 2 (FL)"),
    ("f2l_bl", "White F2L Pair 3 (BL)"),
    ("f2l_br", "White F2L Pair 4 (BR)"),
    ("y_f2l_fr", "Yellow F2L Pair 1 (FR)"),
    ("y_f2l_fl", "Yellow F2L Pair 2 (FL)"),
    ("y_f2l_bl", "Yellow F2L Pair 3 (BL)"),
    ("y_f2l_br", "Yellow F2L Pair 4 (BR)"),
];

/// A read-only collection of goals keyed by name.
///
/// A catalog is assembled once (built-ins, JSON files, or both) and then only
/// queried; shared references can be used from any number of threads.
///
/// # Examples
///
/// ```
/// use cubelet_core::Cube;
/// use cubelet_goals::GoalCatalog;
///
/// let catalog = GoalCatalog::builtin();
/// let mut cube = Cube::new();
/// cube.apply_algorithm("R U R' U'")?;
///
/// let name = GoalCatalog::resolve_alias("cross_yellow").unwrap();
/// assert_eq!(catalog.score(&cube.state(), name)?, 1.0);
/// assert!(catalog.score(&cube.state(), "No Such Goal").is_err());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalCatalog {
    goals: BTreeMap<String, Goal>,
}

impl GoalCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog holding the built-in goals.
    #[must_use]
    pub fn builtin() -> Self {
        let goals = builtin::goals()
            .into_iter()
            .map(|goal| (goal.name.clone(), goal))
            .collect();
        Self { goals }
    }

    /// Loads every `*.json` file in `dir`, one goal per file.
    ///
    /// A missing directory yields an empty catalog.
    ///
    /// # Errors
    ///
    /// See [`GoalCatalog::extend_from_dir`].
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, GoalError> {
        let mut catalog = Self::new();
        catalog.extend_from_dir(dir)?;
        Ok(catalog)
    }

    /// Adds every `*.json` goal file in `dir`, returning how many were added.
    ///
    /// Files are read in path order. Either every file is added or, on error,
    /// none are. A missing directory adds nothing.
    ///
    /// # Errors
    ///
    /// Returns [`GoalError::Io`] if the directory or a file cannot be read,
    /// [`GoalError::Json`] if a file is not goal JSON, a validation error for an
    /// invalid goal, or [`GoalError::DuplicateName`] if a name is already taken.
    pub fn extend_from_dir(&mut self, dir: impl AsRef<Path>) -> Result<usize, GoalError> {
        let dir = dir.as_ref();
        let io_error = |source| GoalError::Io {
            path: dir.to_owned(),
            source,
        };

        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::warn!("goal directory {} does not exist", dir.display());
                return Ok(0);
            }
            Err(err) => return Err(io_error(err)),
        };
        let mut paths = entries
            .map(|entry| entry.map(|entry| entry.path()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(io_error)?;
        paths.retain(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"));
        paths.sort();

        let mut staged = self.clone();
        for path in &paths {
            let goal = read_goal_file(path)?;
            log::debug!("loaded goal {:?} from {}", goal.name, path.display());
            staged.insert(goal)?;
        }
        *self = staged;

        log::info!("loaded {} goal(s) from {}", paths.len(), dir.display());
        Ok(paths.len())
    }

    /// Validates and adds one goal.
    ///
    /// # Errors
    ///
    /// Returns a validation error (see [`Goal::validate`]) or
    /// [`GoalError::DuplicateName`].
    pub fn insert(&mut self, goal: Goal) -> Result<(), GoalError> {
        goal.validate()?;
        match self.goals.entry(goal.name.clone()) {
            Entry::Occupied(entry) => Err(GoalError::DuplicateName {
                name: entry.key().clone(),
            }),
            Entry::Vacant(entry) => {
                entry.insert(goal);
                Ok(())
            }
        }
    }

    /// Returns the number of goals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.goals.len()
    }

    /// Returns `true` if the catalog holds no goals.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    /// Returns `true` if a goal named `name` exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.goals.contains_key(name)
    }

    /// Looks up a goal by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Goal> {
        self.goals.get(name)
    }

    /// Looks up a goal by name, falling back to [`GoalCatalog::resolve_alias`].
    #[must_use]
    pub fn resolve(&self, name_or_alias: &str) -> Option<&Goal> {
        self.get(name_or_alias).or_else(|| {
            Self::resolve_alias(name_or_alias).and_then(|name| self.get(name))
        })
    }

    /// Iterates over the goals in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Goal> {
        self.goals.values()
    }

    /// Iterates over the goal names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.goals.keys().map(String::as_str)
    }

    /// Scores `state` against the goal named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`GoalError::UnknownGoal`] if no goal has that name.
    pub fn score(&self, state: &CubeState, name: &str) -> Result<f64, GoalError> {
        self.get(name)
            .map(|goal| goal.score(state))
            .ok_or_else(|| GoalError::UnknownGoal {
                name: name.to_owned(),
            })
    }

    /// The picture of the goal named `name`, joined with newlines.
    #[must_use]
    pub fn visual(&self, name: &str) -> Option<String> {
        self.get(name).and_then(Goal::visual_text)
    }

    /// Maps a short environment goal name (`"cross"`, `"f2l_fr"`, ...) to a
    /// built-in goal name.
    ///
    /// # Examples
    ///
    /// ```
    /// use cubelet_goals::GoalCatalog;
    ///
    /// assert_eq!(GoalCatalog::resolve_alias("cross"), Some("White Cross"));
    /// assert_eq!(GoalCatalog::resolve_alias("y_f2l_bl"), Some("Yellow F2L Pair 3 (BL)"));
    /// assert_eq!(GoalCatalog::resolve_alias("solve"), None);
    /// ```
    #[must_use]
    pub fn resolve_alias(alias: &str) -> Option<&'static str> {
        ALIASES
            .iter()
            .find(|(short, _)| *short == alias)
            .map(|&(_, name)| name)
    }
}

impl<'a> IntoIterator for &'a GoalCatalog {
    type Item = &'a Goal;
    type IntoIter = std::collections::btree_map::Values<'a, String, Goal>;

    fn into_iter(self) -> Self::IntoIter {
        self.goals.values()
    }
}

fn read_goal_file(path: &Path) -> Result<Goal, GoalError> {
    let text = fs::read_to_string(path).map_err(|source| GoalError::Io {
        path: path.to_owned(),
        source,
    })?;
    let goal: Goal = serde_json::from_str(&text).map_err(|source| GoalError::Json {
        origin: path.display().to_string(),
        source,
    })?;
    goal.validate()?;
    Ok(goal)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use proptest::prelude::*;

    use super::*;
    use crate::PieceRequirement;

    fn state_after(moves: &str) -> CubeState {
        let mut state = CubeState::SOLVED;
        for name in moves.split_whitespace() {
            state.apply(name.parse().unwrap());
        }
        state
    }

    const UF_GOAL: &str = r#"{
        "name": "UF Edge",
        "required_edges": [{ "id": 1, "pos": 1, "ori": 0 }],
        "visual": ["  .", "  W"]
    }"#;

    const URF_GOAL: &str = r#"{
        "name": "URF Corner",
        "required_corners": [{ "id": 0, "pos": 0, "ori": 0 }]
    }"#;

    #[test]
    fn test_builtin_catalog() {
        let catalog = GoalCatalog::builtin();
        assert_eq!(catalog.len(), 11);
        for goal in &catalog {
            assert_eq!(catalog.score(&CubeState::SOLVED, &goal.name).unwrap(), 1.0);
        }
        for (alias, name) in ALIASES {
            assert!(catalog.contains(name), "{alias} -> {name}");
        }
    }

    #[test]
    fn test_builtin_scores_after_moves() {
        let catalog = GoalCatalog::builtin();

        let u = state_after("U");
        assert_eq!(catalog.score(&u, "White Cross").unwrap(), 0.0);
        assert_eq!(catalog.score(&u, "Yellow Cross").unwrap(), 1.0);
        assert_eq!(catalog.score(&u, "Yellow F2L Pair 2 (FL)").unwrap(), 1.0);

        // R moves UR, FR, BR and DR together with their corners.
        let r = state_after("R");
        assert_eq!(catalog.score(&r, "White Cross").unwrap(), 0.75);
        assert_eq!(catalog.score(&r, "White F2L Pair 1 (FR)").unwrap(), 0.0);
        assert_eq!(catalog.score(&r, "White F2L Pair 2 (FL)").unwrap(), 1.0);
        assert_eq!(catalog.score(&r, "Solved").unwrap(), 0.6);
    }

    #[test]
    fn test_unknown_goal() {
        let catalog = GoalCatalog::builtin();
        let err = catalog.score(&CubeState::SOLVED, "cross").unwrap_err();
        assert!(matches!(err, GoalError::UnknownGoal { ref name } if name == "cross"));
        assert_eq!(err.to_string(), "unknown goal \"cross\"");
        assert_eq!(catalog.visual("cross"), None);
    }

    #[test]
    fn test_resolve() {
        let catalog = GoalCatalog::builtin();
        assert_eq!(catalog.resolve("f2l_br").unwrap().name, "White F2L Pair 4 (BR)");
        assert_eq!(catalog.resolve("Solved").unwrap().name, "Solved");
        assert!(catalog.resolve("cross_4").is_none());
        assert!(GoalCatalog::new().resolve("cross").is_none());
    }

    #[test]
    fn test_insert_rejects_duplicates_and_invalid_goals() {
        let mut catalog = GoalCatalog::builtin();
        let err = catalog.insert(Goal::new("Solved")).unwrap_err();
        assert!(matches!(err, GoalError::DuplicateName { ref name } if name == "Solved"));

        let mut bad = Goal::new("Bad");
        bad.required_edges.push(PieceRequirement { id: 12, pos: 0, ori: 0 });
        assert!(catalog.insert(bad).is_err());
        assert!(!catalog.contains("Bad"));

        catalog.insert(Goal::new("Nothing")).unwrap();
        assert_eq!(catalog.score(&state_after("F"), "Nothing").unwrap(), 1.0);
    }

    #[test]
    fn test_load_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("uf.json"), UF_GOAL).unwrap();
        fs::write(dir.path().join("urf.json"), URF_GOAL).unwrap();
        fs::write(dir.path().join("notes.txt"), "not a goal").unwrap();

        let catalog = GoalCatalog::load_dir(dir.path()).unwrap();
        let names: Vec<_> = catalog.names().collect();
        assert_eq!(names, ["UF Edge", "URF Corner"]);
        assert_eq!(catalog.visual("UF Edge").as_deref(), Some("  .\n  W"));
        assert_eq!(catalog.visual("URF Corner"), None);
        assert_eq!(catalog.score(&state_after("F"), "UF Edge").unwrap(), 0.0);
        assert_eq!(catalog.score(&state_after("D"), "URF Corner").unwrap(), 1.0);
    }

    #[test]
    fn test_load_missing_dir_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = GoalCatalog::load_dir(dir.path().join("missing")).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_extend_from_dir_is_all_or_nothing() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.json"), UF_GOAL).unwrap();
        fs::write(
            dir.path().join("b.json"),
            r#"{ "name": "Solved", "required_edges": [] }"#,
        )
        .unwrap();

        let mut catalog = GoalCatalog::builtin();
        let err = catalog.extend_from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, GoalError::DuplicateName { .. }));
        assert_eq!(catalog, GoalCatalog::builtin());

        fs::remove_file(dir.path().join("b.json")).unwrap();
        assert_eq!(catalog.extend_from_dir(dir.path()).unwrap(), 1);
        assert!(catalog.contains("UF Edge"));
        assert_eq!(catalog.len(), 12);
    }

    #[test]
    fn test_load_dir_reports_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("broken.json"), "{ \"name\": ").unwrap();
        let err = GoalCatalog::load_dir(dir.path()).unwrap_err();
        let GoalError::Json { origin, .. } = err else {
            panic!("expected a JSON error, got {err:?}");
        };
        assert!(origin.ends_with("broken.json"));
    }

    #[test]
    fn test_catalog_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GoalCatalog>();
    }

    proptest! {
        #[test]
        fn prop_scores_are_in_unit_interval(indices in prop::collection::vec(0..27_usize, 0..40)) {
            let catalog = GoalCatalog::builtin();
            let mut state = CubeState::SOLVED;
            for i in indices {
                state.apply(cubelet_core::Move::ALL[i]);
            }
            for goal in &catalog {
                let score = goal.score(&state);
                prop_assert!((0.0..=1.0).contains(&score), "{}: {score}", goal.name);
            }
        }
    }
}
