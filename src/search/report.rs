//! A summary of a finished search that can be printed or serialised,
//! independent of which engine produced it.

use crate::search::{
    AStarMultiPathResult, AStarSearchResult, DijkstraMultiPathResult, DijkstraSearchResult,
    SearchEngineName,
};
use itertools::Itertools;
use serde::Serialize;
use std::{
    collections::HashSet,
    fmt::{self, Display},
    hash::Hash,
    time::Duration,
};

/// The shortest paths found to one target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetReport<T> {
    pub target: T,
    /// `None` when the target is unreachable.
    pub cost: Option<f64>,
    /// Sorted, so that reports are reproducible.
    pub paths: Vec<Vec<T>>,
}

impl<T: Ord> TargetReport<T> {
    fn new(target: T, cost: f64, paths: impl IntoIterator<Item = Vec<T>>) -> Self {
        Self {
            target,
            cost: cost.is_finite().then_some(cost),
            paths: paths.into_iter().sorted().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchReport<T> {
    pub engine: SearchEngineName,
    pub start: T,
    pub nodes_examined: usize,
    /// Goals at the shortest distance from the start, sorted.
    pub reached_goals: Vec<T>,
    pub targets: Vec<TargetReport<T>>,
    #[serde(serialize_with = "serialize_duration")]
    pub search_time: Duration,
}

fn serialize_duration<S: serde::Serializer>(
    duration: &Duration,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&humantime::format_duration(*duration))
}

impl<T> SearchReport<T>
where
    T: Clone + Eq + Hash + Ord,
{
    pub(crate) fn from_astar(
        engine: SearchEngineName,
        result: &impl AStarSearchResult<T>,
        search_time: Duration,
    ) -> Self {
        let targets = match (result.reached_goal(), result.shortest_path()) {
            (Some(goal), Some(path)) => vec![TargetReport::new(
                goal.clone(),
                result.shortest_path_cost(),
                [path],
            )],
            _ => Vec::new(),
        };
        Self {
            engine,
            start: result.start().clone(),
            nodes_examined: result.num_nodes_examined(),
            reached_goals: result.reached_goal().cloned().into_iter().collect(),
            targets,
            search_time,
        }
    }

    pub(crate) fn from_astar_multi_path(
        engine: SearchEngineName,
        result: &impl AStarMultiPathResult<T>,
        search_time: Duration,
    ) -> Self {
        let reached_goals = result
            .reached_goals()
            .unwrap_or_default()
            .into_iter()
            .sorted()
            .collect_vec();
        let paths = result.shortest_paths().unwrap_or_default();
        let targets = reached_goals
            .iter()
            .map(|goal| {
                let paths_to_goal = paths
                    .iter()
                    .filter(|path| path.last() == Some(goal))
                    .cloned();
                TargetReport::new(goal.clone(), result.shortest_path_cost(), paths_to_goal)
            })
            .collect();
        Self {
            engine,
            start: result.start().clone(),
            nodes_examined: result.num_nodes_examined(),
            reached_goals,
            targets,
            search_time,
        }
    }

    /// Report on `targets`, or on every reachable node when `targets` is
    /// empty.
    pub(crate) fn from_dijkstra(
        engine: SearchEngineName,
        result: &impl DijkstraSearchResult<T>,
        targets: &[T],
        search_time: Duration,
    ) -> Self {
        Self::dijkstra_report(engine, result, targets, search_time, |target| {
            result.shortest_path(target).into_iter().collect()
        })
    }

    pub(crate) fn from_dijkstra_multi_path(
        engine: SearchEngineName,
        result: &impl DijkstraMultiPathResult<T>,
        targets: &[T],
        search_time: Duration,
    ) -> Self {
        Self::dijkstra_report(engine, result, targets, search_time, |target| {
            result.shortest_paths(target).unwrap_or_default()
        })
    }

    fn dijkstra_report(
        engine: SearchEngineName,
        result: &impl DijkstraSearchResult<T>,
        targets: &[T],
        search_time: Duration,
        paths_to: impl Fn(&T) -> HashSet<Vec<T>>,
    ) -> Self {
        let targets = if targets.is_empty() {
            result.reachable_nodes().into_iter().sorted().collect_vec()
        } else {
            targets.iter().cloned().sorted().dedup().collect_vec()
        };
        let reports = targets
            .iter()
            .map(|target| {
                TargetReport::new(
                    target.clone(),
                    result.shortest_path_cost(target),
                    paths_to(target),
                )
            })
            .collect_vec();
        let reached_goals = reports
            .iter()
            .filter(|report| report.cost.is_some())
            .map(|report| report.target.clone())
            .collect();
        Self {
            engine,
            start: result.start().clone(),
            nodes_examined: result.num_nodes_examined(),
            reached_goals,
            targets: reports,
            search_time,
        }
    }
}

impl<T: Serialize> SearchReport<T> {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl<T: Display> Display for SearchReport<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "engine: {}", self.engine)?;
        writeln!(f, "start: {}", self.start)?;
        writeln!(f, "nodes examined: {}", self.nodes_examined)?;
        writeln!(
            f,
            "search time: {}",
            humantime::format_duration(self.search_time)
        )?;
        if self.reached_goals.is_empty() {
            writeln!(f, "reached goals: none")?;
        } else {
            writeln!(f, "reached goals: {}", self.reached_goals.iter().join(", "))?;
        }
        for target in &self.targets {
            match target.cost {
                Some(cost) => writeln!(f, "{}: cost={}", target.target, cost)?,
                None => writeln!(f, "{}: unreachable", target.target)?,
            }
            for path in &target.paths {
                writeln!(f, "    {}", path.iter().join(" -> "))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        graphs::{loc, Grid, GridGraph},
        test_utils::*,
    };
    use serde_json::Value;

    #[test]
    fn astar_multi_path_report_lists_every_path() {
        let grid = Grid::from_rows(SEARCH_GRID).unwrap();
        let graph = GridGraph::new(&grid);
        let report = SearchEngineName::AStarMultiPath
            .search(&graph, loc(1, 3), &grid.locations_where(|c| c == 'X'))
            .unwrap();

        assert_eq!(report.engine, SearchEngineName::AStarMultiPath);
        assert_eq!(report.reached_goals, vec![loc(2, 6)]);
        assert_eq!(report.targets.len(), 1);
        assert_eq!(report.targets[0].cost, Some(4.));
        assert_eq!(report.targets[0].paths.len(), 3);
        assert!(report.targets[0]
            .paths
            .windows(2)
            .all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn astar_report_has_one_path() {
        let grid = Grid::from_rows(SEARCH_GRID).unwrap();
        let graph = GridGraph::new(&grid);
        let report = SearchEngineName::AStar
            .search(&graph, loc(1, 3), &[loc(1, 1)])
            .unwrap();

        assert_eq!(report.reached_goals, vec![loc(1, 1)]);
        assert_eq!(report.targets[0].cost, Some(5.));
        assert_eq!(report.targets[0].paths.len(), 1);
    }

    #[test]
    fn astar_report_without_path_is_empty() {
        let grid = Grid::from_rows(WALLED_OFF_GRID).unwrap();
        let graph = GridGraph::new(&grid);
        let report = SearchEngineName::AStarMultiPath
            .search(&graph, loc(1, 3), &[loc(1, 1)])
            .unwrap();

        assert!(report.reached_goals.is_empty());
        assert!(report.targets.is_empty());
        assert!(report.to_string().contains("reached goals: none"));
    }

    #[test]
    fn dijkstra_report_marks_unreachable_targets() {
        let grid = Grid::from_rows(SEARCH_GRID).unwrap();
        let graph = GridGraph::new(&grid);
        let report = SearchEngineName::DijkstraMultiPath
            .search(&graph, loc(1, 3), &[loc(0, 4), loc(0, 0), loc(0, 4)])
            .unwrap();

        assert_eq!(report.reached_goals, vec![loc(0, 4)]);
        assert_eq!(report.targets.len(), 2);
        assert_eq!(report.targets[0].target, loc(0, 0));
        assert_eq!(report.targets[0].cost, None);
        assert!(report.targets[0].paths.is_empty());
        assert_eq!(report.targets[1].cost, Some(2.));
        assert_eq!(
            report.targets[1].paths,
            vec![
                vec![loc(1, 3), loc(0, 3), loc(0, 4)],
                vec![loc(1, 3), loc(1, 4), loc(0, 4)],
            ]
        );
        assert!(report.to_string().contains("(0, 0): unreachable"));
    }

    #[test]
    fn dijkstra_report_without_targets_covers_reachable_nodes() {
        let grid = Grid::from_rows(SEARCH_GRID).unwrap();
        let graph = GridGraph::new(&grid);
        let report = SearchEngineName::Dijkstra
            .search(&graph, loc(1, 3), &[])
            .unwrap();

        let open = grid.locations_where(|c| c != '#').len();
        assert_eq!(report.targets.len(), open - 1);
        assert!(report.targets.iter().all(|target| target.paths.len() == 1));
    }

    #[test]
    fn json_report_has_readable_search_time() {
        let grid = Grid::from_rows(SEARCH_GRID).unwrap();
        let graph = GridGraph::new(&grid);
        let report = SearchEngineName::AStar
            .search(&graph, loc(1, 3), &[loc(2, 6)])
            .unwrap();

        let json: Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["engine"], "astar");
        assert_eq!(json["start"]["x"], 1);
        assert_eq!(json["targets"][0]["cost"], 4.);
        assert_eq!(json["targets"][0]["paths"][0].as_array().unwrap().len(), 5);
        assert!(json["search_time"].is_string());
    }
}
