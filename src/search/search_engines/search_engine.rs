use crate::search::{
    AStar, AStarMultiPath, Dijkstra, DijkstraMultiPath, GraphSpec, SearchError, SearchReport,
};
use serde::Serialize;
use std::{hash::Hash, time::Instant};
use strum_macros::{Display, EnumIter};
use tracing::info;

#[derive(
    clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter,
)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SearchEngineName {
    #[value(name = "astar")]
    #[serde(rename = "astar")]
    #[strum(to_string = "astar")]
    AStar,
    #[value(name = "astar-multi-path")]
    #[serde(rename = "astar-multi-path")]
    #[strum(to_string = "astar-multi-path")]
    AStarMultiPath,
    Dijkstra,
    DijkstraMultiPath,
}

impl SearchEngineName {
    /// Whether the engine keeps every shortest path rather than just one.
    pub fn is_multi_path(&self) -> bool {
        matches!(
            self,
            SearchEngineName::AStarMultiPath | SearchEngineName::DijkstraMultiPath
        )
    }

    /// Whether the engine needs goals. Dijkstra engines search everything
    /// reachable and only use `goals` to pick what to report.
    pub fn requires_goals(&self) -> bool {
        matches!(
            self,
            SearchEngineName::AStar | SearchEngineName::AStarMultiPath
        )
    }

    /// Run this engine on `graph` and summarise the result.
    pub fn search<T, G>(
        &self,
        graph: &G,
        start: T,
        goals: &[T],
    ) -> Result<SearchReport<T>, SearchError>
    where
        T: Clone + Eq + Hash + Ord,
        G: GraphSpec<T> + ?Sized,
    {
        let search_start_time = Instant::now();
        let report = match self {
            SearchEngineName::AStar => {
                let result = AStar::new(graph).search(start, goals.iter().cloned())?;
                SearchReport::from_astar(*self, &result, search_start_time.elapsed())
            }
            SearchEngineName::AStarMultiPath => {
                let result = AStarMultiPath::new(graph).search(start, goals.iter().cloned())?;
                SearchReport::from_astar_multi_path(*self, &result, search_start_time.elapsed())
            }
            SearchEngineName::Dijkstra => {
                let result = Dijkstra::new(graph).search(start);
                SearchReport::from_dijkstra(*self, &result, goals, search_start_time.elapsed())
            }
            SearchEngineName::DijkstraMultiPath => {
                let result = DijkstraMultiPath::new(graph).search(start);
                SearchReport::from_dijkstra_multi_path(
                    *self,
                    &result,
                    goals,
                    search_start_time.elapsed(),
                )
            }
        };
        info!(
            engine = %self,
            nodes_examined = report.nodes_examined,
            reached_goals = report.reached_goals.len(),
            "search finished"
        );
        Ok(report)
    }
}
