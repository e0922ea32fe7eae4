use std::fmt;
use std::str::FromStr;

/// Identity tag of a search strategy.
///
/// The tag selects the result adapter in [`normalize`](crate::normalize) and
/// names the strategy in benchmark records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StrategyKind {
    #[cfg_attr(feature = "serde", serde(rename = "bfs"))]
    BreadthFirst,
    #[cfg_attr(feature = "serde", serde(rename = "dfs"))]
    DepthFirst,
    #[cfg_attr(feature = "serde", serde(rename = "astar"))]
    AStar,
    #[cfg_attr(feature = "serde", serde(rename = "greedy"))]
    GreedyBestFirst,
    #[cfg_attr(feature = "serde", serde(rename = "annealing"))]
    SimulatedAnnealing,
}

impl StrategyKind {
    /// Every strategy, in benchmark order.
    pub const ALL: [StrategyKind; 5] = [
        StrategyKind::BreadthFirst,
        StrategyKind::DepthFirst,
        StrategyKind::AStar,
        StrategyKind::GreedyBestFirst,
        StrategyKind::SimulatedAnnealing,
    ];

    /// Short display name used in reports.
    pub const fn name(self) -> &'static str {
        match self {
            StrategyKind::BreadthFirst => "BFS",
            StrategyKind::DepthFirst => "DFS",
            StrategyKind::AStar => "A*",
            StrategyKind::GreedyBestFirst => "Greedy",
            StrategyKind::SimulatedAnnealing => "Simulated Annealing",
        }
    }

    /// Identifier used on the command line and in config files.
    pub const fn slug(self) -> &'static str {
        match self {
            StrategyKind::BreadthFirst => "bfs",
            StrategyKind::DepthFirst => "dfs",
            StrategyKind::AStar => "astar",
            StrategyKind::GreedyBestFirst => "greedy",
            StrategyKind::SimulatedAnnealing => "annealing",
        }
    }

    /// Whether the strategy always returns a shortest path when one exists.
    pub const fn is_optimal(self) -> bool {
        matches!(self, StrategyKind::BreadthFirst | StrategyKind::AStar)
    }

    /// Whether the strategy always finds a path when one exists.
    pub const fn is_complete(self) -> bool {
        matches!(
            self,
            StrategyKind::BreadthFirst | StrategyKind::DepthFirst | StrategyKind::AStar
        )
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a strategy name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown strategy \u{201c}{0}\u{201d} (expected one of: bfs, dfs, astar, greedy, annealing)")]
pub struct UnknownStrategy(pub String);

impl FromStr for StrategyKind {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        StrategyKind::ALL
            .into_iter()
            .find(|k| k.slug().eq_ignore_ascii_case(wanted) || k.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownStrategy(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_slugs_and_names() {
        assert_eq!("bfs".parse::<StrategyKind>(), Ok(StrategyKind::BreadthFirst));
        assert_eq!("A*".parse::<StrategyKind>(), Ok(StrategyKind::AStar));
        assert_eq!("AStar".parse::<StrategyKind>(), Ok(StrategyKind::AStar));
        assert_eq!(
            "simulated annealing".parse::<StrategyKind>(),
            Ok(StrategyKind::SimulatedAnnealing)
        );
        assert_eq!(" Greedy ".parse::<StrategyKind>(), Ok(StrategyKind::GreedyBestFirst));
        assert!("dijkstra".parse::<StrategyKind>().is_err());
    }

    #[test]
    fn slugs_are_unique() {
        for (i, a) in StrategyKind::ALL.iter().enumerate() {
            for b in &StrategyKind::ALL[i + 1..] {
                assert_ne!(a.slug(), b.slug());
                assert_ne!(a.name(), b.name());
            }
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn serializes_as_slug() {
        let json = serde_json::to_string(&StrategyKind::ALL).unwrap();
        assert_eq!(json, r#"["bfs","dfs","astar","greedy","annealing"]"#);
        let back: StrategyKind = serde_json::from_str("\"greedy\"").unwrap();
        assert_eq!(back, StrategyKind::GreedyBestFirst);
    }
}
