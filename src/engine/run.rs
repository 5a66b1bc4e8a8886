//! The run driver.
//!
//! A [`Run`] binds one algorithm sequence to one graph and offers the three driving
//! granularities: [`step`](Run::step), [`skip_to_checkpoint`](Run::skip_to_checkpoint) and
//! [`run_to_completion`](Run::run_to_completion). It holds the graph by exclusive borrow for its
//! whole lifetime, so no second run (and no topology change) can interleave with it. Dropping
//! the run abandons it; the next [`Run::start`] resets the decorations.

use crate::{
    engine::{Algorithm, EventLog, StepContext, StepSequence, StopLevel},
    graph::AnnotatedGraph,
    Error, Result,
};

/// One in-progress execution of an algorithm over a graph.
///
/// # Examples
///
/// ```rust
/// use graphstep::prelude::*;
///
/// let mut graph = AnnotatedGraph::new();
/// let a = graph.add_node("A")?;
/// let b = graph.add_node("B")?;
/// graph.add_edge(a, b, None, false)?;
///
/// let mut bfs = BreadthFirstSearch::new();
/// bfs.set_argument(BreadthFirstSearch::START, ArgumentValue::Node(a))?;
///
/// let mut run = Run::start(&mut graph, &bfs)?;
/// assert_eq!(run.current_event(), "START");
/// run.skip_to_checkpoint();
/// run.run_to_completion();
/// assert!(run.is_finished());
/// assert_eq!(run.current_event(), "END");
/// assert_eq!(run.graph()[b].decoration.color, Color::Done);
/// # Ok::<(), graphstep::Error>(())
/// ```
pub struct Run<'g> {
    graph: &'g mut AnnotatedGraph,
    events: EventLog,
    sequence: Box<dyn StepSequence>,
    algorithm: &'static str,
    last_level: StopLevel,
    steps: usize,
    finished: bool,
}

impl<'g> Run<'g> {
    /// Validates the algorithm's arguments, creates the sequence and resets the graph's
    /// decorations.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArguments`] if the arguments do not validate, or whatever
    /// [`Algorithm::execute`] fails with. The graph is left untouched in both cases.
    pub fn start<A>(graph: &'g mut AnnotatedGraph, algorithm: &A) -> Result<Self>
    where
        A: Algorithm + ?Sized,
    {
        if !algorithm.validate_arguments(graph) {
            return Err(Error::InvalidArguments(algorithm.name().to_string()));
        }

        let sequence = algorithm.execute(graph)?;
        graph.reset_decorations();
        log::debug!(
            "starting {} on {} nodes, {} edges",
            algorithm.name(),
            graph.node_count(),
            graph.edge_count()
        );

        Ok(Run {
            graph,
            events: EventLog::new(),
            sequence,
            algorithm: algorithm.name(),
            last_level: StopLevel::Start,
            steps: 0,
            finished: false,
        })
    }

    /// Advances by one suspension point of any level.
    ///
    /// Returns `None` once the algorithm has finished; the first such call appends `"END"` to
    /// the event log, later calls do nothing.
    pub fn step(&mut self) -> Option<StopLevel> {
        if self.finished {
            return None;
        }

        let mut cx = StepContext::new(&mut *self.graph, &mut self.events);
        if let Some(level) = self.sequence.advance(&mut cx) {
            self.last_level = level;
            self.steps += 1;
            Some(level)
        } else {
            self.finished = true;
            self.events.push(EventLog::END);
            log::debug!("{} finished after {} steps", self.algorithm, self.steps);
            None
        }
    }

    /// Advances until an [`StopLevel::Always`] checkpoint or the end of the run.
    ///
    /// Returns `Some(StopLevel::Always)` when stopped at a checkpoint, `None` when finished.
    pub fn skip_to_checkpoint(&mut self) -> Option<StopLevel> {
        loop {
            match self.step()? {
                StopLevel::Always => return Some(StopLevel::Always),
                StopLevel::Start | StopLevel::Skippable => {}
            }
        }
    }

    /// Advances until the run is finished.
    ///
    /// Returns the number of suspension points passed by this call.
    pub fn run_to_completion(&mut self) -> usize {
        let mut passed = 0;
        while self.step().is_some() {
            passed += 1;
        }
        passed
    }

    /// Returns the most recent event.
    #[must_use]
    pub fn current_event(&self) -> &str {
        self.events.current()
    }

    /// Returns the event log of this run.
    #[must_use]
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// Returns the decorated graph.
    #[must_use]
    pub fn graph(&self) -> &AnnotatedGraph {
        &*self.graph
    }

    /// Returns `true` once the sequence is exhausted.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Returns the level of the last suspension point, [`StopLevel::Start`] before the first.
    #[must_use]
    pub fn last_level(&self) -> StopLevel {
        self.last_level
    }

    /// Returns the number of suspension points passed so far.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns the short name of the running algorithm.
    #[must_use]
    pub fn algorithm(&self) -> &'static str {
        self.algorithm
    }

    /// Ends the run and hands back its event log.
    #[must_use]
    pub fn into_events(self) -> EventLog {
        self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        algorithms::BreadthFirstSearch,
        engine::ArgumentValue,
        graph::{Color, NodeId},
    };

    fn path_graph() -> (AnnotatedGraph, [NodeId; 3]) {
        let mut graph = AnnotatedGraph::new();
        let a = graph.add_node("A").unwrap();
        let b = graph.add_node("B").unwrap();
        let c = graph.add_node("C").unwrap();
        graph.add_edge(a, b, None, false).unwrap();
        graph.add_edge(b, c, None, false).unwrap();
        (graph, [a, b, c])
    }

    #[test]
    fn test_invalid_arguments_leave_graph_untouched() {
        let (mut graph, [a, _, _]) = path_graph();
        graph[a].decoration.color = Color::AltB;
        let bfs = BreadthFirstSearch::new();
        assert!(matches!(
            Run::start(&mut graph, &bfs),
            Err(Error::InvalidArguments(name)) if name == "BFS"
        ));
        assert_eq!(graph[a].decoration.color, Color::AltB);
    }

    /// Validates but cannot build its sequence.
    struct Unbuildable {
        arguments: [crate::engine::Argument; 0],
    }

    impl Algorithm for Unbuildable {
        fn name(&self) -> &'static str {
            "Unbuildable"
        }

        fn full_name(&self) -> &'static str {
            "Unbuildable"
        }

        fn short_description(&self) -> &'static str {
            "Fails in execute"
        }

        fn arguments(&self) -> &[crate::engine::Argument] {
            &self.arguments
        }

        fn arguments_mut(&mut self) -> &mut [crate::engine::Argument] {
            &mut self.arguments
        }

        fn validate_arguments(&self, _graph: &AnnotatedGraph) -> bool {
            true
        }

        fn execute(&self, _graph: &AnnotatedGraph) -> Result<Box<dyn StepSequence>> {
            Err(graph_error!("no sequence"))
        }
    }

    #[test]
    fn test_failed_execute_leaves_graph_untouched() {
        let (mut graph, [a, _, _]) = path_graph();
        graph[a].decoration.color = Color::AltB;
        assert!(matches!(
            Run::start(&mut graph, &Unbuildable { arguments: [] }),
            Err(Error::GraphError(_))
        ));
        assert_eq!(graph[a].decoration.color, Color::AltB);
    }

    #[test]
    fn test_start_resets_decorations() {
        let (mut graph, [a, b, _]) = path_graph();
        graph[b].decoration.color = Color::AltB;
        let mut bfs = BreadthFirstSearch::new();
        bfs.set_argument(BreadthFirstSearch::START, ArgumentValue::Node(a))
            .unwrap();
        let run = Run::start(&mut graph, &bfs).unwrap();
        assert_eq!(run.graph()[b].decoration.color, Color::Unvisited);
        assert_eq!(run.last_level(), StopLevel::Start);
        assert_eq!(run.algorithm(), "BFS");
    }

    #[test]
    fn test_end_is_appended_once() {
        let (mut graph, [a, _, _]) = path_graph();
        let mut bfs = BreadthFirstSearch::new();
        bfs.set_argument(BreadthFirstSearch::START, ArgumentValue::Node(a))
            .unwrap();
        let mut run = Run::start(&mut graph, &bfs).unwrap();
        let passed = run.run_to_completion();
        assert_eq!(passed, run.steps());
        let len = run.events().len();
        assert_eq!(run.step(), None);
        assert_eq!(run.skip_to_checkpoint(), None);
        assert_eq!(run.events().len(), len);
        assert_eq!(run.into_events().current(), "END");
    }

    #[test]
    fn test_skip_to_checkpoint_stops_on_always() {
        let (mut graph, [a, _, _]) = path_graph();
        let mut bfs = BreadthFirstSearch::new();
        bfs.set_argument(BreadthFirstSearch::START, ArgumentValue::Node(a))
            .unwrap();
        let mut run = Run::start(&mut graph, &bfs).unwrap();
        while run.skip_to_checkpoint().is_some() {
            assert_eq!(run.last_level(), StopLevel::Always);
        }
        assert!(run.is_finished());
    }
}
