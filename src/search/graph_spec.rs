/// A weighted graph that can be searched with [`AStar`](crate::search::AStar)
/// or [`Dijkstra`](crate::search::Dijkstra). The graph is never materialised
/// by the search; it is explored lazily through [`GraphSpec::neighbors`] and
/// [`GraphSpec::cost`].
pub trait GraphSpec<T> {
    /// The nodes adjacent to `node`.
    fn neighbors(&self, node: &T) -> Vec<T>;

    /// The cost of the edge `(a, b)`, where `b` is one of the neighbours of
    /// `a`. Must be non-negative; [`f64::INFINITY`] means there is no usable
    /// edge.
    fn cost(&self, a: &T, b: &T) -> f64;

    /// Estimate of the cost of going from `a` to `b`, where `b` is typically
    /// a goal node. Only A* uses this.
    ///
    /// The estimate must be *admissible*, i.e. never overestimate the true
    /// cost, for A* to return optimal paths. Ideally it is also *consistent*:
    /// `h(n) <= cost(n, p) + h(p)` for every neighbour `p` of `n`, and
    /// `h(g) = 0` for every goal `g`, in which case no node is expanded more
    /// than once.
    ///
    /// The default of 0 is both admissible and consistent, but makes A*
    /// behave like Dijkstra's algorithm.
    fn heuristic(&self, _a: &T, _b: &T) -> f64 {
        0.
    }

    /// Total cost of the given path according to [`GraphSpec::cost`], or 0 if
    /// the path has fewer than 2 nodes.
    fn path_cost(&self, path: &[T]) -> f64 {
        path.windows(2)
            .map(|edge| self.cost(&edge[0], &edge[1]))
            .sum()
    }
}

impl<T, G> GraphSpec<T> for &G
where
    G: GraphSpec<T> + ?Sized,
{
    fn neighbors(&self, node: &T) -> Vec<T> {
        (**self).neighbors(node)
    }

    fn cost(&self, a: &T, b: &T) -> f64 {
        (**self).cost(a, b)
    }

    fn heuristic(&self, a: &T, b: &T) -> f64 {
        (**self).heuristic(a, b)
    }
}

impl<T, G> GraphSpec<T> for Box<G>
where
    G: GraphSpec<T> + ?Sized,
{
    fn neighbors(&self, node: &T) -> Vec<T> {
        (**self).neighbors(node)
    }

    fn cost(&self, a: &T, b: &T) -> f64 {
        (**self).cost(a, b)
    }

    fn heuristic(&self, a: &T, b: &T) -> f64 {
        (**self).heuristic(a, b)
    }
}
