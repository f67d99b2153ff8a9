use log::{debug, trace};
use num_traits::{PrimInt, Saturating, Unsigned};
use std::fmt::Debug;

use crate::algorithm::distance::{Distance, DistanceEstimate};
use crate::data_structures::{AddressableHeap, Handle};
use crate::graph::{Edge, EdgeWeights, Graph};
use crate::{Error, Result};

/// Dijkstra's algorithm over an addressable priority queue
///
/// Given a graph, a weight function and a source vertex, `run()` computes the
/// shortest-path tree from the source; `path`, `length` and
/// `distance_estimate` answer queries against that tree.
///
/// The engine only reads the graph and weight function; both are borrowed for
/// the engine's lifetime and must not change between `run()` and the queries.
#[derive(Debug)]
pub struct ShortestPaths<'a, W, G, F>
where
    W: PrimInt + Unsigned + Saturating + Debug,
    G: Graph,
    F: EdgeWeights<W>,
{
    graph: &'a G,
    weights: &'a F,

    /// Starting vertex for the shortest path computation
    source: usize,

    /// Handle into the priority queue for each vertex
    handles: Vec<Option<Handle>>,

    /// Parent edge of each vertex in the shortest-path tree
    parent_edges: Vec<Option<Edge>>,

    /// Queue retained after the run; finalized slots answer direct
    /// distance-estimate queries
    heap: AddressableHeap<DistanceEstimate<W>>,

    computed: bool,
}

impl<'a, W, G, F> ShortestPaths<'a, W, G, F>
where
    W: PrimInt + Unsigned + Saturating + Debug,
    G: Graph,
    F: EdgeWeights<W>,
{
    /// Creates a new engine for the given graph, weight function and source
    ///
    /// Fails with [`Error::SourceNotFound`] if the source vertex is not part
    /// of the graph.
    pub fn new(graph: &'a G, weights: &'a F, source: usize) -> Result<Self> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }

        Ok(ShortestPaths {
            graph,
            weights,
            source,
            handles: Vec::new(),
            parent_edges: Vec::new(),
            heap: AddressableHeap::new(),
            computed: false,
        })
    }

    /// Returns the source vertex of this computation
    pub fn source(&self) -> usize {
        self.source
    }

    /// Computes the shortest-path tree from the source vertex
    ///
    /// Every vertex enters the queue infinitely far from the source; the
    /// source is then decreased to zero and vertices are extracted in
    /// distance order, relaxing their outgoing edges through the queue
    /// handles. Unreachable vertices keep the infinite estimate and are
    /// extracted last with no parent edge.
    ///
    /// All state is rebuilt from scratch, so repeated calls on unchanged
    /// inputs produce the same tree.
    pub fn run(&mut self) -> Result<()> {
        let n = self.graph.vertex_count();
        debug!(
            "computing shortest paths from vertex {} over {} vertices and {} edges",
            self.source,
            n,
            self.graph.edge_count()
        );

        let mut heap = AddressableHeap::with_capacity(n);
        let mut handles: Vec<Option<Handle>> = vec![None; n];
        let mut parent_edges: Vec<Option<Edge>> = vec![None; n];

        // Every vertex starts infinitely far from the source
        for v in self.graph.vertices() {
            if !self.graph.has_vertex(v) {
                return Err(Error::InvalidVertex(v));
            }
            handles[v] = Some(heap.insert(DistanceEstimate::unreached(v)));
        }

        let source_handle = handles[self.source].ok_or(Error::SourceNotFound)?;
        heap.decrease(source_handle, DistanceEstimate::finite(self.source, W::zero()))?;

        while !heap.is_empty() {
            // Extraction finalizes the vertex; with non-negative weights no
            // later relaxation can undercut it
            let settled = heap.extract_min()?;
            let u = settled.vertex;
            trace!("finalized vertex {} at distance {:?}", u, settled.distance);

            for edge in self.graph.edges_from(u) {
                let weight = self
                    .weights
                    .weight(edge)
                    .ok_or(Error::MissingWeight(edge.from, edge.to))?;
                let handle = handles[edge.to].ok_or(Error::InvalidVertex(edge.to))?;
                let current = self.heap_value(&heap, handle)?.distance;

                // Infinite + weight stays infinite, so edges out of an
                // unreachable vertex never pass this test
                let candidate = settled.distance.plus(weight);
                if candidate < current {
                    heap.decrease(handle, DistanceEstimate { vertex: edge.to, distance: candidate })?;
                    parent_edges[edge.to] = Some(edge);
                }
            }
        }

        self.heap = heap;
        self.handles = handles;
        self.parent_edges = parent_edges;
        self.computed = true;

        debug!("shortest-path tree from vertex {} complete", self.source);
        Ok(())
    }

    /// Returns the edges of a shortest path from the source to `end_vertex`,
    /// in path order
    ///
    /// The source itself yields an empty path. Fails with
    /// [`Error::Unreachable`] if no path to `end_vertex` exists.
    pub fn path(&self, end_vertex: usize) -> Result<Vec<Edge>> {
        self.ensure_computed()?;
        if !self.graph.has_vertex(end_vertex) {
            return Err(Error::InvalidVertex(end_vertex));
        }

        let mut edges = Vec::new();
        let mut current = end_vertex;
        // Walk parent edges back to the source; a vertex without a parent
        // edge that is not the source has no path at all
        while current != self.source {
            let edge = self.parent_edges[current].ok_or(Error::Unreachable(end_vertex))?;
            edges.push(edge);
            current = edge.from;
        }
        edges.reverse();

        Ok(edges)
    }

    /// Sums the edge weights along a shortest path to `end_vertex`
    pub fn length(&self, end_vertex: usize) -> Result<W> {
        let mut total = W::zero();
        for edge in self.path(end_vertex)? {
            let weight = self
                .weights
                .weight(edge)
                .ok_or(Error::MissingWeight(edge.from, edge.to))?;
            total = total.saturating_add(weight);
        }
        Ok(total)
    }

    /// Reads the finalized distance of `end_vertex` straight from its queue
    /// entry, bypassing path reconstruction
    ///
    /// Equals `length(end_vertex)` for reachable vertices once `run()` has
    /// completed; unreachable vertices report [`Distance::Infinite`].
    pub fn distance_estimate(&self, end_vertex: usize) -> Result<Distance<W>> {
        self.ensure_computed()?;
        if !self.graph.has_vertex(end_vertex) {
            return Err(Error::InvalidVertex(end_vertex));
        }

        let handle = self.handles[end_vertex].ok_or(Error::InvalidVertex(end_vertex))?;
        let estimate = self.heap_value(&self.heap, handle)?;
        Ok(estimate.distance)
    }

    fn heap_value<'h>(
        &self,
        heap: &'h AddressableHeap<DistanceEstimate<W>>,
        handle: Handle,
    ) -> Result<&'h DistanceEstimate<W>> {
        heap.value(handle).ok_or(Error::InvalidHandle)
    }

    fn ensure_computed(&self) -> Result<()> {
        if self.computed {
            Ok(())
        } else {
            Err(Error::NotComputed)
        }
    }
}
