/*
 * Licensed to the Apache Software Foundation (ASF) under one
 * or more contributor license agreements.  See the NOTICE file
 * distributed with this work for additional information
 * regarding copyright ownership.  The ASF licenses this file
 * to you under the Apache License, Version 2.0 (the
 * "License"); you may not use this file except in compliance
 * with the License.  You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing,
 * software distributed under the License is distributed on an
 * "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
 * KIND, either express or implied.  See the License for the
 * specific language governing permissions and limitations
 * under the License.
 */

use std::cmp::Reverse;

use log::{debug, trace};
use priority_queue::PriorityQueue;

use crate::constants::{NodeId, Predecessor, Weight, NO_PREDECESSOR, WEIGHT_MAX};
use crate::error::{check_node, Result};
use crate::graph_store::GraphStore;
use crate::params::{Params, Strategy};
use crate::path_result::PathResult;

/// Runs Dijkstra's algorithm on a `GraphStore`.
///
/// Whenever several unsettled nodes share the smallest distance the one with the lowest id is
/// settled first, so the chosen path is the same for every run and every `Strategy`. The
/// result of the last `compute` call is kept to answer highlighting queries.
#[derive(Debug, Default)]
pub struct Dijkstra {
    params: Params,
    last_result: Option<PathResult>,
}

impl Dijkstra {
    pub fn new() -> Self {
        Dijkstra::with_params(Params::default())
    }

    pub fn with_params(params: Params) -> Self {
        Dijkstra {
            params,
            last_result: None,
        }
    }

    pub fn get_params(&self) -> &Params {
        &self.params
    }

    /// Calculates the shortest paths from `source` to every node of the graph
    pub fn run(&self, graph: &GraphStore, source: NodeId) -> Result<ShortestPathTree> {
        check_node(source, graph.get_num_nodes())?;
        debug!(
            "Running dijkstra from node {} on {} nodes ({:?})",
            source,
            graph.get_num_nodes(),
            self.params.strategy
        );
        let tree = match self.params.strategy {
            Strategy::LinearScan => run_linear_scan(graph, source),
            Strategy::Heap => run_heap(graph, source),
        };
        debug!(
            "Settled {} of {} nodes",
            tree.settled_order.len(),
            graph.get_num_nodes()
        );
        Ok(tree)
    }

    /// Calculates the shortest path between `source` and `target` and remembers it for
    /// `is_edge_on_path` and `is_node_on_path`. Invalid ids leave the remembered path as is.
    pub fn compute(
        &mut self,
        graph: &GraphStore,
        source: NodeId,
        target: NodeId,
    ) -> Result<PathResult> {
        check_node(source, graph.get_num_nodes())?;
        check_node(target, graph.get_num_nodes())?;
        let result = self.run(graph, source)?.path_to(target)?;
        if result.is_found() {
            debug!(
                "Shortest path {} -> {}: distance {}, {} hops",
                source,
                target,
                result.get_distance(),
                result.get_hops()
            );
        } else {
            debug!("Node {} cannot be reached from node {}", target, source);
        }
        self.last_result = Some(result.clone());
        Ok(result)
    }

    pub fn get_last_result(&self) -> Option<&PathResult> {
        self.last_result.as_ref()
    }

    pub fn is_edge_on_path(&self, a: NodeId, b: NodeId) -> bool {
        self.last_result
            .as_ref()
            .map_or(false, |result| result.is_edge_on_path(a, b))
    }

    pub fn is_node_on_path(&self, node: NodeId) -> bool {
        self.last_result
            .as_ref()
            .map_or(false, |result| result.is_node_on_path(node))
    }

    pub fn clear(&mut self) {
        self.last_result = None;
    }
}

/// Distances and predecessors of all nodes after a full single-source search
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortestPathTree {
    source: NodeId,
    distances: Vec<Weight>,
    predecessors: Vec<Predecessor>,
    settled_order: Vec<NodeId>,
}

impl ShortestPathTree {
    pub fn get_source(&self) -> NodeId {
        self.source
    }

    pub fn get_num_nodes(&self) -> usize {
        self.distances.len()
    }

    /// The distance from the source, `WEIGHT_MAX` for unreachable nodes
    pub fn get_distance(&self, node: NodeId) -> Result<Weight> {
        check_node(node, self.get_num_nodes())?;
        Ok(self.distances[node])
    }

    pub fn get_predecessor(&self, node: NodeId) -> Result<Predecessor> {
        check_node(node, self.get_num_nodes())?;
        Ok(self.predecessors[node])
    }

    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.distances
            .get(node)
            .map_or(false, |distance| *distance != WEIGHT_MAX)
    }

    /// The nodes in the order they were settled, starting with the source
    pub fn get_settled_order(&self) -> &[NodeId] {
        &self.settled_order
    }

    /// Follows the predecessors back from `target`. If this does not end at the source the
    /// target is unreachable and the path is empty.
    pub fn path_to(&self, target: NodeId) -> Result<PathResult> {
        check_node(target, self.get_num_nodes())?;
        let mut nodes = vec![target];
        let mut node = target;
        while let Some(prev) = self.predecessors[node].node() {
            nodes.push(prev);
            node = prev;
        }
        if node != self.source {
            return Ok(PathResult::unreachable(self.source, target));
        }
        nodes.reverse();
        Ok(PathResult::new(
            self.source,
            target,
            self.distances[target],
            nodes,
        ))
    }
}

#[derive(Clone, Copy)]
struct Data {
    settled: bool,
    distance: Weight,
    predecessor: Predecessor,
}

impl Data {
    fn new() -> Self {
        Data {
            settled: false,
            distance: WEIGHT_MAX,
            predecessor: NO_PREDECESSOR,
        }
    }
}

fn run_linear_scan(graph: &GraphStore, source: NodeId) -> ShortestPathTree {
    let mut data = vec![Data::new(); graph.get_num_nodes()];
    let mut settled_order = Vec::with_capacity(data.len());
    data[source].distance = 0;
    while let Some(node) = closest_unsettled(&data) {
        settle(graph, &mut data, node, |_, _| {});
        settled_order.push(node);
    }
    to_tree(source, data, settled_order)
}

fn run_heap(graph: &GraphStore, source: NodeId) -> ShortestPathTree {
    let mut data = vec![Data::new(); graph.get_num_nodes()];
    let mut settled_order = Vec::with_capacity(data.len());
    // the queue holds one entry per unsettled node, pushing again only changes its priority
    let mut queue: PriorityQueue<NodeId, Reverse<(Weight, NodeId)>> = PriorityQueue::new();
    data[source].distance = 0;
    queue.push(source, Reverse((0, source)));
    while let Some((node, _)) = queue.pop() {
        settle(graph, &mut data, node, |adj, distance| {
            queue.push(adj, Reverse((distance, adj)));
        });
        settled_order.push(node);
    }
    to_tree(source, data, settled_order)
}

/// Returns the unsettled node with the smallest finite distance, the lowest id wins ties
fn closest_unsettled(data: &[Data]) -> Option<NodeId> {
    let mut closest: Option<NodeId> = None;
    for (node, d) in data.iter().enumerate() {
        if d.settled || d.distance == WEIGHT_MAX {
            continue;
        }
        match closest {
            Some(c) if data[c].distance <= d.distance => {}
            _ => closest = Some(node),
        }
    }
    closest
}

/// Marks `node` as settled and relaxes its edges, `on_improved` is called for every neighbor
/// whose distance went down.
fn settle<F>(graph: &GraphStore, data: &mut [Data], node: NodeId, mut on_improved: F)
where
    F: FnMut(NodeId, Weight),
{
    data[node].settled = true;
    let distance = data[node].distance;
    trace!("settled node {} at distance {}", node, distance);
    for (adj, weight) in graph.neighbors(node) {
        if data[adj].settled {
            continue;
        }
        // edge weights are capped by max_edge_weight, so this stays below WEIGHT_MAX
        let new_distance = distance + weight;
        if new_distance < data[adj].distance {
            trace!(
                "improved node {} via {}: {} -> {}",
                adj,
                node,
                data[adj].distance,
                new_distance
            );
            data[adj].distance = new_distance;
            data[adj].predecessor = Predecessor::Node(node);
            on_improved(adj, new_distance);
        }
    }
}

fn to_tree(source: NodeId, data: Vec<Data>, settled_order: Vec<NodeId>) -> ShortestPathTree {
    ShortestPathTree {
        source,
        distances: data.iter().map(|d| d.distance).collect(),
        predecessors: data.iter().map(|d| d.predecessor).collect(),
        settled_order,
    }
}
