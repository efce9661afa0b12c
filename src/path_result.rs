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

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{NodeId, Weight, WEIGHT_MAX};
use crate::graph_store::GraphStore;

/// The shortest path between two nodes.
///
/// An empty node list means the target cannot be reached from the source, in which case the
/// distance is `WEIGHT_MAX`. Otherwise the nodes run from source to target, both included.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PathResult {
    source: NodeId,
    target: NodeId,
    distance: Weight,
    nodes: Vec<NodeId>,
}

impl PathResult {
    pub fn new(source: NodeId, target: NodeId, distance: Weight, nodes: Vec<NodeId>) -> Self {
        PathResult {
            source,
            target,
            distance,
            nodes,
        }
    }

    pub fn unreachable(source: NodeId, target: NodeId) -> Self {
        PathResult::new(source, target, WEIGHT_MAX, vec![])
    }

    pub fn is_found(&self) -> bool {
        !self.nodes.is_empty()
    }

    pub fn get_source(&self) -> NodeId {
        self.source
    }

    pub fn get_target(&self) -> NodeId {
        self.target
    }

    pub fn get_distance(&self) -> Weight {
        self.distance
    }

    pub fn get_nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Number of edges along the path
    pub fn get_hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// The consecutive `(from, to)` pairs of the path, in path order
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.nodes.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// Returns true if `a` and `b` follow each other on the path, in either order
    pub fn is_edge_on_path(&self, a: NodeId, b: NodeId) -> bool {
        self.edges()
            .any(|(from, to)| (from == a && to == b) || (from == b && to == a))
    }

    pub fn is_node_on_path(&self, node: NodeId) -> bool {
        self.nodes.contains(&node)
    }

    /// Renders the path using the node labels of `graph`, e.g. `SUB -> MKS -> MLG`
    pub fn describe(&self, graph: &GraphStore) -> String {
        if !self.is_found() {
            return String::from("No path found");
        }
        self.nodes
            .iter()
            .map(|node| graph.display_name(*node))
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

impl fmt::Display for PathResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.is_found() {
            return write!(f, "No path found");
        }
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", node)?;
        }
        Ok(())
    }
}
