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

use serde::{Deserialize, Serialize};

pub type NodeId = usize;
pub type Weight = usize;

/// The node we came from when a node was last improved during a search.
#[derive(Eq, PartialEq, Clone, Copy, Deserialize, Serialize, Debug)]
pub enum Predecessor {
    None,
    Node(NodeId),
}

impl Predecessor {
    pub fn has_id(&self, id: NodeId) -> bool {
        match self {
            Predecessor::None => false,
            Predecessor::Node(node_id) => *node_id == id,
        }
    }

    pub fn node(&self) -> Option<NodeId> {
        match self {
            Predecessor::None => None,
            Predecessor::Node(node_id) => Some(*node_id),
        }
    }
}

pub const NO_PREDECESSOR: Predecessor = Predecessor::None;

/// Distance of nodes that cannot be reached from the source
pub const WEIGHT_MAX: Weight = std::usize::MAX;
/// Matrix entry meaning there is no edge between two nodes
pub const WEIGHT_ZERO: Weight = 0;

/// The largest edge weight a graph with `num_nodes` nodes accepts. A simple path has at most
/// `num_nodes - 1` edges, so with this bound every path length stays below `WEIGHT_MAX`.
pub fn max_edge_weight(num_nodes: usize) -> Weight {
    WEIGHT_MAX / num_nodes.max(1)
}
