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

use std::convert::TryFrom;

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{max_edge_weight, NodeId, Weight, WEIGHT_ZERO};
use crate::error::{check_node, GraphError, Result};

/// An undirected connection between two nodes, `a` is never greater than `b`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub a: NodeId,
    pub b: NodeId,
    pub weight: Weight,
}

impl Edge {
    pub fn new(a: NodeId, b: NodeId, weight: Weight) -> Self {
        Edge {
            a: a.min(b),
            b: a.max(b),
            weight,
        }
    }

    /// Returns true if this edge connects `x` and `y`, in either order
    pub fn connects(&self, x: NodeId, y: NodeId) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }

    pub fn other(&self, node: NodeId) -> Option<NodeId> {
        if self.a == node {
            Some(self.b)
        } else if self.b == node {
            Some(self.a)
        } else {
            None
        }
    }
}

/// Dense storage of an undirected weighted graph.
///
/// The adjacency matrix is the source of truth, `matrix[i][j] == WEIGHT_ZERO` means there is no
/// edge between `i` and `j`. The edge list mirrors the matrix with exactly one record per
/// connected pair of nodes. Only the matrix and the labels are serialized, deserializing runs
/// the same validation as `from_matrix_with_labels`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(try_from = "MatrixSnapshot")]
pub struct GraphStore {
    matrix: Vec<Vec<Weight>>,
    #[serde(skip_serializing)]
    edges: Vec<Edge>,
    labels: Option<Vec<String>>,
}

#[derive(Deserialize)]
struct MatrixSnapshot {
    matrix: Vec<Vec<Weight>>,
    labels: Option<Vec<String>>,
}

impl TryFrom<MatrixSnapshot> for GraphStore {
    type Error = GraphError;

    fn try_from(snapshot: MatrixSnapshot) -> Result<Self> {
        GraphStore::build(snapshot.matrix, snapshot.labels)
    }
}

impl GraphStore {
    /// Creates a graph with `num_nodes` nodes and no edges
    pub fn new(num_nodes: usize) -> Result<Self> {
        if num_nodes == 0 {
            return Err(GraphError::InvalidSize(num_nodes));
        }
        Ok(GraphStore {
            matrix: vec![vec![WEIGHT_ZERO; num_nodes]; num_nodes],
            edges: vec![],
            labels: None,
        })
    }

    /// Creates a graph from a square, symmetric adjacency matrix. Non-zero entries on the
    /// diagonal are kept as self-loops.
    pub fn from_matrix(matrix: Vec<Vec<Weight>>) -> Result<Self> {
        GraphStore::build(matrix, None)
    }

    /// Like `from_matrix`, but also attaches one display label per node
    pub fn from_matrix_with_labels(matrix: Vec<Vec<Weight>>, labels: Vec<String>) -> Result<Self> {
        GraphStore::build(matrix, Some(labels))
    }

    /// Creates a random graph where each pair of distinct nodes is connected with probability
    /// `edge_probability` and weights are drawn from `1..=max_weight`. `max_weight` is capped
    /// at `max_edge_weight(num_nodes)`.
    pub fn random<R: Rng>(
        rng: &mut R,
        num_nodes: usize,
        edge_probability: f64,
        max_weight: Weight,
    ) -> Result<Self> {
        let mut graph = GraphStore::new(num_nodes)?;
        let edge_probability = edge_probability.max(0.0).min(1.0);
        let max_weight = max_weight.max(1).min(max_edge_weight(num_nodes));
        for a in 0..num_nodes {
            for b in (a + 1)..num_nodes {
                if rng.gen_bool(edge_probability) {
                    let weight = rng.gen_range(1, max_weight.saturating_add(1));
                    graph.add_edge(a, b, weight)?;
                }
            }
        }
        Ok(graph)
    }

    fn build(matrix: Vec<Vec<Weight>>, labels: Option<Vec<String>>) -> Result<Self> {
        let num_nodes = matrix.len();
        if num_nodes == 0 {
            return Err(GraphError::InvalidSize(num_nodes));
        }
        for (i, row) in matrix.iter().enumerate() {
            if row.len() != num_nodes {
                return Err(GraphError::InvalidMatrix(format!(
                    "row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    num_nodes
                )));
            }
        }
        let mut edges = vec![];
        for i in 0..num_nodes {
            for j in i..num_nodes {
                if matrix[i][j] != matrix[j][i] {
                    return Err(GraphError::InvalidMatrix(format!(
                        "entry ({}, {}) is {} but entry ({}, {}) is {}",
                        i, j, matrix[i][j], j, i, matrix[j][i]
                    )));
                }
                if matrix[i][j] != WEIGHT_ZERO {
                    check_weight(i, j, matrix[i][j], num_nodes)?;
                    edges.push(Edge::new(i, j, matrix[i][j]));
                }
            }
        }
        if let Some(labels) = &labels {
            check_labels(num_nodes, labels)?;
        }
        debug!(
            "Created graph with {} nodes and {} edges from adjacency matrix",
            num_nodes,
            edges.len()
        );
        Ok(GraphStore {
            matrix,
            edges,
            labels,
        })
    }

    pub fn with_labels(mut self, labels: Vec<String>) -> Result<Self> {
        self.set_labels(labels)?;
        Ok(self)
    }

    pub fn set_labels(&mut self, labels: Vec<String>) -> Result<()> {
        check_labels(self.get_num_nodes(), &labels)?;
        self.labels = Some(labels);
        Ok(())
    }

    /// Connects `a` and `b` with the given weight. If the two nodes are already connected the
    /// existing edge gets the new weight instead of adding a second record. The weight must be
    /// in `1..=get_max_edge_weight()`. On error the graph is left unchanged.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, weight: Weight) -> Result<()> {
        check_node(a, self.get_num_nodes())?;
        check_node(b, self.get_num_nodes())?;
        check_weight(a, b, weight, self.get_num_nodes())?;
        self.matrix[a][b] = weight;
        self.matrix[b][a] = weight;
        match self.edges.iter_mut().find(|e| e.connects(a, b)) {
            Some(edge) => {
                debug!(
                    "Replacing weight of edge {} <-> {}: {} -> {}",
                    a, b, edge.weight, weight
                );
                edge.weight = weight;
            }
            None => self.edges.push(Edge::new(a, b, weight)),
        }
        Ok(())
    }

    /// Iterates the `(neighbor, weight)` pairs of `node` in ascending neighbor order. The
    /// iterator is derived from the matrix on every call, an invalid id yields nothing.
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, Weight)> + '_ {
        self.matrix.get(node).into_iter().flat_map(|row| {
            row.iter()
                .enumerate()
                .filter(|(_, weight)| **weight != WEIGHT_ZERO)
                .map(|(neighbor, weight)| (neighbor, *weight))
        })
    }

    /// Returns the weight of the edge between `a` and `b` or `WEIGHT_ZERO` if there is none
    pub fn get_edge_weight(&self, a: NodeId, b: NodeId) -> Result<Weight> {
        check_node(a, self.get_num_nodes())?;
        check_node(b, self.get_num_nodes())?;
        Ok(self.matrix[a][b])
    }

    pub fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.get_edge_weight(a, b)
            .map(|weight| weight != WEIGHT_ZERO)
            .unwrap_or(false)
    }

    pub fn get_num_nodes(&self) -> usize {
        self.matrix.len()
    }

    pub fn get_max_edge_weight(&self) -> Weight {
        max_edge_weight(self.get_num_nodes())
    }

    pub fn get_num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn get_matrix(&self) -> &[Vec<Weight>] {
        &self.matrix
    }

    pub fn get_edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn get_labels(&self) -> Option<&[String]> {
        self.labels.as_deref()
    }

    pub fn get_label(&self, node: NodeId) -> Option<&str> {
        self.labels
            .as_ref()
            .and_then(|labels| labels.get(node))
            .map(|label| label.as_str())
    }

    /// The label of the given node, or its id if the graph has no labels
    pub fn display_name(&self, node: NodeId) -> String {
        match self.get_label(node) {
            Some(label) => label.to_string(),
            None => node.to_string(),
        }
    }
}

fn check_weight(a: NodeId, b: NodeId, weight: Weight, num_nodes: usize) -> Result<()> {
    let max = max_edge_weight(num_nodes);
    if weight == WEIGHT_ZERO || weight > max {
        return Err(GraphError::InvalidWeight { a, b, weight, max });
    }
    Ok(())
}

fn check_labels(num_nodes: usize, labels: &[String]) -> Result<()> {
    if labels.len() != num_nodes {
        return Err(GraphError::InvalidLabel {
            expected: num_nodes,
            actual: labels.len(),
        });
    }
    Ok(())
}
