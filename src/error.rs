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

use thiserror::Error;

use crate::constants::{NodeId, Weight};

/// Errors reported by graph construction, edge insertion and path queries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("invalid graph size: {0} (a graph needs at least one node)")]
    InvalidSize(usize),

    #[error("invalid node: {node} (graph has {node_count} nodes)")]
    InvalidNode { node: NodeId, node_count: usize },

    #[error("invalid weight {weight} for edge {a} <-> {b} (weights must be in 1..={max})")]
    InvalidWeight {
        a: NodeId,
        b: NodeId,
        weight: Weight,
        max: Weight,
    },

    #[error("invalid labels: expected {expected}, got {actual}")]
    InvalidLabel { expected: usize, actual: usize },

    #[error("invalid adjacency matrix: {0}")]
    InvalidMatrix(String),
}

pub type Result<T> = std::result::Result<T, GraphError>;

pub(crate) fn check_node(node: NodeId, node_count: usize) -> Result<()> {
    if node < node_count {
        Ok(())
    } else {
        Err(GraphError::InvalidNode { node, node_count })
    }
}
