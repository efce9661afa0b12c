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

//! Single-source shortest paths on small, dense, undirected graphs.
//!
//! Graphs are stored as adjacency matrices in a [`GraphStore`] and searched with Dijkstra's
//! algorithm. Ties between equally distant nodes are always resolved in favour of the lowest
//! node id, so the returned path is reproducible.
//!
//! ```
//! use dense_paths::GraphStore;
//!
//! let mut graph = GraphStore::new(3).unwrap();
//! graph.add_edge(0, 1, 2).unwrap();
//! graph.add_edge(1, 2, 3).unwrap();
//! let path = dense_paths::calc_path(&graph, 0, 2).unwrap();
//! assert_eq!(5, path.get_distance());
//! assert_eq!(&[0, 1, 2], path.get_nodes());
//! ```

pub use crate::constants::*;
pub use crate::dijkstra::{Dijkstra, ShortestPathTree};
pub use crate::error::{GraphError, Result};
pub use crate::graph_store::{Edge, GraphStore};
pub use crate::params::{Params, Strategy};
pub use crate::path_result::PathResult;

mod constants;
mod dijkstra;
mod error;
mod graph_store;
mod params;
mod path_result;

/// Calculates the shortest path from `source` to `target` with default parameters
pub fn calc_path(graph: &GraphStore, source: NodeId, target: NodeId) -> Result<PathResult> {
    Dijkstra::new().compute(graph, source, target)
}

/// Like `calc_path`, but with the given parameters
pub fn calc_path_with_params(
    graph: &GraphStore,
    source: NodeId,
    target: NodeId,
    params: Params,
) -> Result<PathResult> {
    Dijkstra::with_params(params).compute(graph, source, target)
}

#[cfg(test)]
mod tests {
    use std::time::{SystemTime, UNIX_EPOCH};

    use rand::rngs::StdRng;
    use rand::Rng;
    use stopwatch::Stopwatch;

    use super::*;

    fn cities() -> GraphStore {
        let matrix = vec![
            //   SUB MKS BDG CGK MLG DPS DHS YOG BTM PDG
            vec![0, 2, 3, 0, 8, 0, 0, 0, 0, 0],
            vec![2, 0, 0, 3, 1, 0, 0, 0, 0, 0],
            vec![3, 0, 0, 4, 0, 2, 0, 0, 0, 0],
            vec![0, 3, 4, 0, 0, 6, 4, 0, 0, 0],
            vec![8, 1, 0, 0, 0, 0, 2, 3, 0, 10],
            vec![0, 0, 2, 6, 0, 0, 8, 0, 4, 0],
            vec![0, 0, 0, 4, 2, 8, 0, 0, 0, 3],
            vec![0, 0, 0, 0, 3, 0, 0, 0, 0, 4],
            vec![0, 0, 0, 0, 0, 4, 0, 0, 0, 3],
            vec![0, 0, 0, 0, 10, 0, 3, 4, 3, 0],
        ];
        let labels = [
            "SUB", "MKS", "BDG", "CGK", "MLG", "DPS", "DHS", "YOG", "BTM", "PDG",
        ];
        GraphStore::from_matrix_with_labels(matrix, labels.iter().map(|l| l.to_string()).collect())
            .unwrap()
    }

    #[test]
    fn cities_sub_to_pdg() {
        let g = cities();
        assert_eq!(17, g.get_num_edges());
        let mut dijkstra = Dijkstra::new();
        let result = dijkstra.compute(&g, 0, 9).unwrap();
        assert_eq!(8, result.get_distance());
        assert_eq!(&[0, 1, 4, 6, 9], result.get_nodes());
        assert_eq!("SUB -> MKS -> MLG -> DHS -> PDG", result.describe(&g));
        assert!(dijkstra.is_edge_on_path(6, 4));
        assert!(!dijkstra.is_edge_on_path(4, 9));
        assert!(dijkstra.is_node_on_path(1));
        assert!(!dijkstra.is_node_on_path(2));
    }

    #[test]
    fn cities_all_distances_from_sub() {
        let tree = Dijkstra::new().run(&cities(), 0).unwrap();
        let distances: Vec<Weight> = (0..10).map(|n| tree.get_distance(n).unwrap()).collect();
        assert_eq!(vec![0, 2, 3, 5, 3, 5, 5, 6, 9, 8], distances);
        // BDG and MLG are both at distance 3, CGK, DPS and DHS at distance 5
        assert_eq!(&[0, 1, 2, 4, 3, 5, 6, 7, 9, 8], tree.get_settled_order());
    }

    #[test]
    fn calc_path_helpers() {
        let g = cities();
        let expected = PathResult::new(9, 2, 9, vec![9, 8, 5, 2]);
        assert_eq!(expected, calc_path(&g, 9, 2).unwrap());
        assert_eq!(
            expected,
            calc_path_with_params(&g, 9, 2, Params::new(Strategy::Heap)).unwrap()
        );
        assert!(calc_path(&g, 0, 10).is_err());
    }

    #[test]
    fn compare_with_brute_force() {
        let mut rng = create_rng();
        for _ in 0..100 {
            let num_nodes = rng.gen_range(1, 8);
            let g = GraphStore::random(&mut rng, num_nodes, 0.4, 10).unwrap();
            for source in 0..num_nodes {
                for target in 0..num_nodes {
                    let result = calc_path(&g, source, target).unwrap();
                    match brute_force_distance(&g, source, target) {
                        None => {
                            assert!(!result.is_found());
                            assert_eq!(WEIGHT_MAX, result.get_distance());
                        }
                        Some(distance) => {
                            assert_eq!(distance, result.get_distance());
                            assert_eq!(source, result.get_nodes()[0]);
                            assert_eq!(target, *result.get_nodes().last().unwrap());
                            assert_eq!(distance, path_weight(&g, &result));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn strategies_agree() {
        let mut rng = create_rng();
        let linear = Dijkstra::with_params(Params::new(Strategy::LinearScan));
        let heap = Dijkstra::with_params(Params::new(Strategy::Heap));
        for _ in 0..50 {
            let num_nodes = rng.gen_range(1, 30);
            // small weights make ties likely
            let g = GraphStore::random(&mut rng, num_nodes, 0.3, 3).unwrap();
            let source = rng.gen_range(0, num_nodes);
            assert_eq!(linear.run(&g, source).unwrap(), heap.run(&g, source).unwrap());
        }
    }

    #[test]
    #[ignore]
    fn run_performance_test_dense() {
        let mut rng = create_rng();
        let num_nodes = 500;
        let g = GraphStore::random(&mut rng, num_nodes, 0.5, 100).unwrap();
        let mut time_linear = Stopwatch::new();
        let mut time_heap = Stopwatch::new();
        let linear = Dijkstra::with_params(Params::new(Strategy::LinearScan));
        let heap = Dijkstra::with_params(Params::new(Strategy::Heap));
        for _ in 0..100 {
            let source = rng.gen_range(0, num_nodes);
            time_linear.start();
            let a = linear.run(&g, source).unwrap();
            time_linear.stop();
            time_heap.start();
            let b = heap.run(&g, source).unwrap();
            time_heap.stop();
            assert_eq!(a, b);
        }
        println!(
            "linear scan: {} ms, heap: {} ms",
            time_linear.elapsed_ms(),
            time_heap.elapsed_ms()
        );
    }

    fn brute_force_distance(g: &GraphStore, source: NodeId, target: NodeId) -> Option<Weight> {
        let mut visited = vec![false; g.get_num_nodes()];
        let mut best = None;
        visit(g, source, target, 0, &mut visited, &mut best);
        best
    }

    fn visit(
        g: &GraphStore,
        node: NodeId,
        target: NodeId,
        distance: Weight,
        visited: &mut Vec<bool>,
        best: &mut Option<Weight>,
    ) {
        if node == target {
            if best.map_or(true, |b| distance < b) {
                *best = Some(distance);
            }
            return;
        }
        visited[node] = true;
        for (adj, weight) in g.neighbors(node) {
            if !visited[adj] {
                visit(g, adj, target, distance + weight, visited, best);
            }
        }
        visited[node] = false;
    }

    fn path_weight(g: &GraphStore, result: &PathResult) -> Weight {
        result
            .edges()
            .map(|(a, b)| g.get_edge_weight(a, b).unwrap())
            .sum()
    }

    fn create_rng() -> StdRng {
        let seed = create_seed();
        println!("creating random number generator with seed: {}", seed);
        rand::SeedableRng::seed_from_u64(seed)
    }

    fn create_seed() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos() as u64
    }
}
