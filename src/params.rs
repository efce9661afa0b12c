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

/// How the next node to settle is picked during a search
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Scans all nodes for the closest unsettled one, O(n²) overall. Best for small dense graphs.
    LinearScan,
    /// Keeps the unsettled nodes in a priority queue keyed by (distance, node id).
    Heap,
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::LinearScan
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Params {
    pub strategy: Strategy,
}

impl Params {
    pub fn new(strategy: Strategy) -> Self {
        Params { strategy }
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_linear_scan() {
        assert_eq!(Strategy::LinearScan, Params::default().strategy);
        assert_eq!(
            Params::new(Strategy::Heap),
            Params::default().with_strategy(Strategy::Heap)
        );
    }
}
