// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::HashMap;

use crate::Environment;

/// A fixed set of values, never consulting the process environment
#[derive(Debug, Clone, Default)]
pub struct MapEnvironment(HashMap<String, String>);

impl MapEnvironment {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Environment for MapEnvironment {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }
}

impl<const N: usize> From<[(&str, &str); N]> for MapEnvironment {
    fn from(values: [(&str, &str); N]) -> Self {
        Self(
            values
                .into_iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_listed_keys_are_set() {
        let env = MapEnvironment::from([("TRAFFICKER_NETWORK_CODE", "123456")]);

        assert_eq!(env.get("TRAFFICKER_NETWORK_CODE").as_deref(), Some("123456"));
        assert_eq!(env.get("PATH"), None);
        assert_eq!(MapEnvironment::new().get("TRAFFICKER_NETWORK_CODE"), None);
    }
}
