// SPDX-FileCopyrightText: 2026 Graphbench Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in plugin catalog.
//!
//! Lists the plugins compiled into the graphbench binary in registration
//! order. Adding a plugin means adding its `descriptor` function here.

use crate::builtin::{bulk, reference};
use crate::descriptor::PluginDescriptor;

/// Builds a plugin descriptor.
pub type PluginFactory = fn() -> PluginDescriptor;

/// Factories of all built-in plugins, in registration order.
pub fn builtin_plugins() -> Vec<PluginFactory> {
    vec![reference::descriptor, bulk::descriptor]
}

/// Descriptors of all built-in plugins, in registration order.
pub fn builtin_catalog() -> Vec<PluginDescriptor> {
    builtin_plugins().into_iter().map(|factory| factory()).collect()
}

#[cfg(test)]
mod tests {
    use graphbench_core::BenchmarkKind;

    use super::*;

    #[test]
    fn builtin_order_is_stable() {
        let names: Vec<String> = builtin_catalog()
            .iter()
            .map(|p| p.name().to_string())
            .collect();
        assert_eq!(names, vec!["reference", "bulk"]);
    }

    #[test]
    fn builtins_support_every_kind() {
        for plugin in builtin_catalog() {
            assert_eq!(plugin.supported_kinds(), BenchmarkKind::ALL.to_vec());
        }
    }
}
