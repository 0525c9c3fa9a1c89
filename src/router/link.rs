//! Reverse routing: build a concrete path for a controller action.

use super::declaration::{PathPattern, RouteDeclaration};
use super::table::RouteTable;
use crate::error::RouteError;
use crate::path::PathComponent;
use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;
use std::hash::{BuildHasher, Hash};

/// Source of binding values for [`RouteTable::link`].
pub trait Bindings {
    /// Value for the binding `name`, rendered as a path segment.
    fn binding(&self, name: &str) -> Option<String>;
}

impl<K, V, S> Bindings for HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    V: Display,
    S: BuildHasher,
{
    fn binding(&self, name: &str) -> Option<String> {
        self.get(name).map(|v| v.to_string())
    }
}

impl<K, V> Bindings for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: Display,
{
    fn binding(&self, name: &str) -> Option<String> {
        self.get(name).map(|v| v.to_string())
    }
}

impl<K, V> Bindings for [(K, V)]
where
    K: AsRef<str>,
    V: Display,
{
    fn binding(&self, name: &str) -> Option<String> {
        self.iter()
            .find(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.to_string())
    }
}

impl<K, V, const N: usize> Bindings for [(K, V); N]
where
    K: AsRef<str>,
    V: Display,
{
    fn binding(&self, name: &str) -> Option<String> {
        self.as_slice().binding(name)
    }
}

impl RouteTable {
    /// Build the path of the first route dispatching to `controller`/`action`,
    /// filling each `:name` segment from `bindings`.
    ///
    /// Extra bindings are ignored. A pattern with no segments links to `/`.
    ///
    /// # Errors
    ///
    /// * [`RouteError::UnknownLinkTarget`] - no dispatch declaration for the pair
    /// * [`RouteError::MissingBinding`] - `bindings` lacks a value the pattern needs
    /// * [`RouteError::IrreversiblePattern`] - the route is declared with a regex
    pub fn link<B>(
        &self,
        controller: &str,
        action: &str,
        bindings: &B,
    ) -> Result<String, RouteError>
    where
        B: Bindings + ?Sized,
    {
        let pattern = self
            .iter()
            .filter_map(|declaration| match declaration {
                RouteDeclaration::Dispatch {
                    pattern, target, ..
                } if target.controller == controller => Some((pattern, target)),
                _ => None,
            })
            .find(|(_, target)| target.action == action)
            .map(|(pattern, _)| pattern)
            .ok_or_else(|| RouteError::UnknownLinkTarget {
                controller: controller.to_string(),
                action: action.to_string(),
            })?;

        let segments = match pattern {
            PathPattern::Segments(segments) => segments,
            PathPattern::Regex(_) => {
                return Err(RouteError::IrreversiblePattern {
                    controller: controller.to_string(),
                    action: action.to_string(),
                })
            }
        };

        let mut out = String::with_capacity(segments.source().len() + 16);
        for component in segments.components() {
            out.push('/');
            match component {
                PathComponent::Literal(text) => out.push_str(text),
                PathComponent::Binding(name) => {
                    let value = bindings.binding(name).ok_or_else(|| RouteError::MissingBinding {
                        name: name.to_string(),
                        pattern: segments.source().to_string(),
                    })?;
                    out.push_str(&value);
                }
                PathComponent::Wildcard => out.push('*'),
            }
        }

        if out.is_empty() {
            out.push('/');
        }
        Ok(out)
    }
}

/// Free-standing form of [`RouteTable::link`].
pub fn link<B>(
    table: &RouteTable,
    controller: &str,
    action: &str,
    bindings: &B,
) -> Result<String, RouteError>
where
    B: Bindings + ?Sized,
{
    table.link(controller, action, bindings)
}
