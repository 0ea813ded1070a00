//! Typed queries against the Linkerd Viz API.
//!
//! The upstream API takes loosely-typed query strings; each supported query
//! shape is pinned to a variant carrying exactly the fields it needs,
//! validated when constructed.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("query field `{0}` must not be empty")]
    EmptyField(&'static str),
}

/// Mesh resource kinds this service queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceType {
    Deployment,
    All,
}

impl ResourceType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Deployment => "deployment",
            ResourceType::All => "all",
        }
    }
}

fn require(field: &'static str, value: &str) -> Result<String, QueryError> {
    if value.trim().is_empty() {
        return Err(QueryError::EmptyField(field));
    }
    Ok(value.to_string())
}

/// Scope of one stat-summary query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatsTarget {
    /// Stats for a single named resource.
    Resource {
        resource_type: ResourceType,
        namespace: String,
        name: String,
    },
    /// Every resource of any type, in any namespace, sending traffic to the
    /// named resource.
    Inbound {
        to_type: ResourceType,
        to_namespace: String,
        to_name: String,
    },
    /// Every resource of any type, in any namespace, receiving traffic from
    /// the named resource.
    Outbound {
        from_type: ResourceType,
        from_namespace: String,
        from_name: String,
    },
}

impl StatsTarget {
    pub fn resource(
        resource_type: ResourceType,
        namespace: &str,
        name: &str,
    ) -> Result<Self, QueryError> {
        Ok(StatsTarget::Resource {
            resource_type,
            namespace: require("namespace", namespace)?,
            name: require("name", name)?,
        })
    }

    pub fn inbound(
        to_type: ResourceType,
        to_namespace: &str,
        to_name: &str,
    ) -> Result<Self, QueryError> {
        Ok(StatsTarget::Inbound {
            to_type,
            to_namespace: require("to_namespace", to_namespace)?,
            to_name: require("to_name", to_name)?,
        })
    }

    pub fn outbound(
        from_type: ResourceType,
        from_namespace: &str,
        from_name: &str,
    ) -> Result<Self, QueryError> {
        Ok(StatsTarget::Outbound {
            from_type,
            from_namespace: require("from_namespace", from_namespace)?,
            from_name: require("from_name", from_name)?,
        })
    }

    /// Query parameters understood by the viz `tps-reports` endpoint.
    ///
    /// Directional targets always summarize `all` resource types across all
    /// namespaces; the `to_*`/`from_*` parameters scope the traffic, not the
    /// summarized resources.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        match self {
            StatsTarget::Resource {
                resource_type,
                namespace,
                name,
            } => vec![
                ("resource_type", resource_type.as_str().to_string()),
                ("namespace", namespace.clone()),
                ("resource_name", name.clone()),
            ],
            StatsTarget::Inbound {
                to_type,
                to_namespace,
                to_name,
            } => vec![
                ("resource_type", ResourceType::All.as_str().to_string()),
                ("all_namespaces", "true".to_string()),
                ("to_type", to_type.as_str().to_string()),
                ("to_namespace", to_namespace.clone()),
                ("to_name", to_name.clone()),
            ],
            StatsTarget::Outbound {
                from_type,
                from_namespace,
                from_name,
            } => vec![
                ("resource_type", ResourceType::All.as_str().to_string()),
                ("all_namespaces", "true".to_string()),
                ("from_type", from_type.as_str().to_string()),
                ("from_namespace", from_namespace.clone()),
                ("from_name", from_name.clone()),
            ],
        }
    }
}

/// Selects which communication edges to report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeSelector {
    resource_type: ResourceType,
    namespace: String,
}

impl EdgeSelector {
    pub fn new(resource_type: ResourceType, namespace: &str) -> Result<Self, QueryError> {
        Ok(EdgeSelector {
            resource_type,
            namespace: require("namespace", namespace)?,
        })
    }

    /// Query parameters understood by the viz `edges` endpoint.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("resource_type", self.resource_type.as_str().to_string()),
            ("namespace", self.namespace.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn params_map(params: Vec<(&'static str, String)>) -> HashMap<&'static str, String> {
        params.into_iter().collect()
    }

    #[test]
    fn test_resource_params() {
        let target = StatsTarget::resource(ResourceType::Deployment, "default", "web").unwrap();
        let params = params_map(target.query_params());

        assert_eq!(params["resource_type"], "deployment");
        assert_eq!(params["namespace"], "default");
        assert_eq!(params["resource_name"], "web");
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn test_inbound_params() {
        let target = StatsTarget::inbound(ResourceType::Deployment, "default", "web").unwrap();
        let params = params_map(target.query_params());

        assert_eq!(params["resource_type"], "all");
        assert_eq!(params["all_namespaces"], "true");
        assert_eq!(params["to_type"], "deployment");
        assert_eq!(params["to_namespace"], "default");
        assert_eq!(params["to_name"], "web");
        assert_eq!(params.len(), 5);
    }

    #[test]
    fn test_outbound_params() {
        let target = StatsTarget::outbound(ResourceType::Deployment, "default", "web").unwrap();
        let params = params_map(target.query_params());

        assert_eq!(params["resource_type"], "all");
        assert_eq!(params["all_namespaces"], "true");
        assert_eq!(params["from_type"], "deployment");
        assert_eq!(params["from_namespace"], "default");
        assert_eq!(params["from_name"], "web");
        assert!(!params.contains_key("to_name"));
    }

    #[test]
    fn test_edge_selector_params() {
        let selector = EdgeSelector::new(ResourceType::Deployment, "default").unwrap();
        let params = params_map(selector.query_params());

        assert_eq!(params["resource_type"], "deployment");
        assert_eq!(params["namespace"], "default");
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_blank_identifiers_rejected() {
        assert_eq!(
            StatsTarget::resource(ResourceType::Deployment, "", "web").unwrap_err(),
            QueryError::EmptyField("namespace")
        );
        assert_eq!(
            StatsTarget::resource(ResourceType::Deployment, "default", "  ").unwrap_err(),
            QueryError::EmptyField("name")
        );
        assert_eq!(
            StatsTarget::inbound(ResourceType::Deployment, "default", "").unwrap_err(),
            QueryError::EmptyField("to_name")
        );
        assert_eq!(
            StatsTarget::outbound(ResourceType::Deployment, " ", "web").unwrap_err(),
            QueryError::EmptyField("from_namespace")
        );
        assert_eq!(
            EdgeSelector::new(ResourceType::Deployment, "").unwrap_err(),
            QueryError::EmptyField("namespace")
        );
    }
}
