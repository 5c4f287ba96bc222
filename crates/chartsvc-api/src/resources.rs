//! Wire resources for catalog responses
//!
//! Pure transformations from domain models to the response shapes the
//! dashboard consumes. Nothing here performs I/O; the values filename for
//! asset URLs is resolved by the caller and passed in.

use std::collections::BTreeMap;

use chartsvc_core::{Chart, ChartVersion, Maintainer, Repo};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Base path for all versioned catalog routes
pub const PATH_PREFIX: &str = "/v1";

/// Resource type tag for charts
const TYPE_CHART: &str = "chart";

/// Resource type tag for chart versions
const TYPE_CHART_VERSION: &str = "chartVersion";

/// A single resource in a response body
#[derive(Debug, Clone, Serialize)]
pub struct Resource {
    /// Resource type tag
    #[serde(rename = "type")]
    pub kind: &'static str,

    /// Resource identifier
    pub id: String,

    /// Type-specific attributes
    pub attributes: Attributes,

    /// Named relationships to other resources
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub relationships: BTreeMap<&'static str, Relationship>,

    /// Navigation links
    pub links: SelfLink,
}

/// Attribute payload of a resource
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Attributes {
    Chart(ChartAttributes),
    ChartVersion(ChartVersionAttributes),
}

/// A relationship embedding another resource's attributes
#[derive(Debug, Clone, Serialize)]
pub struct Relationship {
    pub data: Attributes,
    pub links: SelfLink,
}

/// Self link wrapper
#[derive(Debug, Clone, Serialize)]
pub struct SelfLink {
    #[serde(rename = "self")]
    pub url: String,
}

impl SelfLink {
    fn new(url: String) -> Self {
        Self { url }
    }
}

/// Chart attributes as they go on the wire
///
/// Mirrors the domain chart minus the raw icon bytes, which are replaced
/// by a derived asset URL.
#[derive(Debug, Clone, Serialize)]
pub struct ChartAttributes {
    pub name: String,
    pub repo: Repo,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub home: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub maintainers: Vec<Maintainer>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,
    /// Asset URL of the icon; empty when the chart has none
    #[serde(skip_serializing_if = "String::is_empty")]
    pub icon: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub icon_content_type: String,
    pub chart_versions: Vec<ChartVersion>,
}

/// Chart version attributes plus derived asset URLs
#[derive(Debug, Clone, Serialize)]
pub struct ChartVersionAttributes {
    pub version: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub app_version: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub digest: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    /// URL of the README asset for this version
    pub readme: String,
    /// URL of the default values asset for this version
    pub values: String,
}

fn chart_url(namespace: &str, chart_id: &str) -> String {
    format!("{}/ns/{}/charts/{}", PATH_PREFIX, namespace, chart_id)
}

fn chart_version_url(namespace: &str, chart_id: &str, version: &str) -> String {
    format!(
        "{}/ns/{}/charts/{}/versions/{}",
        PATH_PREFIX, namespace, chart_id, version
    )
}

fn asset_url(namespace: &str, chart_id: &str, rest: &str) -> String {
    format!(
        "{}/ns/{}/assets/{}/{}",
        PATH_PREFIX, namespace, chart_id, rest
    )
}

/// Build the wire attributes for a chart.
pub fn chart_attributes(namespace: &str, chart: &Chart) -> ChartAttributes {
    let (icon, icon_content_type) = if chart.has_icon() {
        (
            asset_url(namespace, &chart.id, "logo"),
            chart.icon_content_type.clone(),
        )
    } else {
        (String::new(), String::new())
    };

    ChartAttributes {
        name: chart.name.clone(),
        repo: chart.repo.clone(),
        description: chart.description.clone(),
        home: chart.home.clone(),
        keywords: chart.keywords.clone(),
        maintainers: chart.maintainers.clone(),
        sources: chart.sources.clone(),
        icon,
        icon_content_type,
        chart_versions: chart.chart_versions.clone(),
    }
}

/// Build the wire attributes for one chart version.
///
/// `values_name` is the resolved default values filename; the values URL
/// ends with it so clients fetch the file the package actually ships.
pub fn chart_version_attributes(
    namespace: &str,
    chart_id: &str,
    cv: &ChartVersion,
    values_name: &str,
) -> ChartVersionAttributes {
    ChartVersionAttributes {
        version: cv.version.clone(),
        app_version: cv.app_version.clone(),
        digest: cv.digest.clone(),
        created: cv.created,
        readme: asset_url(
            namespace,
            chart_id,
            &format!("versions/{}/README.md", cv.version),
        ),
        values: asset_url(
            namespace,
            chart_id,
            &format!("versions/{}/values/{}", cv.version, values_name),
        ),
    }
}

/// Build the chart resource for detail and list responses.
///
/// A chart with no versions renders without the latest-version
/// relationship.
pub fn chart_resource(namespace: &str, chart: &Chart, values_name: &str) -> Resource {
    let mut relationships = BTreeMap::new();
    if let Some(latest) = chart.latest_version() {
        relationships.insert(
            "latestChartVersion",
            Relationship {
                data: Attributes::ChartVersion(chart_version_attributes(
                    namespace,
                    &chart.id,
                    latest,
                    values_name,
                )),
                links: SelfLink::new(chart_version_url(namespace, &chart.id, &latest.version)),
            },
        );
    }

    Resource {
        kind: TYPE_CHART,
        id: chart.id.clone(),
        attributes: Attributes::Chart(chart_attributes(namespace, chart)),
        relationships,
        links: SelfLink::new(chart_url(namespace, &chart.id)),
    }
}

/// Build the resource for one chart version.
///
/// The embedded chart relationship carries the parent's attributes with
/// its version list cleared, keeping single-version payloads small.
pub fn chart_version_resource(
    namespace: &str,
    chart: &Chart,
    cv: &ChartVersion,
    values_name: &str,
) -> Resource {
    let mut parent = chart_attributes(namespace, chart);
    parent.chart_versions = Vec::new();

    let mut relationships = BTreeMap::new();
    relationships.insert(
        "chart",
        Relationship {
            data: Attributes::Chart(parent),
            links: SelfLink::new(chart_url(namespace, &chart.id)),
        },
    );

    Resource {
        kind: TYPE_CHART_VERSION,
        id: format!("{}-{}", chart.id, cv.version),
        attributes: Attributes::ChartVersion(chart_version_attributes(
            namespace,
            &chart.id,
            cv,
            values_name,
        )),
        relationships,
        links: SelfLink::new(chart_version_url(namespace, &chart.id, &cv.version)),
    }
}
