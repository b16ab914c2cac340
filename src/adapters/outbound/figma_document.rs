//! Wire types of the Figma REST API and extraction of component records.
//!
//! Both the API client and the offline file reader hand a parsed
//! `GET /v1/files/:key` document to [`FigmaDocumentParser::extract`].

use crate::health_analysis::domain::{ComponentRecord, ComponentType, LibrarySnapshot};
use crate::health_analysis::policies::is_deprecated_by_naming;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;

const NODE_CANVAS: &str = "CANVAS";
const NODE_COMPONENT: &str = "COMPONENT";
const NODE_COMPONENT_SET: &str = "COMPONENT_SET";
const NODE_INSTANCE: &str = "INSTANCE";

/// Response of `GET /v1/files/:key`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FigmaFile {
    #[serde(default)]
    pub name: String,
    pub document: FigmaNode,
    #[serde(default)]
    pub components: HashMap<String, ComponentMetadata>,
    #[serde(default)]
    pub component_sets: HashMap<String, ComponentMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FigmaNode {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default)]
    pub children: Vec<FigmaNode>,
    #[serde(default)]
    pub absolute_bounding_box: Option<FigmaRect>,
    #[serde(default)]
    pub component_id: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct FigmaRect {
    pub width: f64,
    pub height: f64,
}

/// Entry of the file's `components` / `componentSets` maps
#[derive(Debug, Default, Deserialize)]
pub struct ComponentMetadata {
    #[serde(default)]
    pub description: String,
}

/// Response of `GET /v1/files/:key/components` and `/component_sets`
#[derive(Debug, Deserialize)]
pub struct PublishedComponentsResponse {
    #[serde(default)]
    pub meta: PublishedMeta,
}

#[derive(Debug, Default, Deserialize)]
pub struct PublishedMeta {
    #[serde(default)]
    pub components: Vec<PublishedComponent>,
    #[serde(default)]
    pub component_sets: Vec<PublishedComponent>,
}

impl PublishedComponentsResponse {
    pub fn into_entries(self) -> Vec<PublishedComponent> {
        let PublishedMeta {
            mut components,
            component_sets,
        } = self.meta;
        components.extend(component_sets);
        components
    }
}

/// Publish metadata of one component or component set
#[derive(Debug, Clone, Deserialize)]
pub struct PublishedComponent {
    pub node_id: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Response of `GET /v1/images/:key`
#[derive(Debug, Deserialize)]
pub struct ImageRenderResponse {
    #[serde(default)]
    pub err: Option<String>,
    #[serde(default)]
    pub images: HashMap<String, Option<String>>,
}

/// Walks a Figma document and turns component nodes into records
pub struct FigmaDocumentParser;

impl FigmaDocumentParser {
    pub fn parse_file(json: &str) -> serde_json::Result<FigmaFile> {
        serde_json::from_str(json)
    }

    /// Extracts one record per `COMPONENT_SET` and `COMPONENT` node.
    ///
    /// A component whose parent is a component set is named
    /// `"<set> / <component>"`. The file counts as a library when any
    /// published metadata is present.
    pub fn extract(file: &FigmaFile, published: &[PublishedComponent]) -> LibrarySnapshot {
        let published: HashMap<&str, &PublishedComponent> = published
            .iter()
            .map(|entry| (entry.node_id.as_str(), entry))
            .collect();
        let is_library_file = !published.is_empty();
        let instance_counts = count_instances(&file.document);

        let mut extractor = Extractor {
            file,
            published: &published,
            instance_counts: &instance_counts,
            is_library_file,
            records: Vec::new(),
        };
        extractor.walk(&file.document);

        LibrarySnapshot::new(file.name.clone(), is_library_file, extractor.records)
    }
}

/// Instance counts keyed by the id of the component they instantiate
fn count_instances(root: &FigmaNode) -> HashMap<&str, u32> {
    let mut counts = HashMap::new();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.node_type == NODE_INSTANCE {
            if let Some(component_id) = node.component_id.as_deref() {
                *counts.entry(component_id).or_insert(0) += 1;
            }
        }
        stack.extend(node.children.iter());
    }
    counts
}

struct Extractor<'a> {
    file: &'a FigmaFile,
    published: &'a HashMap<&'a str, &'a PublishedComponent>,
    instance_counts: &'a HashMap<&'a str, u32>,
    is_library_file: bool,
    records: Vec<ComponentRecord>,
}

impl<'a> Extractor<'a> {
    /// Depth-first in document order, tracking the enclosing page
    fn walk(&mut self, root: &'a FigmaNode) {
        let mut stack: Vec<(&FigmaNode, Option<&str>)> = vec![(root, None)];

        while let Some((node, page)) = stack.pop() {
            let page = if node.node_type == NODE_CANVAS {
                Some(node.name.as_str())
            } else {
                page
            };

            match node.node_type.as_str() {
                NODE_COMPONENT_SET => self.push_component_set(node, page),
                NODE_COMPONENT => {
                    let usage = self.usage_of(node);
                    self.push_record(node, None, ComponentType::Component, usage, page);
                }
                _ => {}
            }

            // Set members were emitted with their set; their own subtrees may still nest components
            let children = node.children.iter().rev();
            if node.node_type == NODE_COMPONENT_SET {
                for child in children {
                    stack.extend(child.children.iter().rev().map(|grandchild| (grandchild, page)));
                }
            } else {
                stack.extend(children.map(|child| (child, page)));
            }
        }
    }

    fn push_component_set(&mut self, set: &FigmaNode, page: Option<&str>) {
        let members: Vec<&FigmaNode> = set
            .children
            .iter()
            .filter(|child| child.node_type == NODE_COMPONENT)
            .collect();
        let set_usage = members.iter().map(|member| self.usage_of(member)).sum();

        self.push_record(set, None, ComponentType::ComponentSet, set_usage, page);
        for member in members {
            let usage = self.usage_of(member);
            self.push_record(member, Some(set.name.as_str()), ComponentType::Component, usage, page);
        }
    }

    fn usage_of(&self, node: &FigmaNode) -> u32 {
        self.instance_counts
            .get(node.id.as_str())
            .copied()
            .unwrap_or(0)
    }

    fn push_record(
        &mut self,
        node: &FigmaNode,
        set_name: Option<&str>,
        component_type: ComponentType,
        usage_count: u32,
        page: Option<&str>,
    ) {
        let file_metadata = match component_type {
            ComponentType::Component => self.file.components.get(&node.id),
            ComponentType::ComponentSet => self.file.component_sets.get(&node.id),
        };
        let published = self.published.get(node.id.as_str()).copied();

        let description = published
            .and_then(|entry| entry.description.clone())
            .filter(|description| !description.is_empty())
            .or_else(|| file_metadata.map(|metadata| metadata.description.clone()))
            .unwrap_or_default();

        let mut record = ComponentRecord::new(node.name.clone(), component_type);
        if let Some(set_name) = set_name {
            record = record.with_component_set(set_name);
        }

        // A deprecated set deprecates its members
        let is_deprecated = is_deprecated_by_naming(&record.grouping_name(), &description);
        record = record
            .with_id(node.id.clone())
            .with_deprecated(is_deprecated)
            .with_description(description)
            .with_usage_count(usage_count)
            .with_library_file(self.is_library_file);

        if let Some(bbox) = node.absolute_bounding_box {
            record = record.with_bounding_box(bbox.width, bbox.height);
        }
        if let Some(page) = page {
            record = record.with_page(page);
        }
        if let Some(entry) = published {
            record.thumbnail_url = entry.thumbnail_url.clone();
            record.last_modified = entry.updated_at;
        }

        self.records.push(record);
    }
}
