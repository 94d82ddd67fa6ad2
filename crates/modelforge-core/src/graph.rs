use std::collections::{BTreeMap, BTreeSet};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::constraints::DeleteRule;
use crate::schema::Schema;

/// Summary of delete-propagation graph structure.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DeleteGraphSummary {
    pub nodes: usize,
    pub edges: usize,
}

/// Report for cascade-delete ordering across entities.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DeleteGraphReport {
    pub summary: DeleteGraphSummary,
    pub topo_order: Option<Vec<String>>,
    pub cycle: Option<Vec<String>>,
}

/// Build a deterministic cascade-delete dependency report for a schema.
///
/// An edge A -> B exists when a cascade relationship end owned by A
/// targets B, i.e. deleting an A propagates into Bs. When the graph is
/// acyclic, `topo_order` gives a safe teardown order for a consuming
/// engine; otherwise `cycle` lists the entities still holding edges.
pub fn build_delete_graph_report(schema: &Schema) -> DeleteGraphReport {
    let graph = build_adjacency(schema);
    let nodes = graph.len();
    let edges = graph.values().map(|targets| targets.len()).sum();
    let summary = DeleteGraphSummary { nodes, edges };

    match toposort(&graph) {
        Ok(order) => DeleteGraphReport {
            summary,
            topo_order: Some(order),
            cycle: None,
        },
        Err(cycle) => DeleteGraphReport {
            summary,
            topo_order: None,
            cycle: Some(cycle),
        },
    }
}

fn build_adjacency(schema: &Schema) -> BTreeMap<String, BTreeSet<String>> {
    let mut graph: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

    for entity in schema.entities.values() {
        graph.entry(entity.name.clone()).or_default();

        for property in &entity.relationships {
            if property.delete_rule == DeleteRule::Cascade {
                graph.entry(property.destination_entity.clone()).or_default();
                graph
                    .entry(entity.name.clone())
                    .or_default()
                    .insert(property.destination_entity.clone());
            }
        }
    }

    graph
}

fn toposort(graph: &BTreeMap<String, BTreeSet<String>>) -> Result<Vec<String>, Vec<String>> {
    let mut indegree: BTreeMap<String, usize> = BTreeMap::new();

    for node in graph.keys() {
        indegree.entry(node.clone()).or_insert(0);
    }

    for targets in graph.values() {
        for target in targets {
            let entry = indegree.entry(target.clone()).or_insert(0);
            *entry += 1;
        }
    }

    let mut ready: BTreeSet<String> = indegree
        .iter()
        .filter_map(|(node, count)| {
            if *count == 0 {
                Some(node.clone())
            } else {
                None
            }
        })
        .collect();

    let mut order = Vec::with_capacity(graph.len());
    let mut indegree = indegree;

    while let Some(node) = ready.iter().next().cloned() {
        ready.remove(&node);
        order.push(node.clone());

        if let Some(targets) = graph.get(&node) {
            for target in targets {
                if let Some(count) = indegree.get_mut(target) {
                    *count = count.saturating_sub(1);
                    if *count == 0 {
                        ready.insert(target.clone());
                    }
                }
            }
        }
    }

    if order.len() == graph.len() {
        Ok(order)
    } else {
        let cycle_nodes: Vec<String> = indegree
            .into_iter()
            .filter_map(|(node, count)| if count > 0 { Some(node) } else { None })
            .collect();
        Err(cycle_nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SCHEMA_VERSION;
    use crate::constraints::{Cardinality, RelationshipProperty};
    use crate::schema::Entity;
    use std::collections::BTreeMap;

    fn entity(name: &str, relationships: Vec<RelationshipProperty>) -> Entity {
        Entity {
            name: name.to_string(),
            attributes: Vec::new(),
            configurations: Default::default(),
            backing_type: None,
            uniqueness_constraints: Vec::new(),
            relationships,
            indexes: Vec::new(),
        }
    }

    fn cascade(name: &str, destination: &str, inverse: &str) -> RelationshipProperty {
        RelationshipProperty {
            name: name.to_string(),
            destination_entity: destination.to_string(),
            inverse_property: inverse.to_string(),
            cardinality: Cardinality::MANY,
            delete_rule: DeleteRule::Cascade,
        }
    }

    fn schema(entities: Vec<Entity>) -> Schema {
        Schema {
            schema_version: SCHEMA_VERSION.to_string(),
            entities: entities
                .into_iter()
                .map(|entity| (entity.name.clone(), entity))
                .collect::<BTreeMap<_, _>>(),
            relationships: Vec::new(),
        }
    }

    #[test]
    fn toposort_orders_cascade_dependencies() {
        let person = entity("Person", vec![cascade("emails", "Email", "person")]);
        let email = entity("Email", Vec::new());

        let report = build_delete_graph_report(&schema(vec![email, person]));
        assert_eq!(report.summary.nodes, 2);
        assert_eq!(report.summary.edges, 1);

        let order = report.topo_order.expect("expected toposort");
        let person_idx = order.iter().position(|item| item == "Person").unwrap();
        let email_idx = order.iter().position(|item| item == "Email").unwrap();
        assert!(person_idx < email_idx);
    }

    #[test]
    fn toposort_reports_cycle() {
        let person = entity("Person", vec![cascade("emails", "Email", "person")]);
        let email = entity("Email", vec![cascade("person", "Person", "emails")]);

        let report = build_delete_graph_report(&schema(vec![email, person]));
        assert!(report.topo_order.is_none());
        assert!(report.cycle.as_ref().unwrap().contains(&"Person".to_string()));
    }
}
