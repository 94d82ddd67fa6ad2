use modelforge_build::{
    AttributeDraft, EntityDraft, IndexAttributeRef, IndexDraft, ModelCompiler, RelationshipDraft,
    Validation,
};
use modelforge_core::{AttributeType, AttributeValue, build_delete_graph_report};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .init();

    let schema = ModelCompiler::new()
        .entity(
            EntityDraft::new(
                "Person",
                [
                    AttributeDraft::new("firstName", AttributeType::String)
                        .required(true)
                        .validating([Validation::LengthAtLeast {
                            min: 1,
                            message: "FirstName is required".to_string(),
                        }]),
                    AttributeDraft::new("lastName", AttributeType::String)
                        .required(true)
                        .validating([Validation::Length {
                            min: 1,
                            max: 64,
                            message: "Lastname is required".to_string(),
                        }]),
                    AttributeDraft::new("isEnabled", AttributeType::Boolean)
                        .required(true)
                        .default_value(AttributeValue::Boolean(true)),
                ],
            )
            .backing_type("app.Person")
            .configuration("InMemory")
            .indexing([IndexDraft::new(
                "index-enabled",
                [IndexAttributeRef::new("isEnabled")],
            )]),
        )
        .entity(
            EntityDraft::new(
                "Email",
                [AttributeDraft::new("addressValue", AttributeType::String)
                    .required(true)
                    .default_value(AttributeValue::String(String::new()))
                    .validating([Validation::LengthAtLeast {
                        min: 5,
                        message: "Email address must be present and longer than 5 characters"
                            .to_string(),
                    }])],
            )
            .configuration("InMemory"),
        )
        .relationship(
            RelationshipDraft::has_many("Person.emails", "Email.person").expect("valid paths"),
        )
        .compile()
        .expect("compile model");

    let json = serde_json::to_string_pretty(&schema).expect("serialize schema");
    println!("{json}");

    let report = build_delete_graph_report(&schema);
    if let Some(order) = report.topo_order {
        println!("teardown order: {}", order.join(" -> "));
    }
}
