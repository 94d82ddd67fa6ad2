use modelforge_build::{
    AttributeDraft, EntityDraft, IndexAttributeRef, IndexDraft, ModelCompiler, ModelError,
    RelationshipDraft, Validation,
};
use modelforge_core::{
    AttributeType, AttributeValue, Cardinality, DeleteRule, build_delete_graph_report,
    validate_schema,
};

fn person_email_compiler() -> ModelCompiler {
    ModelCompiler::new()
        .entity(EntityDraft::new(
            "Person",
            [AttributeDraft::new("firstName", AttributeType::String).required(true)],
        ))
        .entity(EntityDraft::new(
            "Email",
            [AttributeDraft::new("address", AttributeType::String)
                .required(true)
                .default_value(AttributeValue::String(String::new()))],
        ))
        .relationship(RelationshipDraft::has_many("Person.emails", "Email.person").unwrap())
}

#[test]
fn compiles_person_email_model() {
    let schema = person_email_compiler().compile().expect("compile model");

    assert_eq!(schema.entities.len(), 2);
    assert_eq!(schema.relationships.len(), 1);

    let person = &schema.entities["Person"];
    let emails = person.relationship("emails").expect("Person.emails");
    assert_eq!(emails.cardinality, Cardinality { min: 0, max: None });
    assert_eq!(emails.destination_entity, "Email");
    assert_eq!(emails.inverse_property, "person");
    assert_eq!(emails.delete_rule, DeleteRule::Cascade);

    let email = &schema.entities["Email"];
    let person_property = email.relationship("person").expect("Email.person");
    assert_eq!(
        person_property.cardinality,
        Cardinality {
            min: 1,
            max: Some(1)
        }
    );
    assert_eq!(person_property.destination_entity, "Person");
    assert_eq!(person_property.inverse_property, "emails");
    assert_eq!(person_property.delete_rule, DeleteRule::Nullify);

    validate_schema(&schema).expect("compiled schema is internally consistent");
}

#[test]
fn one_to_one_cardinalities() {
    let schema = ModelCompiler::new()
        .entity(EntityDraft::new(
            "Person",
            [AttributeDraft::new("firstName", AttributeType::String)],
        ))
        .entity(EntityDraft::new(
            "Passport",
            [AttributeDraft::new("number", AttributeType::String)],
        ))
        .relationship(RelationshipDraft::has_one("Person.passport", "Passport.holder").unwrap())
        .compile()
        .expect("compile model");

    let relationship = &schema.relationships[0];
    assert_eq!(
        relationship.source.cardinality,
        Cardinality {
            min: 0,
            max: Some(1)
        }
    );
    assert_eq!(
        relationship.destination.cardinality,
        Cardinality {
            min: 1,
            max: Some(1)
        }
    );
}

#[test]
fn delete_rule_overrides_are_honored() {
    let schema = ModelCompiler::new()
        .entity(EntityDraft::new(
            "Person",
            [AttributeDraft::new("firstName", AttributeType::String)],
        ))
        .entity(EntityDraft::new(
            "Email",
            [AttributeDraft::new("address", AttributeType::String)],
        ))
        .relationship(
            RelationshipDraft::has_many("Person.emails", "Email.person")
                .unwrap()
                .delete_rules(DeleteRule::Deny, DeleteRule::NoAction),
        )
        .compile()
        .expect("compile model");

    let relationship = &schema.relationships[0];
    assert_eq!(relationship.source.delete_rule, DeleteRule::Deny);
    assert_eq!(relationship.destination.delete_rule, DeleteRule::NoAction);
}

#[test]
fn duplicate_attribute_names_fail_compilation() {
    let result = ModelCompiler::new()
        .entity(EntityDraft::new(
            "Person",
            [
                AttributeDraft::new("firstName", AttributeType::String),
                AttributeDraft::new("firstName", AttributeType::String),
            ],
        ))
        .compile();

    assert!(matches!(
        result,
        Err(ModelError::DuplicateAttribute { .. })
    ));
}

#[test]
fn duplicate_entity_names_fail_compilation() {
    let result = ModelCompiler::new()
        .entity(EntityDraft::new(
            "Person",
            [AttributeDraft::new("firstName", AttributeType::String)],
        ))
        .entity(EntityDraft::new(
            "Person",
            [AttributeDraft::new("lastName", AttributeType::String)],
        ))
        .compile();

    assert!(matches!(result, Err(ModelError::DuplicateEntity(_))));
}

#[test]
fn empty_index_fails_compilation() {
    let result = ModelCompiler::new()
        .entity(
            EntityDraft::new("X", [AttributeDraft::new("a", AttributeType::String)])
                .indexing([IndexDraft::new("idx", [])]),
        )
        .compile();

    assert!(matches!(result, Err(ModelError::EmptyIndex { .. })));
}

#[test]
fn index_referencing_unknown_attribute_fails_compilation() {
    let result = ModelCompiler::new()
        .entity(
            EntityDraft::new("X", [AttributeDraft::new("a", AttributeType::String)])
                .indexing([IndexDraft::new("idx", [IndexAttributeRef::new("missing")])]),
        )
        .compile();

    assert!(matches!(
        result,
        Err(ModelError::UnknownIndexAttribute { .. })
    ));
}

#[test]
fn uniqueness_constraint_with_unknown_attribute_fails_compilation() {
    let result = ModelCompiler::new()
        .entity(
            EntityDraft::new("X", [AttributeDraft::new("a", AttributeType::String)])
                .unique(["missing"]),
        )
        .compile();

    assert!(matches!(
        result,
        Err(ModelError::UnknownConstraintAttribute { .. })
    ));
}

#[test]
fn relationship_to_undeclared_entity_fails_compilation() {
    let result = ModelCompiler::new()
        .entity(EntityDraft::new(
            "Person",
            [AttributeDraft::new("firstName", AttributeType::String)],
        ))
        .relationship(RelationshipDraft::has_many("Person.emails", "Email.person").unwrap())
        .compile();

    assert!(matches!(
        result,
        Err(ModelError::UnknownRelationshipEntity(_))
    ));
}

#[test]
fn default_value_type_mismatch_fails_compilation() {
    let result = ModelCompiler::new()
        .entity(EntityDraft::new(
            "Person",
            [AttributeDraft::new("age", AttributeType::Integer)
                .default_value(AttributeValue::Boolean(true))],
        ))
        .compile();

    assert!(matches!(
        result,
        Err(ModelError::DefaultTypeMismatch { .. })
    ));
}

#[test]
fn invalid_length_range_fails_compilation() {
    let result = ModelCompiler::new()
        .entity(EntityDraft::new(
            "Person",
            [
                AttributeDraft::new("firstName", AttributeType::String).validating([
                    Validation::Length {
                        min: 9,
                        max: 3,
                        message: "bad range".to_string(),
                    },
                ]),
            ],
        ))
        .compile();

    assert!(matches!(
        result,
        Err(ModelError::InvalidLengthRange { .. })
    ));
}

#[test]
fn identical_declarations_compile_to_equal_schemas() {
    let first = person_email_compiler().compile().expect("first compile");
    let second = person_email_compiler().compile().expect("second compile");

    assert_eq!(first, second);
}

#[test]
fn entity_post_configuration_is_carried_into_the_schema() {
    let schema = ModelCompiler::new()
        .entity(
            EntityDraft::new(
                "Person",
                [
                    AttributeDraft::new("firstName", AttributeType::String).required(true),
                    AttributeDraft::new("isEnabled", AttributeType::Boolean)
                        .required(true)
                        .default_value(AttributeValue::Boolean(true)),
                ],
            )
            .backing_type("app.Person")
            .configuration("InMemory")
            .configuration("InMemory")
            .unique(["firstName"])
            .indexing([IndexDraft::new(
                "index-enabled",
                [IndexAttributeRef::new("isEnabled")],
            )]),
        )
        .compile()
        .expect("compile model");

    let person = &schema.entities["Person"];
    assert_eq!(person.backing_type.as_deref(), Some("app.Person"));
    assert_eq!(person.configurations.len(), 1);
    assert!(person.configurations.contains("InMemory"));
    assert_eq!(person.uniqueness_constraints.len(), 1);
    assert_eq!(person.indexes.len(), 1);
    assert_eq!(person.indexes[0].attributes[0].name, "isEnabled");
}

#[test]
fn cascade_edges_produce_a_teardown_order() {
    let schema = person_email_compiler().compile().expect("compile model");
    let report = build_delete_graph_report(&schema);

    let order = report.topo_order.expect("acyclic cascade graph");
    let person_idx = order.iter().position(|name| name == "Person").unwrap();
    let email_idx = order.iter().position(|name| name == "Email").unwrap();
    assert!(person_idx < email_idx);
}
