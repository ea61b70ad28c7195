//! Integration tests for building view models from a Swagger document

use std::path::PathBuf;
use swagger_docgen_common::{HttpMethod, ParameterLocation, ValidationError};
use swagger_docgen_parser::SwaggerParser;
use swagger_docgen_view::{
    build, BuildOptions, DocumentView, MethodOrder, OperationView, ViewModelBuilder,
};

fn load_paths_document() -> swagger_docgen_common::Document {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/paths.yaml");
    SwaggerParser::from_file(&path)
        .expect("Failed to load paths fixture")
        .into_document()
}

fn build_paths_view() -> DocumentView {
    build(&load_paths_document()).expect("Failed to build view model")
}

fn find<'a>(view: &'a DocumentView, method: HttpMethod, path: &str) -> &'a OperationView {
    view.operation(method, path)
        .unwrap_or_else(|| panic!("{} {} not found", method, path))
}

#[test]
fn test_one_view_per_operation() {
    let view = build_paths_view();

    let titles: Vec<String> = view
        .operations
        .iter()
        .map(|op| format!("{} {}", op.method, op.path))
        .collect();

    assert_eq!(
        titles,
        vec![
            "GET /deprecated/resource",
            "GET /user/{id}",
            "PUT /user/{id}",
            "POST /user/{id}",
            "DELETE /user/{id}",
            "OPTIONS /user/{id}",
            "HEAD /user/{id}",
            "PATCH /user/{id}",
            "GET /user/{id}/bag/{bagId}/item/{itemId}",
            "GET /without/params",
            "POST /without/params",
        ]
    );
}

#[test]
fn test_alphabetical_order_matches_rendered_panels() {
    let builder = ViewModelBuilder::new(
        BuildOptions::default().with_method_order(MethodOrder::Alphabetical),
    );
    let view = builder.build(&load_paths_document()).unwrap();

    let titles: Vec<String> = view
        .operations
        .iter()
        .map(|op| format!("{} {}", op.method, op.path))
        .collect();

    assert_eq!(
        titles.join(" "),
        "GET /deprecated/resource DELETE /user/{id} GET /user/{id} HEAD /user/{id} \
         OPTIONS /user/{id} PATCH /user/{id} POST /user/{id} PUT /user/{id} \
         GET /user/{id}/bag/{bagId}/item/{itemId} GET /without/params POST /without/params"
    );
}

#[test]
fn test_summary_and_operation_id() {
    let view = build_paths_view();

    let post = find(&view, HttpMethod::Post, "/user/{id}");
    assert_eq!(post.summary.as_deref(), Some("Add a user"));
    assert_eq!(post.operation_id.as_deref(), Some("1123402313"));
    assert_eq!(post.html_id, "operation--user--id--post");

    let get = find(&view, HttpMethod::Get, "/user/{id}");
    assert_eq!(get.operation_id, None);
}

#[test]
fn test_deprecation() {
    let view = build_paths_view();

    assert!(find(&view, HttpMethod::Get, "/deprecated/resource").deprecated);
    assert!(!find(&view, HttpMethod::Post, "/user/{id}").deprecated);
}

#[test]
fn test_explicit_consumes_produces_schemes() {
    let view = build_paths_view();
    let post = find(&view, HttpMethod::Post, "/user/{id}");

    assert_eq!(post.consumes.values, vec!["application/json", "application/xml"]);
    assert!(!post.consumes.is_fallback);
    assert_eq!(post.produces.values, vec!["application/json", "application/xml"]);
    assert!(!post.produces.is_fallback);
    assert_eq!(post.schemes.values, vec!["http", "https", "ws", "wss"]);
    assert!(!post.schemes.is_fallback);
}

#[test]
fn test_fallback_consumes_produces_schemes() {
    let view = build_paths_view();
    let get = find(&view, HttpMethod::Get, "/user/{id}");

    assert_eq!(get.consumes.values, vec!["application/json"]);
    assert!(get.consumes.is_fallback);
    assert_eq!(get.produces.values, vec!["application/xml"]);
    assert!(get.produces.is_fallback);
    assert_eq!(get.schemes.values, vec!["https"]);
    assert!(get.schemes.is_fallback);
}

#[test]
fn test_explicit_empty_consumes_is_not_fallback() {
    let view = build_paths_view();
    let head = find(&view, HttpMethod::Head, "/user/{id}");

    assert!(head.consumes.values.is_empty());
    assert!(!head.consumes.is_fallback);
    assert!(head.produces.is_fallback);
}

#[test]
fn test_overridden_path_parameter() {
    let view = build_paths_view();
    let get = find(&view, HttpMethod::Get, "/user/{id}");

    let names: Vec<&str> = get.parameters.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["id", "levelOfDetail"]);
    assert_eq!(
        get.parameters[0].description.as_deref(),
        Some("Override of the id-parameter")
    );
    assert!(get.has_displayable_parameters);
}

#[test]
fn test_inherited_path_parameter() {
    let view = build_paths_view();
    let delete = find(&view, HttpMethod::Delete, "/user/{id}");

    assert_eq!(delete.parameters.len(), 1);
    assert_eq!(
        delete.parameters[0].description.as_deref(),
        Some("The ID of the user")
    );
    assert_eq!(delete.parameters[0].location, ParameterLocation::Path);
    assert!(delete.has_displayable_parameters);
}

#[test]
fn test_no_parameters_section_without_parameters() {
    let view = build_paths_view();

    let get = find(&view, HttpMethod::Get, "/without/params");
    assert!(get.parameters.is_empty());
    assert!(!get.has_displayable_parameters);

    let post = find(&view, HttpMethod::Post, "/without/params");
    assert_eq!(post.parameters.len(), 1);
    assert!(!post.has_displayable_parameters);
}

#[test]
fn test_body_parameter_merged_with_path_parameter() {
    let view = build_paths_view();
    let post = find(&view, HttpMethod::Post, "/user/{id}");

    let locations: Vec<ParameterLocation> = post.parameters.iter().map(|p| p.location).collect();
    assert_eq!(
        locations,
        vec![ParameterLocation::Path, ParameterLocation::Body]
    );
    assert!(post.has_displayable_parameters);
}

#[test]
fn test_responses_in_declaration_order() {
    let view = build_paths_view();
    let get = find(&view, HttpMethod::Get, "/user/{id}");

    assert_eq!(get.responses.len(), 2);
    assert_eq!(get.responses[0].code, "200");
    assert_eq!(get.responses[0].reason.as_deref(), Some("OK"));
    assert!(get.responses[0].response.schema.is_some());
    assert_eq!(get.responses[1].code, "404");
    assert_eq!(get.responses[1].reason.as_deref(), Some("Not Found"));
}

#[test]
fn test_external_docs() {
    let view = build_paths_view();

    let get = find(&view, HttpMethod::Get, "/user/{id}");
    let link = get.external_docs.as_ref().unwrap();
    assert_eq!(link.href, "http://example.com/get-user");
    assert_eq!(link.text, "An **external** documentation");

    let post = find(&view, HttpMethod::Post, "/user/{id}");
    let link = post.external_docs.as_ref().unwrap();
    assert_eq!(link.href, "http://example.com/post-user");
    assert_eq!(link.text, "http://example.com/post-user");

    let put = find(&view, HttpMethod::Put, "/user/{id}");
    assert!(put.external_docs.is_none());

    let doc_link = view.external_docs.as_ref().unwrap();
    assert_eq!(doc_link.text, "http://example.com/docs");
}

#[test]
fn test_document_metadata() {
    let view = build_paths_view();

    assert_eq!(view.title, "Paths");
    assert_eq!(view.version, "1.0");
    assert_eq!(
        view.description.as_deref(),
        Some("Operations with shared and overridden parameters")
    );
}

#[test]
fn test_missing_responses_fail_the_build() {
    let yaml = r#"
swagger: "2.0"
info:
  title: Broken
  version: "1.0"
paths:
  /pets:
    get:
      summary: List pets
"#;
    let document = SwaggerParser::from_yaml(yaml).unwrap().into_document();

    let err = build(&document).unwrap_err();
    assert!(matches!(err, ValidationError::MissingResponses { .. }));
    assert_eq!(err.to_string(), "GET /pets: operation declares no responses");
}

#[test]
fn test_duplicate_parameter_fails_the_build() {
    let json = r#"{
        "swagger": "2.0",
        "info": {"title": "Broken", "version": "1.0"},
        "paths": {
            "/pets": {
                "get": {
                    "parameters": [
                        {"name": "limit", "in": "query", "type": "integer"},
                        {"name": "limit", "in": "query", "type": "string"}
                    ],
                    "responses": {"200": {"description": "OK"}}
                }
            }
        }
    }"#;
    let document = SwaggerParser::from_json(json).unwrap().into_document();

    let err = build(&document).unwrap_err();
    assert!(matches!(err, ValidationError::DuplicateParameter { .. }));
}

#[test]
fn test_document_without_paths_fails_the_build() {
    let json = r#"{
        "swagger": "2.0",
        "info": {"title": "Empty", "version": "1.0"},
        "paths": {}
    }"#;
    let document = SwaggerParser::from_json(json).unwrap().into_document();

    assert_eq!(build(&document), Err(ValidationError::EmptyDocument));
}

#[test]
fn test_build_does_not_touch_input() {
    let document = load_paths_document();
    let before = document.clone();

    let first = build(&document).unwrap();
    let second = build(&document).unwrap();

    assert_eq!(document, before);
    assert_eq!(first, second);
}

#[test]
fn test_vendor_extensions_under_paths_are_ignored() {
    let yaml = r#"
swagger: "2.0"
info:
  title: Extended
  version: "1.0"
paths:
  x-note: hello
  /pets:
    get:
      responses:
        "200":
          description: OK
  x-meta:
    owner: team
"#;
    let document = SwaggerParser::from_yaml(yaml).unwrap().into_document();

    let view = build(&document).unwrap();
    assert_eq!(view.operations.len(), 1);
    assert_eq!(view.operations[0].path, "/pets");
}
