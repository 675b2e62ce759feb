use jsonhome::{Error, Method, Resource, Variables};
use pretty_assertions::assert_eq;
use serde_json::json;

fn to_value(resource: &Resource) -> serde_json::Value {
    serde_json::to_value(resource).expect("resource must serialize")
}

fn vars(pairs: &[(&str, &str)]) -> Variables {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_allow() {
    let mut res = Resource::new();
    res.allow_mut().extend(["GET".to_owned(), "PATCH".to_owned()]);
    res.allow_mut().push("POST".to_owned());

    assert_eq!(res.allow(), ["GET", "PATCH", "POST"]);
    assert_eq!(
        to_value(&res),
        json!({"hints": {"allow": ["GET", "PATCH", "POST"]}})
    );
}

#[test]
fn test_allow_methods() {
    let mut res = Resource::new();

    res.set_allowed(Method::Get, true);
    assert_eq!(res.allowed(Method::Get), Some(true));
    assert_eq!(res.allowed(Method::Post), Some(false));
    assert_eq!(res.allow(), ["GET"]);

    res.set_allowed(Method::Post, true);
    assert_eq!(res.allowed(Method::Post), Some(true));
    assert_eq!(res.allow(), ["GET", "POST"]);

    res.set_allowed(Method::Get, false);
    assert_eq!(res.allowed(Method::Get), Some(false));
    assert_eq!(res.allow(), ["POST"]);
}

#[test]
fn test_allow_unknown_without_hint() {
    let res = Resource::new();

    assert_eq!(res.allowed(Method::Get), None);
    assert_eq!(res.is_allowed("GET"), None);
}

#[test]
fn test_is_allowed_present_once_list_exists() {
    let mut res = Resource::new();
    res.allow_mut();

    assert_eq!(res.is_allowed("GET"), Some(false));

    res.set_allowed(Method::Get, true);
    assert_eq!(res.is_allowed("get"), Some(true));
    assert_eq!(res.is_allowed("GET"), Some(true));
}

#[test]
fn test_docs() {
    let mut res = Resource::new();
    res.set_docs("doc-location");

    assert_eq!(res.docs(), Some("doc-location"));
    assert_eq!(to_value(&res), json!({"hints": {"docs": "doc-location"}}));
}

#[test]
fn test_accept_patch() {
    let format = "application/json-patch";
    let mut res = Resource::new();
    res.accept_patch_mut().push(format.to_owned());

    assert_eq!(res.accept_patch(), [format]);
    assert_eq!(to_value(&res), json!({"hints": {"accept-patch": [format]}}));
}

#[test]
fn test_accept_post() {
    let format = "application/json";
    let mut res = Resource::new();
    res.accept_post_mut().push(format.to_owned());

    assert_eq!(res.accept_post(), [format]);
    assert_eq!(to_value(&res), json!({"hints": {"accept-post": [format]}}));
}

#[test]
fn test_accept_ranges() {
    let mut res = Resource::new();
    res.accept_ranges_mut().push("bytes".to_owned());

    assert_eq!(res.accept_ranges(), ["bytes"]);
    assert_eq!(to_value(&res), json!({"hints": {"accept-ranges": ["bytes"]}}));
}

#[test]
fn test_accept_prefer() {
    let mut res = Resource::new();
    res.accept_prefer_mut().push("preference".to_owned());

    assert_eq!(res.accept_prefer(), ["preference"]);
    assert_eq!(
        to_value(&res),
        json!({"hints": {"accept-prefer": ["preference"]}})
    );
}

#[test]
fn test_href() {
    let mut res = Resource::new();
    res.set_href("href-value");

    assert_eq!(res.href(), Some("href-value"));
    assert_eq!(res.get_uri(&Variables::new()).unwrap(), "href-value");
    assert_eq!(to_value(&res), json!({"href": "href-value"}));
}

#[test]
fn test_get_uri_ignores_variables_with_href() {
    let mut res = Resource::new();
    res.set_href("/fixed");

    let uri = res.get_uri(&vars(&[("param", "ignored")])).unwrap();
    assert_eq!(uri, "/fixed");
}

#[test]
fn test_get_uri_expands_template() {
    let mut res = Resource::new();
    res.set_uri("/path{/param}", &vars(&[("param", "about-param")]))
        .unwrap();

    assert_eq!(res.get_uri(&vars(&[("param", "val")])).unwrap(), "/path/val");
    assert_eq!(res.get_uri(&Variables::new()).unwrap(), "/path");
}

#[test]
fn test_get_uri_without_href_or_template() {
    let res = Resource::new();

    let err = res.get_uri(&Variables::new()).unwrap_err();
    assert!(matches!(err, Error::MissingValues(_)), "{err}");
}

#[test]
fn test_builder_with_absolute_uri() {
    let res = Resource::builder().uri("href-value").build().unwrap();

    assert_eq!(res.href(), Some("href-value"));
    assert_eq!(res.href_template(), None);
    assert_eq!(to_value(&res), json!({"href": "href-value"}));
}

#[test]
fn test_builder_with_template_uri() {
    let res = Resource::builder()
        .uri("/path{/param}")
        .uri_vars([("param", "foo")])
        .build()
        .unwrap();

    assert_eq!(res.href(), None);
    assert_eq!(res.href_template(), Some("/path{/param}"));
    assert_eq!(res.href_vars(), &vars(&[("param", "foo")]));
    assert_eq!(
        to_value(&res),
        json!({"href-template": "/path{/param}", "href-vars": {"param": "foo"}})
    );
}

#[test]
fn test_builder_not_enough_variables() {
    let err = Resource::builder()
        .uri("/path{/param}")
        .build()
        .unwrap_err();

    assert!(matches!(err, Error::MissingValues(_)), "{err}");
    assert!(err.to_string().contains("param"), "{err}");
}

#[test]
fn test_builder_ignores_extra_uri_vars() {
    let res = Resource::builder()
        .uri("/path{/param}")
        .uri_vars([("param", "foo"), ("extra", "vals"), ("are", "ignored")])
        .build()
        .unwrap();

    assert_eq!(
        to_value(&res),
        json!({"href-template": "/path{/param}", "href-vars": {"param": "foo"}})
    );
}

#[test]
fn test_builder_ignores_unused_uri_vars() {
    let res = Resource::builder()
        .href("href-value")
        .uri_vars([("param", "foo"), ("extra", "vals")])
        .build()
        .unwrap();

    assert_eq!(to_value(&res), json!({"href": "href-value"}));
}

#[test]
fn test_builder_conflicting_href_and_template() {
    let err = Resource::builder()
        .href("a")
        .href_template("b")
        .build()
        .unwrap_err();

    assert!(matches!(err, Error::ConflictingUri(_)), "{err}");
}

#[test]
fn test_builder_conflicting_uri_and_href() {
    let err = Resource::builder().uri("a").href("b").build().unwrap_err();

    assert!(matches!(err, Error::ConflictingUri(_)), "{err}");
}

#[test]
fn test_builder_conflicting_uri_and_href_vars() {
    let err = Resource::builder()
        .uri("a")
        .href_vars([("param", "foo")])
        .build()
        .unwrap_err();

    assert!(matches!(err, Error::ConflictingUri(_)), "{err}");
}

#[test]
fn test_builder_accept_patch_implies_allow_patch() {
    let format = "application/json-patch";
    let res = Resource::builder().accept_patch([format]).build().unwrap();

    assert_eq!(res.accept_patch(), [format]);
    assert_eq!(res.allowed(Method::Patch), Some(true));
    assert_eq!(res.allow(), ["PATCH"]);
}

#[test]
fn test_builder_accept_post_implies_allow_post() {
    let format = "application/json";
    let res = Resource::builder().accept_post([format]).build().unwrap();

    assert_eq!(res.accept_post(), [format]);
    assert_eq!(res.allowed(Method::Post), Some(true));
    assert_eq!(res.allow(), ["POST"]);
}

#[test]
fn test_builder_explicit_allow_patch_wins() {
    let res = Resource::builder()
        .accept_patch(["application/json-patch"])
        .allow_patch(false)
        .build()
        .unwrap();

    // An explicit flag suppresses the accept-patch implication. Disallowing
    // with no allow list present leaves the list unmaterialized.
    assert_eq!(res.allowed(Method::Patch), None);
    assert_eq!(
        to_value(&res),
        json!({"hints": {"accept-patch": ["application/json-patch"]}})
    );
}

#[test]
fn test_builder_allow_flags_in_canonical_order() {
    let res = Resource::builder()
        .allow_put(true)
        .allow_get(true)
        .allow_delete(true)
        .build()
        .unwrap();

    assert_eq!(res.allow(), ["DELETE", "GET", "PUT"]);
}

#[test]
fn test_builder_empty_equals_new() {
    let res = Resource::builder().build().unwrap();

    assert_eq!(res, Resource::new());
    assert_eq!(to_value(&res), json!({}));
}

#[test]
fn test_structural_equality() {
    let a = Resource::builder()
        .href("/x")
        .allow_get(true)
        .build()
        .unwrap();

    let mut b = Resource::new();
    b.set_href("/x");
    b.set_allowed(Method::Get, true);

    assert_eq!(a, b);

    b.set_allowed(Method::Get, false);
    assert_ne!(a, b);
}
