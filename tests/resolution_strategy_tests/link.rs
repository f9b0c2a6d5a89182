use super::test_utils::{create_resolver, Call, MockServices};
use link_resolver::ExpressionKind;
use pretty_assertions::assert_eq;

#[test]
fn test_slug_for_requested_language() {
    let mock = MockServices::new().with_slug(ExpressionKind::Product, 42, 2, "wanderschuh");
    let (resolver, mock) = create_resolver(mock, 1);

    let result = resolver.get_link("product:42", 2);

    assert_eq!(result.resolved, "/product/wanderschuh");
    assert_eq!(mock.count(|c| matches!(c, Call::Slug { .. })), 1);
}

#[test]
fn test_category_falls_back_to_neutral_slug() {
    let mock = MockServices::new().with_slug(ExpressionKind::Category, 10, 0, "outdoor-gear");
    let (resolver, mock) = create_resolver(mock, 1);

    let result = resolver.get_link("category:10", 2);

    assert_eq!(result.kind, ExpressionKind::Category);
    assert_eq!(result.resolved, "/category/outdoor-gear");
    assert_eq!(
        mock.calls(),
        vec![
            Call::Slug {
                id: 10,
                entity: "Category".to_string(),
                language: 2,
            },
            Call::Slug {
                id: 10,
                entity: "Category".to_string(),
                language: 0,
            },
            Call::Route {
                entity: "Category".to_string(),
                se_name: "outdoor-gear".to_string(),
            },
        ]
    );
}

#[test]
fn test_missing_slug_leaves_link_empty() {
    let (resolver, mock) = create_resolver(MockServices::new(), 1);

    let result = resolver.get_link("topic:7", 1);

    assert_eq!(result.kind, ExpressionKind::Topic);
    assert_eq!(result.resolved, "");
    assert_eq!(mock.count(|c| matches!(c, Call::Route { .. })), 0);
    assert_eq!(mock.count(|c| matches!(c, Call::Slug { .. })), 2);
}

#[test]
fn test_every_routed_kind_uses_its_own_route() {
    for (kind, raw) in [
        (ExpressionKind::Product, "product:3"),
        (ExpressionKind::Category, "category:3"),
        (ExpressionKind::Manufacturer, "manufacturer:3"),
        (ExpressionKind::Topic, "topic:3"),
    ] {
        let mock = MockServices::new().with_slug(kind, 3, 1, "slug");
        let (resolver, _mock) = create_resolver(mock, 1);

        let expected = format!("/{}/slug", kind.as_str().to_lowercase());
        assert_eq!(resolver.get_link(raw, 0).resolved, expected);
    }
}

#[test]
fn test_router_failure_resolves_empty() {
    let mut mock = MockServices::new().with_slug(ExpressionKind::Product, 42, 1, "shoe");
    mock.fail_router = true;
    let (resolver, _mock) = create_resolver(mock, 1);

    assert_eq!(resolver.get_link("product:42", 1).resolved, "");
}

#[test]
fn test_media_delegates_to_media_service() {
    let mock = MockServices::new().with_media_url(5, "/media/0000005/red-shoe.jpg");
    let (resolver, mock) = create_resolver(mock, 1);

    let result = resolver.get_link("media:5", 1);

    assert_eq!(result.resolved, "/media/0000005/red-shoe.jpg");
    assert_eq!(mock.calls(), vec![Call::MediaUrl(5)]);
}

#[test]
fn test_url_expansion() {
    let (resolver, mock) = create_resolver(MockServices::new(), 1);

    assert_eq!(resolver.get_link("url:~/contact", 1).resolved, "/app/contact");
    assert_eq!(resolver.get_link("url:/contact", 1).resolved, "/contact");
    assert_eq!(mock.calls(), vec![Call::Expand("~/contact".to_string())]);
}

#[test]
fn test_rejected_virtual_path_is_kept() {
    let (resolver, _mock) = create_resolver(MockServices::new(), 1);

    assert_eq!(resolver.get_link("url:~contact", 1).resolved, "~contact");
}

#[test]
fn test_bare_virtual_path_without_prefix() {
    let (resolver, _mock) = create_resolver(MockServices::new(), 1);

    let result = resolver.get_link("~/about", 1);

    assert_eq!(result.kind, ExpressionKind::Url);
    assert_eq!(result.resolved, "/app/about");
}

#[test]
fn test_file_passes_through() {
    let (resolver, mock) = create_resolver(MockServices::new(), 1);

    assert_eq!(resolver.get_link("file:/files/spec.pdf", 1).resolved, "/files/spec.pdf");
    assert_eq!(mock.call_count(), 0);
}
