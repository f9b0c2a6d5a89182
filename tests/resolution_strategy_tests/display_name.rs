use super::test_utils::{create_resolver, Call, MockServices};
use link_resolver::{ExpressionKind, Payload};
use pretty_assertions::assert_eq;

#[test]
fn test_product_prefers_localized_name() {
    let mock = MockServices::new()
        .with_localized(2, ExpressionKind::Product, 42, "Name", "Wanderschuh")
        .with_field(ExpressionKind::Product, 42, "Name", "Trail Shoe");
    let (resolver, mock) = create_resolver(mock, 1);

    let result = resolver.get_display_name("product:42", 2);

    assert_eq!(result.kind, ExpressionKind::Product);
    assert_eq!(result.payload, Payload::EntityId(42));
    assert_eq!(result.resolved, "Wanderschuh");
    assert_eq!(mock.count(|c| matches!(c, Call::Field { .. })), 0);
}

#[test]
fn test_name_falls_back_to_entity_store() {
    for (kind, raw) in [
        (ExpressionKind::Product, "product:42"),
        (ExpressionKind::Category, "category:42"),
        (ExpressionKind::Manufacturer, "manufacturer:42"),
    ] {
        let mock = MockServices::new().with_field(kind, 42, "Name", "Base name");
        let (resolver, mock) = create_resolver(mock, 1);

        let result = resolver.get_display_name(raw, 1);

        assert_eq!(result.kind, kind);
        assert_eq!(result.resolved, "Base name");
        assert_eq!(
            mock.calls(),
            vec![
                Call::Localized {
                    language: 1,
                    id: 42,
                    entity: kind.as_str().to_string(),
                    field: "Name".to_string(),
                },
                Call::Field {
                    kind,
                    id: 42,
                    field: "Name".to_string(),
                },
            ]
        );
    }
}

#[test]
fn test_topic_short_title_wins() {
    let mock = MockServices::new()
        .with_localized(1, ExpressionKind::Topic, 7, "ShortTitle", "About")
        .with_localized(1, ExpressionKind::Topic, 7, "Title", "About us");
    let (resolver, mock) = create_resolver(mock, 1);

    assert_eq!(resolver.get_display_name("topic:7", 1).resolved, "About");
    assert_eq!(mock.call_count(), 1);
}

#[test]
fn test_topic_falls_back_to_title_without_system_name() {
    let mock = MockServices::new()
        .with_localized(1, ExpressionKind::Topic, 7, "Title", "About us")
        .with_field(ExpressionKind::Topic, 7, "SystemName", "AboutUs");
    let (resolver, mock) = create_resolver(mock, 1);

    let result = resolver.get_display_name("topic:7", 1);

    assert_eq!(result.resolved, "About us");
    assert_eq!(
        mock.calls(),
        vec![
            Call::Localized {
                language: 1,
                id: 7,
                entity: "Topic".to_string(),
                field: "ShortTitle".to_string(),
            },
            Call::Localized {
                language: 1,
                id: 7,
                entity: "Topic".to_string(),
                field: "Title".to_string(),
            },
        ]
    );
}

#[test]
fn test_topic_falls_back_to_system_name() {
    let mock = MockServices::new().with_field(ExpressionKind::Topic, 7, "SystemName", "AboutUs");
    let (resolver, mock) = create_resolver(mock, 1);

    assert_eq!(resolver.get_display_name("topic:7", 1).resolved, "AboutUs");
    assert_eq!(mock.call_count(), 3);
}

#[test]
fn test_media_reads_seo_filename_only() {
    let mock = MockServices::new().with_field(ExpressionKind::Media, 5, "SeoFilename", "red-shoe");
    let (resolver, mock) = create_resolver(mock, 1);

    let result = resolver.get_display_name("media:5", 0);

    assert_eq!(result.resolved, "red-shoe");
    assert_eq!(
        mock.calls(),
        vec![Call::Field {
            kind: ExpressionKind::Media,
            id: 5,
            field: "SeoFilename".to_string(),
        }]
    );
}

#[test]
fn test_url_virtual_path_is_expanded() {
    let (resolver, mock) = create_resolver(MockServices::new(), 1);

    let result = resolver.get_display_name("url:~/about", 1);

    assert_eq!(result.kind, ExpressionKind::Url);
    assert_eq!(result.payload, Payload::Text("~/about".into()));
    assert_eq!(result.resolved, "/app/about");
    assert_eq!(mock.calls(), vec![Call::Expand("~/about".to_string())]);
}

#[test]
fn test_plain_url_and_file_pass_through() {
    let (resolver, mock) = create_resolver(MockServices::new(), 1);

    assert_eq!(
        resolver.get_display_name("url:https://example.com", 1).resolved,
        "https://example.com"
    );
    assert_eq!(
        resolver.get_display_name("file:~/docs/manual.pdf", 1).resolved,
        "~/docs/manual.pdf"
    );
    assert_eq!(mock.call_count(), 0);
}

#[test]
fn test_failed_localization_continues_chain() {
    let mut mock =
        MockServices::new().with_field(ExpressionKind::Topic, 7, "SystemName", "AboutUs");
    mock.fail_localization = true;
    let (resolver, mock) = create_resolver(mock, 1);

    assert_eq!(resolver.get_display_name("topic:7", 1).resolved, "AboutUs");
    assert_eq!(mock.call_count(), 3);
}

#[test]
fn test_unknown_entity_resolves_empty() {
    let (resolver, _mock) = create_resolver(MockServices::new(), 1);

    let result = resolver.get_display_name("category:404", 1);

    assert_eq!(result.kind, ExpressionKind::Category);
    assert_eq!(result.resolved, "");
    assert!(!result.is_resolved());
}

#[test]
fn test_invalid_entity_reference_is_opaque_url() {
    let (resolver, mock) = create_resolver(MockServices::new(), 1);

    let result = resolver.get_display_name("product:0", 1);

    assert_eq!(result.kind, ExpressionKind::Url);
    assert_eq!(result.payload, Payload::Text("product:0".into()));
    assert_eq!(result.resolved, "product:0");
    assert_eq!(mock.call_count(), 0);
}
