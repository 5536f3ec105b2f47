use albumkit_core::{
    Album, AlbumError, ChatTarget, MediaDescriptor, MediaKind, MediaOverrides, MessageActions,
    MessageEntity, PhotoSize, RawItem,
};

fn mixed_album() -> Vec<RawItem> {
    vec![
        RawItem::photo(100, vec![PhotoSize::new("photo-s", 90, 60), PhotoSize::new("photo-l", 900, 600)])
            .with_caption("first")
            .with_caption_entities(vec![MessageEntity::bold(0, 5)]),
        RawItem::video(101, "video-1").with_caption("second"),
        RawItem::document(102, "doc-1"),
    ]
}

#[test]
fn construction_preserves_items() {
    let items = mixed_album();
    let album = Album::new(items.clone(), ()).unwrap();
    assert_eq!(album.messages(), items.as_slice());
    assert_eq!(album.captions().len(), album.len());
    // two items carry captions, so there is no single album caption
    assert_eq!(album.caption(), None);
}

#[test]
fn no_overrides_reproduces_items() {
    let items = mixed_album();
    let album = Album::new(items.clone(), ()).unwrap();
    let media = album.to_media_descriptors(&MediaOverrides::default()).unwrap();

    assert_eq!(media.len(), items.len());
    assert_eq!(
        media.iter().map(MediaDescriptor::kind).collect::<Vec<_>>(),
        vec![MediaKind::Photo, MediaKind::Video, MediaKind::Document]
    );
    assert_eq!(media[0].media(), "photo-s");
    for (descriptor, item) in media.iter().zip(&items) {
        assert_eq!(descriptor.caption(), item.caption.as_deref());
        assert_eq!(descriptor.caption_entities(), item.caption_entities.as_deref());
        assert_eq!(descriptor.parse_mode(), None);
    }
}

#[test]
fn scalar_caption_only_replaces_first() {
    let items = mixed_album();
    let album = Album::new(items.clone(), ()).unwrap();
    let media = album.to_media_descriptors(&MediaOverrides::new().caption("X")).unwrap();

    assert_eq!(media[0].caption(), Some("X"));
    assert_eq!(media[1].caption(), items[1].caption.as_deref());
    assert_eq!(media[2].caption(), items[2].caption.as_deref());
}

#[test]
fn per_item_captions_replace_each() {
    let album = Album::new(mixed_album(), ()).unwrap();
    let overrides = MediaOverrides::new().caption(vec!["a", "b", "c"]);
    let media = album.to_media_descriptors(&overrides).unwrap();

    let captions: Vec<_> = media.iter().map(|m| m.caption()).collect();
    assert_eq!(captions, vec![Some("a"), Some("b"), Some("c")]);
}

#[test]
fn unsupported_kind_aborts_projection() {
    let mut items = mixed_album();
    items.push(RawItem::other(103, "sticker"));
    let album = Album::new(items, ()).unwrap();

    let result = album.to_media_descriptors(&MediaOverrides::default());
    assert_eq!(result, Err(AlbumError::UnsupportedMediaKind("sticker".into())));
}

#[test]
fn projection_is_repeatable() {
    let album = Album::new(mixed_album(), ()).unwrap();
    let overrides = MediaOverrides::new().caption("X");
    let first = album.to_media_descriptors(&overrides).unwrap();
    let second = album.to_media_descriptors(&overrides).unwrap();
    assert_eq!(first, second);
    assert_eq!(album.captions()[0].as_deref(), Some("first"));
}

#[tokio::test]
async fn album_refuses_single_message_actions() {
    let album = Album::new(mixed_album(), "session").unwrap();
    for chat in [ChatTarget::Id(-100123), ChatTarget::Username("@album_sink".into())] {
        assert!(matches!(
            album.forward(chat.clone()).await,
            Err(AlbumError::OperationNotApplicable(_))
        ));
        assert!(matches!(
            album.copy_to(chat).await,
            Err(AlbumError::OperationNotApplicable(_))
        ));
    }
    assert!(matches!(album.delete().await, Err(AlbumError::OperationNotApplicable(_))));
}
