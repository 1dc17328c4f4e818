use super::*;

#[tokio::test]
async fn finds_existing_channel() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SpamFilterChannel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::spam_filter_channel::create_spam_filter_channel(db, 111, 222).await?;

    let repo = SpamFilterChannelRepository::new(db);
    let channel = repo.get_by_channel_id(222).await?;

    assert!(channel.is_some());
    assert_eq!(channel.unwrap().guild_id, "111");

    Ok(())
}

/// Tests lookup of a channel without a record.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_channel() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SpamFilterChannel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SpamFilterChannelRepository::new(db);
    assert!(repo.get_by_channel_id(222).await?.is_none());

    Ok(())
}
