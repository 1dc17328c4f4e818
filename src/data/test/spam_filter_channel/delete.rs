use super::*;

/// Tests deleting a stored channel.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn deletes_existing_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SpamFilterChannel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::spam_filter_channel::create_spam_filter_channel(db, 111, 222).await?;
    factory::spam_filter_channel::create_spam_filter_channel(db, 111, 223).await?;

    let repo = SpamFilterChannelRepository::new(db);
    assert!(repo.delete(222).await?);

    assert!(repo.get_by_channel_id(222).await?.is_none());
    assert!(repo.get_by_channel_id(223).await?.is_some());

    Ok(())
}

/// Tests deleting a channel that was never stored.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_channel() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SpamFilterChannel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SpamFilterChannelRepository::new(db);
    assert!(!repo.delete(222).await?);

    Ok(())
}
