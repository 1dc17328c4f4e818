use super::*;

/// Tests listing all filtered channels.
///
/// Expected: Ok with every record in insertion order
#[tokio::test]
async fn returns_all_records_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SpamFilterChannel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::spam_filter_channel::create_spam_filter_channel(db, 1, 30).await?;
    factory::spam_filter_channel::create_spam_filter_channel(db, 2, 10).await?;
    factory::spam_filter_channel::create_spam_filter_channel(db, 1, 20).await?;

    let repo = SpamFilterChannelRepository::new(db);
    let channels: Vec<String> = repo
        .get_all()
        .await?
        .into_iter()
        .map(|c| c.channel_id)
        .collect();

    assert_eq!(channels, vec!["30", "10", "20"]);

    Ok(())
}

/// Tests listing when no channel is filtered.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_without_records() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SpamFilterChannel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SpamFilterChannelRepository::new(db);
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
