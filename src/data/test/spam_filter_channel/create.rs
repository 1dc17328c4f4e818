use super::*;

/// Tests creating a filtered channel record.
///
/// Verifies that snowflakes are stored as strings and the record can be read back.
///
/// Expected: Ok with new record created
#[tokio::test]
async fn creates_new_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SpamFilterChannel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SpamFilterChannelRepository::new(db);
    let channel = repo
        .create(EnableSpamFilterParam {
            guild_id: 111,
            channel_id: 222,
            enabled_by: 333,
        })
        .await?;

    assert_eq!(channel.guild_id, "111");
    assert_eq!(channel.channel_id, "222");
    assert_eq!(channel.enabled_by, "333");
    assert_eq!(channel.channel_id_u64().unwrap(), 222);

    let stored = entity::prelude::SpamFilterChannel::find()
        .filter(entity::spam_filter_channel::Column::ChannelId.eq("222"))
        .one(db)
        .await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests creating a record for a channel that is already stored.
///
/// Expected: Ok with the original record returned and no duplicate row
#[tokio::test]
async fn returns_existing_record_for_duplicate_channel() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SpamFilterChannel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let original = factory::spam_filter_channel::create_spam_filter_channel(db, 111, 222).await?;

    let repo = SpamFilterChannelRepository::new(db);
    let channel = repo
        .create(EnableSpamFilterParam {
            guild_id: 111,
            channel_id: 222,
            enabled_by: 999,
        })
        .await?;

    assert_eq!(channel.id, original.id);
    assert_eq!(channel.enabled_by, original.enabled_by);

    let count = entity::prelude::SpamFilterChannel::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests two overlapping creates for the same channel.
///
/// Expected: both Ok with the same record and a single stored row
#[tokio::test]
async fn concurrent_creates_share_one_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SpamFilterChannel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SpamFilterChannelRepository::new(db);
    let param = |enabled_by| EnableSpamFilterParam {
        guild_id: 111,
        channel_id: 222,
        enabled_by,
    };

    let (first, second) = tokio::join!(repo.create(param(1)), repo.create(param(2)));
    let (first, second) = (first?, second?);

    assert_eq!(first.id, second.id);
    let count = entity::prelude::SpamFilterChannel::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
