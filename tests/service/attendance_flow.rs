//! Cross-service attendance reconciliation flow.
//!
//! Exercises the marking screen and the live dashboard against one shared change
//! feed: every mutation made through the marking service is observed by the
//! dashboard's session via real feed notifications.

use keshav::server::{
    data::attendance::AttendanceRepository,
    feed::{AttendanceChange, AttendanceFeed},
    service::attendance::{
        marking::AttendanceMarkingService, summary::AttendanceSummaryService,
    },
};
use keshav_test_utils::prelude::*;

/// Drains every queued notification into a session.
fn drain(
    session: &mut keshav::server::service::attendance::session::AttendanceSession,
    subscription: &mut keshav::server::feed::FeedSubscription,
) {
    while let Some(change) = subscription.try_next() {
        session.apply_change(&change);
    }
}

/// A mark made on the marking screen reaches the dashboard through the feed
#[tokio::test]
async fn marking_feeds_the_dashboard() -> Result<(), TestError> {
    let test = TestBuilder::new().with_attendance_tables().build().await?;
    let (_, unit) = test.org().insert_region_with_unit("North", "North A").await?;
    let member = test.org().insert_mock_member(1, unit.id).await?;
    let (_, event) = test.projects().insert_project_with_event("Winter Camp").await?;

    let feed = AttendanceFeed::new();
    let marking = AttendanceMarkingService::new(&test.db, &feed);
    let summary = AttendanceSummaryService::new(&test.db, &feed);

    let (mut dashboard, mut dashboard_sub) = summary.open_live(event.id).await?;
    let (mut desk, _desk_sub) = marking.open_session(event.id).await?;

    let present = marking.toggle_presence(&mut desk, member.id).await?;
    assert!(present);

    drain(&mut dashboard, &mut dashboard_sub);
    assert_eq!(dashboard.ledger().len(), 1);
    assert!(dashboard.ledger().is_present(member.id));

    let present = marking.toggle_presence(&mut desk, member.id).await?;
    assert!(!present);

    drain(&mut dashboard, &mut dashboard_sub);
    assert!(dashboard.ledger().is_empty());

    Ok(())
}

/// The full reconciliation walk across two live sessions: bulk load, remote
/// insert, local unmark, remote delete, duplicate insert
#[tokio::test]
async fn two_screens_converge() -> Result<(), TestError> {
    let test = TestBuilder::new().with_attendance_tables().build().await?;
    let (_, unit) = test.org().insert_region_with_unit("North", "North A").await?;
    let member_x = test.org().insert_mock_member(1, unit.id).await?;
    let member_y = test.org().insert_mock_member(2, unit.id).await?;
    let member_z = test.org().insert_mock_member(3, unit.id).await?;
    let (_, event) = test.projects().insert_project_with_event("Winter Camp").await?;

    // X and Y are already marked before either screen opens.
    let attendance_repo = AttendanceRepository::new(&test.db);
    attendance_repo.insert(event.id, member_x.id).await?;
    let record_y = attendance_repo.insert(event.id, member_y.id).await?;

    let feed = AttendanceFeed::new();
    let marking = AttendanceMarkingService::new(&test.db, &feed);
    let summary = AttendanceSummaryService::new(&test.db, &feed);

    let (mut desk, mut desk_sub) = marking.open_session(event.id).await?;
    let (mut dashboard, mut dashboard_sub) = summary.open_live(event.id).await?;

    assert_eq!(desk.ledger().len(), 2);
    assert_eq!(dashboard.ledger().len(), 2);

    // Another desk marks Z directly against the store and the feed.
    let record_z = attendance_repo.insert(event.id, member_z.id).await?;
    feed.publish(AttendanceChange::Inserted {
        record: record_z.clone(),
    });

    drain(&mut desk, &mut desk_sub);
    drain(&mut dashboard, &mut dashboard_sub);
    assert_eq!(desk.ledger().len(), 3);
    assert_eq!(dashboard.ledger().len(), 3);

    // This desk unmarks X; the dashboard follows via the published delete.
    marking.toggle_presence(&mut desk, member_x.id).await?;
    drain(&mut dashboard, &mut dashboard_sub);
    assert_eq!(dashboard.ledger().len(), 2);
    assert!(!dashboard.ledger().is_present(member_x.id));

    // A delete for Y's record arrives from elsewhere.
    attendance_repo
        .delete_by_event_and_member(event.id, member_y.id)
        .await?;
    feed.publish(AttendanceChange::Deleted {
        record_id: record_y.id,
    });

    // A duplicate insert notification for Z is redelivered.
    feed.publish(AttendanceChange::Inserted { record: record_z });

    drain(&mut desk, &mut desk_sub);
    drain(&mut dashboard, &mut dashboard_sub);

    for session in [&desk, &dashboard] {
        assert_eq!(session.ledger().len(), 1);
        assert!(session.ledger().is_present(member_z.id));
    }

    // Both screens agree with the store.
    let records = attendance_repo.list_by_event(event.id).await?;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].member_id, member_z.id);

    Ok(())
}

/// Closing a subscription stops a dashboard from following further changes
#[tokio::test]
async fn closed_dashboard_stops_following() -> Result<(), TestError> {
    let test = TestBuilder::new().with_attendance_tables().build().await?;
    let (_, unit) = test.org().insert_region_with_unit("North", "North A").await?;
    let member = test.org().insert_mock_member(1, unit.id).await?;
    let (_, event) = test.projects().insert_project_with_event("Winter Camp").await?;

    let feed = AttendanceFeed::new();
    let marking = AttendanceMarkingService::new(&test.db, &feed);
    let summary = AttendanceSummaryService::new(&test.db, &feed);

    let (mut dashboard, mut dashboard_sub) = summary.open_live(event.id).await?;
    let (mut desk, _desk_sub) = marking.open_session(event.id).await?;

    dashboard_sub.close();
    dashboard.close();

    marking.toggle_presence(&mut desk, member.id).await?;

    drain(&mut dashboard, &mut dashboard_sub);
    assert!(dashboard.ledger().is_empty());

    Ok(())
}
