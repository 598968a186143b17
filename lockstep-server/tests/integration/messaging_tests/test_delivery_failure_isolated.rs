use lockstep_core::{ClientFrame, SessionId};

use crate::integration::{HOST_NOTICE, create_test_room, init_tracing, join_sessions, joined};

#[tokio::test]
async fn test_broken_recipient_does_not_stop_fan_out() {
    init_tracing();

    let (room, output) = create_test_room();
    let sessions = join_sessions(&room, 3).await;
    output.break_session(sessions[1]).await;

    room.message(sessions[0], ClientFrame::decode("still here?"))
        .await
        .unwrap();
    room.snapshot().await.unwrap();

    assert_eq!(output.count(&sessions[0], "User message: still here?").await, 1);
    assert_eq!(output.count(&sessions[1], "User message: still here?").await, 0);
    assert_eq!(output.count(&sessions[2], "User message: still here?").await, 1);
}

#[tokio::test]
async fn test_room_keeps_working_after_failures() {
    init_tracing();

    let (room, output) = create_test_room();
    let host = SessionId::new();
    output.break_session(host).await;

    room.join(host).await.unwrap();
    let sessions = join_sessions(&room, 1).await;
    let snapshot = room.snapshot().await.unwrap();

    // host never heard it was host, but the room still assigned it
    assert_eq!(snapshot.host, Some(host));
    assert_eq!(output.count(&host, HOST_NOTICE).await, 0);
    assert_eq!(output.count(&sessions[0], &joined(2)).await, 1);
}
